use std::io::Read as _;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use deckforge::{AssemblerConfig, DeckAssembler};
use tracing_subscriber::EnvFilter;

/// Exit code for a deck that was written.
const EXIT_SUCCESS: u8 = 0;
/// Exit code for a request that could not be processed.
const EXIT_FAILURE: u8 = 1;

/// Generate a PowerPoint deck from a JSON list of slide requests.
///
/// The request is read from stdin unless `--input` is given.
#[derive(Parser, Debug)]
#[command(name = "deckforge", version)]
struct Cli {
    /// Read the request from this file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory holding one template presentation per variant.
    #[arg(long, env = "DECKFORGE_TEMPLATES")]
    templates: Option<PathBuf>,

    /// JSON file of variant schemas.
    #[arg(long, env = "DECKFORGE_SCHEMAS")]
    schemas: Option<PathBuf>,

    /// Output deck path; an existing file is replaced.
    #[arg(long, env = "DECKFORGE_OUTPUT")]
    output: Option<PathBuf>,

    /// Directory the default paths are resolved against.
    #[arg(long, env = "DECKFORGE_BASE_DIR", default_value = ".")]
    base_dir: PathBuf,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "deckforge=trace").
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> AssemblerConfig {
        let mut config = AssemblerConfig::from_base_dir(&self.base_dir);
        if let Some(dir) = &self.templates {
            config = config.with_templates_dir(dir);
        }
        if let Some(path) = &self.schemas {
            config = config.with_schemas_path(path);
        }
        if let Some(path) = &self.output {
            config = config.with_output_path(path);
        }
        config
    }

    fn read_request(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("read request '{}'", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("read request from stdin")?;
                Ok(input)
            },
        }
    }
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input = cli.read_request()?;
    let report = DeckAssembler::new(cli.config()).assemble_json(&input)?;
    println!("Presentation saved to: {}", report.output_path.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        },
    }
}
