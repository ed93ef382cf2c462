//! Template fixtures built on the fly.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// One `<p:sp>` of a fixture slide.
#[derive(Debug, Clone, Default)]
pub struct ShapeSpec {
    pub id: u32,
    pub name: String,
    pub paragraphs: Vec<String>,
    pub geometry: Option<(i64, i64, i64, i64)>,
    /// `(type, idx)` of a placeholder
    pub placeholder: Option<(Option<String>, Option<u32>)>,
    /// Raw attributes for the first paragraph's `<a:defRPr>`
    pub paragraph_rpr: Option<String>,
    /// Raw attributes for every run's `<a:rPr>`
    pub run_rpr: Option<String>,
    /// No `<p:txBody>` at all
    pub no_text_body: bool,
}

impl ShapeSpec {
    pub fn text(id: u32, name: &str, paragraphs: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn at(mut self, x: i64, y: i64, cx: i64, cy: i64) -> Self {
        self.geometry = Some((x, y, cx, cy));
        self
    }

    pub fn placeholder(mut self, ph_type: Option<&str>, idx: Option<u32>) -> Self {
        self.placeholder = Some((ph_type.map(str::to_string), idx));
        self
    }

    pub fn paragraph_rpr(mut self, attrs: &str) -> Self {
        self.paragraph_rpr = Some(attrs.to_string());
        self
    }

    pub fn run_rpr(mut self, attrs: &str) -> Self {
        self.run_rpr = Some(attrs.to_string());
        self
    }

    pub fn without_text_body(mut self) -> Self {
        self.no_text_body = true;
        self
    }

    fn to_xml(&self) -> String {
        let ph = match &self.placeholder {
            Some((ph_type, idx)) => {
                let mut attrs = String::new();
                if let Some(t) = ph_type {
                    attrs.push_str(&format!(r#" type="{t}""#));
                }
                if let Some(i) = idx {
                    attrs.push_str(&format!(r#" idx="{i}""#));
                }
                format!("<p:nvPr><p:ph{attrs}/></p:nvPr>")
            },
            None => "<p:nvPr/>".to_string(),
        };
        let sp_pr = match self.geometry {
            Some((x, y, cx, cy)) => format!(
                r#"<p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#
            ),
            None => "<p:spPr/>".to_string(),
        };
        let body = if self.no_text_body {
            String::new()
        } else {
            let mut body = String::from("<p:txBody><a:bodyPr/><a:lstStyle/>");
            for (i, para) in self.paragraphs.iter().enumerate() {
                body.push_str("<a:p>");
                if i == 0
                    && let Some(attrs) = &self.paragraph_rpr
                {
                    body.push_str(&format!("<a:pPr><a:defRPr {attrs}/></a:pPr>"));
                }
                let rpr = self.run_rpr.as_deref().unwrap_or("");
                body.push_str(&format!(
                    r#"<a:r><a:rPr lang="en-US" {rpr}/><a:t>{}</a:t></a:r>"#,
                    escape(para)
                ));
                body.push_str("</a:p>");
            }
            body.push_str("</p:txBody>");
            body
        };
        format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr/>{ph}</p:nvSpPr>{sp_pr}{body}</p:sp>"#,
            self.id, self.name
        )
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn shape_tree(shapes: &[ShapeSpec], extra: &str) -> String {
    let mut xml = String::from(
        r#"<p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>"#,
    );
    for shape in shapes {
        xml.push_str(&shape.to_xml());
    }
    xml.push_str(extra);
    xml.push_str("</p:spTree></p:cSld>");
    xml
}

/// A picture shape, which carries no text.
pub const PICTURE: &str = r#"<p:pic><p:nvPicPr><p:cNvPr id="90" name="Logo"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill/><p:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="100" cy="100"/></a:xfrm></p:spPr></p:pic>"#;

/// A template presentation: slides, a layout and a master.
#[derive(Debug, Clone, Default)]
pub struct TemplateFixture {
    pub slides: Vec<Vec<ShapeSpec>>,
    pub slide_extra: String,
    pub layout: Vec<ShapeSpec>,
    pub master: Vec<ShapeSpec>,
    pub slide_size: Option<(i64, i64)>,
}

impl TemplateFixture {
    pub fn single(shapes: Vec<ShapeSpec>) -> Self {
        Self {
            slides: vec![shapes],
            ..Default::default()
        }
    }

    pub fn with_layout(mut self, shapes: Vec<ShapeSpec>) -> Self {
        self.layout = shapes;
        self
    }

    pub fn with_master(mut self, shapes: Vec<ShapeSpec>) -> Self {
        self.master = shapes;
        self
    }

    pub fn with_slide_size(mut self, cx: i64, cy: i64) -> Self {
        self.slide_size = Some((cx, cy));
        self
    }

    pub fn with_slide_extra(mut self, xml: &str) -> Self {
        self.slide_extra = xml.to_string();
        self
    }

    pub fn write(&self, path: &Path) {
        let file = std::fs::File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut put = |name: &str, data: String| {
            zip.start_file(name, options).unwrap();
            zip.write_all(data.as_bytes()).unwrap();
        };

        let mut types = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
        );
        for i in 1..=self.slides.len() {
            types.push_str(&format!(r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#));
        }
        types.push_str("</Types>");
        put("[Content_Types].xml", types);

        put(
            "_rels/.rels",
            format!(
                r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL}/officeDocument" Target="ppt/presentation.xml"/></Relationships>"#
            ),
        );

        let mut pres = format!(r#"<p:presentation {NS}><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
        if !self.slides.is_empty() {
            pres.push_str("<p:sldIdLst>");
            for i in 0..self.slides.len() {
                pres.push_str(&format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, 10 + i));
            }
            pres.push_str("</p:sldIdLst>");
        }
        if let Some((cx, cy)) = self.slide_size {
            pres.push_str(&format!(r#"<p:sldSz cx="{cx}" cy="{cy}"/>"#));
        }
        pres.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#);
        put("ppt/presentation.xml", pres);

        let mut pres_rels = format!(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL}/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#
        );
        for i in 0..self.slides.len() {
            pres_rels.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="{REL}/slide" Target="slides/slide{}.xml"/>"#,
                10 + i,
                i + 1
            ));
        }
        pres_rels.push_str("</Relationships>");
        put("ppt/_rels/presentation.xml.rels", pres_rels);

        for (i, shapes) in self.slides.iter().enumerate() {
            put(
                &format!("ppt/slides/slide{}.xml", i + 1),
                format!(r#"<p:sld {NS}>{}</p:sld>"#, shape_tree(shapes, &self.slide_extra)),
            );
            put(
                &format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
                format!(
                    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/></Relationships>"#
                ),
            );
        }

        put(
            "ppt/slideLayouts/slideLayout1.xml",
            format!(r#"<p:sldLayout {NS}>{}</p:sldLayout>"#, shape_tree(&self.layout, "")),
        );
        put(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            format!(
                r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL}/slideMaster" Target="../slideMasters/slideMaster1.xml"/></Relationships>"#
            ),
        );
        put(
            "ppt/slideMasters/slideMaster1.xml",
            format!(r#"<p:sldMaster {NS}>{}</p:sldMaster>"#, shape_tree(&self.master, "")),
        );

        zip.finish().unwrap();
    }
}

/// Read one part of a written package as text.
pub fn read_part(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = ZipArchive::new(file).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Check whether a written package has a part.
pub fn has_part(path: &Path, name: &str) -> bool {
    let file = std::fs::File::open(path).unwrap();
    let archive = ZipArchive::new(file).unwrap();
    archive.index_for_name(name).is_some()
}

/// Write a schema file.
pub fn write_schemas(path: &Path, json: &str) {
    std::fs::write(path, json).unwrap();
}
