//! Provides a general interface to a physical OPC package (ZIP file).
//!
//! This module handles the low-level reading and writing of OPC packages as ZIP
//! archives. Part names are always given as [`PackURI`]s and mapped to ZIP member
//! names by stripping the leading slash.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::result::ZipError;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, ZipArchive};

/// Upper bound on the buffer reserved from a member's declared size.
///
/// The size in the ZIP header is untrusted; larger parts still read fully.
const MAX_PREALLOC: u64 = 1 << 24;

/// Physical package reader that provides access to parts in a ZIP-based OPC package.
///
/// The whole archive is held in memory; templates are small and each is read once.
pub struct PhysPkgReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PhysPkgReader {
    /// Open an OPC package from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or isn't a valid ZIP file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Create a reader from owned bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| OoxmlError::InvalidFormat(format!("not a ZIP package: {}", e)))?;
        Ok(Self { archive })
    }

    /// Get the binary content for a part by its PackURI.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        self.try_blob_for(pack_uri)?
            .ok_or_else(|| OoxmlError::PartNotFound(pack_uri.to_string()))
    }

    /// Get the binary content for a part, or `None` if the package has no such member.
    pub fn try_blob_for(&mut self, pack_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let mut file = match self.archive.by_name(pack_uri.membername()) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut blob = Vec::with_capacity(file.size().min(MAX_PREALLOC) as usize);
        file.read_to_end(&mut blob)?;
        Ok(Some(blob))
    }

    /// Get the relationships XML for a specific source URI, if the source has any.
    pub fn rels_xml_for(&mut self, source_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = source_uri.rels_uri().map_err(OoxmlError::InvalidPackUri)?;
        self.try_blob_for(&rels_uri)
    }
}

/// Physical package writer for creating OPC packages.
///
/// Handles the low-level writing of parts to an in-memory ZIP archive.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/test.txt").unwrap();
        writer.write(&pack_uri, b"Hello, World!").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut reader = PhysPkgReader::from_bytes(zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_missing_part() {
        let mut writer = PhysPkgWriter::new();
        writer.write(&PackURI::new("/ppt/presentation.xml").unwrap(), b"<p/>").unwrap();
        let mut reader = PhysPkgReader::from_bytes(writer.finish().unwrap()).unwrap();

        let missing = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert!(reader.try_blob_for(&missing).unwrap().is_none());
        assert!(matches!(reader.blob_for(&missing), Err(OoxmlError::PartNotFound(_))));
        assert!(reader.rels_xml_for(&missing).unwrap().is_none());
    }

    #[test]
    fn test_rejects_non_zip() {
        assert!(matches!(
            PhysPkgReader::from_bytes(b"definitely not a zip".to_vec()),
            Err(OoxmlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_inflated_declared_size_is_not_trusted() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/ppt/presentation.xml").unwrap();
        writer.write(&pack_uri, b"<p:presentation/>").unwrap();
        let mut data = writer.finish().unwrap();

        // Claim an almost 4 GiB uncompressed size in the central directory.
        let central = data
            .windows(4)
            .position(|w| w == [0x50, 0x4b, 0x01, 0x02])
            .unwrap();
        data[central + 24..central + 28].copy_from_slice(&0xFFFF_FFF0u32.to_le_bytes());

        if let Ok(mut reader) = PhysPkgReader::from_bytes(data) {
            // Either a read error or the real bytes, never a huge reservation.
            if let Ok(Some(blob)) = reader.try_blob_for(&pack_uri) {
                assert!(blob.len() < MAX_PREALLOC as usize);
            }
        }
    }
}
