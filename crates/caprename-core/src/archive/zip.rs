//! Zip-backed archive writer.

use anyhow::{Context, Result};
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::Archive;

/// Writes batch entries into a deflate-compressed zip.
pub struct ZipArchiveWriter<W: Write + Seek> {
    // None once finished; the zip central directory is written on finish.
    writer: Option<ZipWriter<W>>,
}

impl<W: Write + Seek> ZipArchiveWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Some(ZipWriter::new(inner)),
        }
    }
}

impl<W: Write + Seek> Archive for ZipArchiveWriter<W> {
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .context("archive already finished")?;
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer
            .start_file(name, options)
            .with_context(|| format!("failed to start zip entry {name}"))?;
        writer
            .write_all(bytes)
            .with_context(|| format!("failed to write zip entry {name}"))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            writer.finish().context("failed to finish zip archive")?;
        }
        Ok(())
    }
}
