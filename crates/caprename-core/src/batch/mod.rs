//! Sequential batch runner: caption → slug → unique name → archive entry.
//!
//! One name registry per batch, created here and discarded with it. Items
//! are processed strictly in the caller's input order so suffix assignment
//! is reproducible; per-item failures are recorded in the report and do not
//! abort the remaining items.

mod error;
mod inputs;

pub use error::ItemError;
pub use inputs::collect_image_files;

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::Archive;
use crate::captioner::Captioner;
use crate::config::ExtensionPolicy;
use crate::slug::{self, NameRegistry, SlugPolicy};

/// One successfully renamed image.
#[derive(Debug, Clone)]
pub struct RenamedItem {
    pub source: PathBuf,
    pub caption: String,
    pub final_name: String,
}

/// One image that failed; the rest of the batch still ran.
#[derive(Debug)]
pub struct FailedItem {
    pub source: PathBuf,
    pub error: ItemError,
}

/// Outcome of one batch run, in input order within each list.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub renamed: Vec<RenamedItem>,
    pub failed: Vec<FailedItem>,
}

/// Captions and renames `images` in order, storing each under its final
/// name in `archive`, then finishes the archive.
pub fn run_batch(
    images: &[PathBuf],
    captioner: &dyn Captioner,
    archive: &mut dyn Archive,
    slugs: &SlugPolicy,
    extension: ExtensionPolicy,
) -> Result<BatchReport> {
    let mut registry = NameRegistry::new();
    let mut report = BatchReport::default();

    for source in images {
        match process_one(source, captioner, archive, slugs, extension, &mut registry) {
            Ok(item) => {
                tracing::info!(
                    source = %item.source.display(),
                    final_name = %item.final_name,
                    "renamed"
                );
                report.renamed.push(item);
            }
            Err(error) => {
                tracing::warn!(source = %source.display(), %error, "skipping image");
                report.failed.push(FailedItem {
                    source: source.clone(),
                    error,
                });
            }
        }
    }

    archive.finish()?;
    Ok(report)
}

fn process_one(
    source: &Path,
    captioner: &dyn Captioner,
    archive: &mut dyn Archive,
    slugs: &SlugPolicy,
    extension: ExtensionPolicy,
    registry: &mut NameRegistry,
) -> Result<RenamedItem, ItemError> {
    let caption = captioner.caption(source).map_err(ItemError::Caption)?;
    // Read before reserving a name so a failed item never consumes one.
    let bytes = fs::read(source).map_err(|e| ItemError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let final_name = slug::final_filename(
        slugs,
        registry,
        &caption,
        &extension.extension_for(source),
    );
    archive
        .add_entry(&final_name, &bytes)
        .map_err(|cause| ItemError::Store {
            name: final_name.clone(),
            cause,
        })?;

    Ok(RenamedItem {
        source: source.to_path_buf(),
        caption,
        final_name,
    })
}
