//! Per-item failure type for batch runs.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single image within a batch.
///
/// One item failing must not abort the remaining items, so these are
/// collected into the batch report rather than bubbled up as the batch
/// error.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The captioner failed for this image.
    #[error("captioning failed: {0:#}")]
    Caption(anyhow::Error),
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The archive rejected the entry.
    #[error("failed to store {name}: {cause:#}")]
    Store { name: String, cause: anyhow::Error },
}
