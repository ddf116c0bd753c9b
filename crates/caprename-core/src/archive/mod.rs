//! Archive output for renamed batches.
//!
//! The slug pipeline only produces entry names; writing bytes under those
//! names happens behind the `Archive` trait, so the naming core never
//! touches storage or compression directly.

mod zip;

pub use self::zip::ZipArchiveWriter;

use anyhow::Result;

/// Sink for renamed files.
pub trait Archive {
    /// Stores `bytes` under `name`. Entry names are unique per batch by
    /// construction.
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Finishes the archive, flushing trailing metadata. Further
    /// `add_entry` calls fail after this.
    fn finish(&mut self) -> Result<()>;
}
