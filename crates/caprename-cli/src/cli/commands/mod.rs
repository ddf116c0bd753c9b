//! Subcommand implementations.

mod preview;
mod rename;
mod slug;

pub use preview::run_preview;
pub use rename::run_rename;
pub use slug::run_slug;

use caprename_core::config::{CaprenameConfig, ExtensionPolicy};

/// Applies per-invocation flag overrides on top of the loaded config.
pub(crate) fn apply_overrides(
    cfg: &CaprenameConfig,
    force_png: bool,
    max_slug_len: Option<usize>,
) -> CaprenameConfig {
    let mut cfg = cfg.clone();
    if force_png {
        cfg.extension = ExtensionPolicy::ForcePng;
    }
    if max_slug_len.is_some() {
        cfg.max_slug_len = max_slug_len;
    }
    cfg
}
