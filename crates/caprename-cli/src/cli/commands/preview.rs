//! `caprename preview` – print the mapping without writing an archive.

use anyhow::Result;
use caprename_core::batch::collect_image_files;
use caprename_core::captioner::{Captioner, CommandCaptioner};
use caprename_core::config::CaprenameConfig;
use caprename_core::slug::{self, NameRegistry};
use std::path::PathBuf;

pub fn run_preview(
    cfg: &CaprenameConfig,
    inputs: &[PathBuf],
    caption_cmd: &str,
    force_png: bool,
    max_slug_len: Option<usize>,
) -> Result<()> {
    let cfg = super::apply_overrides(cfg, force_png, max_slug_len);
    let images = collect_image_files(inputs)?;
    if images.is_empty() {
        anyhow::bail!("no image files found in the given inputs");
    }

    let captioner = CommandCaptioner::from_command_line(caption_cmd)?;
    let policy = cfg.slug_policy();
    // Same registry lifecycle as a real batch so the printed names match
    // what `run` would produce.
    let mut registry = NameRegistry::new();

    for image in &images {
        match captioner.caption(image) {
            Ok(caption) => {
                let name = slug::final_filename(
                    &policy,
                    &mut registry,
                    &caption,
                    &cfg.extension.extension_for(image),
                );
                println!("{} -> {}  ({caption})", image.display(), name);
            }
            Err(err) => eprintln!("skipped {}: {err:#}", image.display()),
        }
    }
    Ok(())
}
