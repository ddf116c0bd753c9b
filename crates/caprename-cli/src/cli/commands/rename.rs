//! `caprename run` – caption, rename and zip a batch.

use anyhow::{Context, Result};
use caprename_core::archive::ZipArchiveWriter;
use caprename_core::batch::{collect_image_files, run_batch};
use caprename_core::captioner::CommandCaptioner;
use caprename_core::config::CaprenameConfig;
use std::path::{Path, PathBuf};

pub fn run_rename(
    cfg: &CaprenameConfig,
    inputs: &[PathBuf],
    output: &Path,
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
    let file = std::fs::File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut archive = ZipArchiveWriter::new(file);

    let report = run_batch(
        &images,
        &captioner,
        &mut archive,
        &cfg.slug_policy(),
        cfg.extension,
    )?;

    for item in &report.renamed {
        println!("{} -> {}", item.source.display(), item.final_name);
    }
    for item in &report.failed {
        eprintln!("skipped {}: {}", item.source.display(), item.error);
    }
    println!(
        "Wrote {} ({} renamed, {} skipped)",
        output.display(),
        report.renamed.len(),
        report.failed.len()
    );
    Ok(())
}
