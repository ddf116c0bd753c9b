//! `caprename slug` – normalize one caption and print the slug.

use anyhow::Result;
use caprename_core::config::CaprenameConfig;

pub fn run_slug(cfg: &CaprenameConfig, caption: &str, max_slug_len: Option<usize>) -> Result<()> {
    let cfg = super::apply_overrides(cfg, false, max_slug_len);
    println!("{}", cfg.slug_policy().normalize(caption));
    Ok(())
}
