use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::slug::{SlugPolicy, DEFAULT_SLUG, DEFAULT_STOPWORDS};

/// Extension handling for renamed files: keep each source extension or
/// force `.png` (the behavior of the original batch renamer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionPolicy {
    #[default]
    Preserve,
    ForcePng,
}

impl ExtensionPolicy {
    /// Extension (without dot) to use for `source`. `Preserve` lowercases
    /// the source extension and falls back to `png` when there is none.
    pub fn extension_for(self, source: &Path) -> String {
        match self {
            ExtensionPolicy::ForcePng => "png".to_string(),
            ExtensionPolicy::Preserve => source
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_else(|| "png".to_string()),
        }
    }
}

/// Global configuration loaded from `~/.config/caprename/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaprenameConfig {
    /// Slug used when a caption has no usable tokens.
    pub default_slug: String,
    /// Optional cap on slug length in characters (absent = uncapped).
    #[serde(default)]
    pub max_slug_len: Option<usize>,
    /// Extension policy: "preserve" (default) or "force_png".
    #[serde(default)]
    pub extension: ExtensionPolicy,
    /// Optional stopword override; absent = built-in set.
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,
}

impl Default for CaprenameConfig {
    fn default() -> Self {
        Self {
            default_slug: DEFAULT_SLUG.to_string(),
            max_slug_len: None,
            extension: ExtensionPolicy::default(),
            stopwords: None,
        }
    }
}

impl CaprenameConfig {
    /// Builds the slug policy this config describes.
    pub fn slug_policy(&self) -> SlugPolicy {
        match &self.stopwords {
            Some(words) => SlugPolicy::new(words.iter(), &self.default_slug, self.max_slug_len),
            None => SlugPolicy::new(
                DEFAULT_STOPWORDS.iter().copied(),
                &self.default_slug,
                self.max_slug_len,
            ),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("caprename")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CaprenameConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CaprenameConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CaprenameConfig = toml::from_str(&data)?;
    Ok(cfg)
}
