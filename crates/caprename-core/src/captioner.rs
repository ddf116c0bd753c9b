//! Captioner interface for turning images into natural-language captions.
//!
//! The batch runner only depends on this trait and does not know about any
//! specific model or runtime. Any string output is acceptable, including
//! empty; the slug pipeline is total over it.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Trait implemented by caption providers (external model runners, stubs).
pub trait Captioner {
    /// Produces a caption for the image at `image`.
    fn caption(&self, image: &Path) -> Result<String>;
}

/// Captioner that shells out to an external command.
///
/// The image path is appended as the last argument and trimmed stdout is
/// the caption. This keeps the model runtime out of process; any program
/// that maps an image path to a one-line description works.
pub struct CommandCaptioner {
    program: String,
    args: Vec<String>,
}

impl CommandCaptioner {
    /// Builds from a whitespace-separated command line, e.g.
    /// `"blip-caption --fast"`.
    pub fn from_command_line(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .context("caption command is empty")?
            .to_string();
        Ok(Self {
            program,
            args: parts.map(str::to_string).collect(),
        })
    }
}

impl Captioner for CommandCaptioner {
    fn caption(&self, image: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(image)
            .output()
            .with_context(|| format!("failed to run caption command: {}", self.program))?;
        if !output.status.success() {
            anyhow::bail!(
                "caption command failed with {} for {}",
                output.status,
                image.display()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
