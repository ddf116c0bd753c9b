//! CLI for the caprename image renamer.

mod commands;

use anyhow::Result;
use caprename_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_preview, run_rename, run_slug};

/// Top-level CLI for the caprename image renamer.
#[derive(Debug, Parser)]
#[command(name = "caprename")]
#[command(about = "caprename: rename image batches after their captions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Caption, rename and zip a batch of images.
    Run {
        /// Image files and/or directories to process, in batch order.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Path of the zip archive to write.
        #[arg(long, default_value = "renamed.zip")]
        output: PathBuf,

        /// External command that prints a caption for an image path.
        /// Split on whitespace; shell quoting is not supported.
        #[arg(long, value_name = "CMD")]
        caption_cmd: String,

        /// Always emit `.png` instead of keeping each source extension.
        #[arg(long)]
        force_png: bool,

        /// Cap slugs at N characters (trailing underscores stripped).
        #[arg(long, value_name = "N")]
        max_slug_len: Option<usize>,
    },

    /// Print the caption → filename mapping without writing an archive.
    Preview {
        /// Image files and/or directories to process, in batch order.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// External command that prints a caption for an image path.
        /// Split on whitespace; shell quoting is not supported.
        #[arg(long, value_name = "CMD")]
        caption_cmd: String,

        /// Always emit `.png` instead of keeping each source extension.
        #[arg(long)]
        force_png: bool,

        /// Cap slugs at N characters (trailing underscores stripped).
        #[arg(long, value_name = "N")]
        max_slug_len: Option<usize>,
    },

    /// Normalize a caption into its base slug and print it.
    Slug {
        /// Caption text to normalize.
        caption: String,

        /// Cap the slug at N characters (trailing underscores stripped).
        #[arg(long, value_name = "N")]
        max_slug_len: Option<usize>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                inputs,
                output,
                caption_cmd,
                force_png,
                max_slug_len,
            } => run_rename(&cfg, &inputs, &output, &caption_cmd, force_png, max_slug_len),
            CliCommand::Preview {
                inputs,
                caption_cmd,
                force_png,
                max_slug_len,
            } => run_preview(&cfg, &inputs, &caption_cmd, force_png, max_slug_len),
            CliCommand::Slug {
                caption,
                max_slug_len,
            } => run_slug(&cfg, &caption, max_slug_len),
        }
    }
}

#[cfg(test)]
mod tests;
