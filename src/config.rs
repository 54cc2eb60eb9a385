//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::content::ContentFormat;

/// Name of the document written to the output directory.
pub const OUTPUT_FILE_NAME: &str = "index.html";

/// Command line configuration for the CloudReady shell renderer.
#[derive(Debug, Clone, Parser)]
#[command(name = "cloudready-shell", version, about, long_about = None)]
pub struct Config {
    /// Page content file (Markdown, HTML fragment or plain text)
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Content format, detected from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<ContentFormat>,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if content path does not exist or is not a file.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!("Content path does not exist: {}", self.content.display());
        }
        if !self.content.is_file() {
            bail!("Content path is not a file: {}", self.content.display());
        }

        Ok(())
    }

    /// Returns path of the generated document.
    pub fn output_file(&self) -> PathBuf {
        self.output.join(OUTPUT_FILE_NAME)
    }
}
