//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::path::UrlLayout;

/// Command line configuration for chatfront.
#[derive(Debug, Clone, Parser)]
#[command(name = "chatfront", version, about, long_about = None)]
pub struct Config {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in page titles and headers
    #[arg(long, default_value = "NLP Chat")]
    pub name: String,

    /// Base URL of the backend the login and registration forms post to
    #[arg(long, default_value = "http://localhost:5000")]
    pub api_base: String,

    /// Markdown file rendered as a notice on the admin dashboard
    #[arg(long)]
    pub notice: Option<PathBuf>,

    /// File layout of the generated pages
    #[arg(long, value_enum, default_value_t = UrlLayout::Flat)]
    pub layout: UrlLayout,

    /// Do not open the generated site in a browser
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
    /// Returns error if the notice file does not exist or the API base is
    /// not an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(notice) = &self.notice
            && !notice.is_file()
        {
            bail!("Notice file does not exist: {}", notice.display());
        }

        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            bail!("API base must be an http(s) URL: {}", self.api_base);
        }

        Ok(())
    }

    /// API base without trailing slashes, ready for joining endpoint paths.
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}
