//! Where the URL list and output directory come from: flags first, then config.

use anyhow::{Context, Result};
use clap::Args;
use pdfdl_core::config::PdfdlConfig;
use pdfdl_core::url_list::parse_url_lines;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Directory to save PDFs into (overrides config; default "PDFs").
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// URL to fetch; repeatable. Replaces the configured list.
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// File with one URL per line ('#' comments allowed). Replaces the configured list.
    #[arg(long, value_name = "PATH")]
    pub url_file: Option<PathBuf>,
}

impl SourceArgs {
    pub fn output_dir(&self, cfg: &PdfdlConfig) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| cfg.output_dir.clone())
    }

    /// `--url` entries followed by `--url-file` entries; the config list when both are absent.
    pub fn resolve_urls(&self, cfg: &PdfdlConfig) -> Result<Vec<String>> {
        let mut urls = self.urls.clone();
        if let Some(path) = &self.url_file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read url file {}", path.display()))?;
            urls.extend(parse_url_lines(&text));
        }
        if urls.is_empty() && self.url_file.is_none() {
            urls = cfg.urls.clone();
        }
        Ok(urls)
    }
}
