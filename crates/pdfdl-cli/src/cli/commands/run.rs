//! `pdfdl run` – fetch every URL in the list, sequentially.

use anyhow::Result;
use pdfdl_core::batch;
use pdfdl_core::config::PdfdlConfig;
use pdfdl_core::fetch::{FetchOptions, Fetcher};
use std::path::Path;

pub fn run_fetch(cfg: &PdfdlConfig, output_dir: &Path, urls: &[String], strict: bool) -> Result<()> {
    if urls.is_empty() {
        println!("No URLs to fetch.");
        return Ok(());
    }

    let fetcher = Fetcher::new(FetchOptions::from(cfg));
    let summary = batch::run_batch_with_mode(&fetcher, urls, output_dir, cfg.dir_mode);

    println!(
        "{} downloaded ({} bytes), {} already present, {} invalid, {} failed",
        summary.downloaded, summary.bytes, summary.skipped, summary.invalid, summary.failed
    );

    if strict && summary.has_failures() {
        anyhow::bail!("{} download(s) failed", summary.failed);
    }
    Ok(())
}
