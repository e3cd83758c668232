//! Sequential batch driver: bootstrap the directory, dedup, then validate and
//! fetch one URL at a time. No failure stops the batch.

use std::path::{Path, PathBuf};

use crate::fetch::{self, FetchOutcome, Fetcher};
use crate::storage;
use crate::url_list::{dedup, is_valid_url};

/// Permission bits for a freshly created output directory.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Per-run tallies. Each deduplicated URL lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub invalid: usize,
    pub failed: usize,
    pub bytes: u64,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.invalid + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Runs the whole batch with the default directory mode.
pub fn run_batch<S: AsRef<str>>(fetcher: &Fetcher, urls: &[S], output_dir: &Path) -> BatchSummary {
    run_batch_with_mode(fetcher, urls, output_dir, DEFAULT_DIR_MODE)
}

pub fn run_batch_with_mode<S: AsRef<str>>(
    fetcher: &Fetcher,
    urls: &[S],
    output_dir: &Path,
    dir_mode: u32,
) -> BatchSummary {
    match storage::ensure_output_dir(output_dir, dir_mode) {
        Ok(true) => tracing::info!("created output directory {}", output_dir.display()),
        Ok(false) => {}
        // Not fatal: every write below will fail on its own and be counted.
        Err(e) => tracing::error!("{:#}", e),
    }

    let urls = dedup(urls);
    let mut summary = BatchSummary::default();
    for url in &urls {
        if !is_valid_url(url) {
            tracing::debug!(url = %url, "skipping invalid url");
            summary.invalid += 1;
            continue;
        }
        let result = fetcher.fetch(url, output_dir);
        fetch::log_outcome(url, &result);
        match result {
            Ok(FetchOutcome::Downloaded { bytes, .. }) => {
                summary.downloaded += 1;
                summary.bytes += bytes;
            }
            Ok(FetchOutcome::Skipped { .. }) => summary.skipped += 1,
            Err(_) => summary.failed += 1,
        }
    }

    tracing::info!(
        downloaded = summary.downloaded,
        skipped = summary.skipped,
        invalid = summary.invalid,
        failed = summary.failed,
        "batch finished: {} url(s), {} bytes written",
        summary.total(),
        summary.bytes
    );
    summary
}

/// One entry of a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFetch {
    pub url: String,
    /// `None` when the URL has no usable filename.
    pub target: Option<PathBuf>,
    pub exists: bool,
}

/// The deduplicated, valid URLs with their target paths. No network traffic.
pub fn plan<S: AsRef<str>>(urls: &[S], output_dir: &Path) -> Vec<PlannedFetch> {
    dedup(urls)
        .into_iter()
        .filter(|u| is_valid_url(u))
        .map(|url| {
            let target = fetch::target_path(&url, output_dir);
            let exists = target
                .as_deref()
                .map(storage::is_existing_file)
                .unwrap_or(false);
            PlannedFetch { url, target, exists }
        })
        .collect()
}
