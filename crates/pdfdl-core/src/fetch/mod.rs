//! The fetcher: one URL in, at most one complete PDF on disk out.
//!
//! Uses the curl crate (libcurl) for a blocking GET with a total timeout.
//! Status and Content-Type are gated before the body is kept, the body is
//! buffered in memory, and the file is only created once the whole body has
//! arrived and is non-empty.

mod error;
mod handler;
mod parse;

pub use error::FetchError;
pub use parse::PDF_CONTENT_TYPE;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::PdfdlConfig;
use crate::storage;
use crate::url_model::derive_filename;
use handler::PdfHandler;
use parse::check_response;

/// Per-request curl settings.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Total time for the request, connect through last body byte.
    pub timeout: Duration,
    pub max_redirects: u32,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            user_agent: None,
        }
    }
}

impl From<&PdfdlConfig> for FetchOptions {
    fn from(cfg: &PdfdlConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirects: cfg.max_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// What happened to a URL that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A regular file was already at the target path; no request was made.
    Skipped { path: PathBuf },
    /// The body was written to `path`.
    Downloaded { path: PathBuf, bytes: u64 },
}

/// Target path for `url` inside `output_dir`, or `None` if no filename can be derived.
pub fn target_path(url: &str, output_dir: &Path) -> Option<PathBuf> {
    derive_filename(url).map(|name| output_dir.join(name))
}

#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    opts: FetchOptions,
}

impl Fetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }

    /// Downloads `url` into `output_dir` unless the target file already exists.
    pub fn fetch(&self, url: &str, output_dir: &Path) -> Result<FetchOutcome, FetchError> {
        let path = target_path(url, output_dir).ok_or(FetchError::NoFilename)?;
        if storage::is_existing_file(&path) {
            return Ok(FetchOutcome::Skipped { path });
        }

        let body = self.get(url)?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        storage::write_file_atomic(&path, &body)?;
        Ok(FetchOutcome::Downloaded {
            path,
            bytes: body.len() as u64,
        })
    }

    /// Like `fetch`, but logs the outcome and returns true only when a file was written.
    pub fn download_pdf(&self, url: &str, output_dir: &Path) -> bool {
        let result = self.fetch(url, output_dir);
        log_outcome(url, &result);
        matches!(result, Ok(FetchOutcome::Downloaded { .. }))
    }

    /// GET `url` and return the buffered body of an accepted response.
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut easy = curl::easy::Easy2::new(PdfHandler::new());
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.opts.max_redirects)?;
        easy.timeout(self.opts.timeout)?;
        if let Some(ua) = &self.opts.user_agent {
            easy.useragent(ua)?;
        }

        if let Err(e) = easy.perform() {
            if e.is_write_error() {
                if let Some(rejection) = easy.get_mut().take_rejection() {
                    return Err(rejection);
                }
            }
            return Err(FetchError::Transport(e));
        }

        // Bodiless responses never reach the write callback; gate them here.
        let code = easy.response_code()?;
        let handler = easy.get_mut();
        check_response(code, handler.content_type())?;
        Ok(std::mem::take(&mut handler.body))
    }
}

/// Emits the single log line for a fetch result.
pub fn log_outcome(url: &str, result: &Result<FetchOutcome, FetchError>) {
    match result {
        Ok(FetchOutcome::Skipped { path }) => {
            tracing::info!(url, path = %path.display(), "file already exists, skipping");
        }
        Ok(FetchOutcome::Downloaded { path, bytes }) => {
            tracing::info!(
                url,
                path = %path.display(),
                bytes,
                "downloaded {} bytes: {} -> {}",
                bytes,
                url,
                path.display()
            );
        }
        Err(FetchError::Status(code)) => {
            tracing::warn!(url, status = code, "download failed for {}: HTTP {}", url, code);
        }
        Err(e) => {
            tracing::warn!(url, "download failed for {}: {}", url, e);
        }
    }
}
