//! Why a single URL was not downloaded.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL has no path segment usable as a filename.
    #[error("no filename can be derived from the URL path")]
    NoFilename,
    /// Curl reported an error (connect, DNS, timeout, reset mid-body, ...).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// The final response was not `200 OK`.
    #[error("HTTP {0}")]
    Status(u32),
    /// Content-Type missing or not containing `application/pdf`.
    #[error("invalid content type {} (expected application/pdf)", .0.as_deref().unwrap_or("<none>"))]
    ContentType(Option<String>),
    /// 200 with a PDF content type but no body bytes.
    #[error("downloaded 0 bytes; not creating file")]
    EmptyBody,
    /// Creating, writing or renaming the output file failed.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
