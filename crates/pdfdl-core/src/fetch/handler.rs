//! Easy2 Handler for one PDF GET.
//! Checks status and Content-Type on the first body chunk; buffers the body in memory.

use std::str;

use super::parse::{check_response, header_value, parse_http_status};
use super::FetchError;

/// Handler state for one transfer. Implements curl's Handler for Easy2.
#[derive(Default)]
pub struct PdfHandler {
    pub(super) response_headers: Vec<String>,
    pub(super) body: Vec<u8>,
    /// None = not yet checked; Some(Ok) = accepted; Some(Err) = transfer aborted.
    pub(super) verdict: Option<Result<(), FetchError>>,
}

impl PdfHandler {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn status(&self) -> Option<u32> {
        parse_http_status(&self.response_headers)
    }

    pub(super) fn content_type(&self) -> Option<&str> {
        header_value(&self.response_headers, "content-type")
    }

    /// Takes the rejection recorded by `write`, if the transfer was aborted by the gate.
    pub(super) fn take_rejection(&mut self) -> Option<FetchError> {
        match self.verdict.take() {
            Some(Err(e)) => Some(e),
            other => {
                self.verdict = other;
                None
            }
        }
    }
}

impl curl::easy::Handler for PdfHandler {
    fn header(&mut self, data: &[u8]) -> bool {
        if let Ok(s) = str::from_utf8(data) {
            let line = s.trim_end();
            if line.starts_with("HTTP/") {
                self.response_headers.clear();
            }
            if !line.is_empty() {
                self.response_headers.push(line.to_string());
            }
        }
        true
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, curl::easy::WriteError> {
        if self.verdict.is_none() {
            let status = self.status().unwrap_or(0);
            self.verdict = Some(check_response(status, self.content_type()));
        }
        if let Some(Err(_)) = self.verdict {
            return Ok(0);
        }
        self.body.extend_from_slice(data);
        Ok(data.len())
    }
}
