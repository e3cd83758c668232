//! Response header inspection: status line, header lookup and the PDF gate.

use super::FetchError;

/// MIME type the Content-Type header must contain.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Status code from the leading `HTTP/x y reason` line, if any.
pub(crate) fn parse_http_status(lines: &[String]) -> Option<u32> {
    let first = lines.first()?;
    if !first.starts_with("HTTP/") {
        return None;
    }
    first.split_whitespace().nth(1)?.parse().ok()
}

/// Value of the first header named `name` (case-insensitive name match).
pub(crate) fn header_value<'a>(lines: &'a [String], name: &str) -> Option<&'a str> {
    lines.iter().find_map(|line| {
        let (n, v) = line.split_once(':')?;
        if n.trim().eq_ignore_ascii_case(name) {
            Some(v.trim())
        } else {
            None
        }
    })
}

/// Accepts only a 200 response whose Content-Type contains `application/pdf`.
///
/// The substring match is case-sensitive, so `Application/PDF` is rejected.
pub(crate) fn check_response(status: u32, content_type: Option<&str>) -> Result<(), FetchError> {
    if status != 200 {
        return Err(FetchError::Status(status));
    }
    match content_type {
        Some(ct) if ct.contains(PDF_CONTENT_TYPE) => Ok(()),
        other => Err(FetchError::ContentType(other.map(str::to_string))),
    }
}
