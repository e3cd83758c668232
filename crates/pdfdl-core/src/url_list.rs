//! URL list preparation: order-preserving dedup and syntactic validation.

use std::collections::HashSet;

/// Returns each distinct entry once, in order of first occurrence.
///
/// Entries are compared as exact strings; no URL normalization is applied.
pub fn dedup<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(urls.len());
    let mut out = Vec::with_capacity(urls.len());
    for u in urls {
        let u = u.as_ref();
        if seen.insert(u) {
            out.push(u.to_string());
        }
    }
    out
}

/// Whether `s` is a syntactically valid request URI: an absolute URL or an
/// absolute path (`/...`).
///
/// Only syntax is checked. Reachability and scheme are the fetcher's concern.
pub fn is_valid_url(s: &str) -> bool {
    if s.is_empty() || s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if s.starts_with('/') {
        // The query is passed through raw; only the path must unescape.
        let path = s.split_once('?').map_or(s, |(p, _)| p);
        return escapes_well_formed(path);
    }
    url::Url::parse(s).is_ok()
}

/// Every `%` must start a `%XX` escape with two hex digits.
fn escapes_well_formed(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(h), Some(l)) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()
            )
    })
}

/// Parses a URL list file: one entry per line, blank lines and `#` comments ignored.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}
