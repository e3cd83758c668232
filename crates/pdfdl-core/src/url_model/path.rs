//! Filename extraction from URL path.

/// Extracts the last path segment from a URL for use as a filename.
///
/// The segment is cut from the input text itself, so percent-escapes, non-ASCII
/// characters and punctuation are kept exactly as written. Query string and
/// fragment are ignored. Returns `None` if the path is empty/root, the segment
/// is `.`/`..`, or the URL is neither an absolute URL with a path nor an
/// absolute path.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    let head = &url[..end];
    let path = if url.starts_with('/') {
        head
    } else {
        match url::Url::parse(url) {
            Ok(parsed) if !parsed.cannot_be_a_base() => raw_path(head, parsed.has_host())?,
            _ => return None,
        }
    };
    let segment = path.split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// The path part of `head` (an absolute URL with query and fragment removed),
/// found by skipping the scheme and the authority in the raw text.
fn raw_path(head: &str, has_host: bool) -> Option<&str> {
    let (_scheme, rest) = head.split_once(':')?;
    let authority_and_path = if let Some(r) = rest.strip_prefix("//") {
        r
    } else if has_host {
        // Special schemes accept `http:host/x` and `http:/host/x`.
        rest.trim_start_matches('/')
    } else {
        return Some(rest);
    };
    authority_and_path.find('/').map(|i| &authority_and_path[i..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            filename_from_url_path("https://example.com/a/b/file.pdf").as_deref(),
            Some("file.pdf")
        );
        assert_eq!(
            filename_from_url_path("https://example.com/single").as_deref(),
            Some("single")
        );
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(filename_from_url_path("https://example.com/"), None);
        assert_eq!(filename_from_url_path("https://example.com"), None);
        assert_eq!(filename_from_url_path("/"), None);
    }

    #[test]
    fn with_query_and_fragment() {
        assert_eq!(
            filename_from_url_path("https://example.com/file.pdf?token=abc").as_deref(),
            Some("file.pdf")
        );
        assert_eq!(
            filename_from_url_path("https://example.com/file.pdf#page=2").as_deref(),
            Some("file.pdf")
        );
        assert_eq!(
            filename_from_url_path("/docs/file.pdf?v=3#top").as_deref(),
            Some("file.pdf")
        );
    }

    #[test]
    fn trailing_slash_uses_last_non_empty_segment() {
        assert_eq!(
            filename_from_url_path("https://example.com/docs/manuals/").as_deref(),
            Some("manuals")
        );
    }

    #[test]
    fn percent_escapes_not_decoded() {
        assert_eq!(
            filename_from_url_path("https://host/x/Foo%20(1).pdf").as_deref(),
            Some("Foo%20(1).pdf")
        );
    }

    #[test]
    fn segment_taken_as_written() {
        assert_eq!(
            filename_from_url_path("https://host/docs/Résumé.PDF").as_deref(),
            Some("Résumé.PDF")
        );
        assert_eq!(
            filename_from_url_path("https://host/sheets/Sheet{1}.pdf").as_deref(),
            Some("Sheet{1}.pdf")
        );
        assert_eq!(
            filename_from_url_path("https://host/sheets/A\"b.pdf").as_deref(),
            Some("A\"b.pdf")
        );
        assert_eq!(
            filename_from_url_path("https://host/a/<b>.pdf").as_deref(),
            Some("<b>.pdf")
        );
    }

    #[test]
    fn authority_is_never_a_segment() {
        assert_eq!(
            filename_from_url_path("https://user:pw@example.com:8443/x/y.pdf").as_deref(),
            Some("y.pdf")
        );
        assert_eq!(filename_from_url_path("https://example.com?q=/a.pdf"), None);
        assert_eq!(filename_from_url_path("https://example.com#/a.pdf"), None);
        assert_eq!(
            filename_from_url_path("file:///srv/manuals/Z.pdf").as_deref(),
            Some("Z.pdf")
        );
    }

    #[test]
    fn dot_segments_rejected() {
        assert_eq!(filename_from_url_path("/docs/.."), None);
        assert_eq!(filename_from_url_path("/docs/."), None);
    }

    #[test]
    fn opaque_or_relative_rejected() {
        assert_eq!(filename_from_url_path("mailto:someone@example.com"), None);
        assert_eq!(filename_from_url_path("docs/file.pdf"), None);
    }
}
