//! URL modeling and filename derivation.
//!
//! The local filename of a download is the lower-cased last path segment of
//! its URL. There is no Content-Disposition lookup and no fallback name: a
//! URL without a usable segment is not downloaded.

mod path;

pub use path::filename_from_url_path;

/// Derives the local filename for `url`, or `None` if the URL has no usable
/// path segment.
///
/// # Examples
///
/// - `derive_filename("https://example.com/docs/Manual.PDF")` → `Some("manual.pdf")`
/// - `derive_filename("https://example.com/a.pdf?dl=1")` → `Some("a.pdf")`
pub fn derive_filename(url: &str) -> Option<String> {
    filename_from_url_path(url).map(|s| s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_filename_lowercases() {
        assert_eq!(
            derive_filename("https://example.com/docs/Manual.PDF").as_deref(),
            Some("manual.pdf")
        );
    }

    #[test]
    fn derive_filename_keeps_percent_escapes() {
        assert_eq!(
            derive_filename("https://host/DAMRoot/Original/10000/FooBar_ABC%20(1).pdf").as_deref(),
            Some("foobar_abc%20(1).pdf")
        );
    }

    #[test]
    fn derive_filename_builtin_style_url() {
        assert_eq!(
            derive_filename(
                "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10005/00HB0002_BDH38606_USENG%20(1).pdf"
            )
            .as_deref(),
            Some("00hb0002_bdh38606_useng%20(1).pdf")
        );
    }

    #[test]
    fn derive_filename_keeps_non_ascii_and_braces() {
        assert_eq!(
            derive_filename("https://host/docs/Résumé.PDF").as_deref(),
            Some("résumé.pdf")
        );
        assert_eq!(
            derive_filename("https://host/sheets/Sheet{1}.pdf").as_deref(),
            Some("sheet{1}.pdf")
        );
        assert_eq!(
            derive_filename("https://host/sheets/A\"b.pdf").as_deref(),
            Some("a\"b.pdf")
        );
    }

    #[test]
    fn derive_filename_strips_query() {
        assert_eq!(
            derive_filename("https://example.com/A.pdf?X-Amz-Signature=ABC").as_deref(),
            Some("a.pdf")
        );
    }

    #[test]
    fn derive_filename_none_for_root() {
        assert_eq!(derive_filename("https://example.com/"), None);
    }
}
