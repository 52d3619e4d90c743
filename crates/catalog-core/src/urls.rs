//! URL resolution against category base URLs.

use url::Url;

/// Check if a value is already an absolute HTTP(S) URL.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Resolve a feed value against `base`.
///
/// Absolute HTTP(S) values are returned verbatim. Anything else is joined as
/// a relative reference (RFC 3986), so a base without a trailing slash has its
/// last segment replaced. Returns `None` if the join fails.
pub fn resolve(value: &str, base: &Url) -> Option<String> {
    if is_http_url(value) {
        return Some(value.to_string());
    }
    match base.join(value) {
        Ok(url) => Some(url.into()),
        Err(e) => {
            log::warn!("catalog: cannot resolve {:?} against {}: {}", value, base, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn is_http_url_checks_scheme() {
        assert!(is_http_url("https://example.com/a.m3u8"));
        assert!(is_http_url("http://example.com/a.m3u8"));
        assert!(!is_http_url("ftp://example.com/a.m3u8"));
        assert!(!is_http_url("a.m3u8"));
        assert!(!is_http_url("/videos/a.m3u8"));
    }

    #[test]
    fn absolute_values_pass_through_unchanged() {
        let b = base("http://cdn/");
        assert_eq!(
            resolve("https://other.example.com/x/../y.jpg", &b).as_deref(),
            Some("https://other.example.com/x/../y.jpg")
        );
    }

    #[test]
    fn relative_values_join_base() {
        let b = base("http://cdn/videos/");
        assert_eq!(
            resolve("hls/a.m3u8", &b).as_deref(),
            Some("http://cdn/videos/hls/a.m3u8")
        );
        assert_eq!(resolve("/root.jpg", &b).as_deref(), Some("http://cdn/root.jpg"));
    }

    #[test]
    fn base_without_trailing_slash_replaces_last_segment() {
        let b = base("http://cdn/videos");
        assert_eq!(resolve("a.m3u8", &b).as_deref(), Some("http://cdn/a.m3u8"));
    }
}
