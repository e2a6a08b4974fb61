/// Scheme prepended to URLs that lack a recognized one.
pub const DEFAULT_SCHEME: &str = "http://";

/// Prefixes that mark a URL as already carrying a scheme.
pub const RECOGNIZED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Returns `true` if `url` starts with one of the recognized scheme prefixes.
pub fn has_recognized_scheme(url: &str) -> bool {
    RECOGNIZED_SCHEMES.iter().any(|prefix| url.starts_with(prefix))
}

/// Repairs URLs that are missing a scheme.
///
/// Every input that does not start with `http://` or `https://` is returned with
/// `default_scheme` prepended. Inputs that already carry a recognized prefix have nothing to
/// repair and are left out of the returned list, so the result only holds repaired entries.
///
/// # Arguments
///
/// * `urls` - The URL strings to repair.
/// * `default_scheme` - The prefix to prepend (e.g., "http://").
///
/// # Returns
///
/// A `Vec<String>` with one repaired URL per unprefixed input, in input order.
///
/// # Examples
///
/// ```rust
/// use url_hasher::urls::{repair_urls, DEFAULT_SCHEME};
///
/// let urls = vec!["example.com".to_string(), "https://example.org".to_string()];
/// assert_eq!(repair_urls(&urls, DEFAULT_SCHEME), vec!["http://example.com".to_string()]);
/// ```
pub fn repair_urls<S: AsRef<str>>(urls: &[S], default_scheme: &str) -> Vec<String> {
    urls.iter()
        .map(AsRef::as_ref)
        .filter(|url| !has_recognized_scheme(url))
        .map(|url| format!("{}{}", default_scheme, url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_adds_default_scheme() {
        assert_eq!(
            repair_urls(&["example.com"], DEFAULT_SCHEME),
            vec!["http://example.com".to_string()]
        );
    }

    #[test]
    fn test_repair_drops_prefixed_urls() {
        let urls = ["https://www.test1.com", "www.test2.com", "http://www.test3.com"];
        assert_eq!(
            repair_urls(&urls, DEFAULT_SCHEME),
            vec!["http://www.test2.com".to_string()]
        );
    }

    #[test]
    fn test_repair_uses_configured_scheme() {
        assert_eq!(
            repair_urls(&["example.com"], "https://"),
            vec!["https://example.com".to_string()]
        );
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        // "HTTP://" is not one of the recognized prefixes.
        assert!(!has_recognized_scheme("HTTP://example.com"));
        assert!(has_recognized_scheme("https://example.com"));
        assert!(!has_recognized_scheme("ftp://example.com"));
    }

    #[test]
    fn test_repair_empty_input() {
        let urls: Vec<String> = Vec::new();
        assert!(repair_urls(&urls, DEFAULT_SCHEME).is_empty());
    }
}
