use super::normalize::{has_recognized_scheme, repair_urls};
use super::types::ValidationOutcome;
use log::debug;
use url::Url;

/// Checks whether a string is a syntactically valid request URL.
///
/// The string must parse as an absolute URL with a scheme and must be hierarchical: opaque
/// forms such as `mailto:someone` or `localhost:8080` (which parses as scheme `localhost`) are
/// rejected. No DNS lookup or connection is attempted.
///
/// # Examples
///
/// ```rust
/// use url_hasher::urls::is_valid_url;
///
/// assert!(is_valid_url("https://www.test1"));
/// assert!(!is_valid_url("www.test1.com"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => !parsed.cannot_be_a_base(),
        Err(_) => false,
    }
}

/// Partitions URL strings into valid and invalid subsets.
///
/// # Arguments
///
/// * `urls` - The candidate URL strings.
///
/// # Returns
///
/// A `ValidationOutcome` whose `valid` and `invalid` lists each preserve input order.
pub fn validate_urls<S: AsRef<str>>(urls: &[S]) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    for url in urls.iter().map(AsRef::as_ref) {
        if is_valid_url(url) {
            outcome.valid.push(url.to_string());
        } else {
            outcome.invalid.push(url.to_string());
        }
    }
    outcome
}

/// Validates caller input, giving invalid entries a second chance after scheme repair.
///
/// The raw input is validated first. When anything fails, the failing subset is passed through
/// `repair_urls` and each repaired URL is validated again. Repaired URLs that now pass are
/// appended to the valid list in their repaired form. Entries that stay invalid are reported in
/// their original form: those that already had a recognized scheme (and so were not repaired)
/// and those whose repaired form still does not parse.
///
/// # Arguments
///
/// * `urls` - The caller-supplied URL strings.
/// * `default_scheme` - The prefix used for repair (e.g., "http://").
///
/// # Returns
///
/// The final `ValidationOutcome`; `valid` is what gets dispatched.
///
/// # Examples
///
/// ```rust
/// use url_hasher::urls::{prepare_urls, DEFAULT_SCHEME};
///
/// let outcome = prepare_urls(&["not a url", "example.com", "http://validhost/ok"], DEFAULT_SCHEME);
/// assert_eq!(outcome.valid, vec!["http://validhost/ok", "http://example.com"]);
/// assert_eq!(outcome.invalid, vec!["not a url"]);
/// ```
pub fn prepare_urls<S: AsRef<str>>(urls: &[S], default_scheme: &str) -> ValidationOutcome {
    let first_pass = validate_urls(urls);
    if first_pass.all_valid() {
        return first_pass;
    }

    debug!(
        "{} url(s) failed validation, retrying with scheme {}",
        first_pass.invalid.len(),
        default_scheme
    );

    let ValidationOutcome { mut valid, invalid: failed } = first_pass;
    let mut repaired = repair_urls(&failed, default_scheme).into_iter();
    let mut invalid = Vec::new();

    // repair_urls yields one entry per unprefixed input, in order.
    for original in failed {
        if has_recognized_scheme(&original) {
            invalid.push(original);
            continue;
        }
        match repaired.next() {
            Some(fixed) if is_valid_url(&fixed) => {
                debug!("Repaired url {:?} as {}", original, fixed);
                valid.push(fixed);
            }
            _ => invalid.push(original),
        }
    }

    ValidationOutcome { valid, invalid }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls::DEFAULT_SCHEME;

    #[test]
    fn test_validate_all_valid() {
        let urls = ["https://www.test1.com", "https://www.test2.com", "https://www.test3.com"];
        let outcome = validate_urls(&urls);
        assert_eq!(outcome.valid, urls.to_vec());
        assert!(outcome.invalid.is_empty());
    }

    #[test]
    fn test_validate_url_without_scheme() {
        let outcome = validate_urls(&["www.test1.com", "https://www.test2.com", "test1.com"]);
        assert_eq!(outcome.valid, vec!["https://www.test2.com"]);
        assert_eq!(outcome.invalid, vec!["www.test1.com", "test1.com"]);
    }

    #[test]
    fn test_validate_url_without_domain_suffix() {
        let outcome = validate_urls(&["https://www.test1", "https://www.test2.com"]);
        assert_eq!(outcome.valid, vec!["https://www.test1", "https://www.test2.com"]);
        assert!(outcome.invalid.is_empty());
    }

    #[test]
    fn test_validate_rejects_opaque_and_malformed() {
        let outcome = validate_urls(&["localhost:8080", "mailto:someone@example.com", "http://", ""]);
        assert!(outcome.valid.is_empty());
        assert_eq!(outcome.invalid.len(), 4);
    }

    #[test]
    fn test_validate_accepts_unsupported_scheme_syntax() {
        // Syntactically fine; the fetch itself fails later.
        assert!(is_valid_url("ftp://files.example.com/pub"));
    }

    #[test]
    fn test_partitions_agree_with_is_valid_url() {
        let urls = [
            "https://www.test1.com",
            "www.test1.com",
            "http://[::1]:8080/x",
            "http://[::1",
            "not a url",
            "http://exa mple.com",
            "https://example.com/a?b=c#d",
        ];
        let outcome = validate_urls(&urls);
        assert_eq!(outcome.valid.len() + outcome.invalid.len(), urls.len());
        assert!(outcome.valid.iter().all(|url| is_valid_url(url)));
        assert!(outcome.invalid.iter().all(|url| !is_valid_url(url)));
    }

    #[test]
    fn test_prepare_skips_repair_when_all_valid() {
        let outcome = prepare_urls(&["https://www.test1.com"], DEFAULT_SCHEME);
        assert_eq!(outcome.valid, vec!["https://www.test1.com"]);
        assert!(outcome.all_valid());
    }

    #[test]
    fn test_prepare_repairs_missing_scheme() {
        let outcome = prepare_urls(&["www.test1.com", "https://www.test2.com"], DEFAULT_SCHEME);
        assert_eq!(outcome.valid, vec!["https://www.test2.com", "http://www.test1.com"]);
        assert!(outcome.invalid.is_empty());
    }

    #[test]
    fn test_prepare_keeps_first_pass_valid_urls() {
        let outcome = prepare_urls(&["https://www.test2.com", "localhost:8080"], DEFAULT_SCHEME);
        assert_eq!(outcome.valid, vec!["https://www.test2.com", "http://localhost:8080"]);
    }

    #[test]
    fn test_prepare_reports_unrepairable_in_original_form() {
        let outcome = prepare_urls(&["not a url", "http://", "http://validhost/ok"], DEFAULT_SCHEME);
        assert_eq!(outcome.valid, vec!["http://validhost/ok"]);
        assert_eq!(outcome.invalid, vec!["not a url", "http://"]);
    }
}
