//! URL description for deduplication and analytics.
//!
//! Splits a raw URL along the generic URI grammar and derives the
//! [`UrlDescriptor`] fields from the pieces. Nothing is validated or
//! rewritten: partial or malformed input still yields a descriptor, with
//! missing components left empty.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::domain::entities::UrlDescriptor;

/// Generic URI splitter: `scheme:` `//authority` `path` `?query` `#fragment`.
static URI_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([A-Za-z][A-Za-z0-9+.\-]*):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("URI regex is valid")
});

/// Raw components of a split URL.
#[derive(Debug, Default, PartialEq, Eq)]
struct UrlParts<'a> {
    netloc: &'a str,
    path: &'a str,
    query: &'a str,
}

fn split_url(url: &str) -> UrlParts<'_> {
    let Some(caps) = URI_PARTS.captures(url) else {
        return UrlParts {
            path: url,
            ..UrlParts::default()
        };
    };

    let part = |i| caps.get(i).map_or("", |m| m.as_str());

    UrlParts {
        netloc: part(2),
        path: part(3),
        query: part(4),
    }
}

/// Counts distinct query parameter names that carry a non-blank value.
fn count_params(query: &str) -> usize {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, _)| name)
        .collect::<HashSet<_>>()
        .len()
}

/// Builds the descriptor of a long URL.
///
/// Leading and trailing `/` are trimmed from the input first; the trimmed
/// string is what gets stored and redirected to.
///
/// # Examples
///
/// ```ignore
/// let d = describe_url("http://example.com/a/b?x=1&y=2");
/// assert_eq!(d.domain, "example.com");
/// assert_eq!(d.params.as_deref(), Some("x=1&y=2"));
/// assert_eq!(d.path_level, 3);
/// ```
pub fn describe_url(raw: &str) -> UrlDescriptor {
    let long_url = raw.trim_matches('/');
    let parts = split_url(long_url);

    let labels: Vec<&str> = parts.netloc.split('.').collect();
    let base_domain = labels[labels.len().saturating_sub(2)..].join(".");

    let params_count = count_params(parts.query);
    let params = (params_count > 0).then(|| parts.query.to_string());

    let path = (!parts.path.is_empty() && parts.path != "/").then(|| parts.path.to_string());

    UrlDescriptor {
        long_url: long_url.to_string(),
        url_len: long_url.chars().count(),
        domain: parts.netloc.to_string(),
        domain_level: labels.len(),
        base_domain,
        params_count,
        params,
        path_level: parts.path.split('/').count(),
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_full_url() {
        let d = describe_url("http://example.com/a/b?x=1&y=2");

        assert_eq!(d.long_url, "http://example.com/a/b?x=1&y=2");
        assert_eq!(d.url_len, 30);
        assert_eq!(d.domain, "example.com");
        assert_eq!(d.domain_level, 2);
        assert_eq!(d.base_domain, "example.com");
        assert_eq!(d.params_count, 2);
        assert_eq!(d.params.as_deref(), Some("x=1&y=2"));
        assert_eq!(d.path_level, 3);
        assert_eq!(d.path.as_deref(), Some("/a/b"));
    }

    #[test]
    fn test_describe_is_deterministic() {
        let url = "https://sub.example.co.uk/p?q=rust#frag";
        assert_eq!(describe_url(url), describe_url(url));
    }

    #[test]
    fn test_trims_slashes() {
        let d = describe_url("/http://example.com/path/");
        assert_eq!(d.long_url, "http://example.com/path");
        assert_eq!(d.path.as_deref(), Some("/path"));
    }

    #[test]
    fn test_bare_domain_has_no_path() {
        let d = describe_url("http://example.com");
        assert_eq!(d.path, None);
        assert_eq!(d.path_level, 1);
        assert_eq!(d.params, None);
        assert_eq!(d.params_count, 0);
    }

    #[test]
    fn test_root_path_is_absent() {
        let d = describe_url("http://example.com/?a=1");
        assert_eq!(d.path, None);
        assert_eq!(d.path_level, 2);
        assert_eq!(d.params.as_deref(), Some("a=1"));
    }

    #[test]
    fn test_subdomain_levels() {
        let d = describe_url("https://a.b.example.com/x");
        assert_eq!(d.domain_level, 4);
        assert_eq!(d.base_domain, "example.com");
    }

    #[test]
    fn test_port_and_userinfo_stay_in_domain() {
        let d = describe_url("http://user@example.com:8080/x");
        assert_eq!(d.domain, "user@example.com:8080");
        assert_eq!(d.base_domain, "user@example.com:8080");
    }

    #[test]
    fn test_blank_params_are_not_counted() {
        let d = describe_url("http://example.com/s?empty=&flag&q=1");
        assert_eq!(d.params_count, 1);
        assert_eq!(d.params.as_deref(), Some("empty=&flag&q=1"));

        let d = describe_url("http://example.com/s?empty=&flag");
        assert_eq!(d.params_count, 0);
        assert_eq!(d.params, None);
    }

    #[test]
    fn test_repeated_param_names_count_once() {
        let d = describe_url("http://example.com/?a=1&a=2&b=3");
        assert_eq!(d.params_count, 2);
    }

    #[test]
    fn test_fragment_is_ignored() {
        let d = describe_url("http://example.com/page#section?x=1");
        assert_eq!(d.path.as_deref(), Some("/page"));
        assert_eq!(d.params_count, 0);
    }

    #[test]
    fn test_path_parameters_stay_in_path() {
        let d = describe_url("http://a.com/p;x?q=1");
        assert_eq!(d.path.as_deref(), Some("/p;x"));
        assert_eq!(d.params.as_deref(), Some("q=1"));
    }

    #[test]
    fn test_url_without_scheme_is_all_path() {
        let d = describe_url("example.com/a");
        assert_eq!(d.domain, "");
        assert_eq!(d.domain_level, 1);
        assert_eq!(d.base_domain, "");
        assert_eq!(d.path.as_deref(), Some("example.com/a"));
        assert_eq!(d.path_level, 2);
    }

    #[test]
    fn test_empty_input() {
        let d = describe_url("");
        assert_eq!(d.long_url, "");
        assert_eq!(d.url_len, 0);
        assert_eq!(d.domain, "");
        assert_eq!(d.params_count, 0);
        assert_eq!(d.path, None);
        assert_eq!(d.path_level, 1);
    }

    #[test]
    fn test_garbage_input_does_not_panic() {
        let d = describe_url("::://??##");
        assert!(d.url_len > 0);
    }

    #[test]
    fn test_url_len_counts_characters() {
        let d = describe_url("http://münchen.de");
        assert_eq!(d.url_len, 17);
        assert_eq!(d.domain, "münchen.de");
    }
}
