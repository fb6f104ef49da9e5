//! Address-bar text normalization
//!
//! Free text becomes either an absolute URL or a search query URL.

use url::form_urlencoded::byte_serialize;

/// Search engine query URL that bare words are appended to
pub const SEARCH_URL_PREFIX: &str = "https://www.google.com/search?q=";

/// Normalize address-bar text into a URL string.
///
/// Rules, first match wins:
/// 1. Text already starting with `http://` or `https://` is returned as-is.
/// 2. Text containing a `.` is treated as a bare domain and gets `https://`.
/// 3. Anything else becomes a search query.
///
/// The result is not guaranteed to be valid; see [`crate::is_valid_url`].
pub fn normalize(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else if input.contains('.') {
        format!("https://{}", input)
    } else {
        search_url(input)
    }
}

/// Build the search URL for a query.
///
/// Spaces become `+` and other whitespace is percent-encoded; everything
/// else is kept as typed.
pub fn search_url(query: &str) -> String {
    let mut url = String::with_capacity(SEARCH_URL_PREFIX.len() + query.len());
    url.push_str(SEARCH_URL_PREFIX);

    let mut buf = [0u8; 4];
    for c in query.chars() {
        if c.is_whitespace() {
            // Encodes ' ' as '+', anything else as %XX
            url.extend(byte_serialize(c.encode_utf8(&mut buf).as_bytes()));
        } else {
            url.push(c);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_prefixed_input_unchanged() {
        for input in [
            "http://example.com",
            "https://example.com/path?q=1",
            "https://",
            "http://not a host",
        ] {
            assert_eq!(normalize(input), input);
        }
    }

    #[test]
    fn test_scheme_match_is_case_sensitive() {
        // Upper-case schemes fall through to the bare-domain rule
        assert_eq!(normalize("HTTPS://example.com"), "https://HTTPS://example.com");
    }

    #[test]
    fn test_dotted_input_gets_https() {
        assert_eq!(normalize("example.com"), "https://example.com");
        assert_eq!(normalize("docs.rs/url"), "https://docs.rs/url");
        assert_eq!(normalize("foo bar.com"), "https://foo bar.com");
    }

    #[test]
    fn test_other_schemes_treated_as_domains() {
        assert_eq!(normalize("ftp://files.example.org"), "https://ftp://files.example.org");
    }

    #[test]
    fn test_bare_words_become_search() {
        assert_eq!(
            normalize("rust borrow checker"),
            "https://www.google.com/search?q=rust+borrow+checker"
        );
        assert_eq!(normalize("localhost"), "https://www.google.com/search?q=localhost");
    }

    #[test]
    fn test_search_preserves_other_characters() {
        assert_eq!(
            normalize("not a url!!"),
            "https://www.google.com/search?q=not+a+url!!"
        );
        assert_eq!(normalize("c#"), "https://www.google.com/search?q=c#");
    }

    #[test]
    fn test_empty_input_is_empty_search() {
        assert_eq!(normalize(""), SEARCH_URL_PREFIX);
    }

    #[test]
    fn test_search_encodes_other_whitespace() {
        assert_eq!(normalize("foo\u{a0}bar"), "https://www.google.com/search?q=foo%C2%A0bar");
        assert_eq!(normalize("a\tb"), "https://www.google.com/search?q=a%09b");
        assert_eq!(normalize("x\u{3000}y z"), "https://www.google.com/search?q=x%E3%80%80y+z");
    }

    mod prop {
        use super::*;
        use crate::validate::is_valid_url;
        use proptest::prelude::*;

        fn has_scheme(s: &str) -> bool {
            s.starts_with("http://") || s.starts_with("https://")
        }

        proptest! {
            #[test]
            fn scheme_prefixed_unchanged(scheme in "https?://", rest in "\\PC*") {
                let input = format!("{scheme}{rest}");
                prop_assert_eq!(normalize(&input), input);
            }

            #[test]
            fn dotted_gets_https(head in "\\PC*", tail in "\\PC*") {
                let input = format!("{head}.{tail}");
                prop_assume!(!has_scheme(&input));
                prop_assert_eq!(normalize(&input), format!("https://{input}"));
            }

            #[test]
            fn spaced_words_keep_text(query in "[^.\\s]*( [^.\\s]*)*") {
                prop_assume!(!has_scheme(&query));
                prop_assert_eq!(
                    normalize(&query),
                    format!("{}{}", SEARCH_URL_PREFIX, query.replace(' ', "+"))
                );
            }

            #[test]
            fn dotless_always_valid(query in any::<String>()) {
                prop_assume!(!query.contains('.') && !has_scheme(&query));
                let url = normalize(&query);
                prop_assert!(url.starts_with(SEARCH_URL_PREFIX));
                prop_assert!(is_valid_url(&url), "{:?} -> {:?}", query, url);
            }
        }
    }
}
