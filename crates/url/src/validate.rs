//! Web URL validation
//!
//! Accepts `http`/`https` URLs with a real host and an optional
//! port, path, query and fragment.

use url::{Host, Url};

use crate::error::{UrlError, UrlResult};

/// Check whether a candidate is a well-formed web URL
pub fn is_valid_url(candidate: &str) -> bool {
    parse_web_url(candidate).is_ok()
}

/// Parse a candidate as a web URL, reporting why it was rejected
pub fn parse_web_url(candidate: &str) -> UrlResult<Url> {
    if candidate.is_empty() {
        return Err(UrlError::Empty);
    }

    // The url crate would trim or percent-encode these; a pattern match does not.
    if candidate.chars().any(char::is_whitespace) {
        return Err(UrlError::Whitespace);
    }

    if !has_web_scheme(candidate) {
        return Err(UrlError::UnsupportedScheme(candidate.to_string()));
    }

    let url = Url::parse(candidate).map_err(|e| match e {
        url::ParseError::EmptyHost => UrlError::MissingHost,
        other => UrlError::from(other),
    })?;

    match url.host() {
        Some(Host::Domain(domain)) => check_domain(domain)?,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        None => return Err(UrlError::MissingHost),
    }

    Ok(url)
}

/// Scheme must be spelled out with `://`, e.g. `https:example.com` is rejected
fn has_web_scheme(candidate: &str) -> bool {
    let Some((scheme, _)) = candidate.split_once("://") else {
        return false;
    };
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

/// `localhost`, or two or more alphanumeric/hyphen labels ending in a TLD
/// of 2+ letters or an `xn--` label; single-letter and numeric TLDs fail.
fn check_domain(domain: &str) -> UrlResult<()> {
    if domain == "localhost" {
        return Ok(());
    }

    let invalid = || UrlError::InvalidHost(domain.to_string());

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid());
    }

    for label in &labels {
        let well_formed = !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !well_formed {
            return Err(invalid());
        }
    }

    // Top-level domain: letters only, or an IDNA label
    let tld = labels[labels.len() - 1];
    let tld_ok = tld.starts_with("xn--")
        || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    if !tld_ok {
        return Err(invalid());
    }

    Ok(())
}
