//! Domain extraction and normalization utilities.
//!
//! This module normalizes loosely-formed URL strings and extracts either the full
//! host or the registrable domain, using the Public Suffix List (PSL) to tell the
//! two apart.
//!
//! Key functions:
//! - `domain()` - Extracts the registrable domain (e.g. "xyz.com")
//! - `subdomain()` - Extracts the full host, minus a leading "www."
//! - `subdomain_www()` - Extracts the full host as written
//! - `extract()` - Convenience entry point driven by `ExtractOptions`

use std::net::Ipv4Addr;

use log::debug;

use crate::config::{ExtractOptions, ParseOptions, DEFAULT_SCHEME, SCHEME_SEPARATOR, WWW_LABEL};
use crate::error_handling::ParseError;

/// Host and registrable domain of a normalized URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedHost {
    /// Full host, all labels included
    pub host: String,
    /// Registrable domain (ICANN suffixes only), `None` for IP addresses and bare
    /// public suffixes
    pub domain: Option<String>,
}

/// Prepares a string for domain parsing.
///
/// Trims surrounding whitespace, prepends `https://` when there is no scheme
/// separator, and (unless `keep_www` is set) removes a "www." label sitting
/// directly after the first "://". The label match is case-insensitive and
/// happens at most once.
pub(crate) fn normalize_for_domain(input: &str, keep_www: bool) -> String {
    let raw = input.trim();

    let mut normalized = if raw.contains(SCHEME_SEPARATOR) {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{raw}")
    };

    if !keep_www {
        if let Some(idx) = normalized.find(SCHEME_SEPARATOR) {
            let start = idx + SCHEME_SEPARATOR.len();
            let end = start + WWW_LABEL.len();
            let has_www = normalized
                .get(start..end)
                .is_some_and(|label| label.eq_ignore_ascii_case(WWW_LABEL));
            if has_www {
                normalized.replace_range(start..end, "");
            }
        }
    }

    normalized
}

/// Parses a normalized URL and looks up its registrable domain.
///
/// Returns `Ok(None)` if the URL parses but has no host component.
///
/// # Errors
///
/// Returns `ParseError::Url` if the URL cannot be parsed.
pub(crate) fn resolve_host(normalized: &str) -> Result<Option<ResolvedHost>, ParseError> {
    let parsed = url::Url::parse(normalized)?;

    let Some(host) = parsed.host_str() else {
        return Ok(None);
    };

    // IP addresses do not have registrable domains
    let is_ip = parsed
        .host()
        .map(|h| matches!(h, url::Host::Ipv4(_) | url::Host::Ipv6(_)))
        .unwrap_or(false)
        || host.parse::<Ipv4Addr>().is_ok();

    let domain = if is_ip {
        None
    } else {
        icann_domain(host).map(str::to_string)
    };

    Ok(Some(ResolvedHost {
        host: host.to_string(),
        domain,
    }))
}

/// Looks up the registrable domain of `host` against the ICANN section of the
/// Public Suffix List.
///
/// Private-section suffixes (e.g. "blogspot.com", "github.io") are ignored, so
/// "foo.blogspot.com" yields "blogspot.com". Returns `None` when the host is
/// itself a public suffix.
fn icann_domain(host: &str) -> Option<&str> {
    let name = host.strip_suffix('.').unwrap_or(host);

    let suffix = psl::suffix(name.as_bytes())?;
    let mut typ = suffix.typ();
    let mut tail = name.get(name.len().checked_sub(suffix.as_bytes().len())?..)?;

    // Walk down a private suffix until the ICANN suffix beneath it
    while typ == Some(psl::Type::Private) {
        let (_, rest) = tail.split_once('.')?;
        let next = psl::suffix(rest.as_bytes())?;
        typ = next.typ();
        tail = rest.get(rest.len().checked_sub(next.as_bytes().len())?..)?;
    }

    let label_end = name.len().checked_sub(tail.len() + 1)?;
    let prefix = name.get(..label_end)?;
    if name.as_bytes().get(label_end) != Some(&b'.') {
        return None;
    }

    let label_start = prefix.rfind('.').map_or(0, |i| i + 1);
    if label_start == label_end {
        return None;
    }

    name.get(label_start..)
}

/// Extracts the domain selected by `opts`, or `Ok(None)` if the input has no
/// registrable domain.
fn parse_for_domain(input: &str, opts: &ParseOptions) -> Result<Option<String>, ParseError> {
    let normalized = normalize_for_domain(input, opts.keep_www);

    let Some(resolved) = resolve_host(&normalized)? else {
        return Ok(None);
    };

    // A host without a registrable domain ("aloha", "co.uk", "127.0.0.1") yields nothing
    let Some(domain) = resolved.domain else {
        return Ok(None);
    };

    if opts.strip_subdomain {
        Ok(Some(domain))
    } else {
        Ok(Some(resolved.host))
    }
}

/// Extracts a domain from `input` as configured by `opts`.
///
/// Never fails: inputs without a parsable domain yield `None`.
///
/// # Examples
///
/// ```
/// use domain_extract::{domain_with, ParseOptions};
///
/// let opts = ParseOptions { keep_www: true, strip_subdomain: false };
/// assert_eq!(domain_with("www.xyz.com", &opts).as_deref(), Some("www.xyz.com"));
/// assert_eq!(domain_with("{}", &opts), None);
/// ```
pub fn domain_with(input: &str, opts: &ParseOptions) -> Option<String> {
    match parse_for_domain(input, opts) {
        Ok(domain) => domain,
        Err(e) => {
            debug!("No domain in {input:?}: {e}");
            None
        }
    }
}

/// Extracts the registrable domain, without any subdomain.
///
/// ```
/// assert_eq!(domain_extract::domain("http://abc.xyz.com").as_deref(), Some("xyz.com"));
/// assert_eq!(domain_extract::domain("http://aloha"), None);
/// ```
pub fn domain(input: &str) -> Option<String> {
    domain_with(input, &ParseOptions::default())
}

/// Extracts the full host, removing a leading "www." label.
///
/// ```
/// assert_eq!(domain_extract::subdomain("http://www.xyz.com").as_deref(), Some("xyz.com"));
/// assert_eq!(domain_extract::subdomain("http://abc.xyz.com").as_deref(), Some("abc.xyz.com"));
/// ```
pub fn subdomain(input: &str) -> Option<String> {
    subdomain_with(input, false)
}

/// Extracts the full host, keeping a leading "www." label only if `keep_www` is set.
pub fn subdomain_with(input: &str, keep_www: bool) -> Option<String> {
    domain_with(
        input,
        &ParseOptions {
            keep_www,
            strip_subdomain: false,
        },
    )
}

/// Extracts the full host including any "www." label.
pub fn subdomain_www(input: &str) -> Option<String> {
    subdomain_with(input, true)
}

/// Convenience entry point: the full host by default, the registrable domain when
/// `opts.domain` is set, with "www." kept when `opts.www` is set.
///
/// # Examples
///
/// ```
/// use domain_extract::{extract, ExtractOptions};
///
/// assert_eq!(extract("http://abc.google.com", ExtractOptions::default()).as_deref(), Some("abc.google.com"));
///
/// let opts = ExtractOptions { domain: true, ..Default::default() };
/// assert_eq!(extract("http://abc.google.com", opts).as_deref(), Some("google.com"));
/// ```
pub fn extract(input: &str, opts: ExtractOptions) -> Option<String> {
    domain_with(input, &opts.into())
}
