//! Component extraction: scheme, path and query values.
//!
//! These accessors read the input verbatim (no trimming, no scheme injection)
//! as an RFC 3986 URI reference, using `fluent_uri`. A reference does not need
//! a scheme, so `abc.com/path` parses as a single relative path. Only `path`
//! consults the domain extractor, to strip a host that ended up at the front of
//! such a path.

use std::collections::HashMap;

use fluent_uri::Uri;
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use url::form_urlencoded;

use crate::domain::{domain, subdomain, subdomain_www};
use crate::error_handling::ParseError;

/// A component that can be extracted from an input string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Registrable domain (`domain`)
    Domain,
    /// Full host without a leading "www." (`subdomain`)
    Subdomain,
    /// Full host as written (`subdomain_www`)
    SubdomainWww,
    /// Scheme (`scheme`)
    Scheme,
    /// Path with the host removed (`path`)
    Path,
    /// Decoded query map (`query_values`)
    Query,
}

/// The value extracted for a [`Component`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// A domain or host name
    Domain(String),
    /// A scheme
    Scheme(String),
    /// A path
    Path(String),
    /// Decoded query parameters, last value wins per key
    Query(HashMap<String, String>),
}

impl ParseResult {
    /// The string value, for every variant except `Query`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParseResult::Domain(s) | ParseResult::Scheme(s) | ParseResult::Path(s) => Some(s),
            ParseResult::Query(_) => None,
        }
    }

    /// The query map, if this is a `Query` result.
    pub fn into_query(self) -> Option<HashMap<String, String>> {
        match self {
            ParseResult::Query(values) => Some(values),
            _ => None,
        }
    }
}

fn parse_reference(input: &str) -> Result<Uri<&str>, ParseError> {
    Ok(Uri::parse(input)?)
}

fn reference_or_none(input: &str) -> Option<Uri<&str>> {
    match parse_reference(input) {
        Ok(reference) => Some(reference),
        Err(e) => {
            debug!("Unparsable input {input:?}: {e}");
            None
        }
    }
}

/// Extracts the scheme as written.
///
/// Works without a valid domain; returns `None` when the input has no scheme or
/// is not a valid URI reference (e.g. a host with a space or braces in it).
///
/// ```
/// assert_eq!(domain_extract::scheme("http://aloha").as_deref(), Some("http"));
/// assert_eq!(domain_extract::scheme("mailto:").as_deref(), Some("mailto"));
/// assert_eq!(domain_extract::scheme("::::::::::"), None);
/// assert_eq!(domain_extract::scheme("http://{}"), None);
/// ```
pub fn scheme(input: &str) -> Option<String> {
    let reference = reference_or_none(input)?;
    reference.scheme().map(|s| s.as_str().to_string())
}

/// Extracts the path with any leading host removed.
///
/// A scheme-less input such as `www.name.com/custom/path` parses as a bare path,
/// so the host (as returned by [`subdomain_www`]) is stripped when it is an exact
/// prefix. Inputs without a parsable domain return the raw path, which may be
/// empty.
///
/// The input is not trimmed, unlike the host lookup: `" www.name.com/x"` is not
/// a valid URI reference, so it yields `None` here even though [`domain`]
/// accepts it.
///
/// ```
/// assert_eq!(domain_extract::path("www.name.com/custom/path").as_deref(), Some("/custom/path"));
/// assert_eq!(domain_extract::path("http://aloha").as_deref(), Some(""));
/// ```
pub fn path(input: &str) -> Option<String> {
    let reference = reference_or_none(input)?;
    let raw = reference.path().as_str();

    let stripped = match subdomain_www(input) {
        Some(host) => raw.strip_prefix(host.as_str()).unwrap_or(raw),
        None => raw,
    };

    Some(stripped.to_string())
}

/// Extracts the decoded query parameters.
///
/// Returns `None` if the input cannot be parsed or has no query. Duplicate keys
/// keep their last value.
///
/// ```
/// let values = domain_extract::query_values("http://aloha?&=").unwrap();
/// assert_eq!(values.get(""), Some(&String::new()));
/// ```
pub fn query_values(input: &str) -> Option<HashMap<String, String>> {
    let reference = reference_or_none(input)?;
    let query = reference.query()?.as_str();
    Some(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
}

/// Extracts `component` from `input`.
///
/// # Examples
///
/// ```
/// use domain_extract::{parse_component, Component, ParseResult};
///
/// assert_eq!(
///     parse_component("http://abc.xyz.com", Component::Domain),
///     Some(ParseResult::Domain("xyz.com".to_string()))
/// );
/// assert_eq!(parse_component("::::::::::", Component::Scheme), None);
/// ```
pub fn parse_component(input: &str, component: Component) -> Option<ParseResult> {
    match component {
        Component::Domain => domain(input).map(ParseResult::Domain),
        Component::Subdomain => subdomain(input).map(ParseResult::Domain),
        Component::SubdomainWww => subdomain_www(input).map(ParseResult::Domain),
        Component::Scheme => scheme(input).map(ParseResult::Scheme),
        Component::Path => path(input).map(ParseResult::Path),
        Component::Query => query_values(input).map(ParseResult::Query),
    }
}
