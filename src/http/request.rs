//! Request URL and header composition.
//!
//! The pure core of the crate: deterministic assembly of a request URL from
//! a base path, a resource name, an optional sub-value and query parameters,
//! plus header/auth composition. No I/O happens here.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{RestError, Result};
use crate::http::auth::Auth;

/// Escape set for query keys and values: everything but unreserved characters.
/// Deliberately stricter than plain path escaping (`&`, `=` and `+` are
/// escaped too) so keys and values survive inside a query string unambiguously.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Headers every request starts from, before connection-level overrides.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[("Accept", "application/json")];

/// HTTP methods supported by the target API family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        write!(f, "{}", method)
    }
}

impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => Err(()),
        }
    }
}

/// A single query key/value pair.
///
/// Parameters are appended to the URL in the order given; duplicate keys are
/// allowed and all included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    pub key: String,
    pub value: String,
}

impl QueryParameter {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Collapse leading/trailing separators to exactly one leading `/`.
///
/// Returns `None` when the segment contains nothing but separators.
fn normalize_segment(segment: &str) -> Option<String> {
    let trimmed = segment.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

/// Build a fully-qualified request URL.
///
/// `base_full_path` is the connection's `scheme://host/path` prefix;
/// `resource` names the collection, `value` optionally addresses one entity
/// within it. Query parameters are percent-escaped independently and joined
/// in caller order.
pub fn build_url(
    base_full_path: &str,
    resource: &str,
    value: Option<&str>,
    params: &[QueryParameter],
) -> Result<String> {
    if resource.is_empty() || resource == "/" {
        return Err(RestError::InvalidResource(
            "resource name required".to_string(),
        ));
    }

    let resource = normalize_segment(resource).ok_or_else(|| {
        RestError::InvalidResource(format!("resource '{}' has no path segments", resource))
    })?;

    // A value of only separators addresses nothing; treat it as absent.
    let value = value.and_then(normalize_segment).unwrap_or_default();

    // A host-only base URL parses with path "/"; the normalized resource
    // already carries the separator.
    let base = base_full_path.trim_end_matches('/');

    let mut url = format!("{}{}{}", base, resource, value);

    if !params.is_empty() {
        url.push('?');
        let query = params
            .iter()
            .map(|p| {
                format!(
                    "{}={}",
                    utf8_percent_encode(&p.key, QUERY_ESCAPE),
                    utf8_percent_encode(&p.value, QUERY_ESCAPE)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.push_str(&query);
    }

    Ok(url)
}

/// Compose the final header set for an outgoing request.
///
/// Starts from `defaults`, overlays the connection's custom headers
/// (custom values win on a case-insensitive key match), then sets a single
/// `Authorization: Basic <credentials>` header. The credential header always
/// wins, so the result never carries two `Authorization` entries.
pub fn compose_headers(
    defaults: &[(&str, &str)],
    custom: &HashMap<String, String>,
    credentials: &str,
) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::with_capacity(defaults.len() + custom.len() + 1);

    for (key, value) in defaults {
        headers.push((key.to_string(), value.to_string()));
    }

    for (key, value) in custom {
        match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some(entry) => entry.1 = value.clone(),
            None => headers.push((key.clone(), value.clone())),
        }
    }

    let auth_value = Auth::header_value(credentials);
    match headers
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case("authorization"))
    {
        Some(entry) => entry.1 = auth_value,
        None => headers.push(("Authorization".to_string(), auth_value)),
    }

    headers
}
