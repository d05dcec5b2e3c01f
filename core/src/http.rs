//! HTTP request model consumed by the translator.
//!
//! # Design
//! These types describe an already-built HTTP request as plain data. The
//! caller adapts whatever client library it uses into a `Request` and hands
//! it to [`crate::generate`]; the core never touches the network and never
//! inspects client-library internals. Bodies are structured up front
//! (text / binary / multipart parts) so no downstream code has to dig a
//! payload out of an opaque entity.
//!
//! All fields use owned types (`String`, `Vec`) so values can cross FFI
//! boundaries without lifetime concerns.

use serde::{Deserialize, Serialize};

/// HTTP method of a request.
///
/// A closed set: every variant renders to a token that is safe to place on a
/// command line unquoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
        }
    }
}

/// One part of a multipart form body.
///
/// Multipart bodies are carried but not yet translated into command tokens;
/// see [`crate::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartPart {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Entity body of a request, already materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Text(String),
    Binary(Vec<u8>),
    Multipart(Vec<MultipartPart>),
}

/// An HTTP request described as plain data.
///
/// `target` is the request-target as it appeared on the request line: either
/// an absolute URL or an origin-relative path (in which case the host is
/// recovered from the `Host` header or from `original`).
///
/// `original` links to the request as it was before a client library
/// rewrote it (redirect handling, proxying); the translator uses it to
/// recover the scheme and host the caller originally asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    pub target: String,
    /// Ordered name/value pairs; duplicates allowed, order preserved.
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub original: Option<Box<Request>>,
}

impl Request {
    /// Request with no headers, no body and no original, for building up.
    pub fn new(method: Method, target: &str) -> Self {
        Self {
            method,
            target: target.to_string(),
            headers: Vec::new(),
            body: None,
            original: None,
        }
    }

    /// First value of the named header, matched case-insensitively per HTTP
    /// semantics.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
