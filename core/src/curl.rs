//! Translation of an HTTP request into an equivalent curl invocation.
//!
//! # Design
//! Single pass, stateless: the request is inspected once and an ordered
//! token list is built up, then joined with spaces. Every token that can
//! carry arbitrary bytes goes through [`shell::escape`]; the method token
//! never does, since [`Method`] is a closed shell-safe set. Safe to call
//! concurrently on independent requests.

use url::Url;

use crate::error::CurlError;
use crate::http::{Body, Method, Request};
use crate::shell::{self, Mode};

/// Content types whose bodies are emitted with `--data`; everything else
/// that yields text is emitted with `--data-binary`.
const NON_BINARY_CONTENT_TYPES: &[&str] =
    &["application/x-www-form-urlencoded", "application/json"];

/// Generate a curl command line reproducing `request`, quoted for `mode`.
///
/// The command reproduces the request byte-for-byte where curl allows it:
/// URL, method, headers in their original order, and the entity body.
/// `Content-Length` is dropped once a data token is emitted because curl
/// recomputes it; `--compressed` is always appended to match the transparent
/// response decompression of the client libraries being reproduced.
///
/// When the target is missing scheme and host, both are inferred: host from
/// the `Host` header or the original request's URI, scheme `https` when the
/// host ends in `:443` or the original request was https. The original-
/// request rule is best-effort — a redirect chain that left https makes it
/// guess wrong.
///
/// Multipart bodies are not translated; the body is omitted from the
/// command and a notice is logged.
pub fn generate(request: &Request, mode: Mode) -> Result<String, CurlError> {
    let mut command = vec!["curl".to_string()];

    let url = infer_url(request)?;
    command.push(escape_curl_globbing(&shell::escape(&url, mode)));

    let content_type = request.header_value("Content-Type");
    let body_text = read_body(request, content_type)?;

    let mut inferred_method = Method::Get;
    let mut data = Vec::new();
    let mut suppressed_headers: &[&str] = &[];

    if let Some(text) = body_text {
        let flag = match content_type {
            Some(ct) if is_non_binary(ct) => "--data",
            _ => "--data-binary",
        };
        data.push(flag.to_string());
        data.push(shell::escape(&text, mode));
        // curl recomputes the length from the data token.
        suppressed_headers = &["Content-Length"];
        inferred_method = Method::Post;
    }

    if request.method != inferred_method {
        command.push("-X".to_string());
        command.push(request.method.as_str().to_string());
    }

    for (name, value) in &request.headers {
        if suppressed_headers.iter().any(|s| s.eq_ignore_ascii_case(name)) {
            continue;
        }
        command.push("-H".to_string());
        command.push(shell::escape(&format!("{name}: {value}"), mode));
    }

    command.extend(data);
    command.push("--compressed".to_string());
    Ok(command.join(" "))
}

fn is_non_binary(content_type: &str) -> bool {
    NON_BINARY_CONTENT_TYPES
        .iter()
        .any(|ct| ct.eq_ignore_ascii_case(content_type))
}

fn is_multipart(content_type: &str) -> bool {
    content_type
        .get(.."multipart/form-data".len())
        .is_some_and(|p| p.eq_ignore_ascii_case("multipart/form-data"))
}

/// Materialize the entity body as text, if there is one to emit.
///
/// `Ok(None)` covers three distinct cases: no body at all, a multipart body
/// (carried but not translated), and a body with no `Content-Type` header
/// (nothing to classify it by, so nothing is emitted rather than guessing).
fn read_body(request: &Request, content_type: Option<&str>) -> Result<Option<String>, CurlError> {
    let Some(body) = &request.body else {
        return Ok(None);
    };
    let Some(content_type) = content_type else {
        log::debug!(target: "curl", "request body has no Content-Type header; omitting body");
        return Ok(None);
    };
    match body {
        Body::Multipart(_) => {
            log::debug!(target: "curl", "multipart bodies are not translated; omitting body");
            Ok(None)
        }
        _ if is_multipart(content_type) => {
            log::debug!(target: "curl", "multipart bodies are not translated; omitting body");
            Ok(None)
        }
        Body::Text(text) => Ok(Some(text.clone())),
        Body::Binary(bytes) => String::from_utf8(bytes.clone())
            .map(Some)
            .map_err(|e| CurlError::UnreadableBody(e.to_string())),
    }
}

/// Target parses as a URL with an authority. Parsing alone is not enough:
/// `host:port` and anything else of the shape `word:rest` is a syntactically
/// valid URL with `word` as its scheme.
fn is_absolute_url(target: &str) -> bool {
    Url::parse(target).map(|u| u.has_host()).unwrap_or(false)
}

fn infer_url(request: &Request) -> Result<String, CurlError> {
    if is_absolute_url(&request.target) {
        return Ok(request.target.clone());
    }

    // Missing scheme and host.
    let host = match request.header_value("Host") {
        Some(host) => host.to_string(),
        None => original_host(request)?,
    };

    let mut scheme = "http";
    if host.ends_with(":443") {
        scheme = "https";
    } else if let Some(original) = &request.original {
        if original.target.starts_with("https") {
            // Taken from the pre-redirect request; a chain that left https
            // makes this guess wrong.
            scheme = "https";
        }
    }

    if request.method == Method::Connect {
        Ok(format!("{scheme}://{host}"))
    } else {
        Ok(collapse_double_slashes(&format!(
            "{scheme}://{host}/{}",
            request.target
        )))
    }
}

/// Host of the request as it was before the client library rewrote it.
fn original_host(request: &Request) -> Result<String, CurlError> {
    let original = request.original.as_deref().ok_or_else(|| {
        CurlError::UnsupportedRequest(
            "relative target with no Host header and no original request".to_string(),
        )
    })?;
    let url = Url::parse(&original.target).map_err(|e| {
        CurlError::UnsupportedRequest(format!(
            "original request target {:?} is not an absolute URL: {e}",
            original.target
        ))
    })?;
    url.host_str().map(str::to_string).ok_or_else(|| {
        CurlError::UnsupportedRequest(format!(
            "original request target {:?} has no host",
            original.target
        ))
    })
}

/// Collapse `//` into `/` everywhere except the `http://` / `https://`
/// scheme separator.
fn collapse_double_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '/'
            && out.ends_with('/')
            && !out.ends_with("http:/")
            && !out.ends_with("https:/")
        {
            continue;
        }
        out.push(c);
    }
    out
}

/// Backslash-prefix the characters curl's URL globbing assigns meaning to.
/// Applied to the already-quoted URL token; quoting alone does not stop
/// curl from interpreting `{}`/`[]` ranges.
fn escape_curl_globbing(escaped_url: &str) -> String {
    let mut out = String::with_capacity(escaped_url.len());
    for c in escaped_url.chars() {
        if matches!(c, '{' | '}' | '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
