//! Error types for command generation.
//!
//! # Design
//! Generation either yields a complete command string or fails — there is no
//! partial output. Only two things can go wrong: a body that cannot be
//! turned into text, and a request that does not carry enough information
//! to name its own host. Multipart bodies are deliberately not an error;
//! they are skipped (see [`crate::generate`]).

use std::fmt;

/// Errors returned by [`crate::generate`].
#[derive(Debug)]
pub enum CurlError {
    /// The request declares an entity body that cannot be materialized into
    /// a string (e.g. binary content that is not valid UTF-8).
    UnreadableBody(String),

    /// The request's host cannot be determined: the target is relative and
    /// neither a `Host` header nor a usable original request is present.
    /// Surfaced as a hard failure — silently guessing could mask a
    /// scheme downgrade.
    UnsupportedRequest(String),
}

impl fmt::Display for CurlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurlError::UnreadableBody(msg) => {
                write!(f, "failed to read request body: {msg}")
            }
            CurlError::UnsupportedRequest(msg) => {
                write!(f, "unsupported request: {msg}")
            }
        }
    }
}

impl std::error::Error for CurlError {}
