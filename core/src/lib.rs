//! Curl command generation for captured HTTP requests.
//!
//! # Overview
//! Turns a fully-formed HTTP request — method, target, headers, body — into
//! an equivalent `curl` invocation a developer can paste into a shell,
//! reproducing the request byte-for-byte where curl allows it. Built for
//! debugging: test code logs the command for every request it sends.
//!
//! # Design
//! - The request is plain data ([`Request`]); the caller adapts its HTTP
//!   client's request type, the core never touches the network.
//! - [`generate`] is a single-pass, stateless transform; safe to call from
//!   any number of threads on independent requests.
//! - Shell quoting ([`shell::escape`]) targets an explicit dialect
//!   ([`Mode`]), POSIX or Windows `cmd.exe`, so both are testable in one
//!   process.
//! - [`CurlLogger`] wraps `generate` for use from a request interceptor,
//!   emitting through the `log` facade.

pub mod curl;
pub mod error;
pub mod http;
pub mod logger;
pub mod shell;

pub use curl::generate;
pub use error::CurlError;
pub use http::{Body, Method, MultipartPart, Request};
pub use logger::{CurlLogger, CurlLoggerBuilder};
pub use shell::{escape, Mode};
