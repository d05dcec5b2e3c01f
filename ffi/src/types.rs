//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Input types mirror the core request model with C-compatible
//! representations: `*const c_char` instead of `String`, pointer + length
//! instead of `Vec`, tagged enums with explicit discriminants. The caller
//! owns every input pointer; the library only reads them. Output lives in
//! a single heap-allocated result envelope released through
//! `http2curl_free_result`. Conversion helpers live here to keep `lib.rs`
//! focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use http2curl_core::{CurlError, Method, Mode};

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiMethod {
    Get = 0,
    Head = 1,
    Post = 2,
    Put = 3,
    Delete = 4,
    Connect = 5,
    Options = 6,
    Trace = 7,
    Patch = 8,
}

impl FfiMethod {
    pub(crate) fn to_core(&self) -> Method {
        match self {
            FfiMethod::Get => Method::Get,
            FfiMethod::Head => Method::Head,
            FfiMethod::Post => Method::Post,
            FfiMethod::Put => Method::Put,
            FfiMethod::Delete => Method::Delete,
            FfiMethod::Connect => Method::Connect,
            FfiMethod::Options => Method::Options,
            FfiMethod::Trace => Method::Trace,
            FfiMethod::Patch => Method::Patch,
        }
    }
}

/// Shell quoting dialect as a C enum.
#[repr(C)]
pub enum FfiShellMode {
    Posix = 0,
    Windows = 1,
}

impl FfiShellMode {
    pub(crate) fn to_core(&self) -> Mode {
        match self {
            FfiShellMode::Posix => Mode::Posix,
            FfiShellMode::Windows => Mode::Windows,
        }
    }
}

/// A single HTTP header as a name/value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub name: *const c_char,
    pub value: *const c_char,
}

/// Discriminates the `body`/`body_len` fields of `FfiRequest`.
///
/// Multipart bodies are not exposed over FFI; they are not translated by
/// the core either.
#[repr(C)]
pub enum FfiBodyTag {
    None = 0,
    Text = 1,
    Binary = 2,
}

/// An HTTP request described as C-compatible plain data.
///
/// The caller constructs this (typically on the stack) and keeps every
/// pointed-to buffer alive for the duration of the `http2curl_generate`
/// call. `original` optionally links to the pre-redirect request the same
/// way the core model does.
#[repr(C)]
pub struct FfiRequest {
    pub method: FfiMethod,
    pub target: *const c_char,
    pub headers: *const FfiHeader,
    pub headers_len: u32,
    pub body_tag: FfiBodyTag,
    pub body: *const u8,
    pub body_len: u32,
    pub original: *const FfiRequest,
}

/// Error codes returned in `FfiCurlResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    UnreadableBody = 1,
    UnsupportedRequest = 2,
    InvalidArgument = 3,
    Panic = 4,
}

/// Result envelope for command generation.
///
/// On success `error_code` is `Ok`, `command` is the generated command line
/// and `error_message` is null; on failure `error_code` describes the
/// category, `error_message` is a human-readable C string and `command` is
/// null. Release with `http2curl_free_result`.
#[repr(C)]
pub struct FfiCurlResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub command: *mut c_char,
}

impl FfiCurlResult {
    pub(crate) fn ok(command: String) -> *mut Self {
        // NUL can reach here: the Windows escaper passes it through
        // literally, and a C string cannot carry it.
        let command = match CString::new(command) {
            Ok(command) => command,
            Err(_) => {
                return Self::invalid_argument("generated command contains an interior NUL byte")
            }
        };
        let result = Box::new(FfiCurlResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            command: command.into_raw(),
        });
        Box::into_raw(result)
    }

    pub(crate) fn from_error(err: CurlError) -> *mut Self {
        let error_code = match &err {
            CurlError::UnreadableBody(_) => FfiErrorCode::UnreadableBody,
            CurlError::UnsupportedRequest(_) => FfiErrorCode::UnsupportedRequest,
        };
        let result = Box::new(FfiCurlResult {
            error_code,
            error_message: CString::new(err.to_string()).unwrap().into_raw(),
            command: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    pub(crate) fn invalid_argument(msg: &str) -> *mut Self {
        let result = Box::new(FfiCurlResult {
            error_code: FfiErrorCode::InvalidArgument,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            command: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiCurlResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            command: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
