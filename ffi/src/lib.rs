//! C-ABI wrapper around `http2curl-core`.
//!
//! # Overview
//! Exposes curl command generation through `extern "C"` functions so any
//! language with a C FFI can turn a captured HTTP request into a pasteable
//! command without linking Rust directly.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - The caller owns all input pointers and keeps them alive for the call;
//!   the library owns the returned result and releases it in
//!   `http2curl_free_result`.
//! - Invalid input (null pointers, non-UTF-8 strings) is reported through
//!   the result envelope, never by crashing.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use http2curl_core::{generate, Body, Request};

use types::*;

unsafe fn owned_string(ptr: *const c_char, what: &str) -> Result<String, String> {
    if ptr.is_null() {
        return Err(format!("null {what}"));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_string)
        .map_err(|e| format!("{what} is not valid UTF-8: {e}"))
}

unsafe fn body_bytes(request: &FfiRequest) -> Result<Vec<u8>, String> {
    if request.body_len == 0 {
        return Ok(Vec::new());
    }
    if request.body.is_null() {
        return Err("null body with nonzero body_len".to_string());
    }
    Ok(std::slice::from_raw_parts(request.body, request.body_len as usize).to_vec())
}

/// Convert a caller-provided `FfiRequest` (and its `original` chain) into
/// the core model.
unsafe fn request_from_ffi(request: &FfiRequest) -> Result<Request, String> {
    let target = owned_string(request.target, "target")?;

    let mut headers = Vec::with_capacity(request.headers_len as usize);
    if request.headers_len > 0 {
        if request.headers.is_null() {
            return Err("null headers with nonzero headers_len".to_string());
        }
        let slice = std::slice::from_raw_parts(request.headers, request.headers_len as usize);
        for header in slice {
            headers.push((
                owned_string(header.name, "header name")?,
                owned_string(header.value, "header value")?,
            ));
        }
    }

    let body = match request.body_tag {
        FfiBodyTag::None => None,
        FfiBodyTag::Text => {
            let bytes = body_bytes(request)?;
            let text =
                String::from_utf8(bytes).map_err(|e| format!("text body is not valid UTF-8: {e}"))?;
            Some(Body::Text(text))
        }
        FfiBodyTag::Binary => Some(Body::Binary(body_bytes(request)?)),
    };

    let original = if request.original.is_null() {
        None
    } else {
        Some(Box::new(request_from_ffi(&*request.original)?))
    };

    Ok(Request {
        method: request.method.to_core(),
        target,
        headers,
        body,
        original,
    })
}

/// Generate a curl command for `request`, quoted for `mode`.
///
/// Returns a result envelope the caller must release with
/// `http2curl_free_result`. Never returns null.
#[unsafe(no_mangle)]
pub extern "C" fn http2curl_generate(
    request: *const FfiRequest,
    mode: FfiShellMode,
) -> *mut FfiCurlResult {
    catch_unwind(|| {
        if request.is_null() {
            return FfiCurlResult::invalid_argument("null argument: request");
        }
        let request = match unsafe { request_from_ffi(&*request) } {
            Ok(request) => request,
            Err(msg) => return FfiCurlResult::invalid_argument(&msg),
        };
        match generate(&request, mode.to_core()) {
            Ok(command) => FfiCurlResult::ok(command),
            Err(err) => FfiCurlResult::from_error(err),
        }
    })
    .unwrap_or_else(|_| FfiCurlResult::panic("panic during command generation"))
}

/// Free a result returned by `http2curl_generate`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn http2curl_free_result(result: *mut FfiCurlResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.command.is_null() {
            drop(unsafe { CString::from_raw(result.command) });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    fn empty_request(method: FfiMethod, target: &CString) -> FfiRequest {
        FfiRequest {
            method,
            target: target.as_ptr(),
            headers: ptr::null(),
            headers_len: 0,
            body_tag: FfiBodyTag::None,
            body: ptr::null(),
            body_len: 0,
            original: ptr::null(),
        }
    }

    fn command_of(result: *mut FfiCurlResult) -> String {
        let result_ref = unsafe { &*result };
        assert!(matches!(result_ref.error_code, FfiErrorCode::Ok));
        assert!(result_ref.error_message.is_null());
        let command = unsafe { CStr::from_ptr(result_ref.command) }
            .to_str()
            .unwrap()
            .to_string();
        http2curl_free_result(result);
        command
    }

    #[test]
    fn generates_command_for_simple_get() {
        let target = CString::new("http://localhost:9999/").unwrap();
        let request = empty_request(FfiMethod::Get, &target);
        let command = command_of(http2curl_generate(&request, FfiShellMode::Posix));
        assert_eq!(command, "curl 'http://localhost:9999/' --compressed");
    }

    #[test]
    fn generates_post_with_header_and_text_body() {
        let target = CString::new("http://localhost:9999/items").unwrap();
        let name = CString::new("Content-Type").unwrap();
        let value = CString::new("application/json").unwrap();
        let headers = [FfiHeader {
            name: name.as_ptr(),
            value: value.as_ptr(),
        }];
        let body = br#"{"a":1}"#;
        let request = FfiRequest {
            method: FfiMethod::Post,
            target: target.as_ptr(),
            headers: headers.as_ptr(),
            headers_len: 1,
            body_tag: FfiBodyTag::Text,
            body: body.as_ptr(),
            body_len: body.len() as u32,
            original: ptr::null(),
        };
        let command = command_of(http2curl_generate(&request, FfiShellMode::Posix));
        assert_eq!(
            command,
            "curl 'http://localhost:9999/items' -H 'Content-Type: application/json' \
             --data '{\"a\":1}' --compressed"
        );
    }

    #[test]
    fn windows_mode_is_selectable() {
        let target = CString::new("http://localhost:9999/").unwrap();
        let request = empty_request(FfiMethod::Get, &target);
        let command = command_of(http2curl_generate(&request, FfiShellMode::Windows));
        assert_eq!(command, "curl \"http://localhost:9999/\" --compressed");
    }

    #[test]
    fn original_request_chain_is_followed() {
        let original_target = CString::new("https://example.com/start").unwrap();
        let original = empty_request(FfiMethod::Get, &original_target);

        let target = CString::new("/redirected").unwrap();
        let mut request = empty_request(FfiMethod::Get, &target);
        request.original = &original;

        let command = command_of(http2curl_generate(&request, FfiShellMode::Posix));
        assert_eq!(command, "curl 'https://example.com/redirected' --compressed");
    }

    #[test]
    fn null_request_reports_invalid_argument() {
        let result = http2curl_generate(ptr::null(), FfiShellMode::Posix);
        let result_ref = unsafe { &*result };
        assert!(matches!(result_ref.error_code, FfiErrorCode::InvalidArgument));
        assert!(result_ref.command.is_null());
        assert!(!result_ref.error_message.is_null());
        http2curl_free_result(result);
    }

    #[test]
    fn unsupported_request_surfaces_error_code_and_message() {
        let target = CString::new("/orphan").unwrap();
        let request = empty_request(FfiMethod::Get, &target);
        let result = http2curl_generate(&request, FfiShellMode::Posix);
        let result_ref = unsafe { &*result };
        assert!(matches!(result_ref.error_code, FfiErrorCode::UnsupportedRequest));
        let message = unsafe { CStr::from_ptr(result_ref.error_message) }.to_str().unwrap();
        assert!(message.contains("unsupported request"));
        http2curl_free_result(result);
    }

    #[test]
    fn nul_byte_in_windows_command_reports_invalid_argument() {
        // POSIX mode hex-escapes NUL, but the Windows escaper passes it
        // through literally, so the command cannot become a C string.
        let target = CString::new("http://localhost:9999/items").unwrap();
        let name = CString::new("Content-Type").unwrap();
        let value = CString::new("application/json").unwrap();
        let headers = [FfiHeader {
            name: name.as_ptr(),
            value: value.as_ptr(),
        }];
        let body = b"a\x00b";
        let request = FfiRequest {
            method: FfiMethod::Post,
            target: target.as_ptr(),
            headers: headers.as_ptr(),
            headers_len: 1,
            body_tag: FfiBodyTag::Text,
            body: body.as_ptr(),
            body_len: body.len() as u32,
            original: ptr::null(),
        };

        let result = http2curl_generate(&request, FfiShellMode::Windows);
        let result_ref = unsafe { &*result };
        assert!(matches!(result_ref.error_code, FfiErrorCode::InvalidArgument));
        assert!(result_ref.command.is_null());
        let message = unsafe { CStr::from_ptr(result_ref.error_message) }.to_str().unwrap();
        assert!(message.contains("NUL"));
        http2curl_free_result(result);

        // The same body in POSIX mode generates fine.
        let result = http2curl_generate(&request, FfiShellMode::Posix);
        let result_ref = unsafe { &*result };
        assert!(matches!(result_ref.error_code, FfiErrorCode::Ok));
        let command = unsafe { CStr::from_ptr(result_ref.command) }.to_str().unwrap();
        assert!(command.contains(r"\x00"), "{command}");
        http2curl_free_result(result);
    }

    #[test]
    fn free_result_accepts_null() {
        http2curl_free_result(ptr::null_mut());
    }
}
