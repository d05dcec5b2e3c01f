//! Logging hook around command generation.
//!
//! # Design
//! `CurlLogger` is what a request interceptor plugs into: after (or just
//! before) a request goes out, it is handed here and the equivalent curl
//! command is emitted through the `log` facade on the `"curl"` target.
//! Which backend renders the record is the embedding application's choice.

use std::backtrace::Backtrace;

use log::Level;

use crate::curl::generate;
use crate::error::CurlError;
use crate::http::Request;
use crate::shell::Mode;

/// Emits the curl equivalent of a request to the `"curl"` log target.
#[derive(Debug)]
pub struct CurlLogger {
    level: Level,
    log_stacktrace: bool,
    mode: Mode,
}

/// Configures a [`CurlLogger`]. Defaults: `Debug` level, no stack trace,
/// the host shell dialect.
#[derive(Debug)]
pub struct CurlLoggerBuilder {
    level: Level,
    log_stacktrace: bool,
    mode: Mode,
}

impl CurlLoggerBuilder {
    /// Severity of the emitted records.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Append a backtrace of the call site to each record, so the test that
    /// issued the request can be located.
    pub fn log_stacktrace(mut self) -> Self {
        self.log_stacktrace = true;
        self
    }

    /// Quote commands for `mode` instead of the host shell dialect.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> CurlLogger {
        CurlLogger {
            level: self.level,
            log_stacktrace: self.log_stacktrace,
            mode: self.mode,
        }
    }
}

impl CurlLogger {
    pub fn builder() -> CurlLoggerBuilder {
        CurlLoggerBuilder {
            level: Level::Debug,
            log_stacktrace: false,
            mode: Mode::host(),
        }
    }

    /// Generate the command for `request` and emit it as one log record.
    pub fn log(&self, request: &Request) -> Result<(), CurlError> {
        let message = self.message(request)?;
        log::log!(target: "curl", self.level, "{message}");
        Ok(())
    }

    fn message(&self, request: &Request) -> Result<String, CurlError> {
        let command = generate(request, self.mode)?;
        if self.log_stacktrace {
            Ok(format!(
                "{command}\n  generated at:\n{}",
                Backtrace::force_capture()
            ))
        } else {
            Ok(command)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    #[test]
    fn message_is_the_bare_command_by_default() {
        let logger = CurlLogger::builder().mode(Mode::Posix).build();
        let req = Request::new(Method::Get, "http://localhost:9999/");
        let msg = logger.message(&req).unwrap();
        assert_eq!(msg, "curl 'http://localhost:9999/' --compressed");
    }

    #[test]
    fn stacktrace_is_appended_when_enabled() {
        let logger = CurlLogger::builder().mode(Mode::Posix).log_stacktrace().build();
        let req = Request::new(Method::Get, "http://localhost:9999/");
        let msg = logger.message(&req).unwrap();
        assert!(msg.starts_with("curl "));
        assert!(msg.contains("generated at:"));
    }

    #[test]
    fn generation_errors_propagate() {
        let logger = CurlLogger::builder().mode(Mode::Posix).build();
        let req = Request::new(Method::Get, "/no-host");
        assert!(logger.log(&req).is_err());
    }

    #[test]
    fn level_is_configurable() {
        let logger = CurlLogger::builder().level(Level::Info).mode(Mode::Posix).build();
        let req = Request::new(Method::Get, "http://localhost:9999/");
        // Emission goes through the global facade; here we only check the
        // call succeeds at a non-default level.
        assert!(logger.log(&req).is_ok());
    }
}
