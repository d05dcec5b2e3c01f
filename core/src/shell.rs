//! Shell-safe string escaping for two incompatible quoting dialects.
//!
//! # Design
//! `escape` is a total, pure function: any string in, one quoted token out,
//! safe to paste into a command line for the chosen dialect. The dialect is
//! an explicit parameter rather than a process-wide probe so both can be
//! exercised in the same test run; callers that want the host dialect
//! resolve it once with [`Mode::host`].

/// Shell quoting dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// POSIX shells: single quotes, ANSI-C `$'...'` for anything unprintable.
    Posix,
    /// `cmd.exe`: double quotes, doubled quotes, neutralized `%`.
    Windows,
}

impl Mode {
    /// Dialect of the operating system this process runs on.
    pub fn host() -> Self {
        if cfg!(windows) {
            Mode::Windows
        } else {
            Mode::Posix
        }
    }
}

/// Quote `raw` as a single command-line token for the given dialect.
pub fn escape(raw: &str, mode: Mode) -> String {
    match mode {
        Mode::Posix => escape_posix(raw),
        Mode::Windows => escape_windows(raw),
    }
}

/// Printable ASCII with no single quote can sit verbatim inside `'...'`.
fn is_plain_posix(s: &str) -> bool {
    s.chars().all(|c| ('\x20'..='\x7e').contains(&c) && c != '\'')
}

fn escape_posix(s: &str) -> String {
    if is_plain_posix(s) {
        return format!("'{s}'");
    }
    // ANSI-C quoting. Backslash, quote, newline and carriage return keep
    // their mnemonic escapes; everything else becomes a fixed-width hex
    // escape so the result is unambiguous regardless of locale.
    let mut out = String::with_capacity(s.len() * 4 + 3);
    out.push_str("$'");
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => push_hex_escape(&mut out, c),
        }
    }
    out.push('\'');
    out
}

fn push_hex_escape(out: &mut String, c: char) {
    let code = c as u32;
    if code < 0x100 {
        out.push_str(&format!("\\x{code:02x}"));
    } else if code < 0x1_0000 {
        out.push_str(&format!("\\u{code:04x}"));
    } else {
        out.push_str(&format!("\\U{code:08x}"));
    }
}

/// Quote for `cmd.exe` / the MS C runtime argument parser.
///
/// Quotes are doubled (recognized by both), `%` is wrapped in its own pair
/// of quotes so the shell cannot expand environment variables, backslashes
/// pass through untouched, and runs of line terminators are re-quoted
/// around a caret escape since cmd.exe rejects literal newlines inside a
/// quoted argument.
fn escape_windows(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\"\""),
            '%' => out.push_str("\"%\""),
            '\r' | '\n' => {
                out.push_str("\"^");
                out.push(c);
                while matches!(chars.peek(), Some('\r' | '\n')) {
                    out.push(chars.next().unwrap());
                }
                out.push('"');
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
