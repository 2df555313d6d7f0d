//! Value escaping and quoted-printable encoding.

use std::fmt::Write as _;

/// Escapes one component of a structured value.
///
/// Only the separator and the escape character itself are special.
#[must_use]
pub fn escape_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a parameter value with RFC 6868 caret encoding.
///
/// Returns `(value, needs_quotes)`.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => {
                result.push_str("^'");
                needs_quotes = true;
            }
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_control() => {}
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}

/// True when a text value cannot be written on a single content line.
#[must_use]
pub fn needs_quoted_printable(s: &str) -> bool {
    s.chars().any(|c| c.is_control() && c != '\t')
}

/// Encodes octets as quoted-printable without soft line breaks.
///
/// Printable ASCII other than `=` is kept, as are spaces and tabs that are
/// not at the end of the value.
#[must_use]
pub fn encode_quoted_printable(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());

    for (i, &b) in data.iter().enumerate() {
        let last = i + 1 == data.len();
        match b {
            b'=' => out.push_str("=3D"),
            b' ' | b'\t' if !last => out.push(char::from(b)),
            b'!'..=b'~' => out.push(char::from(b)),
            _ => {
                write!(out, "={b:02X}").ok();
            }
        }
    }

    out
}
