//! Line unfolding and content-line lexing.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::vobject::core::names;

/// Unfolds vCard text by removing line continuations.
///
/// A continuation is CRLF (or a bare LF) followed by a single space or tab;
/// both the line break and that one whitespace character are dropped.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let line_break = match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                true
            }
            '\n' => true,
            _ => false,
        };

        if !line_break {
            result.push(c);
        } else if matches!(chars.peek(), Some(' ' | '\t')) {
            chars.next();
        } else {
            result.push('\n');
        }
    }

    result
}

/// Splits unfolded text into logical lines, dropping blank ones.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

/// A property parameter: `NAME=value`, or a bare `NAME` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// As written; parameter names keep their case.
    pub name: String,
    pub value: Option<String>,
}

impl Param {
    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// A lexed content line before value decoding.
#[derive(Debug, Clone)]
pub struct ContentLine {
    pub group: Option<String>,
    /// Property name, uppercased.
    pub name: String,
    pub params: Vec<Param>,
    /// Raw value text.
    pub value: String,
}

impl ContentLine {
    /// True when the value is quoted-printable, either as a bare marker or
    /// through `ENCODING=QUOTED-PRINTABLE`.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.params.iter().any(|p| match &p.value {
            None => p.is(names::QUOTED_PRINTABLE),
            Some(v) => p.is(names::ENCODING) && v.eq_ignore_ascii_case(names::QUOTED_PRINTABLE),
        })
    }
}

/// Lexes a single content line.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// ## Errors
/// Returns an error if the line has no `:` separator, the property name is
/// empty or contains characters other than ASCII alphanumerics, `-` and `_`,
/// or a parameter has an empty name.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let (head, value) = (&line[..colon_pos], &line[colon_pos + 1..]);
    let (group, head) = parse_group(head);

    let (name, params_str) = match head.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (head, None),
    };

    if !is_valid_name(name) {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = match params_str {
        Some(s) => parse_parameters(s, line_num)?,
        None => Vec::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Finds the first `:` outside a quoted parameter value.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some((group, rest)) = s.split_once('.')
        && is_valid_name(group)
    {
        return (Some(group), rest);
    }
    (None, s)
}

fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<Param>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.extend(param);
        remaining = rest;
    }

    Ok(params)
}

/// Lexes one parameter. Empty segments (`;;`) yield `None`.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(Option<Param>, &str)> {
    let stop = s.find(['=', ';']).unwrap_or(s.len());
    let name = s[..stop].trim();

    match s[stop..].chars().next() {
        Some('=') => {
            if name.is_empty() {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidParameter,
                    line_num,
                    "empty parameter name",
                ));
            }
            let (value, rest) = parse_param_value(&s[stop + 1..]);
            let param = Param {
                name: name.to_string(),
                value: Some(value),
            };
            Ok((Some(param), rest))
        }
        Some(_) => Ok((marker(name), &s[stop + 1..])),
        None => Ok((marker(name), "")),
    }
}

fn marker(name: &str) -> Option<Param> {
    (!name.is_empty()).then(|| Param {
        name: name.to_string(),
        value: None,
    })
}

/// Lexes a parameter value up to the next unquoted `;`.
///
/// Quotes are stripped and RFC 6868 caret escapes decoded. Commas are
/// literal; multi-valued parameters stay a single string.
fn parse_param_value(s: &str) -> (String, &str) {
    let mut value = String::new();
    let mut in_quotes = false;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => return (value, &s[i + 1..]),
            '^' => match chars.peek().map(|&(_, next)| next) {
                Some('n') => {
                    chars.next();
                    value.push('\n');
                }
                Some('\'') => {
                    chars.next();
                    value.push('"');
                }
                Some('^') => {
                    chars.next();
                    value.push('^');
                }
                _ => value.push('^'),
            },
            _ => value.push(c),
        }
    }

    (value, "")
}
