//! vCard tokenization error types.

use std::fmt;

/// Result type for vCard tokenization.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error raised while tokenizing vCard text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based, after unfolding).
    pub line: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// A record that was opened and never closed.
    #[must_use]
    pub fn unterminated(line: usize, component: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof,
            line,
            format!("{component} not closed with END:{component}"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended inside a record.
    UnexpectedEof,
    /// Content line without a `:` or with an illegal name.
    InvalidPropertyName,
    /// Malformed parameter list.
    InvalidParameter,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
        }
    }
}
