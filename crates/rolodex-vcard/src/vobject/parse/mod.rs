//! vCard text parsing.
//!
//! ## Features
//!
//! - Line unfolding (CRLF or LF followed by whitespace)
//! - Property groups (`item1.TEL`)
//! - Bare marker parameters (`TEL;HOME;VOICE`)
//! - QUOTED-PRINTABLE (with soft line breaks) and BASE64 payloads
//! - Structured `N`, `ADR` and `ORG` values split into component nodes

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, Param, parse_content_line, split_lines, unfold};
pub use parser::parse;
pub use values::{TransferEncoding, decode_base64, decode_quoted_printable, split_structured};
