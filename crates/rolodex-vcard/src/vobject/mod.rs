//! vCard 2.1 attribute-node tree and its text codec.
//!
//! A record is an [`AttrNode`] named `VCARD` whose children are its
//! properties. Property parameters become child nodes of the property:
//! bare markers (`TEL;HOME;VOICE`) are valueless children, `NAME=value`
//! parameters are valued ones. The structured properties `N`, `ADR` and
//! `ORG` have no value of their own; their `;`-separated components are
//! split into named children (`F`, `G`, `STREET`, `ORGNAME`, ...).
//!
//! ```rust
//! use rolodex_vcard::vobject::{parse, serialize_single};
//!
//! let input = "BEGIN:VCARD\r\nN:Smith;Jon\r\nTEL;HOME:555-1234\r\nEND:VCARD\r\n";
//! let records = parse(input).unwrap();
//! let n = records[0].child("N").unwrap();
//! assert_eq!(n.child("G").and_then(|g| g.text_value()).as_deref(), Some("Jon"));
//!
//! let text = serialize_single(&records[0]);
//! assert!(text.contains("N:Smith;Jon"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - the node and value types, and well-known names
//! - [`parse`] - unfolding, content-line lexing, transfer decoding
//! - [`build`] - serialization, escaping and folding

pub mod build;
pub mod core;
pub mod parse;

pub use build::{serialize, serialize_single};
pub use core::{AttrNode, AttrValue, names};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse};
