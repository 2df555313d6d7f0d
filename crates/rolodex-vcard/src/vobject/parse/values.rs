//! Transfer decoding and structured-value splitting.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::lexer::Param;
use crate::vobject::core::names;

/// Transfer encoding declared on a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferEncoding {
    #[default]
    Identity,
    QuotedPrintable,
    Base64,
}

impl TransferEncoding {
    fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(names::QUOTED_PRINTABLE) {
            Self::QuotedPrintable
        } else if label.eq_ignore_ascii_case(names::BASE64)
            || label.eq_ignore_ascii_case(names::BASE64_SHORT)
        {
            Self::Base64
        } else {
            Self::Identity
        }
    }

    /// Recognizes a transfer parameter: an `ENCODING=` value or a bare
    /// encoding marker. Returns `None` for any other parameter.
    #[must_use]
    pub fn from_param(param: &Param) -> Option<Self> {
        match &param.value {
            Some(value) if param.name.eq_ignore_ascii_case(names::ENCODING) => {
                Some(Self::from_label(value))
            }
            None => match Self::from_label(&param.name) {
                Self::Identity => None,
                encoding => Some(encoding),
            },
            Some(_) => None,
        }
    }
}

const HEX_DECODE: [i8; 256] = {
    let mut t = [-1i8; 256];
    let mut i = 0u8;
    while i < 10 {
        t[(b'0' + i) as usize] = i.cast_signed();
        i += 1;
    }
    let mut i = 0u8;
    while i < 6 {
        t[(b'A' + i) as usize] = (10 + i).cast_signed();
        t[(b'a' + i) as usize] = (10 + i).cast_signed();
        i += 1;
    }
    t
};

fn hex_value(b: u8) -> Option<u8> {
    u8::try_from(HEX_DECODE[usize::from(b)]).ok()
}

/// Decodes quoted-printable text.
///
/// Soft line breaks have already been joined by the parser, so a `=` that
/// does not start a valid `=XX` escape is kept literally.
#[must_use]
pub fn decode_quoted_printable(input: &str) -> Vec<u8> {
    let src = input.as_bytes();
    let mut out = Vec::with_capacity(src.len());
    let mut pos = 0;

    while pos < src.len() {
        let b = src[pos];
        if b == b'='
            && let Some(&[hi, lo]) = src.get(pos + 1..pos + 3)
            && let (Some(hi), Some(lo)) = (hex_value(hi), hex_value(lo))
        {
            out.push((hi << 4) | lo);
            pos += 3;
            continue;
        }
        out.push(b);
        pos += 1;
    }

    out
}

/// Decodes a base64 payload, ignoring embedded whitespace left over from
/// folding. Returns `None` if the payload is not valid base64.
#[must_use]
pub fn decode_base64(input: &str) -> Option<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact).ok()
}

/// Splits a structured value on unescaped `;`.
///
/// `\;` and `\\` are unescaped; any other backslash is literal.
#[must_use]
pub fn split_structured(value: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next @ (';' | '\\')) => {
                    chars.next();
                    current.push(next);
                }
                _ => current.push('\\'),
            },
            ';' => components.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    components.push(current);

    components
}
