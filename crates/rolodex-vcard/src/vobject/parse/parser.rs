//! vCard document parser.

use super::error::{ParseError, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use super::values::{TransferEncoding, decode_base64, decode_quoted_printable, split_structured};
use crate::vobject::core::{AttrNode, AttrValue, names};

/// Parses vCard text into one record node per `BEGIN:VCARD` block.
///
/// ## Summary
/// Text outside a record is ignored, as are nested `BEGIN`/`END` blocks
/// inside one. Property names are uppercased; parameter names keep their
/// case.
///
/// Content lines that cannot be lexed are logged and skipped; the rest of
/// the record still decodes.
///
/// ## Errors
/// Returns a parse error if a record is never closed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<AttrNode>> {
    tracing::debug!("Parsing vCard text");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let records = parser.parse_document()?;

    tracing::debug!(count = records.len(), "Parsed records");

    Ok(records)
}

struct Parser {
    lines: Vec<String>,
    pos: usize,
}

fn begin_of(line: &str) -> Option<&str> {
    line.split_once(':')
        .filter(|(tag, _)| tag.trim().eq_ignore_ascii_case("BEGIN"))
        .map(|(_, component)| component.trim())
}

/// A `BEGIN:` or `END:` line, which never continues a soft line break.
fn is_block_boundary(line: &str) -> bool {
    line.split_once(':').is_some_and(|(tag, _)| {
        let tag = tag.trim();
        tag.eq_ignore_ascii_case("BEGIN") || tag.eq_ignore_ascii_case("END")
    })
}

fn is_end_of(line: &str, component: &str) -> bool {
    line.split_once(':').is_some_and(|(tag, name)| {
        tag.trim().eq_ignore_ascii_case("END") && name.trim().eq_ignore_ascii_case(component)
    })
}

impl Parser {
    fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self) -> ParseResult<Vec<AttrNode>> {
        let mut records = Vec::new();

        while self.pos < self.lines.len() {
            let is_card = begin_of(&self.lines[self.pos])
                .is_some_and(|c| c.eq_ignore_ascii_case(names::VCARD));
            self.pos += 1;

            if is_card {
                records.push(self.parse_card()?);
            }
        }

        Ok(records)
    }

    fn parse_card(&mut self) -> ParseResult<AttrNode> {
        let start_line = self.current_line() - 1;
        let mut card = AttrNode::new(names::VCARD);

        while self.pos < self.lines.len() {
            let line_num = self.current_line();
            let line = self.lines[self.pos].clone();
            self.pos += 1;

            if is_end_of(&line, names::VCARD) {
                return Ok(card);
            }

            if let Some(nested) = begin_of(&line) {
                let nested = nested.to_string();
                tracing::trace!(component = %nested, line = line_num, "Skipping nested block");
                self.skip_block(&nested, line_num)?;
                continue;
            }

            match parse_content_line(&line, line_num) {
                Ok(mut content) => {
                    if content.is_quoted_printable() {
                        self.join_soft_breaks(&mut content);
                    }
                    card.push(convert(content));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed content line");
                }
            }
        }

        Err(ParseError::unterminated(start_line, names::VCARD))
    }

    /// Appends following lines while a quoted-printable value ends in a
    /// soft line break. A dangling break before a block boundary or the end
    /// of input is dropped.
    fn join_soft_breaks(&mut self, content: &mut ContentLine) {
        while content.value.ends_with('=') {
            content.value.pop();
            match self.lines.get(self.pos) {
                Some(next) if !is_block_boundary(next) => {
                    content.value.push_str(next);
                    self.pos += 1;
                }
                _ => break,
            }
        }
    }

    /// Skips to the `END` matching an already consumed `BEGIN`, including
    /// any blocks nested inside it.
    fn skip_block(&mut self, component: &str, start_line: usize) -> ParseResult<()> {
        let mut open = vec![(component.to_string(), start_line)];

        while self.pos < self.lines.len() {
            let line_num = self.current_line();
            let line = &self.lines[self.pos];
            self.pos += 1;

            if open.last().is_some_and(|(name, _)| is_end_of(line, name)) {
                open.pop();
                if open.is_empty() {
                    return Ok(());
                }
            } else if let Some(inner) = begin_of(line) {
                open.push((inner.to_string(), line_num));
            }
        }

        let (name, line) = open
            .pop()
            .unwrap_or_else(|| (component.to_string(), start_line));
        Err(ParseError::unterminated(line, &name))
    }
}

/// Builds the property node for a lexed line: transfer parameters are
/// consumed, the value is decoded, and structured values are split into
/// component children.
fn convert(line: ContentLine) -> AttrNode {
    let mut encoding = TransferEncoding::Identity;
    let mut charset = None;
    let mut node = AttrNode::new(line.name);
    node.group = line.group;

    for param in line.params {
        if let Some(declared) = TransferEncoding::from_param(&param) {
            encoding = declared;
        } else if param.value.is_some() && param.name.eq_ignore_ascii_case(names::CHARSET) {
            charset = param.value;
        } else {
            node.push(AttrNode {
                group: None,
                name: param.name,
                value: param.value.map(AttrValue::Text),
                children: Vec::new(),
            });
        }
    }

    let payload = match encoding {
        TransferEncoding::Identity => None,
        TransferEncoding::QuotedPrintable => Some(decode_quoted_printable(&line.value)),
        TransferEncoding::Base64 => {
            let decoded = decode_base64(&line.value);
            if decoded.is_none() {
                tracing::debug!(property = %node.name, "Invalid base64 payload, keeping raw text");
            }
            decoded
        }
    };

    let value = match payload {
        Some(data) => AttrValue::Bytes { data, charset },
        None => AttrValue::Text(line.value),
    };

    if let Some(components) = names::structured_components(&node.name) {
        let text = value.to_text();
        for (name, component) in components.iter().zip(split_structured(&text)) {
            if !component.is_empty() {
                node.push(AttrNode::text(*name, component));
            }
        }
    } else {
        node.value = Some(value);
    }

    node
}
