//! vCard serialization.

use super::escape::{
    encode_quoted_printable, escape_component, escape_param_value, needs_quoted_printable,
};
use super::fold::push_folded;
use crate::vobject::core::{AttrNode, AttrValue, names};

/// Serializes record nodes to vCard 2.1 text.
///
/// ## Summary
/// Writes each record as a `BEGIN`/`END` block with CRLF line endings and
/// 75-octet folding. A `VERSION:2.1` line is added unless the record
/// carries its own `VERSION` child.
#[must_use]
pub fn serialize(records: &[AttrNode]) -> String {
    let mut output = String::new();

    for record in records {
        serialize_record(record, &mut output);
    }

    output
}

#[must_use]
pub fn serialize_single(record: &AttrNode) -> String {
    let mut output = String::new();
    serialize_record(record, &mut output);
    output
}

fn serialize_record(record: &AttrNode, output: &mut String) {
    push_folded(output, &format!("BEGIN:{}", record.name));

    if record.child(names::VERSION).is_none() {
        push_folded(output, &format!("{}:{}", names::VERSION, names::DEFAULT_VERSION));
    }

    for property in &record.children {
        serialize_property(property, output);
    }

    push_folded(output, &format!("END:{}", record.name));
}

/// A property value ready for the wire.
enum Payload {
    Plain(String),
    QuotedPrintable {
        encoded: String,
        charset: Option<String>,
    },
}

impl Payload {
    fn from_text(text: String) -> Self {
        if needs_quoted_printable(&text) {
            Self::QuotedPrintable {
                encoded: encode_quoted_printable(text.as_bytes()),
                charset: (!text.is_ascii()).then(|| "UTF-8".to_string()),
            }
        } else {
            Self::Plain(text)
        }
    }
}

fn serialize_property(property: &AttrNode, output: &mut String) {
    let components = names::structured_components(&property.name).unwrap_or_default();
    let mut line = String::new();

    if let Some(group) = &property.group {
        line.push_str(group);
        line.push('.');
    }
    line.push_str(&property.name);

    for param in property
        .children
        .iter()
        .filter(|child| !components.contains(&child.name.as_str()))
    {
        write_param(param, &mut line);
    }

    let payload = match &property.value {
        _ if property_has_components(property, components) => {
            Payload::from_text(structured_value(property, components))
        }
        Some(AttrValue::Text(text)) => Payload::from_text(text.clone()),
        Some(AttrValue::Bytes { data, charset }) => Payload::QuotedPrintable {
            encoded: encode_quoted_printable(data),
            charset: charset.clone(),
        },
        None => Payload::Plain(String::new()),
    };

    let value = match payload {
        Payload::Plain(value) => value,
        Payload::QuotedPrintable { encoded, charset } => {
            if let Some(charset) = charset {
                line.push(';');
                line.push_str(names::CHARSET);
                line.push('=');
                line.push_str(&charset);
            }
            line.push(';');
            line.push_str(names::QUOTED_PRINTABLE);
            encoded
        }
    };

    line.push(':');
    line.push_str(&value);
    push_folded(output, &line);
}

fn property_has_components(property: &AttrNode, components: &[&str]) -> bool {
    property
        .children
        .iter()
        .any(|child| components.contains(&child.name.as_str()))
}

fn structured_value(property: &AttrNode, components: &[&str]) -> String {
    components
        .iter()
        .map(|name| {
            property
                .child(name)
                .and_then(AttrNode::text_value)
                .map(|text| escape_component(&text))
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn write_param(param: &AttrNode, line: &mut String) {
    line.push(';');
    line.push_str(&param.name);

    if let Some(value) = param.text_value() {
        let (escaped, needs_quotes) = escape_param_value(&value);
        line.push('=');
        if needs_quotes {
            line.push('"');
            line.push_str(&escaped);
            line.push('"');
        } else {
            line.push_str(&escaped);
        }
    }
}
