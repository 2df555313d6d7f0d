use std::borrow::Cow;

/// The value carried by an attribute node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Text that needed no transfer decoding.
    Text(String),
    /// Raw octets from a QUOTED-PRINTABLE or BASE64 payload, with the
    /// declared `CHARSET` if any. Interpreted as UTF-8 when unlabelled.
    Bytes {
        data: Vec<u8>,
        charset: Option<String>,
    },
}

impl AttrValue {
    /// Decodes the value to text.
    ///
    /// Unknown charset labels fall back to UTF-8. Malformed sequences are
    /// replaced, never rejected.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Bytes { data, charset } => {
                let encoding = charset
                    .as_deref()
                    .and_then(|label| encoding_rs::Encoding::for_label(label.as_bytes()))
                    .unwrap_or(encoding_rs::UTF_8);
                encoding.decode_without_bom_handling(data).0
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A named node in the vCard tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrNode {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    pub name: String,
    pub value: Option<AttrValue>,
    /// Sub-attributes in source order.
    pub children: Vec<AttrNode>,
}

impl AttrNode {
    /// Creates a valueless node (a marker, or a structured property).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Creates a node carrying a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: Some(AttrValue::Text(value.into())),
            ..Self::new(name)
        }
    }

    /// Appends a child and returns the node, for building trees inline.
    #[must_use]
    pub fn with_child(mut self, child: AttrNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: AttrNode) {
        self.children.push(child);
    }

    /// The first child whose name matches exactly.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&AttrNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// The node value decoded to text, if it has one.
    #[must_use]
    pub fn text_value(&self) -> Option<Cow<'_, str>> {
        self.value.as_ref().map(AttrValue::to_text)
    }
}
