//! Value access on attribute nodes.

use crate::vobject::AttrNode;

/// The node's value as text, or `""` when it has none.
pub fn value_string(node: &AttrNode) -> String {
    value_opt(node).unwrap_or_default()
}

/// The node's value as text.
pub fn value_opt(node: &AttrNode) -> Option<String> {
    node.text_value().map(|v| v.into_owned())
}

/// Value of the first child named exactly `name`.
///
/// A matching child without a value still yields `Some("")`.
pub fn child_value(node: &AttrNode, name: &str) -> Option<String> {
    node.child(name).map(value_string)
}
