//! vCard serialization.

mod escape;
mod fold;
mod serializer;

pub use escape::{encode_quoted_printable, escape_component, escape_param_value};
pub use fold::push_folded;
pub use serializer::{serialize, serialize_single};
