mod node;
pub mod names;

pub use node::{AttrNode, AttrValue};
