//! The typed contact record and its mapping to and from the attribute tree.
//!
//! Decoding walks a record's properties in order and dispatches each one by
//! name to a field decoder; unknown properties are skipped. Encoding emits
//! the card's fields in a fixed order, so decode and re-encode is stable.
//!
//! ## Submodules
//!
//! - `record` - [`Card`] and its value types
//! - `dispatch` - attribute names and the [`FieldKind`] table
//! - `fields` - per-field decoders and the categories mini-parser
//! - `decode` / `encode` - whole-record conversion
//! - `matching` - fuzzy name and e-mail matching, use score
//! - [`heuristic`] - free-text name and address splitting

mod date;
mod decode;
mod dispatch;
mod encode;
mod extract;
mod fields;
mod flags;
pub mod heuristic;
mod matching;
mod record;

#[cfg(test)]
mod tests;

pub use date::CardDate;
pub use decode::{decode_node, decode_node_with, load_cards, load_cards_strict};
pub use dispatch::FieldKind;
pub use encode::{cards_to_vcard, encode};
pub use flags::{AddressFlags, PhoneFlags};
pub use matching::email_match_single;
pub use record::{AddressLabel, Arbitrary, Card, DeliveryAddress, Name, Phone};
