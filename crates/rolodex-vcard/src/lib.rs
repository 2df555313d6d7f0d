//! Contact-card codec.
//!
//! Two layers:
//!
//! - [`vobject`] turns vCard 2.1 text into a tree of [`AttrNode`]s and back.
//! - [`card`] maps that tree onto the typed [`Card`] record, and carries
//!   the fuzzy name/e-mail matchers and use-score bookkeeping.
//!
//! ```rust
//! use rolodex_vcard::Card;
//!
//! let card = Card::from_vcard("BEGIN:VCARD\r\nFN:Jon Smith\r\nEND:VCARD\r\n");
//! assert_eq!(card.file_as.as_deref(), Some("Smith, Jon"));
//! assert!(card.name_matches("John Smith"));
//! ```

pub mod card;
pub mod error;
pub mod vobject;

pub use card::{
    AddressFlags, AddressLabel, Arbitrary, Card, CardDate, DeliveryAddress, Name, Phone,
    PhoneFlags, cards_to_vcard, decode_node, encode, load_cards, load_cards_strict,
};
pub use error::{VcardError, VcardResult};
pub use vobject::{AttrNode, AttrValue};
