//! Record decoding: attribute tree to [`Card`].

use super::dispatch::FieldKind;
use super::fields;
use super::heuristic::{NameHeuristic, WesternNames};
use super::record::Card;
use crate::error::{VcardError, VcardResult};
use crate::vobject::{AttrNode, parse};

/// Decodes one record node with the default name heuristic.
#[must_use]
pub fn decode_node(record: &AttrNode) -> Card {
    decode_node_with(record, &WesternNames)
}

/// Decodes one record node.
///
/// Properties are dispatched in source order; unknown ones are skipped.
/// Afterwards the full name defaults to `""`, a missing structured name
/// is derived from the full name, and a missing file-as is built as
/// `Family, Given`. Show-addresses only applies to lists and is cleared
/// on any other card.
#[must_use]
pub fn decode_node_with(record: &AttrNode, names: &dyn NameHeuristic) -> Card {
    let mut card = Card::new();

    for property in &record.children {
        match FieldKind::from_attribute(&property.name) {
            Some(kind) => fields::apply(&mut card, kind, property),
            None => tracing::trace!(name = %property.name, "Skipping unknown attribute"),
        }
    }

    let full_name = card.full_name.get_or_insert_with(String::new);
    let name = card
        .name
        .get_or_insert_with(|| names.parse_name(full_name));
    if card.file_as.is_none() {
        card.file_as = Some(name.file_as());
    }
    if !card.is_mailing_list {
        card.list_show_addresses = false;
    }

    card
}

/// Decodes every record in `input`, in source order.
///
/// A malformed blob yields no cards.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn load_cards(input: &str) -> Vec<Card> {
    match load_cards_strict(input) {
        Ok(cards) => cards,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unparseable vCard input");
            Vec::new()
        }
    }
}

/// Decodes every record in `input`, surfacing wire-level failures.
///
/// ## Errors
/// Returns [`VcardError::Parse`] when the text is not well-formed vCard.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn load_cards_strict(input: &str) -> VcardResult<Vec<Card>> {
    let records = parse(input)?;
    tracing::debug!(count = records.len(), "Decoding records");
    Ok(records.iter().map(decode_node).collect())
}

impl Card {
    /// Decodes the first record in `input`.
    ///
    /// Missing or malformed input yields an empty card with the post-decode
    /// defaults applied.
    #[must_use]
    pub fn from_vcard(input: &str) -> Self {
        load_cards(input)
            .into_iter()
            .next()
            .unwrap_or_else(|| decode_node(&AttrNode::new(crate::vobject::names::VCARD)))
    }

    /// Decodes the first record in `input`.
    ///
    /// ## Errors
    /// [`VcardError::Parse`] on malformed text, [`VcardError::NoCards`] when
    /// no record is present.
    pub fn from_vcard_strict(input: &str) -> VcardResult<Self> {
        load_cards_strict(input)?
            .into_iter()
            .next()
            .ok_or(VcardError::NoCards)
    }

    /// A deep copy made by encoding and decoding again.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        decode_node(&super::encode::encode(self))
    }
}
