pub mod decode;
pub mod matches;
pub mod score;

use std::path::Path;

use rolodex_vcard::{Card, load_cards, load_cards_strict};

use crate::error::AppResult;

/// Reads and decodes every card in `path`.
///
/// Invalid UTF-8 is replaced rather than rejected. Without `strict`, text
/// that is not well-formed vCard yields no cards.
///
/// ## Errors
/// Fails when the file cannot be read, or in strict mode when it does not
/// parse.
pub fn read_cards(path: &Path, strict: bool) -> AppResult<Vec<Card>> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    tracing::debug!(path = %path.display(), bytes = bytes.len(), strict, "Read input file");

    let cards = if strict {
        load_cards_strict(&text)?
    } else {
        load_cards(&text)
    };

    tracing::info!(count = cards.len(), "Loaded cards");
    Ok(cards)
}
