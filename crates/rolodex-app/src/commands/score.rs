use std::io::Write;

use chrono::NaiveDate;
use rolodex_vcard::Card;

use crate::error::AppResult;

/// Writes `file_as<TAB>score` per card, highest effective score first.
/// Ties keep file order.
///
/// ## Errors
/// Fails when a write fails.
pub fn execute(cards: &[Card], today: NaiveDate, out: &mut dyn Write) -> AppResult<()> {
    let mut scored: Vec<(&Card, f64)> = cards
        .iter()
        .map(|card| (card, card.effective_use_score_on(today)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (card, score) in scored {
        writeln!(out, "{}\t{score:.3}", card.file_as())?;
    }
    Ok(())
}
