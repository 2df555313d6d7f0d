use std::io::Write;

use rolodex_core::config::OutputFormat;
use rolodex_vcard::{Card, cards_to_vcard};

use crate::error::AppResult;

/// Writes `cards` as a JSON array or as re-encoded vCard text.
///
/// ## Errors
/// Fails when JSON serialization or the write fails.
pub fn execute(
    cards: &[Card],
    format: OutputFormat,
    pretty: bool,
    out: &mut dyn Write,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(cards)?
            } else {
                serde_json::to_string(cards)?
            };
            writeln!(out, "{json}")?;
        }
        OutputFormat::Vcard => out.write_all(cards_to_vcard(cards).as_bytes())?,
    }
    Ok(())
}
