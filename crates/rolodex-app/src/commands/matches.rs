use std::io::Write;

use rolodex_core::error::CoreError;
use rolodex_vcard::Card;

use crate::error::AppResult;

/// What to match cards against.
#[derive(Debug, Clone, Copy)]
pub enum Query<'a> {
    Name(&'a str),
    Email(&'a str),
}

impl Query<'_> {
    fn kind(self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Email(_) => "email",
        }
    }

    fn matches(self, card: &Card) -> bool {
        match self {
            Self::Name(q) => card.name_matches(q),
            Self::Email(q) => card.email_matches(q),
        }
    }
}

/// Writes the file-as name of each matching card, one per line.
///
/// ## Errors
/// `CoreError::InvalidInput` for a blank query, or a failed write.
pub fn execute(cards: &[Card], query: Query<'_>, out: &mut dyn Write) -> AppResult<()> {
    let (Query::Name(q) | Query::Email(q)) = query;
    if q.trim().is_empty() {
        let message = format!("{} query must not be empty", query.kind());
        return Err(CoreError::InvalidInput(message).into());
    }

    let mut hits = 0;
    for card in cards.iter().filter(|c| query.matches(c)) {
        writeln!(out, "{}", card.file_as())?;
        hits += 1;
    }

    tracing::debug!(hits, ?query, "Match complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn card(full_name: &str, email: &str) -> Card {
        let mut card = Card::new();
        card.set_full_name(full_name);
        card.file_as = Some(card.name().file_as());
        card.emails.push(email.to_string());
        card
    }

    fn run(query: Query<'_>) -> AppResult<String> {
        let cards = [
            card("Jon Smith", "jon@example.com"),
            card("Bill Gates", "bill@example.org"),
            card("William Gates", "wg@mail.example.org"),
        ];
        let mut out = Vec::new();
        execute(&cards, query, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test_log::test]
    fn by_name_with_nicknames() {
        assert_eq!(run(Query::Name("John Smith")).unwrap(), "Smith, Jon\n");
        assert_eq!(run(Query::Name("bill gates")).unwrap(), "Gates, Bill\nGates, William\n");
    }

    #[test_log::test]
    fn by_email_with_subdomain() {
        assert_eq!(run(Query::Email("wg@example.org")).unwrap(), "Gates, William\n");
        assert_eq!(run(Query::Email("nobody@example.org")).unwrap(), "");
    }

    #[test_log::test]
    fn blank_query_is_rejected() {
        assert!(matches!(
            run(Query::Name("  ")),
            Err(AppError::CoreError(CoreError::InvalidInput(_)))
        ));
    }
}
