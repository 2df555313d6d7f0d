//! Tests for `rolodex match`.

use rolodex_app::error::AppError;
use rolodex_core::config::OutputFormat;
use rolodex_core::error::CoreError;
use rolodex_test::ADDRESS_BOOK;

use super::helpers::*;

fn run_match(flag: &str, query: &str) -> Result<String, AppError> {
    let book = write_book(ADDRESS_BOOK.as_bytes());
    run(
        &["match", path_of(&book), flag, query],
        &settings(OutputFormat::Json, false),
    )
}

#[test_log::test]
fn name_match_uses_nicknames() {
    assert_eq!(run_match("--name", "John Smith").unwrap(), "Smith, Jonathan\n");
    assert_eq!(run_match("--name", "Becky Jones").unwrap(), "Jones, Rebecca\n");
}

#[test_log::test]
fn single_token_is_not_enough() {
    assert_eq!(run_match("--name", "Smith").unwrap(), "");
}

#[test_log::test]
fn email_match_allows_subdomains() {
    assert_eq!(
        run_match("--email", "becky@example.org").unwrap(),
        "Jones, Rebecca\n"
    );
    assert_eq!(
        run_match("--email", "JON@example.com").unwrap(),
        "Smith, Jonathan\n"
    );
    assert_eq!(run_match("--email", "jon@example.org").unwrap(), "");
}

#[test_log::test]
fn blank_query_is_invalid_input() {
    assert!(matches!(
        run_match("--name", " "),
        Err(AppError::CoreError(CoreError::InvalidInput(_)))
    ));
}
