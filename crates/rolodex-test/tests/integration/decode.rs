//! Tests for `rolodex decode`.

use rolodex_app::error::AppError;
use rolodex_core::config::OutputFormat;
use rolodex_test::{ADDRESS_BOOK, LATIN1_NOTE, TRUNCATED};
use rolodex_vcard::{Card, VcardError, load_cards};

use super::helpers::*;

#[test_log::test]
fn decode_prints_json_for_every_card() {
    let book = write_book(ADDRESS_BOOK.as_bytes());
    let json = run_json(&["decode", path_of(&book)]);

    let cards = json.as_array().expect("array of cards");
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["file_as"], "Smith, Jonathan");
    assert_eq!(cards[0]["emails"][0], "jon@example.com");
    assert_eq!(cards[1]["file_as"], "Jones, Rebecca");
    assert_eq!(cards[1]["addresses"][0]["city"], "Springfield");
    assert_eq!(cards[1]["categories"][1], "Book Club");
    assert_eq!(cards[2]["is_mailing_list"], true);
}

#[test_log::test]
fn decode_json_round_trips_through_serde() {
    let book = write_book(ADDRESS_BOOK.as_bytes());
    let out = run(&["decode", path_of(&book)], &settings(OutputFormat::Json, true))
        .expect("decode should succeed");

    let from_json: Vec<Card> = serde_json::from_str(&out).expect("cards deserialize");
    assert_eq!(from_json, load_cards(ADDRESS_BOOK));
}

#[test_log::test]
fn format_flag_overrides_settings() {
    let book = write_book(ADDRESS_BOOK.as_bytes());
    let out = run(
        &["decode", path_of(&book), "--format", "vcard"],
        &settings(OutputFormat::Json, true),
    )
    .expect("decode should succeed");

    assert_eq!(out.matches("BEGIN:VCARD\r\n").count(), 3);
    assert_eq!(load_cards(&out), load_cards(ADDRESS_BOOK));
}

#[test_log::test]
fn vcard_output_is_stable() {
    let book = write_book(ADDRESS_BOOK.as_bytes());
    let vcard = settings(OutputFormat::Vcard, false);
    let first = run(&["decode", path_of(&book)], &vcard).expect("first decode");

    let again = write_book(first.as_bytes());
    let second = run(&["decode", path_of(&again)], &vcard).expect("second decode");
    assert_eq!(first, second);
}

#[test_log::test]
fn truncated_input_is_empty_unless_strict() {
    let book = write_book(TRUNCATED.as_bytes());
    assert_eq!(run_json(&["decode", path_of(&book)]), serde_json::json!([]));

    let result = run(
        &["--strict", "decode", path_of(&book)],
        &settings(OutputFormat::Json, false),
    );
    assert!(matches!(
        result,
        Err(AppError::VcardError(VcardError::Parse(_)))
    ));
}

#[test_log::test]
fn charset_is_honoured() {
    let book = write_book(LATIN1_NOTE.as_bytes());
    let json = run_json(&["decode", path_of(&book)]);
    assert_eq!(json[0]["note"], "Café au lait");
}

#[test_log::test]
fn invalid_utf8_is_replaced() {
    let mut bytes = b"BEGIN:VCARD\r\nFN:Bad ".to_vec();
    bytes.push(0xff);
    bytes.extend_from_slice(b" Byte\r\nEND:VCARD\r\n");
    let book = write_book(&bytes);

    let json = run_json(&["decode", path_of(&book)]);
    assert_eq!(json[0]["full_name"], "Bad \u{fffd} Byte");
}

#[test_log::test]
fn missing_file_is_an_io_error() {
    let result = run(
        &["decode", "/nonexistent/book.vcf"],
        &settings(OutputFormat::Json, false),
    );
    assert!(matches!(result, Err(AppError::IoError(_))));
}
