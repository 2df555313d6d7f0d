//! Tests for `rolodex score`.

use rolodex_core::config::OutputFormat;
use rolodex_test::ADDRESS_BOOK;

use super::helpers::*;

#[test_log::test]
fn scores_decay_and_sort() {
    let book = write_book(ADDRESS_BOOK.as_bytes());
    let out = run(&["score", path_of(&book)], &settings(OutputFormat::Json, false))
        .expect("score should succeed");

    // Two days since last use is inside the grace week. Ninety-one days
    // leaves 9 * exp(-84 / 30).
    assert_eq!(
        out,
        "Smith, Jonathan\t4.000\nJones, Rebecca\t0.547\nAlpha Team\t0.000\n"
    );
}

#[test_log::test]
fn empty_book_prints_nothing() {
    let book = write_book(b"");
    let out = run(&["score", path_of(&book)], &settings(OutputFormat::Json, false))
        .expect("score should succeed");
    assert!(out.is_empty());
}
