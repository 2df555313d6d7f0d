//! Codec behaviour through the public `rolodex_vcard` API.

use chrono::NaiveDate;
use rolodex_test::{ADDRESS_BOOK, TRUNCATED};
use rolodex_vcard::{
    AddressFlags, Card, CardDate, DeliveryAddress, VcardError, cards_to_vcard, decode_node, encode,
    load_cards, load_cards_strict,
};

#[test_log::test]
fn wire_failure_yields_no_cards() {
    assert!(load_cards(TRUNCATED).is_empty());
    assert!(matches!(
        load_cards_strict(TRUNCATED),
        Err(VcardError::Parse(_))
    ));
}

#[test_log::test]
fn stray_lines_only_cost_themselves() {
    let book = ADDRESS_BOOK.replacen("UID:card-1\r\n", "UID:card-1\r\nthis line has no colon\r\n", 1);
    let cards = load_cards_strict(&book).unwrap();
    assert_eq!(cards, load_cards(ADDRESS_BOOK));
}

#[test_log::test]
fn tree_round_trip_preserves_cards() {
    for card in load_cards(ADDRESS_BOOK) {
        assert_eq!(decode_node(&encode(&card)), card);
    }
}

#[test_log::test]
fn text_round_trip_preserves_book() {
    let cards = load_cards(ADDRESS_BOOK);
    let text = cards_to_vcard(&cards);
    assert_eq!(load_cards(&text), cards);
    assert_eq!(cards_to_vcard(&load_cards(&text)), text);
}

#[test_log::test]
fn setting_full_name_rederives_name() {
    let mut card = Card::new();
    card.set_full_name("Jon Smith");
    card.set_full_name("Prof. Ada King");
    assert_eq!(card.name().prefix.as_deref(), Some("Prof."));
    assert_eq!(card.name().given.as_deref(), Some("Ada"));
    assert_eq!(card.name().family.as_deref(), Some("King"));
}

#[test_log::test]
fn address_label_recovers_components() {
    let address = DeliveryAddress {
        street: Some("1600 Pennsylvania Ave NW".into()),
        city: Some("Washington".into()),
        region: Some("DC".into()),
        code: Some("20500".into()),
        country: Some("USA".into()),
        flags: AddressFlags::WORK,
        ..DeliveryAddress::default()
    };

    let label = address.to_label();
    assert_eq!(
        label.text,
        "1600 Pennsylvania Ave NW\nWashington, DC 20500\nUSA"
    );
    assert_eq!(DeliveryAddress::from_label(&label), address);
}

#[test_log::test]
fn touch_on_fresh_card() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
    let mut card = Card::new();
    card.touch_on(today);

    assert!((card.raw_use_score() - 1.0).abs() < f64::EPSILON);
    assert_eq!(card.last_use, Some(CardDate::new(2024, 6, 1)));

    let reloaded = Card::from_vcard(&card.to_vcard());
    assert_eq!(reloaded.last_use, card.last_use);
    assert!((reloaded.raw_use_score() - 1.0).abs() < f64::EPSILON);
}

#[test_log::test]
fn multi_line_note_survives_text() {
    let mut card = Card::new();
    card.note = Some("first line\nsecond line\r\n\tindented".into());
    let text = card.to_vcard();

    assert!(text.contains("QUOTED-PRINTABLE"));
    assert_eq!(Card::from_vcard(&text).note, card.note);
}
