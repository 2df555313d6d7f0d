//! Whole-card decode, encode and re-decode tests.

use super::fixtures::*;
use crate::card::{
    AddressFlags, Arbitrary, Card, CardDate, PhoneFlags, cards_to_vcard, load_cards,
};

/// Decode, encode to text, decode again; the two cards must agree and the
/// second encode must be byte-identical to the first.
fn round_trip(input: &str) -> Result<Card, String> {
    let first = Card::from_vcard(input);
    let text = first.to_vcard();
    let second = Card::from_vcard(&text);

    if first != second {
        return Err(format!("Card changed across round trip:\n{text}\n{first:#?}\n{second:#?}"));
    }
    if second.to_vcard() != text {
        return Err(format!("Re-encode is not stable:\n{text}"));
    }

    Ok(second)
}

#[test_log::test]
fn full_card_fields() {
    let card = Card::from_vcard(CARD_FULL);

    assert_eq!(card.file_as(), "Smith, Jon");
    assert_eq!(card.full_name(), "Dr. Jon Q. Smith Jr.");
    let name = card.name();
    assert_eq!(name.family.as_deref(), Some("Smith"));
    assert_eq!(name.given.as_deref(), Some("Jon"));
    assert_eq!(name.additional.as_deref(), Some("Q."));
    assert_eq!(name.prefix.as_deref(), Some("Dr."));
    assert_eq!(name.suffix.as_deref(), Some("Jr."));

    assert_eq!(card.addresses.len(), 2);
    let work = &card.addresses[0];
    assert_eq!(work.flags, AddressFlags::WORK | AddressFlags::POSTAL);
    assert!(work.po.is_none());
    assert_eq!(work.ext.as_deref(), Some("Suite 5"));
    assert_eq!(work.street.as_deref(), Some("1 Main St"));
    assert_eq!(work.city.as_deref(), Some("Springfield"));
    assert_eq!(work.region.as_deref(), Some("IL"));
    assert_eq!(work.code.as_deref(), Some("62704"));
    assert_eq!(work.country.as_deref(), Some("USA"));
    assert_eq!(card.addresses[1].po.as_deref(), Some("PO Box 9"));
    assert_eq!(card.addresses[1].city.as_deref(), Some("Shelbyville"));

    assert_eq!(card.address_labels[0].flags, AddressFlags::WORK);
    assert_eq!(card.address_labels[0].text, "1 Main St");

    assert_eq!(
        card.phones[0].flags,
        PhoneFlags::WORK | PhoneFlags::VOICE | PhoneFlags::PREF
    );
    assert_eq!(card.phones[0].number, "+1 555 0100");
    assert_eq!(card.phones[1].flags, PhoneFlags::CELL);
    assert_eq!(card.emails, ["jon@example.com", "jsmith@mail.example.org"]);

    assert_eq!(card.birth_date, Some(CardDate::new(1970, 1, 31)));
    assert_eq!(card.anniversary, Some(CardDate::new(1995, 6, 10)));
    assert_eq!(card.last_use, Some(CardDate::new(2024, 1, 1)));
    assert!((card.raw_use_score() - 3.5).abs() < 1e-9);

    assert_eq!(card.org.as_deref(), Some("Acme"));
    assert_eq!(card.org_unit.as_deref(), Some("Research"));
    assert_eq!(card.office.as_deref(), Some("B-12"));
    assert_eq!(card.title.as_deref(), Some("Chief Scientist"));
    assert_eq!(card.manager.as_deref(), Some("Jane Doe"));
    assert_eq!(card.assistant.as_deref(), Some("Bob Roe"));
    assert_eq!(card.nickname.as_deref(), Some("Jonny"));
    assert_eq!(card.spouse.as_deref(), Some("Ann Smith"));
    assert_eq!(card.mailer.as_deref(), Some("Evolution"));
    assert_eq!(card.fburl.as_deref(), Some("https://example.com/fb/jon.vfb"));
    assert_eq!(card.note.as_deref(), Some("Likes tea."));
    assert_eq!(card.related_contacts.as_deref(), Some("<list/>"));

    assert_eq!(
        card.categories,
        Some(vec!["Work".into(), "VIP".into(), "Lab, Bench".into()])
    );
    assert_eq!(card.wants_html, Some(true));
    assert_eq!(
        card.arbitrary,
        [Arbitrary {
            key: Some("colour".into()),
            value_type: Some("string".into()),
            value: Some("blue".into()),
        }]
    );
    assert_eq!(card.id, "pas-id-0001");
}

#[test_log::test]
fn round_trip_full_card() {
    round_trip(CARD_FULL).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_fn_only() {
    let card = round_trip(CARD_FN_ONLY).expect("round trip should succeed");
    assert_eq!(card.name().family.as_deref(), Some("de la Cruz"));
    assert_eq!(card.file_as(), "de la Cruz, Rebecca");
}

#[test_log::test]
fn round_trip_list() {
    let card = round_trip(CARD_LIST).expect("round trip should succeed");
    assert!(card.is_mailing_list);
    assert!(!card.list_show_addresses);
    assert_eq!(card.emails.len(), 2);
}

#[test_log::test]
fn round_trip_quoted_printable_note() {
    let card = round_trip(CARD_QP_NOTE).expect("round trip should succeed");
    assert_eq!(card.note.as_deref(), Some("line one\r\nline two, café continued"));
    assert!(card.to_vcard().contains(";CHARSET=UTF-8;QUOTED-PRINTABLE:"));
}

#[test_log::test]
fn round_trip_v3_types() {
    let card = round_trip(CARD_V3_TYPES).expect("round trip should succeed");
    assert_eq!(card.phones[0].flags, PhoneFlags::HOME | PhoneFlags::VOICE);
    assert_eq!(card.addresses[0].flags, AddressFlags::WORK);
    assert_eq!(card.addresses[0].country.as_deref(), Some("UK"));
    assert_eq!(card.name().given.as_deref(), Some("Amy"));
}

#[test_log::test]
fn wants_html_tri_state() {
    for (value, expected) in [(Some(true), "TRUE"), (Some(false), "FALSE")] {
        let mut card = Card::new();
        card.wants_html = value;
        let text = card.to_vcard();
        assert!(text.contains(&format!("X-MOZILLA-HTML:{expected}\r\n")));
        assert_eq!(Card::from_vcard(&text).wants_html, value);
    }
    let text = Card::new().to_vcard();
    assert!(!text.contains("X-MOZILLA-HTML"));
    assert_eq!(Card::from_vcard(&text).wants_html, None);
}

#[test_log::test]
fn empty_category_list_survives() {
    let mut card = Card::new();
    card.category_list_mut();
    let text = card.to_vcard();
    assert!(text.contains("CATEGORIES:\r\n"));
    assert_eq!(Card::from_vcard(&text).categories, Some(Vec::new()));
}

#[test_log::test]
fn awkward_categories_survive() {
    let mut card = Card::new();
    *card.category_list_mut() = vec![r"a\b".into(), "c,d".into(), "e".into()];
    let decoded = Card::from_vcard(&card.to_vcard());
    assert_eq!(decoded.categories, card.categories);
}

#[test_log::test]
fn duplicate_is_equal() {
    let card = Card::from_vcard(CARD_FULL);
    assert_eq!(card.duplicate(), card);
}

#[test_log::test]
fn many_cards() {
    let cards = load_cards(TWO_CARDS);
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);

    let reloaded = load_cards(&cards_to_vcard(&cards));
    assert_eq!(reloaded, cards);
}

#[test_log::test]
fn long_values_fold_and_unfold() {
    let mut card = Card::new();
    card.note = Some("word ".repeat(40).trim_end().to_string());
    let text = card.to_vcard();
    assert!(text.lines().all(|l| l.len() <= 75));
    assert_eq!(Card::from_vcard(&text).note, card.note);
}

#[test_log::test]
fn precise_use_score_survives() {
    let card = round_trip(
        "BEGIN:VCARD\r\nFN:Jon\r\nX-EVOLUTION-USE-SCORE:1.23456789\r\nEND:VCARD\r\n",
    )
    .expect("round trip should succeed");
    assert_eq!(card.raw_use_score().to_bits(), 1.234_567_89_f64.to_bits());
}

#[test_log::test]
fn show_addresses_without_list_is_stable() {
    let card = round_trip(
        "BEGIN:VCARD\r\nFN:Jon\r\nX-EVOLUTION-LIST-SHOW_ADDRESSES:TRUE\r\nEND:VCARD\r\n",
    )
    .expect("round trip should succeed");
    assert!(!card.list_show_addresses);
}
