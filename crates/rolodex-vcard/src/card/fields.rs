//! Per-field decoders. Each one reads a single attribute node into the card.
//!
//! Repeatable fields append; singular fields overwrite.

use super::date::CardDate;
use super::dispatch::FieldKind;
use super::extract::{child_value, value_opt, value_string};
use super::flags::{AddressFlags, PhoneFlags};
use super::record::{AddressLabel, Arbitrary, Card, DeliveryAddress, Name, Phone};
use crate::vobject::{AttrNode, names};

pub fn apply(card: &mut Card, kind: FieldKind, node: &AttrNode) {
    match kind {
        FieldKind::FullName => card.full_name = Some(value_string(node)),
        FieldKind::FileAs => card.file_as = Some(value_string(node)),
        FieldKind::Name => card.name = Some(parse_name(node)),
        FieldKind::BirthDate => assign_date(&mut card.birth_date, node),
        FieldKind::Email => card.emails.push(value_string(node)),
        FieldKind::Phone => card.phones.push(Phone {
            flags: PhoneFlags::from_markers(node),
            number: value_string(node),
        }),
        FieldKind::Address => card.addresses.push(parse_address(node)),
        FieldKind::AddressLabel => card.address_labels.push(AddressLabel {
            flags: AddressFlags::from_markers(node),
            text: value_string(node),
        }),
        FieldKind::Url => card.url = Some(value_string(node)),
        FieldKind::Org => {
            card.org = child_value(node, names::ORG_NAME);
            card.org_unit = child_value(node, names::ORG_UNIT);
        }
        FieldKind::Office => card.office = Some(value_string(node)),
        FieldKind::Title => card.title = Some(value_string(node)),
        FieldKind::Role => card.role = Some(value_string(node)),
        FieldKind::Manager => card.manager = Some(value_string(node)),
        FieldKind::Assistant => card.assistant = Some(value_string(node)),
        FieldKind::Nickname => card.nickname = Some(value_string(node)),
        FieldKind::Spouse => card.spouse = Some(value_string(node)),
        FieldKind::Anniversary => assign_date(&mut card.anniversary, node),
        FieldKind::Mailer => card.mailer = Some(value_string(node)),
        FieldKind::FreeBusyUrl => card.fburl = Some(value_string(node)),
        FieldKind::Note => card.note = Some(value_string(node)),
        FieldKind::RelatedContacts => card.related_contacts = Some(value_string(node)),
        FieldKind::Categories => {
            if let Some(value) = value_opt(node) {
                add_categories(card.category_list_mut(), &value);
            }
        }
        FieldKind::WantsHtml => {
            if let Some(flag) = parse_bool(node) {
                card.wants_html = Some(flag);
            }
        }
        FieldKind::Arbitrary => card.arbitrary.push(parse_arbitrary(node)),
        FieldKind::Id => card.id = value_string(node),
        FieldKind::LastUse => assign_date(&mut card.last_use, node),
        FieldKind::UseScore => {
            let score = value_opt(node).map_or(0.0, |v| leading_float(&v));
            card.set_raw_use_score(score);
        }
        FieldKind::List => {
            if let Some(flag) = parse_bool(node) {
                card.is_mailing_list = flag;
            }
        }
        FieldKind::ListShowAddresses => {
            if let Some(flag) = parse_bool(node) {
                card.list_show_addresses = flag;
            }
        }
    }
}

fn parse_name(node: &AttrNode) -> Name {
    Name {
        prefix: child_value(node, names::NAME_PREFIXES),
        given: child_value(node, names::GIVEN_NAME),
        additional: child_value(node, names::ADDITIONAL_NAMES),
        family: child_value(node, names::FAMILY_NAME),
        suffix: child_value(node, names::NAME_SUFFIXES),
    }
}

fn parse_address(node: &AttrNode) -> DeliveryAddress {
    DeliveryAddress {
        po: child_value(node, names::PO_BOX),
        ext: child_value(node, names::EXTENDED_ADDRESS),
        street: child_value(node, names::STREET),
        city: child_value(node, names::CITY),
        region: child_value(node, names::REGION),
        code: child_value(node, names::POSTAL_CODE),
        country: child_value(node, names::COUNTRY),
        flags: AddressFlags::from_markers(node),
    }
}

fn parse_arbitrary(node: &AttrNode) -> Arbitrary {
    let mut arbitrary = Arbitrary::default();
    for child in &node.children {
        if child.name.eq_ignore_ascii_case(names::TYPE) {
            arbitrary.value_type = Some(value_string(child));
        } else {
            arbitrary.key = Some(child.name.clone());
        }
    }
    arbitrary.value = Some(value_string(node));
    arbitrary
}

fn assign_date(field: &mut Option<CardDate>, node: &AttrNode) {
    if let Some(value) = value_opt(node) {
        *field = Some(CardDate::parse(&value));
    }
}

/// `true`/`false` in any case; anything else is no answer.
fn parse_bool(node: &AttrNode) -> Option<bool> {
    let value = value_opt(node)?;
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Splits on unescaped `,`. A backslash takes the next character
/// literally; a trailing lone backslash is dropped. Segments are trimmed,
/// and empty or already-present ones are skipped.
pub fn add_categories(list: &mut Vec<String>, value: &str) {
    let mut segment = String::new();
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    segment.push(escaped);
                }
            }
            ',' => {
                push_unique(list, &segment);
                segment.clear();
            }
            _ => segment.push(c),
        }
    }
    push_unique(list, &segment);
}

fn push_unique(list: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() && !list.iter().any(|c| c == trimmed) {
        list.push(trimmed.to_string());
    }
}

/// Escapes `\` and `,` so [`add_categories`] splits the joined list back
/// into the same entries.
pub fn join_categories(list: &[String]) -> String {
    list.iter()
        .map(|c| c.replace('\\', "\\\\").replace(',', "\\,"))
        .collect::<Vec<_>>()
        .join(",")
}

/// The longest decimal prefix of `s` as a number, `0` when there is none.
///
/// Leading whitespace, a sign, a fraction and an exponent are accepted.
pub fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut end = 0;

    let skip_digits = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    if matches!(b.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = skip_digits(end);
    let mut mantissa_end = int_end;
    if b.get(int_end) == Some(&b'.') {
        mantissa_end = skip_digits(int_end + 1);
    }
    let has_digits = int_end > end || mantissa_end > int_end + 1;
    if !has_digits {
        return 0.0;
    }
    end = mantissa_end;

    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(value: &str) -> Vec<String> {
        let mut list = Vec::new();
        add_categories(&mut list, value);
        list
    }

    #[test]
    fn categories_split_and_trim() {
        assert_eq!(categories("Work, Family ,VIP"), ["Work", "Family", "VIP"]);
    }

    #[test]
    fn categories_escapes() {
        assert_eq!(categories(r"A\,B,C\\D"), ["A,B", r"C\D"]);
        assert_eq!(categories(r"trailing\"), ["trailing"]);
    }

    #[test]
    fn categories_deduplicate_case_sensitively() {
        assert_eq!(categories("a,A,a, a ,,"), ["a", "A"]);
    }

    #[test]
    fn categories_join_escapes_for_split() {
        let list = vec!["A,B".to_string(), r"C\D".to_string(), "E".to_string()];
        let joined = join_categories(&list);
        assert_eq!(joined, r"A\,B,C\\D,E");
        assert_eq!(categories(&joined), list);
    }

    #[test]
    fn leading_float_prefixes() {
        let cases = [
            ("2.5", 2.5),
            ("  7", 7.0),
            ("3.25abc", 3.25),
            ("-1.5", -1.5),
            (".5", 0.5),
            ("5.", 5.0),
            ("1e2x", 100.0),
            ("1e", 1.0),
            ("abc", 0.0),
            ("", 0.0),
            ("-", 0.0),
            (".", 0.0),
        ];
        for (input, expected) in cases {
            assert!(
                (leading_float(input) - expected).abs() < 1e-9,
                "{input:?} -> {}",
                leading_float(input)
            );
        }
    }

    #[test]
    fn use_score_is_clamped_and_reset() {
        let mut card = Card::new();
        apply(&mut card, FieldKind::UseScore, &AttrNode::text("X", "4.5"));
        assert!((card.raw_use_score() - 4.5).abs() < 1e-9);
        apply(&mut card, FieldKind::UseScore, &AttrNode::text("X", "-3"));
        assert!(card.raw_use_score().abs() < 1e-9);
        apply(&mut card, FieldKind::UseScore, &AttrNode::text("X", "2"));
        apply(&mut card, FieldKind::UseScore, &AttrNode::new("X"));
        assert!(card.raw_use_score().abs() < 1e-9);
    }

    #[test]
    fn booleans_leave_field_on_garbage() {
        let mut card = Card::new();
        apply(&mut card, FieldKind::WantsHtml, &AttrNode::text("X", "TRUE"));
        assert_eq!(card.wants_html, Some(true));
        apply(&mut card, FieldKind::WantsHtml, &AttrNode::text("X", "maybe"));
        assert_eq!(card.wants_html, Some(true));
        apply(&mut card, FieldKind::WantsHtml, &AttrNode::text("X", "False"));
        assert_eq!(card.wants_html, Some(false));
        apply(&mut card, FieldKind::List, &AttrNode::new("X"));
        assert!(!card.is_mailing_list);
    }

    #[test]
    fn org_overwrites_both_parts() {
        let mut card = Card::new();
        let full = AttrNode::new("ORG")
            .with_child(AttrNode::text(names::ORG_NAME, "Acme"))
            .with_child(AttrNode::text(names::ORG_UNIT, "R&D"));
        apply(&mut card, FieldKind::Org, &full);
        assert_eq!(card.org.as_deref(), Some("Acme"));
        assert_eq!(card.org_unit.as_deref(), Some("R&D"));

        let name_only = AttrNode::new("ORG").with_child(AttrNode::text(names::ORG_NAME, "Initech"));
        apply(&mut card, FieldKind::Org, &name_only);
        assert_eq!(card.org.as_deref(), Some("Initech"));
        assert!(card.org_unit.is_none());
    }

    #[test]
    fn arbitrary_last_key_wins() {
        let node = AttrNode::text("X-EVOLUTION-ARBITRARY", "v")
            .with_child(AttrNode::new("first"))
            .with_child(AttrNode::text("type", "string"))
            .with_child(AttrNode::new("second"));
        let mut card = Card::new();
        apply(&mut card, FieldKind::Arbitrary, &node);
        assert_eq!(
            card.arbitrary,
            [Arbitrary {
                key: Some("second".into()),
                value_type: Some("string".into()),
                value: Some("v".into()),
            }]
        );
    }

    #[test]
    fn valueless_dates_are_ignored() {
        let mut card = Card::new();
        apply(&mut card, FieldKind::BirthDate, &AttrNode::text("BDAY", "1980-01-02"));
        apply(&mut card, FieldKind::BirthDate, &AttrNode::new("BDAY"));
        assert_eq!(card.birth_date, Some(CardDate::new(1980, 1, 2)));
    }

    #[test]
    fn valueless_scalars_are_present_but_empty() {
        let mut card = Card::new();
        apply(&mut card, FieldKind::Note, &AttrNode::new("NOTE"));
        assert_eq!(card.note.as_deref(), Some(""));
    }
}
