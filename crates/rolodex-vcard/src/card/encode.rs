//! Record encoding: [`Card`] to attribute tree.

use super::date::CardDate;
use super::dispatch::FieldKind;
use super::fields::{join_categories, leading_float};
use super::record::{Arbitrary, Card, DeliveryAddress, Name};
use crate::vobject::{AttrNode, names, serialize, serialize_single};

fn text_if(kind: FieldKind, value: Option<&String>) -> Option<AttrNode> {
    value.map(|v| AttrNode::text(kind.attribute(), v.as_str()))
}

fn date_if(kind: FieldKind, value: Option<CardDate>) -> Option<AttrNode> {
    value.map(|d| AttrNode::text(kind.attribute(), d.to_vcard_string()))
}

fn bool_text(flag: bool) -> &'static str {
    if flag { "TRUE" } else { "FALSE" }
}

/// Six decimals, unless that would lose precision, in which case the
/// shortest exact form.
fn score_text(score: f64) -> String {
    let fixed = format!("{score:.6}");
    if leading_float(&fixed).to_bits() == score.to_bits() {
        fixed
    } else {
        score.to_string()
    }
}

/// Adds a text child for every present component, in order.
fn with_components(mut node: AttrNode, components: &[(&str, Option<&String>)]) -> AttrNode {
    for (name, value) in components {
        if let Some(value) = value {
            node.push(AttrNode::text(*name, value.as_str()));
        }
    }
    node
}

fn encode_name(name: &Name) -> AttrNode {
    with_components(
        AttrNode::new(FieldKind::Name.attribute()),
        &[
            (names::FAMILY_NAME, name.family.as_ref()),
            (names::GIVEN_NAME, name.given.as_ref()),
            (names::ADDITIONAL_NAMES, name.additional.as_ref()),
            (names::NAME_PREFIXES, name.prefix.as_ref()),
            (names::NAME_SUFFIXES, name.suffix.as_ref()),
        ],
    )
}

fn encode_address(address: &DeliveryAddress) -> AttrNode {
    let mut node = AttrNode::new(FieldKind::Address.attribute());
    node.children = address.flags.to_markers();
    with_components(
        node,
        &[
            (names::PO_BOX, address.po.as_ref()),
            (names::EXTENDED_ADDRESS, address.ext.as_ref()),
            (names::STREET, address.street.as_ref()),
            (names::CITY, address.city.as_ref()),
            (names::REGION, address.region.as_ref()),
            (names::POSTAL_CODE, address.code.as_ref()),
            (names::COUNTRY, address.country.as_ref()),
        ],
    )
}

fn encode_arbitrary(arbitrary: &Arbitrary) -> AttrNode {
    let mut node = AttrNode::new(FieldKind::Arbitrary.attribute());
    node.value = arbitrary.value.clone().map(Into::into);
    if let Some(value_type) = &arbitrary.value_type {
        node.push(AttrNode::text(names::TYPE, value_type.as_str()));
    }
    if let Some(key) = &arbitrary.key {
        node.push(AttrNode::new(key.as_str()));
    }
    node
}

/// Builds the record node for `card`.
///
/// Properties come out in a fixed order so that repeated encodes of the
/// same card are byte-identical. Present-but-empty strings are written;
/// absent ones are not.
#[must_use]
pub fn encode(card: &Card) -> AttrNode {
    let mut record = AttrNode::new(names::VCARD);
    let props = &mut record.children;

    props.extend(text_if(FieldKind::FileAs, card.file_as.as_ref()));
    props.extend(text_if(FieldKind::FullName, card.full_name.as_ref()));
    props.extend(card.name.as_ref().map(encode_name));

    props.extend(card.addresses.iter().map(encode_address));
    props.extend(card.address_labels.iter().map(|label| {
        let mut node = AttrNode::text(FieldKind::AddressLabel.attribute(), label.text.as_str());
        node.children = label.flags.to_markers();
        node
    }));
    props.extend(card.phones.iter().map(|phone| {
        let mut node = AttrNode::text(FieldKind::Phone.attribute(), phone.number.as_str());
        node.children = phone.flags.to_markers();
        node
    }));
    props.extend(card.emails.iter().map(|email| {
        AttrNode::text(FieldKind::Email.attribute(), email.as_str())
            .with_child(AttrNode::new(names::INTERNET))
    }));

    props.extend(date_if(FieldKind::BirthDate, card.birth_date));
    props.extend(text_if(FieldKind::Url, card.url.as_ref()));
    if card.org.is_some() || card.org_unit.is_some() {
        props.push(with_components(
            AttrNode::new(FieldKind::Org.attribute()),
            &[
                (names::ORG_NAME, card.org.as_ref()),
                (names::ORG_UNIT, card.org_unit.as_ref()),
            ],
        ));
    }
    props.extend(text_if(FieldKind::Office, card.office.as_ref()));
    props.extend(text_if(FieldKind::Title, card.title.as_ref()));
    props.extend(text_if(FieldKind::Role, card.role.as_ref()));
    props.extend(text_if(FieldKind::Manager, card.manager.as_ref()));
    props.extend(text_if(FieldKind::Assistant, card.assistant.as_ref()));
    props.extend(text_if(FieldKind::Nickname, card.nickname.as_ref()));
    props.extend(text_if(FieldKind::Spouse, card.spouse.as_ref()));
    props.extend(date_if(FieldKind::Anniversary, card.anniversary));
    props.extend(text_if(FieldKind::Mailer, card.mailer.as_ref()));
    props.extend(text_if(FieldKind::FreeBusyUrl, card.fburl.as_ref()));
    props.extend(text_if(FieldKind::Note, card.note.as_ref()));

    props.extend(date_if(FieldKind::LastUse, card.last_use));
    if card.raw_use_score() > 0.0 {
        props.push(AttrNode::text(
            FieldKind::UseScore.attribute(),
            score_text(card.raw_use_score()),
        ));
    }
    props.extend(text_if(FieldKind::RelatedContacts, card.related_contacts.as_ref()));
    if let Some(categories) = &card.categories {
        props.push(AttrNode::text(
            FieldKind::Categories.attribute(),
            join_categories(categories),
        ));
    }

    if let Some(wants_html) = card.wants_html {
        props.push(AttrNode::text(FieldKind::WantsHtml.attribute(), bool_text(wants_html)));
    }
    if card.is_mailing_list {
        props.push(AttrNode::text(FieldKind::List.attribute(), bool_text(true)));
        props.push(AttrNode::text(
            FieldKind::ListShowAddresses.attribute(),
            bool_text(card.list_show_addresses),
        ));
    }

    props.extend(card.arbitrary.iter().map(encode_arbitrary));
    props.push(AttrNode::text(FieldKind::Id.attribute(), card.id.as_str()));

    record
}

/// Serializes several cards into one vCard blob.
#[must_use]
pub fn cards_to_vcard(cards: &[Card]) -> String {
    let records: Vec<AttrNode> = cards.iter().map(encode).collect();
    serialize(&records)
}

impl Card {
    /// The card as vCard 2.1 text.
    #[must_use]
    pub fn to_vcard(&self) -> String {
        serialize_single(&encode(self))
    }
}
