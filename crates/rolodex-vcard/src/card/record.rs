//! The contact record and its value types.

use serde::{Deserialize, Deserializer, Serialize};

use super::date::CardDate;
use super::fields::add_categories;
use super::flags::{AddressFlags, PhoneFlags};
use super::heuristic::{AddressHeuristic, NameHeuristic, WesternAddresses, WesternNames};

/// Structured personal name. Absent components are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Name {
    pub prefix: Option<String>,
    pub given: Option<String>,
    pub additional: Option<String>,
    pub family: Option<String>,
    pub suffix: Option<String>,
}

fn filled(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

fn join_filled<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, sep: &str) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(sep)
}

impl Name {
    pub const EMPTY: Name = Name {
        prefix: None,
        given: None,
        additional: None,
        family: None,
        suffix: None,
    };

    /// Derives the name from a free-text display name.
    #[must_use]
    pub fn parse(full_name: &str) -> Self {
        WesternNames.parse_name(full_name)
    }

    /// True when at least one component is present, even if empty.
    #[must_use]
    pub fn has_components(&self) -> bool {
        [
            &self.prefix,
            &self.given,
            &self.additional,
            &self.family,
            &self.suffix,
        ]
        .into_iter()
        .any(|c| c.is_some())
    }

    /// True when no component has text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_display_string().is_empty()
    }

    /// Non-empty components joined by spaces, in prefix, given,
    /// additional, family, suffix order.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        join_filled(
            [
                filled(self.prefix.as_ref()),
                filled(self.given.as_ref()),
                filled(self.additional.as_ref()),
                filled(self.family.as_ref()),
                filled(self.suffix.as_ref()),
            ],
            " ",
        )
    }

    /// `Family, Given`, skipping whichever is missing.
    #[must_use]
    pub fn file_as(&self) -> String {
        join_filled(
            [filled(self.family.as_ref()), filled(self.given.as_ref())],
            ", ",
        )
    }
}

/// Structured postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub po: Option<String>,
    pub ext: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
    pub flags: AddressFlags,
}

impl DeliveryAddress {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.po,
            &self.ext,
            &self.street,
            &self.city,
            &self.region,
            &self.code,
            &self.country,
        ]
        .into_iter()
        .all(|c| filled(c.as_ref()).is_none())
    }

    /// Splits a free-text label into components; the flags are copied.
    #[must_use]
    pub fn from_label(label: &AddressLabel) -> Self {
        Self {
            flags: label.flags,
            ..WesternAddresses.parse_address(&label.text)
        }
    }

    /// Multi-line rendering:
    ///
    /// ```text
    /// PO STREET
    /// EXT
    /// CITY, REGION CODE
    /// COUNTRY
    /// ```
    ///
    /// Empty parts and the lines they leave empty are dropped.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        let line1 = join_filled([filled(self.po.as_ref()), filled(self.street.as_ref())], " ");
        let region_code = join_filled(
            [filled(self.region.as_ref()), filled(self.code.as_ref())],
            " ",
        );
        let line2 = join_filled(
            [
                filled(self.city.as_ref()),
                Some(region_code.as_str()).filter(|s| !s.is_empty()),
            ],
            ", ",
        );

        join_filled(
            [
                Some(line1.as_str()).filter(|s| !s.is_empty()),
                filled(self.ext.as_ref()),
                Some(line2.as_str()).filter(|s| !s.is_empty()),
                filled(self.country.as_ref()),
            ],
            "\n",
        )
    }

    #[must_use]
    pub fn to_label(&self) -> AddressLabel {
        AddressLabel {
            flags: self.flags,
            text: self.to_display_string(),
        }
    }
}

/// Free-text postal label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressLabel {
    pub flags: AddressFlags,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Phone {
    pub flags: PhoneFlags,
    pub number: String,
}

/// An application-defined key/type/value triple.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Arbitrary {
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub value_type: Option<String>,
    pub value: Option<String>,
}

fn clamp_use_score(score: f64) -> f64 {
    if score.is_nan() { 0.0 } else { score.max(0.0) }
}

fn deserialize_use_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_use_score)
}

/// A decoded contact.
///
/// Singular text fields distinguish absent (`None`) from present but empty
/// (`Some("")`). After a decode, `full_name`, `name` and `file_as` are
/// always `Some`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub file_as: Option<String>,
    pub full_name: Option<String>,
    pub name: Option<Name>,

    pub addresses: Vec<DeliveryAddress>,
    pub address_labels: Vec<AddressLabel>,
    pub phones: Vec<Phone>,
    pub emails: Vec<String>,

    pub birth_date: Option<CardDate>,
    pub url: Option<String>,
    pub org: Option<String>,
    pub org_unit: Option<String>,
    pub office: Option<String>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub manager: Option<String>,
    pub assistant: Option<String>,
    pub nickname: Option<String>,
    pub spouse: Option<String>,
    pub anniversary: Option<CardDate>,
    pub mailer: Option<String>,
    pub fburl: Option<String>,
    pub note: Option<String>,
    pub related_contacts: Option<String>,

    /// `None` until first touched; an empty list is still emitted.
    pub categories: Option<Vec<String>>,
    pub arbitrary: Vec<Arbitrary>,

    pub last_use: Option<CardDate>,
    #[serde(deserialize_with = "deserialize_use_score")]
    pub(crate) raw_use_score: f64,

    pub wants_html: Option<bool>,
    pub is_mailing_list: bool,
    pub list_show_addresses: bool,
}

impl Card {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn file_as(&self) -> &str {
        self.file_as.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        self.name.as_ref().unwrap_or(&Name::EMPTY)
    }

    /// Sets the display name and re-derives the structured name from it.
    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        let full_name = full_name.into();
        self.name = Some(Name::parse(&full_name));
        self.full_name = Some(full_name);
    }

    /// Sets the structured name. Fills in the display name and file-as
    /// from it when those are absent.
    pub fn set_name(&mut self, name: Name) {
        if self.full_name.is_none() {
            self.full_name = Some(name.to_display_string());
        }
        if self.file_as.is_none() {
            self.file_as = Some(name.file_as());
        }
        self.name = Some(name);
    }

    #[must_use]
    pub fn raw_use_score(&self) -> f64 {
        self.raw_use_score
    }

    /// Stores the score, clamped to `>= 0`; NaN becomes 0.
    pub fn set_raw_use_score(&mut self, score: f64) {
        self.raw_use_score = clamp_use_score(score);
    }

    /// The category list, created on first access.
    pub fn category_list_mut(&mut self) -> &mut Vec<String> {
        self.categories.get_or_insert_with(Vec::new)
    }

    /// Replaces the category list with the entries parsed from `value`.
    pub fn set_categories(&mut self, value: &str) {
        let mut list = Vec::new();
        add_categories(&mut list, value);
        self.categories = Some(list);
    }

    /// Categories joined by `", "`, or `None` if the list was never created.
    #[must_use]
    pub fn categories_string(&self) -> Option<String> {
        self.categories.as_ref().map(|list| list.join(", "))
    }

    /// Drops a created-but-empty category list.
    pub fn free_empty_lists(&mut self) {
        if self.categories.as_ref().is_some_and(Vec::is_empty) {
            self.categories = None;
        }
    }
}
