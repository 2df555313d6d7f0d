//! Well-known node names of the vCard 2.1 tree.

pub const VCARD: &str = "VCARD";
pub const VERSION: &str = "VERSION";
pub const DEFAULT_VERSION: &str = "2.1";

// Transfer parameters, consumed by the parser and re-emitted by the serializer.
pub const ENCODING: &str = "ENCODING";
pub const CHARSET: &str = "CHARSET";
pub const QUOTED_PRINTABLE: &str = "QUOTED-PRINTABLE";
pub const BASE64: &str = "BASE64";
pub const BASE64_SHORT: &str = "B";

pub const TYPE: &str = "TYPE";
pub const INTERNET: &str = "INTERNET";

// N components.
pub const FAMILY_NAME: &str = "F";
pub const GIVEN_NAME: &str = "G";
pub const ADDITIONAL_NAMES: &str = "ADD";
pub const NAME_PREFIXES: &str = "PRE";
pub const NAME_SUFFIXES: &str = "SUF";

// ADR components.
pub const PO_BOX: &str = "PO";
pub const EXTENDED_ADDRESS: &str = "EXT";
pub const STREET: &str = "STREET";
pub const CITY: &str = "L";
pub const REGION: &str = "R";
pub const POSTAL_CODE: &str = "PC";
pub const COUNTRY: &str = "C";

// ORG components.
pub const ORG_NAME: &str = "ORGNAME";
pub const ORG_UNIT: &str = "OUN";

const NAME_COMPONENTS: &[&str] = &[
    FAMILY_NAME,
    GIVEN_NAME,
    ADDITIONAL_NAMES,
    NAME_PREFIXES,
    NAME_SUFFIXES,
];

const ADDRESS_COMPONENTS: &[&str] = &[
    PO_BOX,
    EXTENDED_ADDRESS,
    STREET,
    CITY,
    REGION,
    POSTAL_CODE,
    COUNTRY,
];

const ORG_COMPONENTS: &[&str] = &[ORG_NAME, ORG_UNIT];

/// Component child names, in value order, for properties with a
/// `;`-separated structured value.
#[must_use]
pub fn structured_components(property: &str) -> Option<&'static [&'static str]> {
    match property {
        "N" => Some(NAME_COMPONENTS),
        "ADR" => Some(ADDRESS_COMPONENTS),
        "ORG" => Some(ORG_COMPONENTS),
        _ => None,
    }
}
