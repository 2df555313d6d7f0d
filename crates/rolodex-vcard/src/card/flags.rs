//! Phone and address flag sets, and their marker-attribute codec.
//!
//! On the wire a flag is a valueless child of the `TEL`/`ADR`/`LABEL`
//! node (`TEL;HOME;VOICE:...`). The tables below fix the emission order.

use bitflags::Flags;
use serde::{Deserialize, Serialize};

use crate::vobject::{AttrNode, names};

bitflags::bitflags! {
    /// Kinds of telephone number.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct PhoneFlags: u16 {
        const PREF  = 1 << 0;
        const WORK  = 1 << 1;
        const HOME  = 1 << 2;
        const VOICE = 1 << 3;
        const FAX   = 1 << 4;
        const MSG   = 1 << 5;
        const CELL  = 1 << 6;
        const PAGER = 1 << 7;
        const BBS   = 1 << 8;
        const MODEM = 1 << 9;
        const CAR   = 1 << 10;
        const ISDN  = 1 << 11;
        const VIDEO = 1 << 12;
    }
}

bitflags::bitflags! {
    /// Kinds of postal address, shared by `ADR` and `LABEL`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct AddressFlags: u8 {
        const DOM    = 1 << 0;
        const INTL   = 1 << 1;
        const POSTAL = 1 << 2;
        const PARCEL = 1 << 3;
        const HOME   = 1 << 4;
        const WORK   = 1 << 5;
    }
}

const PHONE_MARKERS: &[(&str, PhoneFlags)] = &[
    ("PREF", PhoneFlags::PREF),
    ("WORK", PhoneFlags::WORK),
    ("HOME", PhoneFlags::HOME),
    ("VOICE", PhoneFlags::VOICE),
    ("FAX", PhoneFlags::FAX),
    ("MSG", PhoneFlags::MSG),
    ("CELL", PhoneFlags::CELL),
    ("PAGER", PhoneFlags::PAGER),
    ("BBS", PhoneFlags::BBS),
    ("MODEM", PhoneFlags::MODEM),
    ("CAR", PhoneFlags::CAR),
    ("ISDN", PhoneFlags::ISDN),
    ("VIDEO", PhoneFlags::VIDEO),
];

const ADDRESS_MARKERS: &[(&str, AddressFlags)] = &[
    ("DOM", AddressFlags::DOM),
    ("INTL", AddressFlags::INTL),
    ("POSTAL", AddressFlags::POSTAL),
    ("PARCEL", AddressFlags::PARCEL),
    ("HOME", AddressFlags::HOME),
    ("WORK", AddressFlags::WORK),
];

fn lookup<F: Copy>(table: &[(&str, F)], marker: &str) -> Option<F> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(marker))
        .map(|&(_, flag)| flag)
}

/// ORs together the bits of every known marker child. A `TYPE` child
/// contributes each of its comma-separated tokens. Unknown markers are
/// ignored.
fn decode_markers<F: Flags + Copy>(node: &AttrNode, table: &[(&str, F)]) -> F {
    let mut flags = F::empty();

    for child in &node.children {
        match child.text_value() {
            None => {
                if let Some(flag) = lookup(table, &child.name) {
                    flags.insert(flag);
                }
            }
            Some(types) if child.name.eq_ignore_ascii_case(names::TYPE) => {
                for token in types.split(',') {
                    if let Some(flag) = lookup(table, token.trim()) {
                        flags.insert(flag);
                    }
                }
            }
            Some(_) => {}
        }
    }

    flags
}

fn encode_markers<F: Flags + Copy>(flags: F, table: &[(&str, F)]) -> Vec<AttrNode> {
    table
        .iter()
        .filter(|&&(_, flag)| flags.contains(flag))
        .map(|&(name, _)| AttrNode::new(name))
        .collect()
}

impl PhoneFlags {
    #[must_use]
    pub fn from_markers(node: &AttrNode) -> Self {
        decode_markers(node, PHONE_MARKERS)
    }

    /// One valueless node per set flag, in table order.
    #[must_use]
    pub fn to_markers(self) -> Vec<AttrNode> {
        encode_markers(self, PHONE_MARKERS)
    }
}

impl AddressFlags {
    #[must_use]
    pub fn from_markers(node: &AttrNode) -> Self {
        decode_markers(node, ADDRESS_MARKERS)
    }

    /// One valueless node per set flag, in table order.
    #[must_use]
    pub fn to_markers(self) -> Vec<AttrNode> {
        encode_markers(self, ADDRESS_MARKERS)
    }
}
