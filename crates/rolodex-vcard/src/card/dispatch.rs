//! Attribute name to card field mapping.

const VENDOR: &str = "X-EVOLUTION-";

pub const FILE_AS: &str = const_str::concat!(VENDOR, "FILE-AS");
pub const OFFICE: &str = const_str::concat!(VENDOR, "OFFICE");
pub const MANAGER: &str = const_str::concat!(VENDOR, "MANAGER");
pub const ASSISTANT: &str = const_str::concat!(VENDOR, "ASSISTANT");
pub const SPOUSE: &str = const_str::concat!(VENDOR, "SPOUSE");
pub const ANNIVERSARY: &str = const_str::concat!(VENDOR, "ANNIVERSARY");
pub const RELATED_CONTACTS: &str = const_str::concat!(VENDOR, "RELATED_CONTACTS");
pub const ARBITRARY: &str = const_str::concat!(VENDOR, "ARBITRARY");
pub const LAST_USE: &str = const_str::concat!(VENDOR, "LAST-USE");
pub const USE_SCORE: &str = const_str::concat!(VENDOR, "USE-SCORE");
pub const LIST: &str = const_str::concat!(VENDOR, "LIST");
pub const LIST_SHOW_ADDRESSES: &str = const_str::concat!(VENDOR, "LIST-SHOW_ADDRESSES");
pub const WANTS_HTML: &str = "X-MOZILLA-HTML";

/// Every card field that has a wire attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FullName,
    FileAs,
    Name,
    BirthDate,
    Email,
    Phone,
    Address,
    AddressLabel,
    Url,
    Org,
    Office,
    Title,
    Role,
    Manager,
    Assistant,
    Nickname,
    Spouse,
    Anniversary,
    Mailer,
    FreeBusyUrl,
    Note,
    RelatedContacts,
    Categories,
    WantsHtml,
    Arbitrary,
    Id,
    LastUse,
    UseScore,
    List,
    ListShowAddresses,
}

impl FieldKind {
    /// Looks up the field an attribute name decodes into.
    #[must_use]
    pub fn from_attribute(name: &str) -> Option<Self> {
        let kind = match name {
            "FN" => Self::FullName,
            FILE_AS => Self::FileAs,
            "N" => Self::Name,
            "BDAY" => Self::BirthDate,
            "EMAIL" => Self::Email,
            "TEL" => Self::Phone,
            "ADR" => Self::Address,
            "LABEL" => Self::AddressLabel,
            "URL" => Self::Url,
            "ORG" => Self::Org,
            OFFICE => Self::Office,
            "TITLE" => Self::Title,
            "ROLE" => Self::Role,
            MANAGER => Self::Manager,
            ASSISTANT => Self::Assistant,
            "NICKNAME" => Self::Nickname,
            SPOUSE => Self::Spouse,
            ANNIVERSARY => Self::Anniversary,
            "MAILER" => Self::Mailer,
            "FBURL" => Self::FreeBusyUrl,
            "NOTE" => Self::Note,
            RELATED_CONTACTS => Self::RelatedContacts,
            "CATEGORIES" => Self::Categories,
            WANTS_HTML => Self::WantsHtml,
            ARBITRARY => Self::Arbitrary,
            "UID" => Self::Id,
            LAST_USE => Self::LastUse,
            USE_SCORE => Self::UseScore,
            LIST => Self::List,
            LIST_SHOW_ADDRESSES => Self::ListShowAddresses,
            _ => return None,
        };
        Some(kind)
    }

    /// The attribute name this field is written under.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::FullName => "FN",
            Self::FileAs => FILE_AS,
            Self::Name => "N",
            Self::BirthDate => "BDAY",
            Self::Email => "EMAIL",
            Self::Phone => "TEL",
            Self::Address => "ADR",
            Self::AddressLabel => "LABEL",
            Self::Url => "URL",
            Self::Org => "ORG",
            Self::Office => OFFICE,
            Self::Title => "TITLE",
            Self::Role => "ROLE",
            Self::Manager => MANAGER,
            Self::Assistant => ASSISTANT,
            Self::Nickname => "NICKNAME",
            Self::Spouse => SPOUSE,
            Self::Anniversary => ANNIVERSARY,
            Self::Mailer => "MAILER",
            Self::FreeBusyUrl => "FBURL",
            Self::Note => "NOTE",
            Self::RelatedContacts => RELATED_CONTACTS,
            Self::Categories => "CATEGORIES",
            Self::WantsHtml => WANTS_HTML,
            Self::Arbitrary => ARBITRARY,
            Self::Id => "UID",
            Self::LastUse => LAST_USE,
            Self::UseScore => USE_SCORE,
            Self::List => LIST,
            Self::ListShowAddresses => LIST_SHOW_ADDRESSES,
        }
    }
}
