//! Rolodex integration test support.
//!
//! Shared vCard address books used by the integration tests under
//! `tests/integration/`.

/// Three contacts with names, addresses and use history.
pub const ADDRESS_BOOK: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
FN:Jonathan Smith\r\n\
N:Smith;Jonathan\r\n\
EMAIL;INTERNET:jon@example.com\r\n\
TEL;WORK;VOICE:+1 555 0100\r\n\
X-EVOLUTION-LAST-USE:2024-05-30\r\n\
X-EVOLUTION-USE-SCORE:4.000000\r\n\
UID:card-1\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
FN:Rebecca Jones\r\n\
EMAIL;INTERNET:becky@mail.example.org\r\n\
ADR;HOME:;;9 Elm St;Springfield;IL;62704;USA\r\n\
X-EVOLUTION-LAST-USE:2024-03-02\r\n\
X-EVOLUTION-USE-SCORE:9.000000\r\n\
CATEGORIES:Family,Book Club\r\n\
UID:card-2\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
FN:Team Alpha\r\n\
X-EVOLUTION-FILE-AS:Alpha Team\r\n\
X-EVOLUTION-LIST:TRUE\r\n\
X-EVOLUTION-LIST-SHOW_ADDRESSES:TRUE\r\n\
EMAIL:alpha@example.com\r\n\
UID:card-3\r\n\
END:VCARD\r\n";

/// A card that is never closed.
pub const TRUNCATED: &str = "\
BEGIN:VCARD\r\n\
FN:Half Written\r\n\
EMAIL:half@example.com\r\n";

/// An address book exported with a Latin-1 quoted-printable note.
pub const LATIN1_NOTE: &str = "\
BEGIN:VCARD\r\n\
FN:Zoe Martin\r\n\
NOTE;CHARSET=ISO-8859-1;ENCODING=QUOTED-PRINTABLE:Caf=E9 au lait\r\n\
UID:card-4\r\n\
END:VCARD\r\n";
