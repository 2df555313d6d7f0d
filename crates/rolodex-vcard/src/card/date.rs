//! Calendar dates as carried by `BDAY`, anniversary and last-use fields.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A year/month/day triple.
///
/// Not validated: malformed sources decode to whatever the digit arithmetic
/// yields, and [`CardDate::to_vcard_string`] clamps on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CardDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

fn digits(bytes: &[u8]) -> i32 {
    bytes
        .iter()
        .fold(0, |acc, &b| acc * 10 + (i32::from(b) - i32::from(b'0')))
}

impl CardDate {
    #[must_use]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Decodes `YYYY-MM-DD` (10 octets) or `YYYYMMDD` (8 octets).
    ///
    /// Only the length is checked. Every position is read as `byte - '0'`,
    /// so non-digits produce out-of-range numbers rather than an error.
    /// Any other length yields `(0, 0, 0)`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let b = s.as_bytes();
        match b.len() {
            10 => Self::new(digits(&b[0..4]), digits(&b[5..7]), digits(&b[8..10])),
            8 => Self::new(digits(&b[0..4]), digits(&b[4..6]), digits(&b[6..8])),
            _ => Self::default(),
        }
    }

    /// Formats as `YYYY-MM-DD`, clamping year to 1000..=9999, month to
    /// 1..=12 and day to 1..=31.
    #[must_use]
    pub fn to_vcard_string(self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.year.clamp(1000, 9999),
            self.month.clamp(1, 12),
            self.day.clamp(1, 31)
        )
    }

    /// The calendar date, if the triple names a real day.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl From<NaiveDate> for CardDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(
            date.year(),
            date.month().cast_signed(),
            date.day().cast_signed(),
        )
    }
}
