//! Fuzzy name and e-mail matching, and use-score bookkeeping.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;

use super::date::CardDate;
use super::record::{Card, Name};

/// `(canonical, nickname)` pairs.
const NAME_SYNONYMS: &[(&str, &str)] = &[
    ("jon", "john"),
    ("jon", "jonathan"),
    ("daniel", "dan"),
    ("joseph", "joe"),
    ("robert", "rob"),
    ("robert", "bob"),
    ("richard", "rich"),
    ("richard", "dick"),
    ("william", "will"),
    ("william", "bill"),
    ("anthony", "tony"),
    ("steven", "steve"),
    ("michael", "mike"),
    ("douglas", "doug"),
    ("sidney", "sid"),
    ("eric", "erik"),
    ("chris", "christopher"),
    ("chris", "christine"),
    ("chris", "christy"),
    ("elizabeth", "liz"),
    ("jeff", "geoff"),
    ("jeff", "jeffrey"),
    ("jeff", "geoffrey"),
    ("jim", "james"),
    ("abigal", "abby"),
    ("amanda", "amy"),
    ("amanda", "manda"),
    ("di", "diana"),
    ("di", "diane"),
    ("maxine", "max"),
    ("rebecca", "becca"),
    ("rebecca", "becky"),
    ("jennifer", "jen"),
    ("jennifer", "jenny"),
];

/// Nickname to canonical form. The first row for a nickname wins.
static CANONICAL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(NAME_SYNONYMS.len());
    for &(canonical, nickname) in NAME_SYNONYMS {
        map.entry(nickname).or_insert(canonical);
    }
    map
});

/// Days of full score before decay starts.
const GRACE_DAYS: i64 = 7;
/// Decay time constant, in days.
const DECAY_DAYS: f64 = 30.0;

/// Two name tokens match if equal ignoring case, or if either is a known
/// nickname and both reduce to the same canonical form.
fn name_fragment_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return true;
    }

    let canon_a = CANONICAL.get(a.as_str()).copied();
    let canon_b = CANONICAL.get(b.as_str()).copied();
    if canon_a.is_none() && canon_b.is_none() {
        return false;
    }

    canon_a.unwrap_or(a.as_str()) == canon_b.unwrap_or(b.as_str())
}

/// Offset from `from` of the first token in `haystack` matching `needle`,
/// or the number of tokens left when none does.
fn seek(haystack: &[&str], from: usize, needle: &str) -> (usize, bool) {
    let rest = &haystack[from..];
    rest.iter()
        .position(|t| name_fragment_match(t, needle))
        .map_or((rest.len(), false), |k| (k, true))
}

impl Name {
    /// Whether `query` plausibly names this person.
    ///
    /// Walks both token lists together. At each step the nearer of the two
    /// possible alignments is taken and counted. A step where neither side
    /// finds the other's token rejects the match outright. Two or more
    /// aligned tokens are a match.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let display = self.to_display_string();
        let query: Vec<&str> = query.split_whitespace().collect();
        let name: Vec<&str> = display.split_whitespace().collect();

        let mut count = 0;
        let (mut i, mut j) = (0, 0);

        while i < query.len() && j < name.len() {
            let (k1, found1) = seek(&query, i, name[j]);
            let (k2, found2) = seek(&name, j, query[i]);
            if !found1 && !found2 {
                return false;
            }

            count += 1;
            match k1.cmp(&k2) {
                std::cmp::Ordering::Less => {
                    i += k1 + 1;
                    j += 1;
                }
                std::cmp::Ordering::Greater => {
                    i += 1;
                    j += k2 + 1;
                }
                std::cmp::Ordering::Equal => {
                    i += k1 + 1;
                    j += k2 + 1;
                }
            }
        }

        count >= 2
    }
}

/// Whether two addresses name the same mailbox.
///
/// Local parts compare case-insensitively and must have equal length. The
/// domains must be equal, or one must be a dot-separated suffix of the
/// other (`example.com` matches `mail.example.com`).
#[must_use]
pub fn email_match_single(a: &str, b: &str) -> bool {
    let (local_a, domain_a) = match a.split_once('@') {
        Some((l, d)) => (l, Some(d)),
        None => (a, None),
    };
    let (local_b, domain_b) = match b.split_once('@') {
        Some((l, d)) => (l, Some(d)),
        None => (b, None),
    };

    if local_a.len() != local_b.len() || !local_a.eq_ignore_ascii_case(local_b) {
        return false;
    }

    match (domain_a, domain_b) {
        (None, None) => true,
        (Some(da), Some(db)) => {
            let (short, long) = if da.len() <= db.len() { (da, db) } else { (db, da) };
            let long = long.to_ascii_lowercase();
            let short = short.to_ascii_lowercase();
            long == short
                || long
                    .strip_suffix(short.as_str())
                    .is_some_and(|head| head.ends_with('.'))
        }
        _ => false,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Card {
    /// Whether `query` matches the structured name.
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name().matches(query)
    }

    /// Whether any address on the card matches `query`.
    #[must_use]
    pub fn email_matches(&self, query: &str) -> bool {
        self.emails.iter().any(|e| email_match_single(e, query))
    }

    /// The raw score decayed by time since last use, as of `today`.
    ///
    /// Full score for the first week, then `exp(-days / 30)` over the
    /// days past that. Zero when never used or the last-use date is not a
    /// real day.
    #[must_use]
    pub fn effective_use_score_on(&self, today: NaiveDate) -> f64 {
        let Some(last_use) = self.last_use.and_then(CardDate::to_naive) else {
            return 0.0;
        };

        let days = (today - last_use).num_days();
        let decay_days = (days - GRACE_DAYS).max(0);

        #[expect(clippy::cast_precision_loss, reason = "day counts are small")]
        let exponent = -(decay_days as f64) / DECAY_DAYS;

        self.raw_use_score.max(0.0) * exponent.exp()
    }

    #[must_use]
    pub fn effective_use_score(&self) -> f64 {
        self.effective_use_score_on(today())
    }

    /// Records a use on `today`: the decayed score plus one becomes the
    /// new raw score.
    pub fn touch_on(&mut self, today: NaiveDate) {
        let score = self.effective_use_score_on(today) + 1.0;
        self.set_raw_use_score(score);
        self.last_use = Some(CardDate::from(today));
    }

    pub fn touch(&mut self) {
        self.touch_on(today());
    }
}
