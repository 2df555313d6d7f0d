use super::{NameHeuristic, join_non_empty};
use crate::card::record::Name;

const PREFIXES: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "dr", "prof", "rev", "fr", "sir", "dame", "lady", "lord",
    "hon", "capt",
];

const SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "v", "vi", "phd", "ph.d", "md", "dds", "esq", "mba", "cpa",
];

/// Lower-case words that belong to the family name that follows them.
const PARTICLES: &[&str] = &[
    "van", "von", "de", "der", "den", "da", "das", "dos", "di", "del", "della", "du", "la", "le",
    "st", "st.", "bin", "ibn",
];

fn bare(token: &str) -> String {
    token
        .trim_end_matches([',', '.'])
        .to_lowercase()
}

fn is_prefix(token: &str) -> bool {
    PREFIXES.contains(&bare(token).as_str())
}

fn is_suffix(token: &str) -> bool {
    SUFFIXES.contains(&bare(token).as_str())
}

fn is_particle(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_lowercase) && PARTICLES.contains(&token)
}

fn strip_comma(token: &str) -> &str {
    token.trim_end_matches(',')
}

/// `Prefix Given Additional Family Suffix`, with the `Family, Given`
/// comma form recognised.
#[derive(Debug, Clone, Copy, Default)]
pub struct WesternNames;

impl WesternNames {
    /// Peels leading honorifics. At least `keep` tokens remain.
    fn take_prefixes<'t, 'a>(
        mut tokens: &'t [&'a str],
        keep: usize,
    ) -> (Vec<&'a str>, &'t [&'a str]) {
        let mut prefixes = Vec::new();
        while tokens.len() > keep && is_prefix(tokens[0]) {
            prefixes.push(tokens[0]);
            tokens = &tokens[1..];
        }
        (prefixes, tokens)
    }

    /// Peels trailing suffixes. At least `keep` tokens remain.
    fn take_suffixes<'t, 'a>(
        mut tokens: &'t [&'a str],
        keep: usize,
    ) -> (Vec<&'a str>, &'t [&'a str]) {
        let mut suffixes = Vec::new();
        while tokens.len() > keep {
            let Some((&last, rest)) = tokens.split_last() else {
                break;
            };
            if !is_suffix(last) {
                break;
            }
            suffixes.insert(0, strip_comma(last));
            tokens = rest;
        }
        (suffixes, tokens)
    }

    fn parse_reversed(family: &str, rest: &str) -> Name {
        let all: Vec<&str> = rest.split_whitespace().collect();
        let (prefixes, tokens) = Self::take_prefixes(&all, 0);
        let (suffixes, tokens) = Self::take_suffixes(tokens, 0);

        Name {
            prefix: join_non_empty(prefixes, " "),
            given: tokens.first().and_then(|t| join_non_empty([strip_comma(t)], " ")),
            additional: join_non_empty(tokens.iter().skip(1).map(|t| strip_comma(t)), " "),
            family: join_non_empty([family.trim()], " "),
            suffix: join_non_empty(suffixes, " "),
        }
    }

    fn parse_forward(full_name: &str) -> Name {
        let all: Vec<&str> = full_name.split_whitespace().collect();
        let (prefixes, tokens) = Self::take_prefixes(&all, 1);
        let (suffixes, tokens) = Self::take_suffixes(tokens, 1);

        let (given, additional, family) = match tokens {
            [] => (None, None, None),
            [only] => (Some(*only), None, None),
            [first, .., _] => {
                let mut start = tokens.len() - 1;
                while start > 1 && is_particle(tokens[start - 1]) {
                    start -= 1;
                }
                (
                    Some(*first),
                    join_non_empty(tokens[1..start].iter().map(|t| strip_comma(t)), " "),
                    join_non_empty(tokens[start..].iter().map(|t| strip_comma(t)), " "),
                )
            }
        };

        Name {
            prefix: join_non_empty(prefixes, " "),
            given: given.and_then(|g| join_non_empty([strip_comma(g)], " ")),
            additional,
            family,
            suffix: join_non_empty(suffixes, " "),
        }
    }
}

impl NameHeuristic for WesternNames {
    fn parse_name(&self, full_name: &str) -> Name {
        let full_name = full_name.trim();

        if let Some((before, after)) = full_name.split_once(',') {
            let mut trailing = after.split_whitespace().peekable();
            let only_suffixes = trailing.peek().is_some() && trailing.all(is_suffix);
            if !only_suffixes {
                return Self::parse_reversed(before, after);
            }
        }

        Self::parse_forward(full_name)
    }
}
