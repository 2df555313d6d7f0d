use super::{AddressHeuristic, join_non_empty};
use crate::card::record::DeliveryAddress;

const PO_BOX_LEADERS: &[&str] = &["po box", "p.o. box", "p. o. box", "p.o.box", "pob ", "box "];

fn is_po_box(line: &str) -> bool {
    let lower = line.to_lowercase();
    PO_BOX_LEADERS.iter().any(|leader| lower.starts_with(leader))
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

/// Locality, region and postal code from a line such as
/// `Springfield, IL 62704`, `London SW1A 1AA` or `Paris`.
fn split_locality(line: &str) -> (Option<String>, Option<String>, Option<String>) {
    let (city, rest) = match line.split_once(',') {
        Some((city, rest)) => (Some(city.trim()), rest),
        None => (None, line),
    };

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let code_start = tokens
        .iter()
        .rposition(|t| !has_digit(t))
        .map_or(0, |i| i + 1);
    let (head, code) = tokens.split_at(code_start);
    let code = join_non_empty(code.iter().copied(), " ");
    let head = join_non_empty(head.iter().copied(), " ");

    match city {
        Some(city) => (join_non_empty([city], " "), head, code),
        None => (head, None, code),
    }
}

/// Lines top to bottom: PO box, street, extended lines, locality line,
/// then an optional trailing country.
#[derive(Debug, Clone, Copy, Default)]
pub struct WesternAddresses;

impl AddressHeuristic for WesternAddresses {
    fn parse_address(&self, label: &str) -> DeliveryAddress {
        let mut lines: Vec<&str> = label
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let mut address = DeliveryAddress::default();

        if lines.len() > 2
            && let Some(&last) = lines.last()
            && !has_digit(last)
            && !last.contains(',')
        {
            address.country = Some(last.to_string());
            lines.pop();
        }

        if lines.len() > 1
            && let Some(locality) = lines.pop()
        {
            (address.city, address.region, address.code) = split_locality(locality);
        }

        let mut street_lines = Vec::new();
        for line in lines {
            if address.po.is_none() && is_po_box(line) {
                address.po = Some(line.to_string());
            } else {
                street_lines.push(line);
            }
        }

        if let Some((street, extended)) = street_lines.split_first() {
            address.street = Some((*street).to_string());
            address.ext = join_non_empty(extended.iter().copied(), ", ");
        }

        address
    }
}
