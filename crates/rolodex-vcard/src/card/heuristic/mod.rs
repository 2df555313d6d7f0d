//! Free-text name and address splitting.
//!
//! Both are best-effort conventions for Western formats. They sit behind
//! traits so a caller can supply a locale-aware replacement.

mod address;
mod name;

pub use address::WesternAddresses;
pub use name::WesternNames;

use super::record::{DeliveryAddress, Name};

/// Splits a display name into structured components.
pub trait NameHeuristic {
    fn parse_name(&self, full_name: &str) -> Name;
}

/// Splits a multi-line postal label into address components.
///
/// The returned address carries no flags.
pub trait AddressHeuristic {
    fn parse_address(&self, label: &str) -> DeliveryAddress;
}

fn join_non_empty<'a>(parts: impl IntoIterator<Item = &'a str>, sep: &str) -> Option<String> {
    let joined = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep);
    (!joined.is_empty()).then_some(joined)
}
