use thiserror::Error;

use crate::vobject::parse::ParseError;

/// Errors surfaced by the strict loading entry points.
#[derive(Error, Debug)]
pub enum VcardError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("no vCard found in input")]
    NoCards,
}

pub type VcardResult<T> = std::result::Result<T, VcardError>;
