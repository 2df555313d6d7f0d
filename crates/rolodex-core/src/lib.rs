//! Shared settings and error types for the rolodex workspace.

pub mod config;
pub mod error;
