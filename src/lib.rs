//! Shared library for `BuzzPlan`
//! Contains the academic plan validation and progress engine used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::models;

/// Returns the current version of the `BuzzPlan` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
