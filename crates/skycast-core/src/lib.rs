//! Core data types and fixed lookup tables for skycast
//!
//! This crate provides the forecast entry shape shared between the store,
//! the upstream fetchers, and the dashboard view model.

pub mod codes;
pub mod types;

pub use codes::*;
pub use types::*;
