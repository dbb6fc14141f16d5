//! Common types and utilities shared across the crate

pub mod errors;
pub mod numeric;
pub mod types;
