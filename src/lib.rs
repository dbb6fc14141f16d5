//! Option Strategy Advisor Library
//!
//! Scores a hand-entered options setup (trend, ATM IVs, leg Greeks, days to
//! earnings and expiry) against configurable weights and recommends a
//! strategy from a fixed catalog.

pub mod common;
pub mod config;
pub mod report;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{AdvisorError, Result};
pub use common::numeric::LenientNumber;
pub use common::types::{Advice, Side, StrategyKey, Trend};
pub use crate::config::types::{AppConfig, PartialSettings, Settings};

// Engine entry points
pub use strategy::{
    compute, evaluate, Inputs, Preset, RawInputs, Recommendation, StrategyDoc, StrikeGuide,
};
