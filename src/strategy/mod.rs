//! Strategy selection engine
//!
//! Turns a handful of hand-entered readings into a recommended options
//! structure, a 0-100 score and advisory text.
//!
//! # Pipeline
//!
//! ```text
//! Inputs ──► sanitize (finite guard, 999-day sentinels)
//!              │
//!              ▼
//!          Derived { net delta, net theta, IV structure }
//!              │
//!     ┌────────┼───────────────┬─────────────────┐
//!     ▼        ▼               ▼                 ▼
//!  classify  score ─► advice  warnings /      strike guide
//!                             adjustments
//!     └────────┴───────────────┴─────────────────┘
//!              │
//!              ▼
//!        Recommendation (+ static docs table)
//! ```
//!
//! # Components
//!
//! - [`compute`] / [`evaluate`]: the single entry point
//! - [`classify()`]: ordered rule table picking a [`StrategyKey`](crate::StrategyKey)
//! - [`scoring`]: weighted score and advice tier
//! - [`advisory`]: warnings, adjustment tips, strike guidance
//! - [`docs`]: static educational text per strategy
//!
//! # Example
//!
//! ```
//! use option_strategy_advisor::strategy::{compute, Preset};
//! use option_strategy_advisor::{Advice, StrategyKey};
//!
//! let r = compute(&Preset::UpPmcc.inputs(), None);
//! assert_eq!(r.recommended, StrategyKey::PmccCallDiagonal);
//! assert_eq!(r.advice, Advice::Open);
//! ```

pub mod advisory;
pub mod classify;
pub mod docs;
mod engine;
mod presets;
pub mod scoring;
mod types;

pub use classify::classify;
pub use docs::{doc_for, StrategyDoc, STRATEGY_DOCS};
pub use engine::{compute, evaluate};
pub use presets::Preset;
pub use types::{Derived, Inputs, RawInputs, Recommendation, StrikeGuide, FAR_AWAY_DAYS};
