//! Closed enums shared by the engine, the report and the CLI

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::AdvisorError;

/// Direction of the underlying's trend as judged by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    #[serde(alias = "up", alias = "UP")]
    Up,
    #[serde(alias = "sideways", alias = "SIDEWAYS")]
    Sideways,
    #[serde(alias = "down", alias = "DOWN")]
    Down,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "Up"),
            Trend::Sideways => write!(f, "Sideways"),
            Trend::Down => write!(f, "Down"),
        }
    }
}

impl FromStr for Trend {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Trend::Up),
            "sideways" => Ok(Trend::Sideways),
            "down" => Ok(Trend::Down),
            _ => Err(AdvisorError::InvalidTrend(s.to_string())),
        }
    }
}

/// Option side the recommended structure is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Call,
    Put,
    Neutral,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Call => write!(f, "Call"),
            Side::Put => write!(f, "Put"),
            Side::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Sizing tier derived from the score and the two thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Advice {
    Open,
    Small,
    Wait,
}

impl Advice {
    /// Human-readable label shown next to the advice badge
    pub fn label(&self) -> &'static str {
        match self {
            Advice::Open => "Open full position",
            Advice::Small => "Small position, observe",
            Advice::Wait => "Wait for structure to improve",
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advice::Open => write!(f, "open"),
            Advice::Small => write!(f, "small"),
            Advice::Wait => write!(f, "wait"),
        }
    }
}

/// Strategy catalog key
///
/// `BullPutSpread` is documented in the catalog but no rule selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKey {
    #[serde(rename = "PMCC_CallDiagonal")]
    PmccCallDiagonal,
    PutDiagonal,
    BearCallSpread,
    BullPutSpread,
    LongPut,
    LongCall,
    Wait,
}

impl StrategyKey {
    /// Every key, in catalog order
    pub const ALL: [StrategyKey; 7] = [
        StrategyKey::PmccCallDiagonal,
        StrategyKey::PutDiagonal,
        StrategyKey::BearCallSpread,
        StrategyKey::BullPutSpread,
        StrategyKey::LongPut,
        StrategyKey::LongCall,
        StrategyKey::Wait,
    ];

    /// Short name used on the strategy badge
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKey::PmccCallDiagonal => "PMCC / Call Diagonal",
            StrategyKey::PutDiagonal => "Put Diagonal",
            StrategyKey::BearCallSpread => "Bear Call Spread",
            StrategyKey::BullPutSpread => "Bull Put Spread",
            StrategyKey::LongPut => "Long Put",
            StrategyKey::LongCall => "Long Call",
            StrategyKey::Wait => "Wait / structure not ideal",
        }
    }

    /// True for the two diagonal structures (long far leg, short near leg)
    pub fn is_diagonal(&self) -> bool {
        matches!(self, StrategyKey::PmccCallDiagonal | StrategyKey::PutDiagonal)
    }
}

impl std::fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKey::PmccCallDiagonal => write!(f, "PMCC_CallDiagonal"),
            StrategyKey::PutDiagonal => write!(f, "PutDiagonal"),
            StrategyKey::BearCallSpread => write!(f, "BearCallSpread"),
            StrategyKey::BullPutSpread => write!(f, "BullPutSpread"),
            StrategyKey::LongPut => write!(f, "LongPut"),
            StrategyKey::LongCall => write!(f, "LongCall"),
            StrategyKey::Wait => write!(f, "Wait"),
        }
    }
}
