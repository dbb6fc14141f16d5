//! Built-in example scenarios

use std::str::FromStr;

use crate::common::errors::AdvisorError;
use crate::common::types::Trend;
use crate::strategy::types::Inputs;

/// Named example setup, one per typical market regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Uptrend with a call diagonal already on
    #[default]
    UpPmcc,
    /// Range-bound with a put diagonal
    SidewaysPutDiagonal,
    /// Downtrend with a short call
    DownBearCall,
}

impl Preset {
    pub const ALL: [Preset; 3] = [
        Preset::UpPmcc,
        Preset::SidewaysPutDiagonal,
        Preset::DownBearCall,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::UpPmcc => "up-pmcc",
            Preset::SidewaysPutDiagonal => "sideways-put-diagonal",
            Preset::DownBearCall => "down-bear-call",
        }
    }

    pub fn inputs(&self) -> Inputs {
        match self {
            Preset::UpPmcc => Inputs {
                trend: Trend::Up,
                earnings_days: Some(10.0),
                near_atm_iv: 42.0,
                far_atm_iv: 30.0,
                buy_delta: 0.8,
                sell_delta: 0.28,
                buy_theta: -0.03,
                sell_theta: 0.09,
                sell_dte: Some(21.0),
            },
            Preset::SidewaysPutDiagonal => Inputs {
                trend: Trend::Sideways,
                earnings_days: Some(8.0),
                near_atm_iv: 48.0,
                far_atm_iv: 36.0,
                buy_delta: -0.32,
                sell_delta: -0.26,
                buy_theta: -0.03,
                sell_theta: 0.08,
                sell_dte: Some(16.0),
            },
            Preset::DownBearCall => Inputs {
                trend: Trend::Down,
                earnings_days: Some(6.0),
                near_atm_iv: 58.0,
                far_atm_iv: 52.0,
                buy_delta: 0.0,
                sell_delta: 0.28,
                buy_theta: 0.0,
                sell_theta: 0.1,
                sell_dte: Some(9.0),
            },
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Preset {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AdvisorError::UnknownPreset(s.to_string()))
    }
}
