//! Rule table mapping trend and Greeks to a catalog strategy

use crate::common::types::{Side, StrategyKey, Trend};
use crate::strategy::types::Derived;

/// Max |net delta| for a sideways put diagonal
pub const SIDEWAYS_MAX_ABS_DELTA: f64 = 0.2;

/// Pick the recommended strategy and side.
///
/// Rules are tried in order and the first match wins:
/// 1. Up, delta > 0, theta > 0, IV structure > 0: PMCC / call diagonal
/// 2. Sideways, theta > 0, IV structure > 0, |delta| <= 0.2: put diagonal
/// 3. Down, theta > 0: bear call spread, or a put diagonal when delta < 0
///    and IV structure > 0
/// 4. Up, theta <= 0, delta > 0: long call
/// 5. Down, theta <= 0, delta < 0: long put
///
/// Anything else is a wait.
pub fn classify(trend: Trend, d: &Derived) -> (StrategyKey, Side) {
    let Derived {
        net_delta,
        net_theta,
        iv_structure,
    } = *d;

    match trend {
        Trend::Up if net_delta > 0.0 && net_theta > 0.0 && iv_structure > 0.0 => {
            (StrategyKey::PmccCallDiagonal, Side::Call)
        }
        Trend::Sideways
            if net_theta > 0.0
                && iv_structure > 0.0
                && net_delta.abs() <= SIDEWAYS_MAX_ABS_DELTA =>
        {
            (StrategyKey::PutDiagonal, Side::Put)
        }
        Trend::Down if net_theta > 0.0 => {
            // Bearish delta with rich near IV is better served by a put diagonal
            if net_delta < 0.0 && iv_structure > 0.0 {
                (StrategyKey::PutDiagonal, Side::Put)
            } else {
                (StrategyKey::BearCallSpread, Side::Call)
            }
        }
        Trend::Up if net_theta <= 0.0 && net_delta > 0.0 => (StrategyKey::LongCall, Side::Call),
        Trend::Down if net_theta <= 0.0 && net_delta < 0.0 => (StrategyKey::LongPut, Side::Put),
        _ => (StrategyKey::Wait, Side::Neutral),
    }
}
