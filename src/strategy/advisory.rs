//! Warnings, adjustment tips and strike guidance
//!
//! Each check is independent. Messages are appended in a fixed order so the
//! output is stable for identical inputs.

use crate::common::types::StrategyKey;
use crate::strategy::scoring::{EARNINGS_WINDOW_DAYS, RICH_NEAR_IV};
use crate::strategy::types::{Derived, Sanitized, StrikeGuide};

/// Short leg |delta| above which assignment risk calls for a roll
pub const ROLL_SHORT_DELTA: f64 = 0.45;
/// Short leg DTE at or below which an early buyback is considered
pub const BUYBACK_DTE: f64 = 10.0;
/// Short leg |delta| below which little premium remains
pub const BUYBACK_SHORT_DELTA: f64 = 0.15;
/// Target net delta band for a PMCC
pub const PMCC_NET_DELTA: (f64, f64) = (0.35, 0.65);
/// Target net delta band for a put diagonal
pub const PUT_DIAGONAL_NET_DELTA: (f64, f64) = (-0.15, 0.15);
/// Net theta at or below this is considered weak
pub const WEAK_THETA: f64 = 0.01;

pub const WARN_IV_STRUCTURE: &str = "IV structure <= 0: the near expiry is not richer than the \
     far one, so you would be buying expensive and selling cheap. Unfavorable for diagonals and PMCC.";
pub const WARN_THETA: &str =
    "Net theta <= 0: time decay is working against you. Unfavorable for income strategies.";
pub const WARN_EARNINGS: &str = "Earnings within 5 days and near IV is very high: buy back the \
     short leg or cut size first, and rebuild after the IV crush.";

pub const ADJ_ROLL: &str = "Short leg delta > 0.45: consider rolling up (higher strike) or \
     rolling out (later expiry) to lower assignment risk.";
pub const ADJ_BUYBACK: &str = "Short leg DTE <= 10 and delta < 0.15: buy it back early to lock \
     in the remaining theta, then sell the next cycle.";
pub const ADJ_PMCC_LOW_DELTA: &str = "Net delta below 0.35: move the long leg deeper ITM or the \
     short leg further OTM to strengthen bullish exposure.";
pub const ADJ_PMCC_HIGH_DELTA: &str = "Net delta above 0.65: move the short leg slightly toward \
     ATM or the long leg slightly further out to reduce excess directional exposure.";
pub const ADJ_PUT_DIAG_LOW_DELTA: &str = "Net delta < -0.15: move the short leg up (smaller \
     absolute delta) or bring the long leg closer to ATM to return net delta to -0.15..+0.15.";
pub const ADJ_PUT_DIAG_HIGH_DELTA: &str = "Net delta > +0.15: move the short leg down (larger \
     absolute delta) or push the long leg further OTM.";
pub const ADJ_WEAK_THETA: &str = "Net theta is weak: shorten the short leg to 15-30 DTE, move it \
     toward ATM (delta 0.25-0.35), or wait for higher IV before opening.";

/// Risk warnings for the setup, independent of the recommendation
pub(crate) fn warnings(s: &Sanitized, d: &Derived) -> Vec<String> {
    let mut out = Vec::new();

    if d.iv_structure <= 0.0 {
        out.push(WARN_IV_STRUCTURE.to_string());
    }
    if d.net_theta <= 0.0 {
        out.push(WARN_THETA.to_string());
    }
    if s.earnings_days <= EARNINGS_WINDOW_DAYS && s.near_atm_iv >= RICH_NEAR_IV {
        out.push(WARN_EARNINGS.to_string());
    }

    out
}

/// Position adjustment tips for the recommended strategy
pub(crate) fn adjustments(recommended: StrategyKey, s: &Sanitized, d: &Derived) -> Vec<String> {
    let mut out = Vec::new();
    let short_delta = s.sell_delta.abs();

    if recommended.is_diagonal() && short_delta > ROLL_SHORT_DELTA {
        out.push(ADJ_ROLL.to_string());
    }
    if s.sell_dte <= BUYBACK_DTE && short_delta < BUYBACK_SHORT_DELTA {
        out.push(ADJ_BUYBACK.to_string());
    }

    match recommended {
        StrategyKey::PmccCallDiagonal => {
            if d.net_delta < PMCC_NET_DELTA.0 {
                out.push(ADJ_PMCC_LOW_DELTA.to_string());
            }
            if d.net_delta > PMCC_NET_DELTA.1 {
                out.push(ADJ_PMCC_HIGH_DELTA.to_string());
            }
        }
        StrategyKey::PutDiagonal => {
            if d.net_delta < PUT_DIAGONAL_NET_DELTA.0 {
                out.push(ADJ_PUT_DIAG_LOW_DELTA.to_string());
            }
            if d.net_delta > PUT_DIAGONAL_NET_DELTA.1 {
                out.push(ADJ_PUT_DIAG_HIGH_DELTA.to_string());
            }
        }
        _ => {}
    }

    if d.net_theta <= WEAK_THETA {
        out.push(ADJ_WEAK_THETA.to_string());
    }

    out
}

/// Delta ranges for choosing strikes; only the spreads and diagonals get one
pub fn strike_guide(recommended: StrategyKey) -> Option<StrikeGuide> {
    match recommended {
        StrategyKey::PmccCallDiagonal => Some(StrikeGuide {
            long_delta_range: Some((0.75, 0.85)),
            short_delta_range: Some((0.20, 0.35)),
            note: Some(
                "Target net delta 0.35-0.65; profits on a rise and in a sideways market."
                    .to_string(),
            ),
        }),
        StrategyKey::PutDiagonal => Some(StrikeGuide {
            long_delta_range: Some((-0.45, -0.25)),
            short_delta_range: Some((-0.35, -0.20)),
            note: Some(
                "Collects income sideways or on a slight decline; keep net delta within \
                 -0.15..+0.15."
                    .to_string(),
            ),
        }),
        StrategyKey::BearCallSpread => Some(StrikeGuide {
            long_delta_range: None,
            short_delta_range: Some((0.20, 0.35)),
            note: Some(
                "Sell the call near overhead resistance; 7-20 DTE collects theta fastest."
                    .to_string(),
            ),
        }),
        _ => None,
    }
}
