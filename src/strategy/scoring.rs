//! Weighted setup score and the advice tier it maps to

use crate::common::types::{Advice, Trend};
use crate::config::types::Settings;
use crate::strategy::types::Derived;

/// Earnings within this many days count as imminent
pub const EARNINGS_WINDOW_DAYS: f64 = 5.0;
/// Near IV at or above this level is considered rich into earnings
pub const RICH_NEAR_IV: f64 = 60.0;

/// Round half up, so 2.5 -> 3 and -2.5 -> -2
#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Trend contribution: full weight for up, two thirds for sideways, one
/// third for down
pub fn trend_base(trend: Trend, w_trend: f64) -> f64 {
    match trend {
        Trend::Up => w_trend,
        Trend::Sideways => round_half_up(w_trend * (2.0 / 3.0)),
        Trend::Down => round_half_up(w_trend * (1.0 / 3.0)),
    }
}

/// True when earnings are close and the near expiry carries a rich IV premium
pub fn earnings_penalty_applies(earnings_days: f64, near_iv: f64, far_iv: f64) -> bool {
    earnings_days <= EARNINGS_WINDOW_DAYS && near_iv > far_iv && near_iv >= RICH_NEAR_IV
}

/// Score a setup, clamped to `[0, 100]`
pub fn score(
    trend: Trend,
    d: &Derived,
    earnings_days: f64,
    near_iv: f64,
    far_iv: f64,
    s: &Settings,
) -> f64 {
    let mut score = trend_base(trend, s.w_trend);

    if d.net_delta > 0.0 {
        score += s.w_delta;
    }
    if d.net_theta > 0.0 {
        score += s.w_theta;
    }
    if d.iv_structure > 0.0 {
        score += s.w_iv;
    }

    if earnings_penalty_applies(earnings_days, near_iv, far_iv) {
        score -= s.w_earnings_penalty;
    }

    // NaN weights would poison the clamp; treat the sum as zero instead
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

/// Map a score onto the open / small / wait tiers
pub fn advice(score: f64, s: &Settings) -> Advice {
    if score >= s.thr_open {
        Advice::Open
    } else if score >= s.thr_small {
        Advice::Small
    } else {
        Advice::Wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derived(net_delta: f64, net_theta: f64, iv_structure: f64) -> Derived {
        Derived {
            net_delta,
            net_theta,
            iv_structure,
        }
    }

    #[test]
    fn test_trend_base_defaults() {
        assert_eq!(trend_base(Trend::Up, 30.0), 30.0);
        assert_eq!(trend_base(Trend::Sideways, 30.0), 20.0);
        assert_eq!(trend_base(Trend::Down, 30.0), 10.0);
    }

    #[test]
    fn test_trend_base_rounds_half_up() {
        // 25 * 2/3 = 16.67, 25 / 3 = 8.33
        assert_eq!(trend_base(Trend::Sideways, 25.0), 17.0);
        assert_eq!(trend_base(Trend::Down, 25.0), 8.0);
        // 7.5 / 3 = 2.5 rounds up, -7.5 / 3 = -2.5 rounds toward +inf
        assert_eq!(trend_base(Trend::Down, 7.5), 3.0);
        assert_eq!(trend_base(Trend::Down, -7.5), -2.0);
    }

    #[test]
    fn test_all_positive_up_is_capped_at_100() {
        let s = Settings::default();
        let v = score(Trend::Up, &derived(1.0, 0.1, 10.0), 30.0, 42.0, 30.0, &s);
        assert_eq!(v, 100.0);
    }

    #[test]
    fn test_earnings_penalty() {
        let s = Settings::default();
        let d = derived(0.5, 0.05, 15.0);
        assert_eq!(score(Trend::Up, &d, 3.0, 65.0, 50.0, &s), 85.0);
        // Day 5 still counts
        assert_eq!(score(Trend::Up, &d, 5.0, 65.0, 50.0, &s), 85.0);
        // Day 6 does not
        assert_eq!(score(Trend::Up, &d, 6.0, 65.0, 50.0, &s), 100.0);
        // Near IV below the rich level
        assert_eq!(score(Trend::Up, &d, 3.0, 59.9, 50.0, &s), 100.0);
    }

    #[test]
    fn test_penalty_needs_near_above_far() {
        assert!(!earnings_penalty_applies(2.0, 70.0, 70.0));
        assert!(earnings_penalty_applies(2.0, 70.0, 69.0));
    }

    #[test]
    fn test_score_floor_is_zero() {
        let s = Settings {
            w_trend: 0.0,
            w_earnings_penalty: 50.0,
            ..Default::default()
        };
        let v = score(Trend::Down, &derived(-1.0, -1.0, 5.0), 1.0, 80.0, 75.0, &s);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_nan_weight_scores_zero() {
        let s = Settings {
            w_delta: f64::NAN,
            ..Default::default()
        };
        let v = score(Trend::Up, &derived(1.0, 0.1, 1.0), 30.0, 40.0, 30.0, &s);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_advice_tiers() {
        let s = Settings::default();
        assert_eq!(advice(100.0, &s), Advice::Open);
        assert_eq!(advice(80.0, &s), Advice::Open);
        assert_eq!(advice(79.0, &s), Advice::Small);
        assert_eq!(advice(60.0, &s), Advice::Small);
        assert_eq!(advice(59.0, &s), Advice::Wait);
    }

    #[test]
    fn test_inverted_thresholds_skip_small() {
        let s = Settings {
            thr_open: 50.0,
            thr_small: 70.0,
            ..Default::default()
        };
        assert_eq!(advice(55.0, &s), Advice::Open);
        assert_eq!(advice(45.0, &s), Advice::Wait);
    }
}
