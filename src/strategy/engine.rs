//! Single-call strategy evaluation
//!
//! `compute` is total and pure: it reads only its arguments and the static
//! catalog, and every call builds a fresh [`Recommendation`].

use tracing::debug;

use crate::common::numeric::to_fixed;
use crate::config::types::{PartialSettings, Settings};
use crate::strategy::advisory;
use crate::strategy::classify::classify;
use crate::strategy::docs::STRATEGY_DOCS;
use crate::strategy::scoring;
use crate::strategy::types::{Derived, Inputs, Recommendation};

/// Evaluate `inputs` with `settings` merged over the defaults
pub fn compute(inputs: &Inputs, settings: Option<&PartialSettings>) -> Recommendation {
    let merged = match settings {
        Some(partial) => Settings::default().merged(partial),
        None => Settings::default(),
    };
    evaluate(inputs, &merged)
}

/// Evaluate `inputs` with a fully specified set of weights and thresholds
pub fn evaluate(inputs: &Inputs, settings: &Settings) -> Recommendation {
    let s = inputs.sanitized();
    let d = Derived::from_sanitized(&s);

    let (recommended, side) = classify(s.trend, &d);
    let score = scoring::score(
        s.trend,
        &d,
        s.earnings_days,
        s.near_atm_iv,
        s.far_atm_iv,
        settings,
    );
    let advice = scoring::advice(score, settings);

    let warnings = advisory::warnings(&s, &d);
    let adjustments = advisory::adjustments(recommended, &s, &d);
    let strike_guide = advisory::strike_guide(recommended);

    debug!(
        trend = %s.trend,
        net_delta = d.net_delta,
        net_theta = d.net_theta,
        iv_structure = d.iv_structure,
        %recommended,
        score,
        %advice,
        warnings = warnings.len(),
        adjustments = adjustments.len(),
        "Evaluated strategy setup"
    );

    Recommendation {
        recommended,
        side,
        score,
        advice,
        net_delta: d.net_delta,
        net_theta: d.net_theta,
        iv_structure: d.iv_structure,
        warnings,
        adjustments,
        strike_guide,
        explanation: explanation(&s.trend.to_string(), &d, score, settings),
        docs: &STRATEGY_DOCS,
    }
}

fn explanation(trend: &str, d: &Derived, score: f64, s: &Settings) -> String {
    format!(
        "Trend={trend}; net delta={}; net theta={}; IV structure (near-far)={}; \
         score={}; weights=[trend {} / delta {} / theta {} / IV {} / earnings penalty {}]; \
         thresholds=[open >= {}, small >= {}].",
        to_fixed(d.net_delta, 2),
        to_fixed(d.net_theta, 2),
        to_fixed(d.iv_structure, 2),
        to_fixed(score, 0),
        s.w_trend,
        s.w_delta,
        s.w_theta,
        s.w_iv,
        s.w_earnings_penalty,
        s.thr_open,
        s.thr_small,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::{Advice, Side, StrategyKey, Trend};

    fn pmcc_inputs() -> Inputs {
        Inputs {
            trend: Trend::Up,
            earnings_days: Some(10.0),
            near_atm_iv: 42.0,
            far_atm_iv: 30.0,
            buy_delta: 0.8,
            sell_delta: 0.28,
            buy_theta: -0.03,
            sell_theta: 0.09,
            sell_dte: Some(21.0),
        }
    }

    #[test]
    fn test_compute_without_settings_uses_defaults() {
        let a = compute(&pmcc_inputs(), None);
        let b = evaluate(&pmcc_inputs(), &Settings::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_settings_change_only_named_fields() {
        let partial = PartialSettings {
            thr_open: Some(101.0),
            ..Default::default()
        };
        let r = compute(&pmcc_inputs(), Some(&partial));
        assert_eq!(r.score, 100.0);
        assert_eq!(r.advice, Advice::Small);
    }

    #[test]
    fn test_explanation_template() {
        let r = compute(&pmcc_inputs(), None);
        assert_eq!(
            r.explanation,
            "Trend=Up; net delta=1.08; net theta=0.06; IV structure (near-far)=12.00; \
             score=100; weights=[trend 30 / delta 25 / theta 25 / IV 20 / earnings penalty 15]; \
             thresholds=[open >= 80, small >= 60]."
        );
    }

    #[test]
    fn test_docs_table_is_attached() {
        let r = compute(&pmcc_inputs(), None);
        assert_eq!(r.docs.len(), 7);
        assert_eq!(r.doc().key, StrategyKey::PmccCallDiagonal);
    }

    #[test]
    fn test_missing_day_counts_are_far_away() {
        let inputs = Inputs {
            earnings_days: None,
            near_atm_iv: 80.0,
            sell_dte: None,
            sell_delta: 0.05,
            ..pmcc_inputs()
        };
        let r = compute(&inputs, None);
        assert!(r.warnings.is_empty());
        assert!(!r.adjustments.iter().any(|a| a.contains("buy it back early")));
    }

    #[test]
    fn test_non_finite_inputs_do_not_reach_the_result() {
        let inputs = Inputs {
            buy_delta: f64::NAN,
            sell_theta: f64::INFINITY,
            ..pmcc_inputs()
        };
        let r = compute(&inputs, None);
        assert!(r.net_delta.is_finite());
        assert!(r.net_theta.is_finite());
        assert_eq!(r.net_delta, 0.28);
        assert_eq!(r.net_theta, -0.03);
        assert_eq!(r.side, Side::Call);
        assert_eq!(r.recommended, StrategyKey::LongCall);
    }

    #[test]
    fn test_explanation_rounds_ties_up() {
        let inputs = Inputs {
            buy_delta: 0.125,
            sell_delta: 0.0,
            ..pmcc_inputs()
        };
        let partial = PartialSettings {
            w_trend: Some(10.0),
            w_iv: Some(20.5),
            ..Default::default()
        };
        let r = compute(&inputs, Some(&partial));
        assert_eq!(r.score, 80.5);
        assert_eq!(r.advice, Advice::Open);
        assert!(r.explanation.contains("net delta=0.13;"), "{}", r.explanation);
        assert!(r.explanation.contains("score=81;"), "{}", r.explanation);
    }

    #[test]
    fn test_overflowing_sums_stay_finite() {
        let inputs = Inputs {
            near_atm_iv: 1.7e308,
            far_atm_iv: -1.7e308,
            buy_delta: 1e308,
            sell_delta: 1e308,
            ..pmcc_inputs()
        };
        let r = compute(&inputs, None);
        assert!(r.net_delta.is_finite());
        assert!(r.iv_structure.is_finite());
        assert!((0.0..=100.0).contains(&r.score));
        assert!(!r.explanation.contains("inf"), "{}", r.explanation);

        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["netDelta"], 0.0);
        assert_eq!(v["ivStructure"], 0.0);
    }
}
