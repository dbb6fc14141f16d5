use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::common::errors::{AdvisorError, Result};
use crate::common::numeric::{finite_or, to_num, to_opt_num, LenientNumber};
use crate::common::types::{Advice, Side, StrategyKey, Trend};
use crate::strategy::docs::StrategyDoc;

/// Day count used when earnings or expiry are unknown ("not imminent")
pub const FAR_AWAY_DAYS: f64 = 999.0;

/// One evaluation's worth of market and position readings
///
/// Deltas and thetas are per contract and signed. The buy leg is the
/// far-dated long option, the sell leg the near-dated short one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub trend: Trend,
    /// Days to next earnings; `None` means far away
    #[serde(default)]
    pub earnings_days: Option<f64>,
    /// Near-dated ATM implied volatility, percent
    #[serde(rename = "nearAtmIV")]
    pub near_atm_iv: f64,
    /// Far-dated ATM implied volatility, percent
    #[serde(rename = "farAtmIV")]
    pub far_atm_iv: f64,
    pub buy_delta: f64,
    pub sell_delta: f64,
    pub buy_theta: f64,
    pub sell_theta: f64,
    /// Days to expiry of the short leg; `None` means far away
    #[serde(default, rename = "sellDTE")]
    pub sell_dte: Option<f64>,
}

impl Inputs {
    /// Coerce boundary values into engine inputs.
    ///
    /// Numeric fields that are blank or unparseable become `0`. The two day
    /// counts stay `None` instead, so the engine can apply its far-away
    /// sentinel.
    pub fn from_raw(raw: &RawInputs) -> Result<Self> {
        let trend = match &raw.trend {
            Some(t) => t.parse()?,
            None => return Err(AdvisorError::InvalidTrend("<missing>".to_string())),
        };

        Ok(Self {
            trend,
            earnings_days: to_opt_num(raw.earnings_days.as_ref()),
            near_atm_iv: to_num(raw.near_atm_iv.as_ref(), 0.0),
            far_atm_iv: to_num(raw.far_atm_iv.as_ref(), 0.0),
            buy_delta: to_num(raw.buy_delta.as_ref(), 0.0),
            sell_delta: to_num(raw.sell_delta.as_ref(), 0.0),
            buy_theta: to_num(raw.buy_theta.as_ref(), 0.0),
            sell_theta: to_num(raw.sell_theta.as_ref(), 0.0),
            sell_dte: to_opt_num(raw.sell_dte.as_ref()),
        })
    }

    /// Replace non-finite values and resolve the day-count sentinels
    pub(crate) fn sanitized(&self) -> Sanitized {
        Sanitized {
            trend: self.trend,
            earnings_days: self
                .earnings_days
                .map_or(FAR_AWAY_DAYS, |d| finite_or(d, FAR_AWAY_DAYS)),
            near_atm_iv: finite_or(self.near_atm_iv, 0.0),
            far_atm_iv: finite_or(self.far_atm_iv, 0.0),
            buy_delta: finite_or(self.buy_delta, 0.0),
            sell_delta: finite_or(self.sell_delta, 0.0),
            buy_theta: finite_or(self.buy_theta, 0.0),
            sell_theta: finite_or(self.sell_theta, 0.0),
            sell_dte: self
                .sell_dte
                .map_or(FAR_AWAY_DAYS, |d| finite_or(d, FAR_AWAY_DAYS)),
        }
    }
}

/// Inputs exactly as collected from a form, file or command line
///
/// Every field is optional; numbers may arrive as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputs {
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub earnings_days: Option<LenientNumber>,
    #[serde(default, rename = "nearAtmIV")]
    pub near_atm_iv: Option<LenientNumber>,
    #[serde(default, rename = "farAtmIV")]
    pub far_atm_iv: Option<LenientNumber>,
    #[serde(default)]
    pub buy_delta: Option<LenientNumber>,
    #[serde(default)]
    pub sell_delta: Option<LenientNumber>,
    #[serde(default)]
    pub buy_theta: Option<LenientNumber>,
    #[serde(default)]
    pub sell_theta: Option<LenientNumber>,
    #[serde(default, rename = "sellDTE")]
    pub sell_dte: Option<LenientNumber>,
}

impl RawInputs {
    /// Read a scenario from a JSON file using the camelCase field names
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AdvisorError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Overlay every field present in `other` on top of `self`
    pub fn overlay(mut self, other: RawInputs) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $( if other.$field.is_some() { self.$field = other.$field; } )*
            };
        }
        take!(
            trend,
            earnings_days,
            near_atm_iv,
            far_atm_iv,
            buy_delta,
            sell_delta,
            buy_theta,
            sell_theta,
            sell_dte
        );
        self
    }
}

impl From<&Inputs> for RawInputs {
    fn from(i: &Inputs) -> Self {
        Self {
            trend: Some(i.trend.to_string()),
            earnings_days: i.earnings_days.map(LenientNumber::from),
            near_atm_iv: Some(i.near_atm_iv.into()),
            far_atm_iv: Some(i.far_atm_iv.into()),
            buy_delta: Some(i.buy_delta.into()),
            sell_delta: Some(i.sell_delta.into()),
            buy_theta: Some(i.buy_theta.into()),
            sell_theta: Some(i.sell_theta.into()),
            sell_dte: i.sell_dte.map(LenientNumber::from),
        }
    }
}

/// Inputs after the finiteness guard; day counts resolved to numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sanitized {
    pub trend: Trend,
    pub earnings_days: f64,
    pub near_atm_iv: f64,
    pub far_atm_iv: f64,
    pub buy_delta: f64,
    pub sell_delta: f64,
    pub buy_theta: f64,
    pub sell_theta: f64,
    pub sell_dte: f64,
}

/// Position-level quantities computed from the two legs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Derived {
    pub net_delta: f64,
    pub net_theta: f64,
    /// Near ATM IV minus far ATM IV
    pub iv_structure: f64,
}

impl Derived {
    /// Finite legs can still overflow when combined, so each sum is guarded too
    pub(crate) fn from_sanitized(s: &Sanitized) -> Self {
        Self {
            net_delta: finite_or(s.buy_delta + s.sell_delta, 0.0),
            net_theta: finite_or(s.buy_theta + s.sell_theta, 0.0),
            iv_structure: finite_or(s.near_atm_iv - s.far_atm_iv, 0.0),
        }
    }
}

/// Advisory delta ranges for picking strikes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrikeGuide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_delta_range: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_delta_range: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Everything one evaluation produces
///
/// Built fresh by each call to the engine and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended: StrategyKey,
    pub side: Side,
    /// 0 to 100 inclusive
    pub score: f64,
    pub advice: Advice,
    pub net_delta: f64,
    pub net_theta: f64,
    pub iv_structure: f64,
    pub warnings: Vec<String>,
    pub adjustments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_guide: Option<StrikeGuide>,
    pub explanation: String,
    /// The full static catalog
    pub docs: &'static [StrategyDoc],
}

impl Recommendation {
    /// Catalog entry for the recommended strategy
    pub fn doc(&self) -> &'static StrategyDoc {
        crate::strategy::docs::doc_for(self.recommended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(trend: &str) -> RawInputs {
        RawInputs {
            trend: Some(trend.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_raw_coerces_text_and_blanks() {
        let r = RawInputs {
            earnings_days: Some("".into()),
            near_atm_iv: Some("42".into()),
            far_atm_iv: Some(30.0.into()),
            buy_delta: Some("0.8".into()),
            sell_delta: Some("oops".into()),
            sell_dte: Some(" 21 ".into()),
            ..raw("up")
        };
        let i = Inputs::from_raw(&r).unwrap();
        assert_eq!(i.trend, Trend::Up);
        assert_eq!(i.earnings_days, None);
        assert_eq!(i.near_atm_iv, 42.0);
        assert_eq!(i.far_atm_iv, 30.0);
        assert_eq!(i.buy_delta, 0.8);
        assert_eq!(i.sell_delta, 0.0);
        assert_eq!(i.buy_theta, 0.0);
        assert_eq!(i.sell_dte, Some(21.0));
    }

    #[test]
    fn test_from_raw_requires_trend() {
        assert!(Inputs::from_raw(&RawInputs::default()).is_err());
        assert!(Inputs::from_raw(&raw("north")).is_err());
    }

    #[test]
    fn test_sanitized_applies_sentinels() {
        let i = Inputs {
            trend: Trend::Down,
            earnings_days: None,
            near_atm_iv: f64::NAN,
            far_atm_iv: 20.0,
            buy_delta: f64::INFINITY,
            sell_delta: -0.3,
            buy_theta: 0.0,
            sell_theta: 0.1,
            sell_dte: Some(f64::NAN),
        };
        let s = i.sanitized();
        assert_eq!(s.earnings_days, FAR_AWAY_DAYS);
        assert_eq!(s.sell_dte, FAR_AWAY_DAYS);
        assert_eq!(s.near_atm_iv, 0.0);
        assert_eq!(s.buy_delta, 0.0);
        assert_eq!(s.sell_delta, -0.3);
    }

    #[test]
    fn test_derived_overflow_collapses_to_zero() {
        let i = Inputs {
            trend: Trend::Up,
            earnings_days: None,
            near_atm_iv: 1.7e308,
            far_atm_iv: -1.7e308,
            buy_delta: 1e308,
            sell_delta: 1e308,
            buy_theta: -0.03,
            sell_theta: 0.09,
            sell_dte: None,
        };
        let d = Derived::from_sanitized(&i.sanitized());
        assert_eq!(d.net_delta, 0.0);
        assert_eq!(d.iv_structure, 0.0);
        assert!((d.net_theta - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_overlay_prefers_present_fields() {
        let base = RawInputs {
            buy_delta: Some(0.8.into()),
            sell_delta: Some(0.28.into()),
            ..raw("up")
        };
        let top = RawInputs {
            sell_delta: Some("0.5".into()),
            ..Default::default()
        };
        let merged = base.overlay(top);
        assert_eq!(merged.trend.as_deref(), Some("up"));
        assert_eq!(merged.buy_delta, Some(LenientNumber::Number(0.8)));
        assert_eq!(merged.sell_delta, Some(LenientNumber::Text("0.5".into())));
    }

    #[test]
    fn test_inputs_json_field_names() {
        let json = r#"{
            "trend": "Up", "earningsDays": 10,
            "nearAtmIV": 42, "farAtmIV": 30,
            "buyDelta": 0.8, "sellDelta": 0.28,
            "buyTheta": -0.03, "sellTheta": 0.09, "sellDTE": 21
        }"#;
        let i: Inputs = serde_json::from_str(json).unwrap();
        assert_eq!(i.near_atm_iv, 42.0);
        assert_eq!(i.sell_dte, Some(21.0));
    }
}
