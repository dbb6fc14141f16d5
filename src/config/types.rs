//! Configuration types

use serde::{Deserialize, Serialize};

/// Upper bound the settings UI allows for each weight
pub const WEIGHT_UI_MAX: f64 = 50.0;
/// Upper bound the settings UI allows for each threshold
pub const THRESHOLD_UI_MAX: f64 = 100.0;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scoring weights and advice thresholds
    #[serde(default)]
    pub scoring: Settings,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Scoring weights and advice thresholds
///
/// Values are used exactly as given. Negative weights or `thr_open <
/// thr_small` produce a result computed under those settings; see
/// [`Settings::ui_bounds_violations`] for a non-enforcing check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Trend base weight
    #[serde(default = "default_w_trend")]
    pub w_trend: f64,
    /// Added when net delta is positive
    #[serde(default = "default_w_delta")]
    pub w_delta: f64,
    /// Added when net theta is positive
    #[serde(default = "default_w_theta")]
    pub w_theta: f64,
    /// Added when near IV exceeds far IV
    #[serde(default = "default_w_iv")]
    pub w_iv: f64,
    /// Subtracted when earnings are imminent and near IV is rich
    #[serde(default = "default_w_earnings_penalty")]
    pub w_earnings_penalty: f64,
    /// Minimum score for a full-size entry
    #[serde(default = "default_thr_open")]
    pub thr_open: f64,
    /// Minimum score for a small entry
    #[serde(default = "default_thr_small")]
    pub thr_small: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            w_trend: default_w_trend(),
            w_delta: default_w_delta(),
            w_theta: default_w_theta(),
            w_iv: default_w_iv(),
            w_earnings_penalty: default_w_earnings_penalty(),
            thr_open: default_thr_open(),
            thr_small: default_thr_small(),
        }
    }
}

impl Settings {
    /// Overlay the fields present in `partial` on top of `self`
    pub fn merged(&self, partial: &PartialSettings) -> Self {
        Self {
            w_trend: partial.w_trend.unwrap_or(self.w_trend),
            w_delta: partial.w_delta.unwrap_or(self.w_delta),
            w_theta: partial.w_theta.unwrap_or(self.w_theta),
            w_iv: partial.w_iv.unwrap_or(self.w_iv),
            w_earnings_penalty: partial
                .w_earnings_penalty
                .unwrap_or(self.w_earnings_penalty),
            thr_open: partial.thr_open.unwrap_or(self.thr_open),
            thr_small: partial.thr_small.unwrap_or(self.thr_small),
        }
    }

    /// Describe every field outside the UI range, plus a threshold inversion.
    ///
    /// Purely informational: nothing is clamped or rejected.
    pub fn ui_bounds_violations(&self) -> Vec<String> {
        let weights = [
            ("w_trend", self.w_trend),
            ("w_delta", self.w_delta),
            ("w_theta", self.w_theta),
            ("w_iv", self.w_iv),
            ("w_earnings_penalty", self.w_earnings_penalty),
        ];
        let thresholds = [("thr_open", self.thr_open), ("thr_small", self.thr_small)];

        let mut out: Vec<String> = weights
            .iter()
            .filter(|(_, v)| !(0.0..=WEIGHT_UI_MAX).contains(v))
            .map(|(name, v)| format!("{name}={v} outside [0, {WEIGHT_UI_MAX}]"))
            .collect();

        out.extend(
            thresholds
                .iter()
                .filter(|(_, v)| !(0.0..=THRESHOLD_UI_MAX).contains(v))
                .map(|(name, v)| format!("{name}={v} outside [0, {THRESHOLD_UI_MAX}]")),
        );

        if self.thr_open < self.thr_small {
            out.push(format!(
                "thr_open={} below thr_small={}; the small tier is unreachable",
                self.thr_open, self.thr_small
            ));
        }
        out
    }
}

fn default_w_trend() -> f64 {
    30.0
}

fn default_w_delta() -> f64 {
    25.0
}

fn default_w_theta() -> f64 {
    25.0
}

fn default_w_iv() -> f64 {
    20.0
}

fn default_w_earnings_penalty() -> f64 {
    15.0
}

fn default_thr_open() -> f64 {
    80.0
}

fn default_thr_small() -> f64 {
    60.0
}

/// Settings where any field may be omitted; omitted fields keep their defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    #[serde(default)]
    pub w_trend: Option<f64>,
    #[serde(default)]
    pub w_delta: Option<f64>,
    #[serde(default)]
    pub w_theta: Option<f64>,
    #[serde(default)]
    pub w_iv: Option<f64>,
    #[serde(default)]
    pub w_earnings_penalty: Option<f64>,
    #[serde(default)]
    pub thr_open: Option<f64>,
    #[serde(default)]
    pub thr_small: Option<f64>,
}

impl PartialSettings {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Settings> for PartialSettings {
    fn from(s: Settings) -> Self {
        Self {
            w_trend: Some(s.w_trend),
            w_delta: Some(s.w_delta),
            w_theta: Some(s.w_theta),
            w_iv: Some(s.w_iv),
            w_earnings_penalty: Some(s.w_earnings_penalty),
            thr_open: Some(s.thr_open),
            thr_small: Some(s.thr_small),
        }
    }
}

/// Output format for the CLI report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Report format when the CLI does not specify one
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
