//! Option Strategy Advisor - Main Entry Point
//!
//! Collects a setup from a preset, a JSON scenario file and/or flags, scores
//! it and prints the recommendation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use option_strategy_advisor::config::{load_config, OutputFormat};
use option_strategy_advisor::{
    evaluate, report, Inputs, LenientNumber, PartialSettings, Preset, RawInputs,
};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Human-readable report
    Text,
    /// Full recommendation as pretty JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "ADVISOR_CONFIG", default_value = "advisor.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Start from a built-in scenario (up-pmcc, sideways-put-diagonal, down-bear-call)
    #[arg(long)]
    preset: Option<Preset>,

    /// JSON scenario file (camelCase field names); fields override the preset
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Trend direction: up, sideways or down
    #[arg(long)]
    trend: Option<String>,

    /// Days to next earnings; blank means unknown
    #[arg(long, allow_hyphen_values = true)]
    earnings_days: Option<String>,

    /// Near-dated ATM implied volatility (%)
    #[arg(long, allow_hyphen_values = true)]
    near_atm_iv: Option<String>,

    /// Far-dated ATM implied volatility (%)
    #[arg(long, allow_hyphen_values = true)]
    far_atm_iv: Option<String>,

    /// Delta of the long far-dated leg, signed
    #[arg(long, allow_hyphen_values = true)]
    buy_delta: Option<String>,

    /// Delta of the short near-dated leg, signed
    #[arg(long, allow_hyphen_values = true)]
    sell_delta: Option<String>,

    /// Theta of the long far-dated leg, signed
    #[arg(long, allow_hyphen_values = true)]
    buy_theta: Option<String>,

    /// Theta of the short near-dated leg, signed
    #[arg(long, allow_hyphen_values = true)]
    sell_theta: Option<String>,

    /// Days to expiry of the short leg; blank means unknown
    #[arg(long, allow_hyphen_values = true)]
    sell_dte: Option<String>,

    /// Trend weight
    #[arg(long, allow_hyphen_values = true)]
    w_trend: Option<f64>,

    /// Net delta weight
    #[arg(long, allow_hyphen_values = true)]
    w_delta: Option<f64>,

    /// Net theta weight
    #[arg(long, allow_hyphen_values = true)]
    w_theta: Option<f64>,

    /// IV structure weight
    #[arg(long, allow_hyphen_values = true)]
    w_iv: Option<f64>,

    /// Earnings penalty
    #[arg(long, allow_hyphen_values = true)]
    w_earnings_penalty: Option<f64>,

    /// Minimum score to open a full position
    #[arg(long, allow_hyphen_values = true)]
    thr_open: Option<f64>,

    /// Minimum score to open a small position
    #[arg(long, allow_hyphen_values = true)]
    thr_small: Option<f64>,

    /// Output format; overrides the config file
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

impl Args {
    fn flag_inputs(&self) -> RawInputs {
        let num = |v: &Option<String>| v.clone().map(LenientNumber::from);
        RawInputs {
            trend: self.trend.clone(),
            earnings_days: num(&self.earnings_days),
            near_atm_iv: num(&self.near_atm_iv),
            far_atm_iv: num(&self.far_atm_iv),
            buy_delta: num(&self.buy_delta),
            sell_delta: num(&self.sell_delta),
            buy_theta: num(&self.buy_theta),
            sell_theta: num(&self.sell_theta),
            sell_dte: num(&self.sell_dte),
        }
    }

    fn flag_settings(&self) -> PartialSettings {
        PartialSettings {
            w_trend: self.w_trend,
            w_delta: self.w_delta,
            w_theta: self.w_theta,
            w_iv: self.w_iv,
            w_earnings_penalty: self.w_earnings_penalty,
            thr_open: self.thr_open,
            thr_small: self.thr_small,
        }
    }
}

fn parse_level(s: &str) -> Level {
    match s.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let app_config = load_config(Some(&args.config)).context("loading configuration")?;

    // Initialize logging
    let level = parse_level(
        args.log_level
            .as_deref()
            .unwrap_or(&app_config.settings.log_level),
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!(config = %args.config, "Starting option strategy advisor");

    // Inputs: preset < scenario file < flags
    let preset = args.preset.unwrap_or_default();
    let mut raw = RawInputs::from(&preset.inputs());
    if let Some(path) = &args.input {
        let file = RawInputs::from_json_file(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        raw = raw.overlay(file);
    }
    raw = raw.overlay(args.flag_inputs());

    let inputs = Inputs::from_raw(&raw).context("building inputs")?;
    info!(%preset, trend = %inputs.trend, "Inputs resolved");

    // Settings: defaults < config file < environment < flags
    let settings = app_config.scoring.merged(&args.flag_settings());
    for problem in settings.ui_bounds_violations() {
        warn!(%problem, "Settings outside the usual range, using as given");
    }

    let result = evaluate(&inputs, &settings);

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(app_config.settings.format);

    match format {
        OutputFormat::Text => print!("{}", report::Report(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
