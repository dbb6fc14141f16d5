//! Common test utilities and fixtures

#![allow(dead_code)]

use option_strategy_advisor::{Inputs, Trend};

/// Uptrend call diagonal, every condition favorable
pub fn scenario_a() -> Inputs {
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

/// Sideways put diagonal with too much short delta
pub fn scenario_b() -> Inputs {
    Inputs {
        trend: Trend::Sideways,
        earnings_days: Some(8.0),
        near_atm_iv: 48.0,
        far_atm_iv: 36.0,
        buy_delta: -0.32,
        sell_delta: -0.26,
        buy_theta: -0.03,
        sell_theta: 0.08,
        sell_dte: Some(16.0),
    }
}

/// Downtrend short call
pub fn scenario_c() -> Inputs {
    Inputs {
        trend: Trend::Down,
        earnings_days: Some(6.0),
        near_atm_iv: 58.0,
        far_atm_iv: 52.0,
        buy_delta: 0.0,
        sell_delta: 0.28,
        buy_theta: 0.0,
        sell_theta: 0.1,
        sell_dte: Some(9.0),
    }
}

/// Scenario A three days before earnings with a rich near expiry
pub fn earnings_scenario() -> Inputs {
    Inputs {
        earnings_days: Some(3.0),
        near_atm_iv: 65.0,
        far_atm_iv: 50.0,
        ..scenario_a()
    }
}

/// A spread of setups covering every trend and sign combination
pub fn grid() -> Vec<Inputs> {
    let mut out = Vec::new();
    for trend in [Trend::Up, Trend::Sideways, Trend::Down] {
        for net_delta in [-0.6, -0.1, 0.0, 0.15, 0.5] {
            for net_theta in [-0.05, 0.0, 0.005, 0.05] {
                for iv in [-8.0, 0.0, 6.0] {
                    for earnings in [None, Some(2.0), Some(30.0)] {
                        out.push(Inputs {
                            trend,
                            earnings_days: earnings,
                            near_atm_iv: 62.0 + iv,
                            far_atm_iv: 62.0,
                            buy_delta: net_delta - 0.25,
                            sell_delta: 0.25,
                            buy_theta: net_theta - 0.04,
                            sell_theta: 0.04,
                            sell_dte: Some(12.0),
                        });
                    }
                }
            }
        }
    }
    out
}
