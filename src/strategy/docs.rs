//! Static strategy catalog
//!
//! Reference text shown alongside every recommendation. The table is built
//! at compile time and never changes.

use serde::Serialize;

use crate::common::types::StrategyKey;

/// Educational notes for one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyDoc {
    pub key: StrategyKey,
    pub title: &'static str,
    /// What the position is and how it makes money
    pub summary: &'static str,
    /// Market conditions that suit it
    pub market: &'static str,
    /// How to adjust or roll it
    pub management: &'static str,
    /// Risk and exit rules
    pub exit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<&'static str>,
}

/// The full catalog, in [`StrategyKey::ALL`] order
pub static STRATEGY_DOCS: [StrategyDoc; 7] = [
    StrategyDoc {
        key: StrategyKey::PmccCallDiagonal,
        title: "PMCC / Call Diagonal (poor man's covered call)",
        summary: "Bullish plus income: buy a far-dated deep ITM call (delta 0.75-0.85) and sell a \
                  near-dated OTM call (delta 0.20-0.35). Profits when the underlying rises or \
                  drifts sideways, loses when it falls. Theta positive, directional exposure positive.",
        market: "Trend up; near ATM IV at or above far ATM IV so selling near and buying far is \
                 favorable; overall IV rank in the 30-70 range suits it best.",
        management: "Short leg delta > 0.45: roll up or roll forward. Short leg DTE <= 10 and delta \
                     < 0.15: buy it back early and sell the next cycle. Close the short leg 3-5 \
                     days before earnings.",
        exit: "Net theta turns negative, net delta turns negative, or a key moving average breaks: \
               close or reduce. A sharp rally toward the short strike: roll the short leg up. \
               Black swan: close the short leg first and keep the long leg.",
        extra: Some("Suits mildly bullish or steadily rising markets: gains on a rise or a flat \
                     tape, loses on a decline."),
    },
    StrategyDoc {
        key: StrategyKey::PutDiagonal,
        title: "Put Diagonal (bearish or sideways income)",
        summary: "Buy a far-dated put and sell a near-dated put. With the far leg ITM the position \
                  leans bearish (net delta < 0, theta > 0); with the far leg near ATM and the short \
                  delta controlled it collects income in a range (net delta near 0, theta > 0).",
        market: "Trend down or weak sideways; near ATM IV at or above far ATM IV; falling or \
                 choppy markets with rising IV help (net vega is usually positive).",
        management: "Short leg |delta| > 0.45: move it or roll it out. DTE <= 10 and |delta| < \
                     0.15: buy it back early. To get more neutral, lower the far leg's |delta| or \
                     move the short leg up.",
        exit: "Trend turns strong, net delta stays positive and the long leg's loss widens: close \
               or convert to a PMCC. Buy back the short leg before earnings. Handle early when \
               price nears the short strike.",
        extra: None,
    },
    StrategyDoc {
        key: StrategyKey::BearCallSpread,
        title: "Bear Call Spread (credit call vertical)",
        summary: "Sell a lower-strike call and buy a higher-strike call as protection. Theta > 0, \
                  delta < 0; suits a mild decline or a drifting-lower range with limited risk.",
        market: "Trend down; mid to high overall IV rank (> 50) is better; sell the short leg \
                 above resistance (delta 0.20-0.35).",
        management: "Short leg delta > 0.45: raise the protective leg or roll the whole spread \
                     up or out. Take profits early at 50-70% of max. Buy back early when delta < \
                     0.15 near expiry.",
        exit: "Price breaks strongly above the short strike: adjust or stop out. Avoid short-dated \
               exposure into earnings.",
        extra: None,
    },
    StrategyDoc {
        key: StrategyKey::BullPutSpread,
        title: "Bull Put Spread (credit put vertical)",
        summary: "Sell a higher-strike put and buy a lower-strike put as protection. Theta > 0, \
                  delta > 0; suits a mild rise or a drifting-higher range with limited risk.",
        market: "Trend up or firm sideways; mid to high overall IV rank (> 50) is friendlier; buy \
                 the protective leg below support.",
        management: "Short leg delta > 0.45: lower the protective leg or roll the whole spread \
                     down or out. Take profits early at 50-70% of max. Buy back early when DTE is \
                     short and delta < 0.15.",
        exit: "Price breaks strongly below the short strike and net delta turns negative: adjust \
               or stop out. Reduce exposure ahead of earnings.",
        extra: None,
    },
    StrategyDoc {
        key: StrategyKey::LongPut,
        title: "Long Put (bearish debit)",
        summary: "Delta < 0, theta < 0, vega > 0. A decline with rising IV gives leveraged gains; \
                  not meant to be held long.",
        market: "Trend clearly weakening or an event-driven decline; IV rank should not be too \
                 high to avoid overpaying.",
        management: "Scale out as profit targets hit; reduce when IV spikes or ahead of events; \
                     switch to a put spread if time decay is too fast.",
        exit: "Thesis fails or theta bleed is too fast: stop out promptly. Keep the holding \
               period short.",
        extra: None,
    },
    StrategyDoc {
        key: StrategyKey::LongCall,
        title: "Long Call (bullish debit)",
        summary: "Delta > 0, theta < 0, vega > 0. A rally with rising IV amplifies gains; not \
                  meant to be held long.",
        market: "Trend reversing upward or breaking out; IV rank should not be too high.",
        management: "Scale out as profit targets hit; can become the long leg of a PMCC; if price \
                     stalls, convert to a call diagonal.",
        exit: "Thesis fails or time decay is too fast: stop out. Reduce naked long exposure \
               before an event resolves.",
        extra: None,
    },
    StrategyDoc {
        key: StrategyKey::Wait,
        title: "Wait / structure not ideal",
        summary: "When net theta <= 0, IV structure <= 0, trend and net delta conflict, or \
                  earnings skew the risk, wait for the structure to repair or switch strategy.",
        market: "Uncertain, conflicting direction, or an unfavorable IV environment.",
        management: "Adjust DTE, strikes or far-leg delta, or pick a different strategy.",
        exit: "-",
        extra: None,
    },
];

/// Catalog entry for `key`
pub fn doc_for(key: StrategyKey) -> &'static StrategyDoc {
    let idx = match key {
        StrategyKey::PmccCallDiagonal => 0,
        StrategyKey::PutDiagonal => 1,
        StrategyKey::BearCallSpread => 2,
        StrategyKey::BullPutSpread => 3,
        StrategyKey::LongPut => 4,
        StrategyKey::LongCall => 5,
        StrategyKey::Wait => 6,
    };
    &STRATEGY_DOCS[idx]
}
