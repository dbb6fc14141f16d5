//! Plain-text rendering of a recommendation

use std::fmt;

use crate::common::numeric::to_fixed;
use crate::strategy::{Recommendation, StrikeGuide};

/// Human-readable view of a recommendation
pub struct Report<'a>(pub &'a Recommendation);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.0)
    }
}

/// Render every field of `r` as a human-readable report
pub fn render(r: &Recommendation) -> String {
    Report(r).to_string()
}

fn write_report(out: &mut fmt::Formatter<'_>, r: &Recommendation) -> fmt::Result {
    writeln!(out, "Side:        {}", r.side)?;
    writeln!(out, "Strategy:    {}", r.recommended.display_name())?;
    writeln!(out, "Advice:      {} ({})", r.advice.label(), r.advice)?;
    writeln!(out, "Score:       {} / 100", to_fixed(r.score, 0))?;
    writeln!(out, "Net delta:   {}", to_fixed(r.net_delta, 2))?;
    writeln!(out, "Net theta:   {}", to_fixed(r.net_theta, 2))?;
    writeln!(out, "IV structure (near-far): {}%", to_fixed(r.iv_structure, 2))?;

    if !r.warnings.is_empty() {
        writeln!(out, "\nRisk warnings")?;
        for w in &r.warnings {
            writeln!(out, "  - {w}")?;
        }
    }

    if !r.adjustments.is_empty() {
        writeln!(out, "\nAdjustments")?;
        for a in &r.adjustments {
            writeln!(out, "  - {a}")?;
        }
    }

    if let Some(guide) = &r.strike_guide {
        writeln!(out, "\nStrike guidance")?;
        write_guide(out, guide)?;
    }

    let doc = r.doc();
    writeln!(out, "\nAbout: {}", doc.title)?;
    writeln!(out, "  Summary:    {}", doc.summary)?;
    writeln!(out, "  Market:     {}", doc.market)?;
    writeln!(out, "  Management: {}", doc.management)?;
    writeln!(out, "  Exit:       {}", doc.exit)?;
    if let Some(extra) = doc.extra {
        writeln!(out, "  Note: {extra}")?;
    }

    writeln!(out, "\nExplanation: {}", r.explanation)
}

fn write_guide(out: &mut fmt::Formatter<'_>, guide: &StrikeGuide) -> fmt::Result {
    if let Some((lo, hi)) = guide.long_delta_range {
        writeln!(out, "  Long leg delta:  {} to {}", to_fixed(lo, 2), to_fixed(hi, 2))?;
    }
    if let Some((lo, hi)) = guide.short_delta_range {
        writeln!(out, "  Short leg delta: {} to {}", to_fixed(lo, 2), to_fixed(hi, 2))?;
    }
    if let Some(note) = &guide.note {
        writeln!(out, "  {note}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::PartialSettings;
    use crate::strategy::{compute, Inputs, Preset};

    #[test]
    fn test_pmcc_report_sections() {
        let text = render(&compute(&Preset::UpPmcc.inputs(), None));
        assert!(text.contains("Strategy:    PMCC / Call Diagonal"));
        assert!(text.contains("Advice:      Open full position (open)"));
        assert!(text.contains("Score:       100 / 100"));
        assert!(text.contains("IV structure (near-far): 12.00%"));
        assert!(text.contains("Long leg delta:  0.75 to 0.85"));
        assert!(text.contains("  Note: Suits mildly bullish"));
        assert!(!text.contains("Risk warnings"));
    }

    #[test]
    fn test_wait_report_has_no_guidance() {
        let text = render(&compute(&Preset::SidewaysPutDiagonal.inputs(), None));
        assert!(text.contains("Side:        Neutral"));
        assert!(!text.contains("Strike guidance"));
        assert!(!text.contains("  Note:"));
        assert!(text.contains("About: Wait / structure not ideal"));
    }

    #[test]
    fn test_report_rounds_ties_up() {
        let inputs = Inputs {
            buy_delta: 0.125,
            sell_delta: 0.0,
            ..Preset::UpPmcc.inputs()
        };
        let partial = PartialSettings {
            w_trend: Some(10.0),
            w_iv: Some(20.5),
            ..Default::default()
        };
        let r = compute(&inputs, Some(&partial));
        let text = Report(&r).to_string();
        assert!(text.contains("Score:       81 / 100"), "{text}");
        assert!(text.contains("Net delta:   0.13\n"), "{text}");
        assert_eq!(text, render(&r));
    }
}
