//! Human-readable comparison report.

use std::fmt::Write;
use toonlens_core::{ComparisonResult, Format, MeasurementResult};

/// Renders a comparison as a plain-text report.
///
/// With `show_content` set, each encoding's preview is appended.
///
/// # Examples
///
/// ```
/// use toonlens::{ComparisonResult, Format, MeasurementResult, ModelPricing, render_report};
///
/// let pricing = ModelPricing::default();
/// let json = MeasurementResult::estimated(Format::Json, "{}", 1200, &pricing);
/// let toon = MeasurementResult::estimated(Format::Toon, "", 800, &pricing);
/// let report = render_report(&ComparisonResult::new("gpt-4o", json, toon, false), false);
///
/// assert!(report.contains("ESTIMATED"));
/// assert!(report.contains("Token savings:  400 (33.33%)"));
/// ```
pub fn render_report(result: &ComparisonResult, show_content: bool) -> String {
    let mut out = String::new();

    let mode = if *result.api_called() {
        "ACTUAL token counts from the API usage report"
    } else {
        "ESTIMATED token counts from the local tokenizer (API not called)"
    };
    let _ = writeln!(out, "Model: {}", result.model());
    let _ = writeln!(out, "Mode:  {}", mode);
    let _ = writeln!(out, "{:-<60}", "");

    for format in [Format::Json, Format::Toon] {
        write_measurement(&mut out, result.measurement(format));
    }

    let savings = result.savings();
    let _ = writeln!(out, "{:-<60}", "");
    let _ = writeln!(
        out,
        "Token savings:  {} ({:.2}%)",
        group_thousands(*savings.tokens()),
        savings.percentage()
    );
    let _ = writeln!(out, "Cost savings:   ${:.6}", savings.cost());

    if show_content {
        for format in [Format::Json, Format::Toon] {
            let _ = writeln!(out, "{:-<60}", "");
            let _ = writeln!(out, "{} payload preview:", format.label());
            let _ = writeln!(out, "{}", result.measurement(format).preview());
        }
    }

    out
}

fn write_measurement(out: &mut String, m: &MeasurementResult) {
    let label = m.format().label();
    let _ = writeln!(
        out,
        "{} tokens: {:>10}   cost: ${:.6}   [{}]",
        label,
        group_thousands(*m.tokens() as i64),
        m.cost(),
        m.provenance()
    );
    if let Some(usage) = m.usage() {
        let _ = writeln!(
            out,
            "  input {} / output {} / total {}",
            group_thousands(*usage.prompt_tokens() as i64),
            group_thousands(*usage.completion_tokens() as i64),
            group_thousands(*usage.total_tokens() as i64)
        );
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use toonlens_core::{ModelPricing, TokenUsage};

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(-1234567), "-1,234,567");
    }

    #[test]
    fn test_remote_report_shows_usage() {
        let pricing = ModelPricing::default();
        let json = MeasurementResult::remote(
            Format::Json,
            "{\"a\": 1}",
            TokenUsage::new(1500, 2),
            &pricing,
        );
        let toon =
            MeasurementResult::remote(Format::Toon, "a: 1", TokenUsage::new(900, 2), &pricing);
        let report = render_report(&ComparisonResult::new("gpt-4o", json, toon, true), true);

        assert!(report.contains("ACTUAL"));
        assert!(report.contains("input 1,500 / output 2 / total 1,502"));
        assert!(report.contains("TOON payload preview:\na: 1"));
    }

    #[test]
    fn test_negative_savings_are_reported() {
        let pricing = ModelPricing::default();
        let json = MeasurementResult::estimated(Format::Json, "", 10, &pricing);
        let toon = MeasurementResult::estimated(Format::Toon, "", 12, &pricing);
        let report = render_report(&ComparisonResult::new("gpt-4o", json, toon, false), false);
        assert!(report.contains("Token savings:  -2 (-20.00%)"));
    }
}
