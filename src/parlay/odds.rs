//! American-odds conversions used by the parlay calculator.
//!
//! American odds state the profit on a 100 stake (`+145`) or the stake needed
//! to profit 100 (`-110`). Decimal odds are the total return per unit staked.

use thiserror::Error;
use tracing::debug;

use crate::models::NO_VALUE;

#[derive(Debug, Error, PartialEq)]
pub enum OddsError {
    #[error("odds conversion produced a non-finite value from decimal odds {0}")]
    NonFinite(f64),
}

/// Parse an American-odds string such as `"+145"` or `"-110"`.
///
/// The first `+` is removed, then the longest numeric prefix is read.
/// Returns `NaN` when no number can be read; callers let it propagate.
pub fn parse_american_odds(odds: &str) -> f64 {
    let cleaned = odds.replacen('+', "", 1);
    parse_float_prefix(&cleaned)
}

/// Decimal odds for an American price.
pub fn american_to_decimal(american: f64) -> f64 {
    if american > 0.0 {
        american / 100.0 + 1.0
    } else {
        100.0 / american.abs() + 1.0
    }
}

/// Implied win probability (0.0–1.0) for an American price, ignoring margin.
pub fn implied_probability(american: f64) -> f64 {
    if american > 0.0 {
        100.0 / (american + 100.0)
    } else {
        american.abs() / (american.abs() + 100.0)
    }
}

/// Format combined decimal odds as an American-odds string.
///
/// * `>= 2.0` → underdog price, `"+300"`
/// * `(1.0, 2.0)` → favorite price, `"-227"`, falling back to the underdog
///   formula if the favorite conversion is not finite
/// * otherwise (including `NaN`) → `NO_VALUE`
pub fn format_combined_odds(decimal: f64) -> String {
    if decimal >= 2.0 {
        underdog_odds(decimal)
    } else if decimal > 1.0 && decimal < 2.0 {
        favorite_odds(decimal).unwrap_or_else(|e| {
            debug!("{}, using positive odds", e);
            underdog_odds(decimal)
        })
    } else {
        NO_VALUE.to_string()
    }
}

fn underdog_odds(decimal: f64) -> String {
    format!("+{}", format_rounded((decimal - 1.0) * 100.0))
}

fn favorite_odds(decimal: f64) -> Result<String, OddsError> {
    let american = (100.0 / (decimal - 1.0)).round();
    if !american.is_finite() {
        return Err(OddsError::NonFinite(decimal));
    }
    Ok(format!("-{}", format_rounded(american)))
}

/// Round half up and print without a fractional part. Non-finite values
/// print as `Infinity` / `-Infinity` / `NaN`.
fn format_rounded(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let rounded = (value + 0.5).floor();
    // avoid printing "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}

/// Format with two decimals, breaking exact ties away from zero the way
/// JavaScript `toFixed(2)` does (`28.125` → `"28.13"`). Plain `{:.2}` rounds
/// those ties to even.
///
/// A finite `f64` lies exactly halfway between two hundredths only when it
/// is an odd multiple of 1/8, so that is the only case needing correction.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0.00".to_string();
    }
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let hundredths = value.abs() * 100.0 + 0.5;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.2}", sign, hundredths / 100.0);
    }
    format!("{:.2}", value)
}

/// Read the longest prefix of `s` (after leading whitespace) that parses as
/// a float, or `NaN` if there is none.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let candidate_len = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let candidate = &s[..candidate_len];
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_signed_odds() {
        assert_relative_eq!(parse_american_odds("+145"), 145.0);
        assert_relative_eq!(parse_american_odds("-110"), -110.0);
        assert_relative_eq!(parse_american_odds("250"), 250.0);
        assert_relative_eq!(parse_american_odds(" +120 odds"), 120.0);
    }

    #[test]
    fn unparseable_odds_are_nan() {
        assert!(parse_american_odds("even").is_nan());
        assert!(parse_american_odds("").is_nan());
        assert!(parse_american_odds("+").is_nan());
    }

    #[test]
    fn decimal_conversion() {
        assert_relative_eq!(american_to_decimal(100.0), 2.0);
        assert_relative_eq!(american_to_decimal(145.0), 2.45);
        assert_relative_eq!(american_to_decimal(-200.0), 1.5);
        assert_relative_eq!(american_to_decimal(-110.0), 1.909_090_909, epsilon = 1e-9);
    }

    #[test]
    fn implied_probability_both_signs() {
        assert_relative_eq!(implied_probability(100.0), 0.5);
        assert_relative_eq!(implied_probability(300.0), 0.25);
        assert_relative_eq!(implied_probability(-300.0), 0.75);
        assert_relative_eq!(implied_probability(-110.0), 110.0 / 210.0);
    }

    #[test]
    fn formats_underdog_combination() {
        assert_eq!(format_combined_odds(4.0), "+300");
        assert_eq!(format_combined_odds(2.0), "+100");
        assert_eq!(format_combined_odds(5.390000000000001), "+439");
    }

    #[test]
    fn formats_favorite_combination() {
        assert_eq!(format_combined_odds(1.44), "-227");
        assert_eq!(format_combined_odds(1.5), "-200");
    }

    #[test]
    fn degenerate_decimal_is_no_value() {
        assert_eq!(format_combined_odds(1.0), NO_VALUE);
        assert_eq!(format_combined_odds(0.5), NO_VALUE);
        assert_eq!(format_combined_odds(f64::NAN), NO_VALUE);
    }

    #[test]
    fn infinite_decimal_prints_infinity() {
        assert_eq!(format_combined_odds(f64::INFINITY), "+Infinity");
    }

    #[test]
    fn two_decimals_round_ties_up() {
        assert_eq!(to_fixed_2(28.125), "28.13");
        assert_eq!(to_fixed_2(15.625), "15.63");
        assert_eq!(to_fixed_2(0.125), "0.13");
        assert_eq!(to_fixed_2(-0.125), "-0.13");
        assert_eq!(to_fixed_2(12.5), "12.50");
    }

    #[test]
    fn two_decimals_without_ties() {
        assert_eq!(to_fixed_2(50.0), "50.00");
        assert_eq!(to_fixed_2(43.13543599257885), "43.14");
        assert_eq!(to_fixed_2(83.33333333333334), "83.33");
        assert_eq!(to_fixed_2(1.005), "1.00");
        assert_eq!(to_fixed_2(-0.0), "0.00");
        assert_eq!(to_fixed_2(f64::NAN), "NaN");
        assert_eq!(to_fixed_2(f64::INFINITY), "Infinity");
    }

    #[test]
    fn favorite_conversion_rejects_non_finite() {
        assert_eq!(favorite_odds(1.0), Err(OddsError::NonFinite(1.0)));
        assert_eq!(favorite_odds(1.25).as_deref(), Ok("-400"));
    }
}
