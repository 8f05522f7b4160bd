//! Display formatting for chart and trade-form values
//!
//! Compact human-readable rendering of USD totals, token amounts, and
//! percentages. All rounding is half-up on the magnitude with the sign
//! re-applied afterwards, so positive and negative values of equal size
//! always render symmetrically. Values too small for the chosen precision
//! collapse to an explicit floor (`<$0.01`) instead of a misleading zero.

use rust_decimal::{Decimal, RoundingStrategy};

use types::numeric::BasisPoints;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest USD magnitude rendered as a number.
const USD_DUST: &str = "0.01";

/// Smallest token magnitude rendered as a number.
const TOKEN_DUST: &str = "0.0001";

/// Smallest percentage magnitude rendered as a number.
const PERCENT_DUST: &str = "0.01";

// ---------------------------------------------------------------------------
// USD totals
// ---------------------------------------------------------------------------

/// Format a USD value for display.
///
/// Sub-thousand values keep two fixed decimals; larger values compress to
/// `k`/`m`/`b`/`t` with up to two significant decimals.
pub fn format_usd(value: Decimal) -> String {
    if value.is_zero() {
        return "$0.00".to_string();
    }

    let magnitude = value.abs();
    if magnitude < Decimal::from_str_exact(USD_DUST).unwrap() {
        return format!("<${USD_DUST}");
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if magnitude < Decimal::ONE_THOUSAND {
        let mut rounded = round_half_up(magnitude, 2);
        rounded.rescale(2);
        return format!("{sign}${rounded}");
    }

    let (scaled, suffix) = scale_to_suffix(magnitude);
    format!("{sign}${scaled}{suffix}")
}

// ---------------------------------------------------------------------------
// Token amounts
// ---------------------------------------------------------------------------

/// Format a token quantity for display.
///
/// Fractional amounts keep four trimmed decimals, mid-range amounts two
/// fixed decimals with thousands grouping, and amounts from 100k up
/// compress to `k`/`m`/`b`/`t`.
pub fn format_token_amount(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < Decimal::from_str_exact(TOKEN_DUST).unwrap() {
        return format!("<{TOKEN_DUST}");
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if magnitude < Decimal::ONE {
        let trimmed = round_half_up(magnitude, 4).normalize();
        return format!("{sign}{trimmed}");
    }
    if magnitude < Decimal::from(100_000) {
        let mut rounded = round_half_up(magnitude, 2);
        rounded.rescale(2);
        return format!("{sign}{}", group_thousands(&rounded.to_string()));
    }

    let (scaled, suffix) = scale_to_suffix(magnitude);
    format!("{sign}{scaled}{suffix}")
}

// ---------------------------------------------------------------------------
// Percentages
// ---------------------------------------------------------------------------

/// Format a basis-point ratio as a percentage string.
pub fn format_percent(value: BasisPoints) -> String {
    let percent = value.as_decimal() / Decimal::ONE_HUNDRED;
    if percent.is_zero() {
        return "0%".to_string();
    }

    let magnitude = percent.abs();
    if magnitude < Decimal::from_str_exact(PERCENT_DUST).unwrap() {
        return format!("<{PERCENT_DUST}%");
    }

    let sign = if percent.is_sign_negative() { "-" } else { "" };
    let trimmed = round_half_up(magnitude, 2).normalize();
    format!("{sign}{trimmed}%")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Scale a magnitude into the largest fitting k/m/b/t unit.
fn scale_to_suffix(magnitude: Decimal) -> (Decimal, &'static str) {
    const SCALES: [(i64, &str); 4] = [
        (1_000_000_000_000, "t"),
        (1_000_000_000, "b"),
        (1_000_000, "m"),
        (1_000, "k"),
    ];
    for (scale, suffix) in SCALES {
        let scale = Decimal::from(scale);
        if magnitude >= scale {
            return (round_half_up(magnitude / scale, 2).normalize(), suffix);
        }
    }
    (round_half_up(magnitude, 2).normalize(), "")
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Insert thousands separators into a non-negative decimal string.
fn group_thousands(formatted: &str) -> String {
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
