//! Display formatting for KPI values.

/// Above this absolute value an engagement number is assumed to already be
/// a percentage; at or below it, a fraction to be scaled by 100.
///
/// The feed carries no authoritative signal for which encoding a brand's
/// engagement rate uses, so this threshold is a best-effort heuristic: a
/// genuine rate above 10% expressed as a fraction (0.12) still lands below
/// the cutoff, while rates exported as percentages (1.7 for 1.7%) rarely
/// exceed 10. Known ambiguity, resolved silently.
pub const PERCENT_SCALE_THRESHOLD: f64 = 10.0;

/// Formats an engagement value as a two-decimal percentage string.
///
/// Non-finite input (NaN, ±inf) yields the placeholder `"-"`. Values whose
/// absolute value exceeds [`PERCENT_SCALE_THRESHOLD`] are treated as
/// already-percentages; everything else as a fraction multiplied by 100.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    if value.abs() > PERCENT_SCALE_THRESHOLD {
        format!("{value:.2}%")
    } else {
        let scaled = value * 100.0;
        format!("{scaled:.2}%")
    }
}

/// Formats a count as a rounded integer with thousands separators.
///
/// Non-finite input renders as `"0"`.
#[must_use]
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
