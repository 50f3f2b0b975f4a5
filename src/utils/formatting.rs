//! Formatting utilities used for CLI and export outputs.

/// Hours with exactly two decimals, as printed in the summary header.
pub fn hours2(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Rounded hours as "HHh MMm" (or "HH:MM" when `short`), keeping the sign.
pub fn hours2readable(hours: f64, short: bool) -> String {
    let mins = (hours * 60.0).round() as i64;
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();

    if short {
        format!("{}{:02}:{:02}", sign, abs_m / 60, abs_m % 60)
    } else {
        format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
    }
}
