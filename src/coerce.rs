//! Cell-text coercion with malformed-input tolerance.
//!
//! Stat cells routinely hold an empty string or a dash placeholder; both map
//! to the category default instead of an error so one bad cell never drops a
//! row that passed the validity filter.

fn is_placeholder(text: &str) -> bool {
    matches!(text, "" | "-" | "--")
}

/// Integer coercion. Accepts float-formatted text (`"3.0"` becomes 3).
pub fn to_i64(text: &str, default: i64) -> i64 {
    let trimmed = text.trim();
    if is_placeholder(trimmed) {
        return default;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|v| v as i64))
        .unwrap_or(default)
}

/// Float coercion. A trailing percent sign is stripped before parsing.
pub fn to_f64(text: &str, default: f64) -> f64 {
    let trimmed = text.trim();
    if is_placeholder(trimmed) {
        return default;
    }
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    trimmed.parse::<f64>().unwrap_or(default)
}

/// Splits a compound `A-B` / `A-B-C` cell (e.g. `Penalties-Yards` values like
/// `"7-55"`) into its parts. Missing parts simply yield a shorter vector.
pub fn split_compound(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('-').map(str::trim).collect()
}

/// Nth part of a compound cell coerced to an integer, defaulting to 0.
pub fn compound_i64(text: &str, index: usize) -> i64 {
    split_compound(text)
        .get(index)
        .map(|part| to_i64(part, 0))
        .unwrap_or(0)
}

/// Makes/attempts as a percentage rounded to one decimal. Zero attempts is a
/// valid state and yields 0.0, never a division by zero.
pub fn ratio_pct(made: i64, attempted: i64) -> f64 {
    if attempted <= 0 {
        return 0.0;
    }
    let pct = made as f64 / attempted as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}
