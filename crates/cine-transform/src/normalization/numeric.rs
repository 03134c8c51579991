//! Numeric coercion for rating and pre-cleaned number columns.

/// Parse a finite floating point value.
///
/// Handles:
/// - Standard numbers: "8.7", "-3"
/// - Surrounding whitespace: "  8.7 "
/// - Float-formatted integers written by the cleaner: "2020.0"
///
/// Returns None for blank input, garbage, and non-finite values (`nan`, `inf`).
pub fn parse_float(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Parse a whole number, truncating any fractional part.
///
/// Pre-cleaned columns hold integers as floats ("1994.0") whenever the
/// column also had missing values, so this goes through [`parse_float`].
pub fn parse_whole(value: Option<&str>) -> Option<i64> {
    let number = parse_float(value)?;
    if number < i64::MIN as f64 || number > i64::MAX as f64 {
        return None;
    }
    Some(number.trunc() as i64)
}

/// Parse a rating cell.
///
/// Returns None for empty or missing input and for anything non-numeric; a
/// row whose rating is None is discarded by the normalizer.
pub fn parse_rating(value: Option<&str>) -> Option<f64> {
    parse_float(value)
}
