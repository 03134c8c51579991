//! Vote counts.

use super::numeric::parse_float;

/// Parse a vote count, or None when the cell holds no number.
///
/// Strips thousands separators, quote characters and whitespace, then reads
/// an integer. Float-formatted counts ("12345.0") are truncated. Negative
/// counts are not counts.
pub fn parse_vote_count(value: Option<&str>) -> Option<u64> {
    let cleaned: String = value?
        .chars()
        .filter(|ch| !matches!(ch, ',' | '"' | '\'') && !ch.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(count) = cleaned.parse::<u64>() {
        return Some(count);
    }
    let number = parse_float(Some(&cleaned))?;
    if number < 0.0 {
        return None;
    }
    Some(number.trunc() as u64)
}

/// Parse a vote count, defaulting to zero.
///
/// Unlike rating, a missing vote count never discards the row.
pub fn parse_votes(value: Option<&str>) -> u64 {
    parse_vote_count(value).unwrap_or(0)
}
