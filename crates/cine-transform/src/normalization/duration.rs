//! Running time in minutes.
//!
//! Legacy cells look like "148 min"; pre-cleaned cells hold the number directly.

use std::sync::LazyLock;

use regex::Regex;

use super::numeric::parse_whole;

/// Integer run followed by the "min" unit marker.
static MINUTES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*min").expect("Invalid minutes regex"));

/// Extract minutes from free text ("148 min", "\n60 min   ").
///
/// Returns None when no "<digits> min" run is present or the number
/// does not fit.
pub fn parse_duration_text(value: Option<&str>) -> Option<i32> {
    let captures = MINUTES_REGEX.captures(value?)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Read a direct minutes field ("148", "148.0").
pub fn parse_duration_minutes(value: Option<&str>) -> Option<i32> {
    parse_whole(value).and_then(|minutes| i32::try_from(minutes).ok())
}
