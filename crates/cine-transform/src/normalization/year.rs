//! Release years and year spans.

use std::sync::LazyLock;

use regex::Regex;

use super::numeric::parse_whole;

static FOUR_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("Invalid year regex"));

/// Dash characters used between the years of a span.
const SPAN_DASHES: [char; 2] = ['–', '-'];

/// First four-digit run in free text ("(2010–2022)" gives 2010).
pub fn parse_year_text(value: Option<&str>) -> Option<i32> {
    let found = FOUR_DIGITS_REGEX.find(value?)?;
    found.as_str().parse().ok()
}

/// Direct numeric year field ("1994", "1994.0").
pub fn parse_year_field(value: Option<&str>) -> Option<i32> {
    parse_whole(value).and_then(|year| i32::try_from(year).ok())
}

/// Start and end year of a title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearSpan {
    pub start: Option<i32>,
    /// None for a running series.
    pub end: Option<i32>,
}

impl YearSpan {
    /// Length of the run in years, or zero when either end is unknown.
    pub fn length(&self) -> i32 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }
}

/// Parse a parenthesized year or year span.
///
/// - "(2022)" gives 2022 to 2022
/// - "(2010–2022)" gives 2010 to 2022
/// - "(2021– )" gives 2021 with no end (still running)
///
/// Anything else, including extra qualifiers such as "(I) (2019)", gives an
/// empty span.
pub fn parse_year_span(value: Option<&str>) -> YearSpan {
    let Some(value) = value else {
        return YearSpan::default();
    };
    let text = value.trim().trim_matches(|ch: char| ch == '(' || ch == ')');

    if text.contains(SPAN_DASHES) {
        let parts: Vec<&str> = text.split(SPAN_DASHES).collect();
        if let [start, end] = parts.as_slice()
            && let Ok(start) = start.trim().parse::<i32>()
        {
            let end = end.trim();
            if end.is_empty() {
                return YearSpan {
                    start: Some(start),
                    end: None,
                };
            }
            if let Ok(end) = end.parse::<i32>() {
                return YearSpan {
                    start: Some(start),
                    end: Some(end),
                };
            }
        }
    }

    match text.trim().parse::<i32>() {
        Ok(year) => YearSpan {
            start: Some(year),
            end: Some(year),
        },
        Err(_) => YearSpan::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_first_run() {
        assert_eq!(parse_year_text(Some("(2010–2022)")), Some(2010));
        assert_eq!(parse_year_text(Some("(I) (2019)")), Some(2019));
        assert_eq!(parse_year_text(Some("1994")), Some(1994));
    }

    #[test]
    fn test_text_no_match() {
        assert_eq!(parse_year_text(Some("(TV)")), None);
        assert_eq!(parse_year_text(Some("'94")), None);
        assert_eq!(parse_year_text(Some("")), None);
        assert_eq!(parse_year_text(None), None);
    }

    #[test]
    fn test_field() {
        assert_eq!(parse_year_field(Some("2020.0")), Some(2020));
        assert_eq!(parse_year_field(Some("2020")), Some(2020));
        assert_eq!(parse_year_field(Some("soon")), None);
    }

    #[test]
    fn test_span_single_year() {
        assert_eq!(
            parse_year_span(Some("(2022)")),
            YearSpan {
                start: Some(2022),
                end: Some(2022)
            }
        );
    }

    #[test]
    fn test_span_range() {
        let span = parse_year_span(Some("(2010–2022)"));
        assert_eq!(span.start, Some(2010));
        assert_eq!(span.end, Some(2022));
        assert_eq!(span.length(), 12);

        let span = parse_year_span(Some("(2015-2019)"));
        assert_eq!(span.length(), 4);
    }

    #[test]
    fn test_span_running() {
        let span = parse_year_span(Some("(2021– )"));
        assert_eq!(span.start, Some(2021));
        assert_eq!(span.end, None);
        assert_eq!(span.length(), 0);
    }

    #[test]
    fn test_span_unreadable() {
        assert_eq!(parse_year_span(Some("(I) (2019)")), YearSpan::default());
        assert_eq!(parse_year_span(Some("(TV Special)")), YearSpan::default());
        assert_eq!(parse_year_span(None), YearSpan::default());
    }
}
