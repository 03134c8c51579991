//! Directors and actors from the legacy `stars` column.
//!
//! The column is a list literal where directors come first, then a `|`
//! separator entry, then a `Stars:` marker and the cast:
//!
//! ```text
//! ['Frank Darabont', '| ', '    Stars:', 'Tim Robbins, ', 'Morgan Freeman']
//! ```
//!
//! Without a separator every entry is cast.

use super::list_literal::parse_list_literal;

const SEPARATOR: char = '|';
const STARS_MARKER: &str = "Stars:";

/// Credits split out of one `stars` cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credits {
    pub directors: Vec<String>,
    pub actors: Vec<String>,
}

/// Split a `stars` cell into directors and actors.
///
/// Entries are trimmed of surrounding whitespace and trailing `", "`
/// punctuation. Anything that does not decode gives empty credits.
pub fn split_credits(value: Option<&str>) -> Credits {
    let Some(entries) = value.and_then(parse_list_literal) else {
        return Credits::default();
    };

    let has_separator = entries.iter().any(|entry| entry.contains(SEPARATOR));
    let mut credits = Credits::default();
    let mut directing = has_separator;

    for entry in &entries {
        if has_separator {
            if entry.contains(SEPARATOR) {
                directing = false;
                continue;
            }
            if entry.contains(STARS_MARKER) {
                continue;
            }
        }
        let name = clean_name(entry);
        if name.is_empty() {
            continue;
        }
        if directing {
            credits.directors.push(name.to_string());
        } else {
            credits.actors.push(name.to_string());
        }
    }
    credits
}

fn clean_name(entry: &str) -> &str {
    entry.trim().trim_end_matches(|ch: char| ch == ',' || ch == ' ')
}
