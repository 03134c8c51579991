//! Genre and name lists.

use super::list_literal::decode_list_literal;

/// Split a legacy genre cell: `"Action, Adventure, Drama"`.
///
/// Leading and trailing quote characters are stripped, the remainder is split
/// on commas, and each entry is trimmed. Blank entries are dropped.
pub fn parse_genre_text(value: Option<&str>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    value
        .trim()
        .trim_matches('"')
        .split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode a pre-cleaned `genres_list` literal.
///
/// When the literal cannot be decoded the primary genre, if any, becomes a
/// one-element list; otherwise the result is empty.
pub fn parse_genre_list(list: Option<&str>, primary: Option<&str>) -> Vec<String> {
    match list.and_then(decode_list_literal) {
        Some(entries) => clean_entries(entries),
        None => primary
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
            .map(|genre| vec![genre.to_string()])
            .unwrap_or_default(),
    }
}

/// Decode a director or actor list literal; failures give an empty list.
pub fn parse_name_list(value: Option<&str>) -> Vec<String> {
    value
        .and_then(decode_list_literal)
        .map(clean_entries)
        .unwrap_or_default()
}

fn clean_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}
