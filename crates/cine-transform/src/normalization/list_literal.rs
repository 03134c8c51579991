//! Single-quoted list literals such as `['Action', 'Drama']`.
//!
//! The offline cleaner serializes list columns in this form. Two decoders:
//!
//! | Function | Quotes | Apostrophe entries |
//! |----------|--------|--------------------|
//! | [`decode_list_literal`] | swapped to `"` and read as JSON | fail, caller falls back |
//! | [`parse_list_literal`] | `'…'` or `"…"` per entry, `\` escapes | kept |

use std::iter::Peekable;
use std::str::Chars;

/// Decode a list literal into its raw string entries.
///
/// Returns None when the text is not a list of strings after quote
/// substitution.
pub fn decode_list_literal(text: &str) -> Option<Vec<String>> {
    let trimmed = text.trim();
    if !trimmed.starts_with('[') {
        return None;
    }
    let substituted = trimmed.replace('\'', "\"");
    serde_json::from_str::<Vec<String>>(&substituted).ok()
}

/// Tokenize a list literal entry by entry.
///
/// Each entry may use either quote style, as in
/// `['Steven Spielberg', "Conan O'Brien"]`. A backslash takes the next
/// character literally. Returns None for anything that is not a list of
/// quoted strings.
pub fn parse_list_literal(text: &str) -> Option<Vec<String>> {
    let inner = text.trim().strip_prefix('[')?.strip_suffix(']')?;
    let mut chars = inner.chars().peekable();
    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        let Some(quote) = chars.next() else {
            break;
        };
        if quote != '\'' && quote != '"' {
            return None;
        }
        items.push(read_quoted(&mut chars, quote)?);
        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some(',') => {}
            Some(_) => return None,
        }
    }
    Some(items)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|ch| ch.is_whitespace()).is_some() {}
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Option<String> {
    let mut item = String::new();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => item.push(chars.next()?),
            ch if ch == quote => return Some(item),
            ch => item.push(ch),
        }
    }
    None
}

/// Encode entries as a single-quoted list literal.
///
/// Entries containing an apostrophe (and no double quote) are wrapped in
/// double quotes instead, the way the cleaner has always written them.
pub fn format_list_literal(items: &[String]) -> String {
    let mut out = String::from("[");
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        if item.contains('\'') && !item.contains('"') {
            out.push('"');
            out.push_str(item);
            out.push('"');
        } else {
            out.push('\'');
            out.push_str(&item.replace('\\', "\\\\").replace('\'', "\\'"));
            out.push('\'');
        }
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_quoted_entries() {
        assert_eq!(
            decode_list_literal("['Action', 'Drama']"),
            Some(vec!["Action".to_string(), "Drama".to_string()])
        );
        assert_eq!(decode_list_literal(" [] "), Some(Vec::new()));
    }

    #[test]
    fn rejects_non_lists() {
        assert_eq!(decode_list_literal("Action, Drama"), None);
        assert_eq!(decode_list_literal("['Action', 'Dra"), None);
        assert_eq!(decode_list_literal("[1, 2]"), None);
        assert_eq!(decode_list_literal(""), None);
    }

    #[test]
    fn apostrophes_do_not_survive_substitution() {
        assert_eq!(decode_list_literal("[\"Conan O'Brien\"]"), None);
    }

    #[test]
    fn tokenizes_mixed_quotes() {
        assert_eq!(
            parse_list_literal("['Steven Spielberg', \"Conan O'Brien\", 'Maureen O\\'Hara']"),
            Some(vec![
                "Steven Spielberg".to_string(),
                "Conan O'Brien".to_string(),
                "Maureen O'Hara".to_string(),
            ])
        );
        assert_eq!(parse_list_literal(" [ ] "), Some(Vec::new()));
        assert_eq!(parse_list_literal("['a, b',]"), Some(vec!["a, b".to_string()]));
    }

    #[test]
    fn tokenizer_rejects_malformed_lists() {
        assert_eq!(parse_list_literal("Tim Robbins"), None);
        assert_eq!(parse_list_literal("['open"), None);
        assert_eq!(parse_list_literal("['a' 'b']"), None);
        assert_eq!(parse_list_literal("[1, 2]"), None);
        assert_eq!(parse_list_literal("[,]"), None);
    }

    #[test]
    fn formatted_apostrophe_entries_tokenize_back() {
        let items = vec!["Conan O'Brien".to_string(), "Tom Hanks".to_string()];
        assert_eq!(parse_list_literal(&format_list_literal(&items)), Some(items));
    }

    #[test]
    fn formats_entries() {
        let items = vec!["Action".to_string(), "Drama".to_string()];
        assert_eq!(format_list_literal(&items), "['Action', 'Drama']");
        assert_eq!(format_list_literal(&[]), "[]");
        assert_eq!(
            format_list_literal(&["Conan O'Brien".to_string()]),
            "[\"Conan O'Brien\"]"
        );
    }

    #[test]
    fn formatted_plain_entries_decode_back() {
        let items = vec!["Sci-Fi".to_string(), "Film-Noir".to_string()];
        assert_eq!(decode_list_literal(&format_list_literal(&items)), Some(items));
    }
}
