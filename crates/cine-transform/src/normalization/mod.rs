//! Field parsers.
//!
//! Every parser takes the raw cell (`None` for a missing or blank cell) and
//! returns its documented default on anything it cannot read:
//!
//! | Parser | Default |
//! |---|---|
//! | rating | `None` (row is later discarded) |
//! | duration | `None` |
//! | year | `None` |
//! | votes | `0` |
//! | genre / name lists | empty list (or the primary genre) |

mod credits;
mod duration;
mod genres;
mod list_literal;
mod numeric;
mod votes;
mod year;

pub use credits::{Credits, split_credits};
pub use duration::{parse_duration_minutes, parse_duration_text};
pub use genres::{parse_genre_list, parse_genre_text, parse_name_list};
pub use list_literal::{decode_list_literal, format_list_literal, parse_list_literal};
pub use numeric::{parse_float, parse_rating, parse_whole};
pub use votes::{parse_vote_count, parse_votes};
pub use year::{YearSpan, parse_year_field, parse_year_span, parse_year_text};
