//! Aggregate views over a clean catalog.
//!
//! Every function here is a pure read of a finished record set. The
//! pipeline calls [`build_views`] once per load; [`explore`] is recomputed
//! on demand for each interactive query.
//!
//! | View | Rule |
//! |------|------|
//! | Rating histogram | 20 bins of 0.25 over [5, 10], last bin closed |
//! | Genre ranking | top 10 by count, `Unknown` and blanks excluded |
//! | Top content | votes > 1000, rating descending, 15 titles |
//! | Duration vs rating | duration > 0, votes > 1000, 300 most voted, OLS line |
//! | Content types | Movie, TV Series, Miniseries, Unknown; empty buckets omitted |
//! | Director / actor ranking | top 10 by count, blanks excluded |
//! | Decade timeline | years 1950..=2024 by decade |
//! | Explore top ten | votes > 100, rating then votes descending, 10 titles |

mod breakdown;
mod explore;
mod histogram;
mod ranking;
mod stats;
mod top;
mod trend;

use cine_model::{AggregateViews, CleanedSchemaViews, Record, RowSchema};
use tracing::debug;

pub use breakdown::{TIMELINE_END, TIMELINE_START, content_type_breakdown, decade_timeline};
pub use explore::{
    ExploreQuery, ExploreView, GenreFilter, RatingGroup, TOP_TEN_MIN_VOTES, TOP_TEN_SIZE,
    explore, round_to_half,
};
pub use histogram::{HISTOGRAM_BINS, HISTOGRAM_MAX, HISTOGRAM_MIN, rating_histogram};
pub use ranking::{RANKING_SIZE, actor_ranking, director_ranking, genre_ranking, rank_names};
pub use stats::{data_quality, genre_options, overview};
pub use top::{TOP_CONTENT_MIN_VOTES, TOP_CONTENT_SIZE, top_content};
pub use trend::{SCATTER_MIN_VOTES, SCATTER_SAMPLE_SIZE, duration_rating, linear_regression};

/// Compute every view for a record set read with `schema`.
///
/// The structured views ([`CleanedSchemaViews`]) are only built for the
/// pre-cleaned layout; legacy records have no content type or credits.
pub fn build_views(records: &[Record], schema: RowSchema) -> AggregateViews {
    let cleaned = match schema {
        RowSchema::Cleaned => Some(CleanedSchemaViews {
            content_types: content_type_breakdown(records),
            director_ranking: director_ranking(records),
            actor_ranking: actor_ranking(records),
            decade_timeline: decade_timeline(records),
        }),
        RowSchema::Legacy => None,
    };

    let views = AggregateViews {
        overview: overview(records),
        data_quality: data_quality(records),
        rating_histogram: rating_histogram(records),
        genre_ranking: genre_ranking(records),
        top_content: top_content(records),
        duration_rating: duration_rating(records),
        genre_options: genre_options(records),
        cleaned,
    };
    debug!(
        records = records.len(),
        genres = views.genre_options.len(),
        top_content = views.top_content.len(),
        scatter = views.duration_rating.sample.len(),
        trend_line = views.duration_rating.regression.is_some(),
        "views built"
    );
    views
}
