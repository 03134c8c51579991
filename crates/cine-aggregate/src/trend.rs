//! Duration against rating: scatter sample and least-squares line.

use cine_model::{DurationRatingView, Record, Regression};

/// Titles kept in the scatter sample.
pub const SCATTER_SAMPLE_SIZE: usize = 300;
pub const SCATTER_MIN_VOTES: u64 = 1000;

/// Most-voted titles with a positive duration, and their trend line.
///
/// The sample is capped at [`SCATTER_SAMPLE_SIZE`], which biases it toward
/// popular titles. Equal vote counts keep input order.
pub fn duration_rating(records: &[Record]) -> DurationRatingView {
    let mut sample: Vec<&Record> = records
        .iter()
        .filter(|record| {
            record.duration_minutes.is_some_and(|minutes| minutes > 0)
                && record.votes > SCATTER_MIN_VOTES
        })
        .collect();
    sample.sort_by(|a, b| b.votes.cmp(&a.votes));
    sample.truncate(SCATTER_SAMPLE_SIZE);

    let points: Vec<(f64, f64)> = sample
        .iter()
        .filter_map(|record| {
            record
                .duration_minutes
                .map(|minutes| (f64::from(minutes), record.rating))
        })
        .collect();

    DurationRatingView {
        sample: sample.into_iter().cloned().collect(),
        regression: linear_regression(&points),
    }
}

/// Ordinary least squares over `(x, y)` points.
///
/// Returns None with fewer than two points or when every x is equal.
pub fn linear_regression(points: &[(f64, f64)]) -> Option<Regression> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), &(x, y)| (sx + x, sy + y, sxy + x * y, sxx + x * x),
    );

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Some(Regression { slope, intercept })
}
