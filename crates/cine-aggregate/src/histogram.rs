//! Fixed-width rating histogram.

use cine_model::{HistogramBin, Record};

/// Lower edge of the histogram domain.
pub const HISTOGRAM_MIN: f64 = 5.0;
/// Upper edge of the histogram domain (inclusive).
pub const HISTOGRAM_MAX: f64 = 10.0;
pub const HISTOGRAM_BINS: usize = 20;

const BIN_WIDTH: f64 = (HISTOGRAM_MAX - HISTOGRAM_MIN) / HISTOGRAM_BINS as f64;

/// Count ratings into 20 bins of width 0.25 over [5, 10].
///
/// Bins are half-open `[lower, upper)` except the last, which also takes
/// 10.0. Ratings outside the domain are not counted.
pub fn rating_histogram(records: &[Record]) -> Vec<HistogramBin> {
    let mut bins: Vec<HistogramBin> = (0..HISTOGRAM_BINS)
        .map(|idx| HistogramBin {
            lower_bound: HISTOGRAM_MIN + idx as f64 * BIN_WIDTH,
            upper_bound: HISTOGRAM_MIN + (idx + 1) as f64 * BIN_WIDTH,
            count: 0,
        })
        .collect();

    for record in records {
        if let Some(idx) = bin_index(record.rating) {
            bins[idx].count += 1;
        }
    }
    bins
}

fn bin_index(rating: f64) -> Option<usize> {
    if !(HISTOGRAM_MIN..=HISTOGRAM_MAX).contains(&rating) {
        return None;
    }
    // Exact for ratings in the domain: the offset is a difference of nearby
    // floats and the width is a power of two.
    let idx = ((rating - HISTOGRAM_MIN) / BIN_WIDTH).floor() as usize;
    Some(idx.min(HISTOGRAM_BINS - 1))
}
