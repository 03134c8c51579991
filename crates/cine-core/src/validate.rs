//! Range checks that exclude implausible records.

use cine_model::{Record, RejectionCounts, RejectionReason};
use tracing::trace;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;
pub const MAX_DURATION_MINUTES: i32 = 600;
pub const MIN_YEAR: i32 = 1900;
/// Years allowed past the current one, for announced titles.
pub const FUTURE_YEAR_ALLOWANCE: i32 = 5;

/// Every reason `record` fails validation; empty when it passes.
///
/// Checks are independent, so the order of the result is only the order of
/// [`RejectionReason::ALL`].
pub fn rejection_reasons(record: &Record, current_year: i32) -> Vec<RejectionReason> {
    RejectionReason::ALL
        .into_iter()
        .filter(|reason| violates(record, *reason, current_year))
        .collect()
}

fn violates(record: &Record, reason: RejectionReason, current_year: i32) -> bool {
    match reason {
        RejectionReason::InvalidTitle => {
            record.title.trim().is_empty() || record.title.chars().count() < 2
        }
        RejectionReason::RatingOutOfRange => {
            !(MIN_RATING..=MAX_RATING).contains(&record.rating)
        }
        RejectionReason::DurationOutOfRange => record
            .duration_minutes
            .is_some_and(|minutes| !(0..=MAX_DURATION_MINUTES).contains(&minutes)),
        RejectionReason::YearOutOfRange => {
            let latest = current_year.saturating_add(FUTURE_YEAR_ALLOWANCE);
            record
                .year
                .is_some_and(|year| !(MIN_YEAR..=latest).contains(&year))
        }
    }
}

/// Outcome of validating a record set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    pub accepted: Vec<Record>,
    /// Records excluded, each counted once.
    pub rejected: usize,
    /// Per-reason tallies; a record failing two checks counts under both.
    pub counts: RejectionCounts,
}

/// Split records into those that pass every check and tallies of the rest.
pub fn validate_records(records: Vec<Record>, current_year: i32) -> Validation {
    let mut validation = Validation {
        accepted: Vec::with_capacity(records.len()),
        ..Validation::default()
    };
    for record in records {
        let reasons = rejection_reasons(&record, current_year);
        if reasons.is_empty() {
            validation.accepted.push(record);
            continue;
        }
        trace!(title = %record.title, ?reasons, "record rejected");
        validation.rejected += 1;
        for reason in reasons {
            validation.counts.record(reason);
        }
    }
    validation
}
