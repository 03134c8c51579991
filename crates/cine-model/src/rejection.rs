//! Validation rejection reasons and their tallies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a record was excluded by the outlier filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Title empty or shorter than two characters.
    InvalidTitle,
    /// Rating outside `[1, 10]`.
    RatingOutOfRange,
    /// Duration below zero or above ten hours.
    DurationOutOfRange,
    /// Year before 1900 or too far in the future.
    YearOutOfRange,
}

impl RejectionReason {
    pub const ALL: [RejectionReason; 4] = [
        RejectionReason::InvalidTitle,
        RejectionReason::RatingOutOfRange,
        RejectionReason::DurationOutOfRange,
        RejectionReason::YearOutOfRange,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::InvalidTitle => "invalid title",
            Self::RatingOutOfRange => "rating out of range",
            Self::DurationOutOfRange => "duration out of range",
            Self::YearOutOfRange => "year out of range",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-reason counters. A record violating several checks counts once per reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    pub invalid_title: usize,
    pub rating_out_of_range: usize,
    pub duration_out_of_range: usize,
    pub year_out_of_range: usize,
}

impl RejectionCounts {
    pub fn record(&mut self, reason: RejectionReason) {
        *self.slot_mut(reason) += 1;
    }

    pub fn get(&self, reason: RejectionReason) -> usize {
        match reason {
            RejectionReason::InvalidTitle => self.invalid_title,
            RejectionReason::RatingOutOfRange => self.rating_out_of_range,
            RejectionReason::DurationOutOfRange => self.duration_out_of_range,
            RejectionReason::YearOutOfRange => self.year_out_of_range,
        }
    }

    /// Non-zero counters in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (RejectionReason, usize)> + '_ {
        RejectionReason::ALL
            .into_iter()
            .map(|reason| (reason, self.get(reason)))
            .filter(|(_, count)| *count > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn slot_mut(&mut self, reason: RejectionReason) -> &mut usize {
        match reason {
            RejectionReason::InvalidTitle => &mut self.invalid_title,
            RejectionReason::RatingOutOfRange => &mut self.rating_out_of_range,
            RejectionReason::DurationOutOfRange => &mut self.duration_out_of_range,
            RejectionReason::YearOutOfRange => &mut self.year_out_of_range,
        }
    }
}
