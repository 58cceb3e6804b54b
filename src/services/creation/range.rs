//! Final range computation for a closed drag session.

use chrono::{Duration, NaiveDate};

use crate::models::creation::CreationRange;
use crate::models::pointer::PointerSample;
use crate::utils::date::{end_of_day, start_of_day};

/// Turns the closing sample of a session into a range clamped to its day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBuilder {
    default_duration: Duration,
}

impl RangeBuilder {
    pub fn new(default_duration: Duration) -> Self {
        Self { default_duration }
    }

    /// Use the dragged range when present, otherwise the default duration
    /// from the nearest grid time. The result never leaves the column's day.
    pub fn build(&self, sample: &PointerSample) -> CreationRange {
        let range = sample.create_range.unwrap_or_else(|| CreationRange {
            start: sample.nearest_grid_time,
            end: sample
                .nearest_grid_time
                .checked_add_signed(self.default_duration)
                .unwrap_or_else(|| sample.related_column.day_end()),
        });

        clamp_to_day(range, sample.related_column.date)
    }
}

/// Clamp `range` into `[start_of_day(date), end_of_day(date)]`.
///
/// A range lying wholly outside the day collapses to the day start.
pub fn clamp_to_day(range: CreationRange, date: NaiveDate) -> CreationRange {
    let day_start = start_of_day(date);
    let day_end = end_of_day(date);

    let start = range.start.max(day_start);
    let end = range.end.min(day_end);

    if start > end {
        return CreationRange {
            start: day_start,
            end: day_start,
        };
    }

    CreationRange { start, end }
}
