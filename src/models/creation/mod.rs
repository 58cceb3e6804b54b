// Creation module
// Time ranges and the request handed to whoever persists new events

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Half-open time range `[start, end)` with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CreationRange {
    /// Build a range from two instants in either order
    pub fn ordered(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Payload for creating a new timed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRequest {
    pub is_all_day: bool,
    pub starts: NaiveDateTime,
    pub ends: NaiveDateTime,
}

impl From<CreationRange> for CreationRequest {
    fn from(range: CreationRange) -> Self {
        Self {
            is_all_day: false,
            starts: range.start,
            ends: range.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_ordered_swaps_reversed_bounds() {
        let range = CreationRange::ordered(at(10, 0), at(9, 0));
        assert_eq!(range.start, at(9, 0));
        assert_eq!(range.end, at(10, 0));
        assert_eq!(range.duration(), Duration::hours(1));
    }

    #[test]
    fn test_request_from_range_is_timed() {
        let request = CreationRequest::from(CreationRange::ordered(at(9, 0), at(9, 0)));
        assert!(!request.is_all_day);
        assert_eq!(request.starts, request.ends);
    }
}
