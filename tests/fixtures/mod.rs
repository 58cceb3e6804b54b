// Test fixtures - reusable test data
// Provides consistent columns and pointer positions across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use egui::{pos2, vec2, Rect};
use time_grid_creation::{HitTarget, PointerEvent, TimeColumn};

/// Top of every fixture column in screen coordinates
pub const COLUMN_TOP: f32 = 80.0;
/// One pixel per minute of the day
pub const COLUMN_HEIGHT: f32 = 1440.0;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 1, 2024
    pub fn march_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn on(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }
}

/// Sample columns and targets
pub mod columns {
    use super::*;

    pub fn column(view_id: u32, date: NaiveDate) -> TimeColumn {
        TimeColumn::new(
            view_id,
            date,
            Rect::from_min_size(
                pos2(60.0 + 100.0 * view_id as f32, COLUMN_TOP),
                vec2(100.0, COLUMN_HEIGHT),
            ),
        )
    }

    pub fn column_target(view_id: u32) -> HitTarget {
        HitTarget::new(format!("time-date view-{view_id}"))
    }

    pub fn header_target() -> HitTarget {
        HitTarget::new("dayname-date").within(HitTarget::new("dayname-layout"))
    }
}

/// Pointer event `minutes` into the day on a fixture column
pub fn pointer_at_minute(minutes: f32) -> PointerEvent {
    PointerEvent::at(pos2(120.0, COLUMN_TOP + minutes))
}

pub fn pointer_at(h: u32, m: u32) -> PointerEvent {
    pointer_at_minute((h * 60 + m) as f32)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
