// Time geometry service
// Converts pointer positions over a time column into grid slots and instants

use crate::models::pointer::{PointerEvent, PointerSample};
use crate::models::settings::GridSettings;
use crate::models::time_column::TimeColumn;

/// Shared geometry helpers for time grid handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeGeometry {
    settings: GridSettings,
}

impl TimeGeometry {
    pub fn new(settings: GridSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Resolve a pointer event against `column` without binding to it
    pub fn resolve(&self, column: &TimeColumn, event: &PointerEvent) -> PointerSample {
        self.bind(column.clone()).resolve(event)
    }

    /// Freeze a resolver onto `column` for a whole drag session
    pub fn bind(&self, column: TimeColumn) -> BoundResolver {
        BoundResolver {
            column,
            settings: self.settings,
        }
    }
}

/// A resolver closed over one time column.
///
/// Every sample of a drag session goes through the same bound resolver, so
/// the session stays anchored to its starting column wherever the pointer
/// wanders.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundResolver {
    column: TimeColumn,
    settings: GridSettings,
}

impl BoundResolver {
    pub fn column(&self) -> &TimeColumn {
        &self.column
    }

    /// Pixels covered by one grid slot; zero for degenerate geometry
    pub fn pixels_per_slot(&self) -> f32 {
        let height = self.column.height();
        let slots = self.settings.total_slots();
        if slots == 0 || !height.is_finite() || height <= 0.0 {
            return 0.0;
        }
        height / slots as f32
    }

    /// Pointer Y relative to the column top, clamped into the column
    pub fn mouse_y(&self, event: &PointerEvent) -> f32 {
        let height = self.column.height();
        let y = event.pos.y - self.column.top();
        if !y.is_finite() || !height.is_finite() || height <= 0.0 {
            return 0.0;
        }
        y.clamp(0.0, height)
    }

    pub fn resolve(&self, event: &PointerEvent) -> PointerSample {
        let mouse_y = self.mouse_y(event);
        let per_slot = self.pixels_per_slot();

        let (grid_index, nearest_grid_index) = if per_slot > 0.0 {
            let ratio = mouse_y / per_slot;
            (self.clamp_index(ratio.floor()), self.clamp_index(ratio.round()))
        } else {
            (0, 0)
        };

        PointerSample {
            origin_event: *event,
            related_column: self.column.clone(),
            mouse_y,
            grid_index,
            time_of_day: self.slot_time(grid_index),
            nearest_grid_index,
            nearest_grid_time: self.slot_time(nearest_grid_index),
            create_range: None,
        }
    }

    // The last slot starts before midnight, keeping every instant inside the day.
    fn clamp_index(&self, raw: f32) -> u32 {
        let last = self.settings.total_slots().saturating_sub(1);
        if raw <= 0.0 {
            0
        } else {
            (raw as u32).min(last)
        }
    }

    fn slot_time(&self, index: u32) -> chrono::NaiveDateTime {
        self.column.day_start() + self.settings.slot_duration() * index as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use egui::{pos2, vec2, Rect};
    use test_case::test_case;

    const TOP: f32 = 100.0;

    fn column(height: f32) -> TimeColumn {
        TimeColumn::new(
            1,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Rect::from_min_size(pos2(0.0, TOP), vec2(120.0, height)),
        )
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    // 1440px column: one pixel per minute
    fn event_at_minute(minute: f32) -> PointerEvent {
        PointerEvent::at(pos2(10.0, TOP + minute))
    }

    #[test]
    fn test_floor_and_nearest_slots() {
        let geometry = TimeGeometry::default();
        let sample = geometry.resolve(&column(1440.0), &event_at_minute(9.0 * 60.0 + 20.0));

        assert_eq!(sample.mouse_y, 560.0);
        assert_eq!(sample.grid_index, 18);
        assert_eq!(sample.time_of_day, at(9, 0));
        assert_eq!(sample.nearest_grid_index, 19);
        assert_eq!(sample.nearest_grid_time, at(9, 30));
        assert!(sample.create_range.is_none());
    }

    #[test]
    fn test_pointer_above_column_clamps_to_top() {
        let geometry = TimeGeometry::default();
        let sample = geometry.resolve(&column(1440.0), &PointerEvent::at(pos2(0.0, 0.0)));

        assert_eq!(sample.mouse_y, 0.0);
        assert_eq!(sample.grid_index, 0);
        assert_eq!(sample.nearest_grid_time, at(0, 0));
    }

    #[test]
    fn test_pointer_below_column_clamps_to_last_slot() {
        let geometry = TimeGeometry::default();
        let sample = geometry.resolve(&column(1440.0), &event_at_minute(2000.0));

        assert_eq!(sample.mouse_y, 1440.0);
        assert_eq!(sample.grid_index, 47);
        assert_eq!(sample.nearest_grid_index, 47);
        assert_eq!(sample.nearest_grid_time, at(23, 30));
    }

    #[test]
    fn test_zero_height_maps_to_day_start() {
        let geometry = TimeGeometry::default();
        let sample = geometry.resolve(&column(0.0), &event_at_minute(600.0));

        assert_eq!(sample.mouse_y, 0.0);
        assert_eq!(sample.grid_index, 0);
        assert_eq!(sample.time_of_day, at(0, 0));
        assert_eq!(sample.nearest_grid_time, at(0, 0));
    }

    #[test_case(-50.0, TOP + 600.0; "negative height")]
    #[test_case(f32::NAN, TOP + 600.0; "nan height")]
    #[test_case(f32::INFINITY, TOP + 600.0; "infinite height")]
    #[test_case(1440.0, f32::NAN; "nan pointer y")]
    #[test_case(1440.0, f32::INFINITY; "infinite pointer y")]
    #[test_case(1440.0, f32::NEG_INFINITY; "negative infinite pointer y")]
    fn test_degenerate_geometry_resolves_to_day_start(height: f32, y: f32) {
        let geometry = TimeGeometry::default();
        let column = TimeColumn::new(
            1,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Rect::from_min_max(pos2(0.0, TOP), pos2(120.0, TOP + height)),
        );
        let sample = geometry.resolve(&column, &PointerEvent::at(pos2(10.0, y)));

        assert_eq!(sample.mouse_y, 0.0);
        assert_eq!(sample.grid_index, 0);
        assert_eq!(sample.nearest_grid_index, 0);
        assert_eq!(sample.time_of_day, at(0, 0));
        assert_eq!(sample.nearest_grid_time, at(0, 0));
    }

    #[test]
    fn test_bound_resolver_ignores_other_columns() {
        let geometry = TimeGeometry::default();
        let resolver = geometry.bind(column(1440.0));

        // Far to the right, over what would be a neighbouring column
        let sample = resolver.resolve(&PointerEvent::at(pos2(900.0, TOP + 600.0)));
        assert_eq!(sample.related_column.view_id, 1);
        assert_eq!(sample.nearest_grid_time, at(10, 0));
    }

    #[test]
    fn test_custom_slot_length() {
        let geometry = TimeGeometry::new(GridSettings {
            slot_minutes: 15,
            ..GridSettings::default()
        });
        let sample = geometry.resolve(&column(1440.0), &event_at_minute(9.0 * 60.0 + 20.0));

        assert_eq!(sample.grid_index, 37);
        assert_eq!(sample.time_of_day, at(9, 15));
        assert_eq!(sample.nearest_grid_time, at(9, 15));
    }
}
