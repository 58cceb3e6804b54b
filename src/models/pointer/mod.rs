// Pointer module
// Raw pointer input and the time samples resolved from it

use chrono::NaiveDateTime;
use egui::Pos2;

use super::creation::CreationRange;
use super::time_column::TimeColumn;

/// Raw pointer event as delivered by the host event loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in screen coordinates
    pub pos: Pos2,
}

impl PointerEvent {
    pub fn at(pos: Pos2) -> Self {
        Self { pos }
    }
}

/// A pointer position resolved against one time column.
///
/// Produced fresh for every pointer sample. Instants are absolute: the
/// day-relative offset added to midnight of `related_column.date`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerSample {
    pub origin_event: PointerEvent,
    pub related_column: TimeColumn,
    /// Pointer Y relative to the column top, clamped to the column height
    pub mouse_y: f32,
    pub grid_index: u32,
    pub time_of_day: NaiveDateTime,
    pub nearest_grid_index: u32,
    pub nearest_grid_time: NaiveDateTime,
    /// Present only on the sample that closes a drag (release path)
    pub create_range: Option<CreationRange>,
}

impl PointerSample {
    /// Copy of this sample carrying the drag's candidate range
    pub fn with_create_range(self, range: CreationRange) -> Self {
        Self {
            create_range: Some(range),
            ..self
        }
    }
}
