// Column lookup service
// Resolves the element under a press to the time column that owns it

use std::collections::HashMap;

use crate::models::time_column::{HitTarget, TimeColumn, ViewId};

/// Class carried by every rendered time column container
pub const TIME_DATE_CLASS: &str = "time-date";
/// Prefix of the class token carrying a column's view id
pub const VIEW_ID_PREFIX: &str = "view-";

/// Resolves "element -> owning column or none"
pub trait ColumnLookup {
    fn column_for(&self, target: &HitTarget) -> Option<TimeColumn>;
}

/// Registry of the columns currently rendered by a time grid
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    columns: HashMap<ViewId, TimeColumn>,
}

impl ColumnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a rendered column
    pub fn register(&mut self, column: TimeColumn) {
        self.columns.insert(column.view_id, column);
    }

    pub fn remove(&mut self, view_id: ViewId) -> Option<TimeColumn> {
        self.columns.remove(&view_id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Class list a column container is rendered with
    pub fn class_name_for(view_id: ViewId) -> String {
        format!("{TIME_DATE_CLASS} {VIEW_ID_PREFIX}{view_id}")
    }
}

/// View id of an element rendered as a time column container
fn column_view_id(node: &HitTarget) -> Option<ViewId> {
    if !node.has_class(TIME_DATE_CLASS) {
        return None;
    }
    node.class_name
        .split_whitespace()
        .find_map(|class| class.strip_prefix(VIEW_ID_PREFIX))
        .and_then(|id| id.parse().ok())
}

impl ColumnLookup for ColumnRegistry {
    fn column_for(&self, target: &HitTarget) -> Option<TimeColumn> {
        let view_id = target.ancestry().find_map(column_view_id)?;
        self.columns.get(&view_id).cloned()
    }
}
