// Time column module
// One rendered calendar day laid out as a vertical time axis

use chrono::{NaiveDate, NaiveDateTime};
use egui::Rect;

use crate::utils::date::{end_of_day, start_of_day};

/// Identifier assigned to a rendered view by the rendering layer.
pub type ViewId = u32;

/// A calendar day rendered as a vertical time axis.
///
/// Owned by the rendering layer. The creation engine only reads it and
/// keeps a clone for the lifetime of a drag session.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeColumn {
    pub view_id: ViewId,
    pub date: NaiveDate,
    /// Measured box of the column container in screen coordinates
    pub bounds: Rect,
}

impl TimeColumn {
    pub fn new(view_id: ViewId, date: NaiveDate, bounds: Rect) -> Self {
        Self {
            view_id,
            date,
            bounds,
        }
    }

    pub fn top(&self) -> f32 {
        self.bounds.top()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    pub fn day_start(&self) -> NaiveDateTime {
        start_of_day(self.date)
    }

    pub fn day_end(&self) -> NaiveDateTime {
        end_of_day(self.date)
    }
}

/// An element under the pointer together with its ancestry.
///
/// Stands in for the DOM node a press lands on; only the class list and
/// the parent chain are needed to find the owning column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HitTarget {
    pub class_name: String,
    pub parent: Option<Box<HitTarget>>,
}

impl HitTarget {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            parent: None,
        }
    }

    /// Nest this element inside `parent`
    pub fn within(mut self, parent: HitTarget) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    /// Iterate from this element up to the root
    pub fn ancestry(&self) -> impl Iterator<Item = &HitTarget> {
        std::iter::successors(Some(self), |node| node.parent.as_deref())
    }
}
