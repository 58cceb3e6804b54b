//! State held for one press-to-release interaction.

use crate::models::pointer::{PointerEvent, PointerSample};
use crate::models::time_column::TimeColumn;
use crate::services::geometry::BoundResolver;

/// Whether a drag session is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

/// An open drag session, anchored to the column it started on
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    resolver: BoundResolver,
    start_sample: PointerSample,
}

impl DragSession {
    pub fn new(resolver: BoundResolver, start_sample: PointerSample) -> Self {
        Self {
            resolver,
            start_sample,
        }
    }

    pub fn bound_column(&self) -> &TimeColumn {
        self.resolver.column()
    }

    pub fn start_sample(&self) -> &PointerSample {
        &self.start_sample
    }

    /// Resolve a later pointer event with the resolver bound at session start
    pub fn sample(&self, event: &PointerEvent) -> PointerSample {
        self.resolver.resolve(event)
    }
}
