//! Hands finished ranges to whoever persists new events.

use std::rc::Rc;

use crate::models::creation::{CreationRange, CreationRequest};
use crate::models::time_column::TimeColumn;
use crate::services::publisher::Publisher;

use super::events::{BeforeCreate, CreationMessage, CreationTopic};

/// Transient highlight drawn while a session is active.
///
/// Rendered elsewhere; listeners of `BeforeCreate` clear it once the new
/// event has been taken over.
pub trait CreationGuide {
    fn clear(&self);
}

/// Guide for hosts that draw no overlay
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGuide;

impl CreationGuide for NoopGuide {
    fn clear(&self) {}
}

/// Publishes `BeforeCreate` for a clamped range
#[derive(Clone)]
pub struct CreationNotifier {
    guide: Rc<dyn CreationGuide>,
}

impl Default for CreationNotifier {
    fn default() -> Self {
        Self::new(Rc::new(NoopGuide))
    }
}

impl CreationNotifier {
    pub fn new(guide: Rc<dyn CreationGuide>) -> Self {
        Self { guide }
    }

    pub fn notify(
        &self,
        publisher: &mut Publisher<CreationTopic, CreationMessage>,
        range: CreationRange,
        column: &TimeColumn,
    ) -> CreationRequest {
        let request = CreationRequest::from(range);

        log::debug!(
            "Requesting event creation in view {}: {} - {}",
            column.view_id,
            request.starts,
            request.ends
        );

        let message = CreationMessage::BeforeCreate(BeforeCreate {
            request,
            view_id: column.view_id,
            guide: Rc::clone(&self.guide),
        });
        publisher.publish(&CreationTopic::BeforeCreate, &message);

        request
    }
}
