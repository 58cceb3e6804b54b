// Time creation service
// Turns press/move/release/click over a time column into a new event range

mod events;
mod notifier;
mod range;
mod session;

pub use events::{BeforeCreate, CreationMessage, CreationTopic, DragInput, DragKind};
pub use notifier::{CreationGuide, CreationNotifier, NoopGuide};
pub use range::{clamp_to_day, RangeBuilder};
pub use session::{DragSession, SessionState};

use std::rc::Rc;

use crate::models::creation::{CreationRange, CreationRequest};
use crate::models::pointer::{PointerEvent, PointerSample};
use crate::models::settings::GridSettings;
use crate::models::time_column::HitTarget;
use crate::services::column_lookup::ColumnLookup;
use crate::services::geometry::TimeGeometry;
use crate::services::publisher::{OwnerId, Publisher};

/// Transform applied to every sample before it is published
pub type Revision = Box<dyn Fn(PointerSample) -> PointerSample>;

const IDLE_SUBSCRIPTIONS: &[DragKind] = &[DragKind::Press];
const ACTIVE_SUBSCRIPTIONS: &[DragKind] = &[
    DragKind::Press,
    DragKind::Move,
    DragKind::Release,
    DragKind::Click,
];

/// Drag-to-create handler for time grid columns.
///
/// Idle until a press lands on a time column, then Active until the
/// matching release or click. Only one session exists at a time; while
/// Active, further presses are ignored.
pub struct TimeCreation<L> {
    lookup: L,
    geometry: TimeGeometry,
    range_builder: RangeBuilder,
    notifier: CreationNotifier,
    publisher: Publisher<CreationTopic, CreationMessage>,
    revision: Option<Revision>,
    subscriptions: Vec<DragKind>,
    session: Option<DragSession>,
}

impl<L: ColumnLookup> TimeCreation<L> {
    /// Invalid settings are replaced by the defaults
    pub fn new(lookup: L, settings: GridSettings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("Invalid grid settings for time creation: {}, using defaults", e);
                GridSettings::default()
            }
        };

        Self {
            lookup,
            geometry: TimeGeometry::new(settings),
            range_builder: RangeBuilder::new(settings.default_duration()),
            notifier: CreationNotifier::default(),
            publisher: Publisher::new(),
            revision: None,
            subscriptions: IDLE_SUBSCRIPTIONS.to_vec(),
            session: None,
        }
    }

    /// Use `guide` as the overlay handle passed along with `BeforeCreate`
    pub fn with_guide(mut self, guide: Rc<dyn CreationGuide>) -> Self {
        self.notifier = CreationNotifier::new(guide);
        self
    }

    /// Apply `revise` to every sample before it is stored or published
    pub fn with_revision(
        mut self,
        revise: impl Fn(PointerSample) -> PointerSample + 'static,
    ) -> Self {
        self.revision = Some(Box::new(revise));
        self
    }

    pub fn state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Inbound drag inputs currently listened to
    pub fn subscriptions(&self) -> &[DragKind] {
        &self.subscriptions
    }

    pub fn subscribe(
        &mut self,
        topic: CreationTopic,
        owner: OwnerId,
        handler: impl FnMut(&CreationMessage) + 'static,
    ) {
        self.publisher.subscribe(topic, owner, handler);
    }

    pub fn unsubscribe(&mut self, owner: OwnerId) -> usize {
        self.publisher.unsubscribe(owner)
    }

    /// Route a drag input to its handler if currently subscribed.
    ///
    /// Returns the creation request when the input closed a session.
    pub fn dispatch(&mut self, input: &DragInput) -> Option<CreationRequest> {
        if !self.subscriptions.contains(&input.kind()) {
            log::trace!("Ignoring {:?} input; not subscribed", input.kind());
            return None;
        }

        match input {
            DragInput::Press { target, event } => {
                self.on_press(target, event);
                None
            }
            DragInput::Move(event) => {
                self.on_move(event);
                None
            }
            DragInput::Release(event) => self.on_release(event),
            DragInput::Click(event) => self.on_click(event),
        }
    }

    /// Open a session if `target` belongs to a time column.
    ///
    /// Returns whether a session was started.
    fn on_press(&mut self, target: &HitTarget, event: &PointerEvent) -> bool {
        if self.session.is_some() {
            log::debug!("Press ignored: a creation session is already active");
            return false;
        }

        let Some(column) = self.lookup.column_for(target) else {
            log::debug!("Press ignored: no time column under '{}'", target.class_name);
            return false;
        };

        let resolver = self.geometry.bind(column);
        let sample = self.revise(resolver.resolve(event));

        log::debug!(
            "Creation session started in view {} at {}",
            sample.related_column.view_id,
            sample.nearest_grid_time
        );

        self.session = Some(DragSession::new(resolver, sample.clone()));
        self.subscriptions = ACTIVE_SUBSCRIPTIONS.to_vec();
        self.publish(CreationMessage::SessionStart(sample));
        true
    }

    fn on_move(&mut self, event: &PointerEvent) {
        let Some(session) = &self.session else {
            return;
        };

        let sample = self.revise(session.sample(event));
        log::trace!("Creation session moved to {}", sample.nearest_grid_time);
        self.publish(CreationMessage::SessionMove(sample));
    }

    /// Close the session with the dragged range, extended by one slot
    fn on_release(&mut self, event: &PointerEvent) -> Option<CreationRequest> {
        let session = self.end_session()?;

        let sample = self.revise(session.sample(event));
        let dragged = CreationRange::ordered(
            session.start_sample().nearest_grid_time,
            sample.nearest_grid_time,
        );
        let end = dragged
            .end
            .checked_add_signed(self.geometry.settings().drag_extension())
            .unwrap_or_else(|| sample.related_column.day_end());
        let sample = sample.with_create_range(CreationRange {
            start: dragged.start,
            end,
        });

        self.publish(CreationMessage::SessionEnd(sample.clone()));
        Some(self.create(&sample))
    }

    /// Close the session with the default duration from the clicked slot
    fn on_click(&mut self, event: &PointerEvent) -> Option<CreationRequest> {
        let session = self.end_session()?;

        let sample = self.revise(session.sample(event));

        self.publish(CreationMessage::SessionClick(sample.clone()));
        Some(self.create(&sample))
    }

    /// Drop any session, the guide handle and all drag input subscriptions.
    ///
    /// No terminal message is published for an interrupted session.
    pub fn destroy(&mut self) {
        if self.session.take().is_some() {
            log::debug!("Creation session discarded on teardown");
        }
        self.subscriptions.clear();
        self.notifier = CreationNotifier::default();
    }

    fn end_session(&mut self) -> Option<DragSession> {
        let session = self.session.take()?;
        self.subscriptions = IDLE_SUBSCRIPTIONS.to_vec();
        log::debug!(
            "Creation session ended in view {}",
            session.bound_column().view_id
        );
        Some(session)
    }

    fn create(&mut self, sample: &PointerSample) -> CreationRequest {
        let range = self.range_builder.build(sample);
        self.notifier
            .notify(&mut self.publisher, range, &sample.related_column)
    }

    fn revise(&self, sample: PointerSample) -> PointerSample {
        match &self.revision {
            Some(revise) => revise(sample),
            None => sample,
        }
    }

    fn publish(&mut self, message: CreationMessage) {
        let topic = message.topic();
        self.publisher.publish(&topic, &message);
    }
}
