//! Inbound drag input and outbound lifecycle messages of the creation engine.

use std::fmt;
use std::rc::Rc;

use crate::models::creation::CreationRequest;
use crate::models::pointer::{PointerEvent, PointerSample};
use crate::models::time_column::{HitTarget, ViewId};

use super::notifier::CreationGuide;

/// Kind of inbound drag input, used as the subscription key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    Press,
    Move,
    Release,
    Click,
}

/// Raw pointer interaction delivered by the drag handler
#[derive(Debug, Clone, PartialEq)]
pub enum DragInput {
    /// Pointer pressed over `target`
    Press {
        target: HitTarget,
        event: PointerEvent,
    },
    Move(PointerEvent),
    Release(PointerEvent),
    /// Press and release without movement
    Click(PointerEvent),
}

impl DragInput {
    pub fn kind(&self) -> DragKind {
        match self {
            DragInput::Press { .. } => DragKind::Press,
            DragInput::Move(_) => DragKind::Move,
            DragInput::Release(_) => DragKind::Release,
            DragInput::Click(_) => DragKind::Click,
        }
    }
}

/// Topics published by the creation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreationTopic {
    SessionStart,
    SessionMove,
    SessionEnd,
    SessionClick,
    BeforeCreate,
}

/// Request to create an event, plus the guide overlay to clear afterwards
#[derive(Clone)]
pub struct BeforeCreate {
    pub request: CreationRequest,
    pub view_id: ViewId,
    pub guide: Rc<dyn CreationGuide>,
}

impl fmt::Debug for BeforeCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeforeCreate")
            .field("request", &self.request)
            .field("view_id", &self.view_id)
            .finish_non_exhaustive()
    }
}

/// Message delivered to creation listeners
#[derive(Debug, Clone)]
pub enum CreationMessage {
    SessionStart(PointerSample),
    SessionMove(PointerSample),
    /// Drag released; the sample carries the candidate range
    SessionEnd(PointerSample),
    SessionClick(PointerSample),
    BeforeCreate(BeforeCreate),
}

impl CreationMessage {
    pub fn topic(&self) -> CreationTopic {
        match self {
            CreationMessage::SessionStart(_) => CreationTopic::SessionStart,
            CreationMessage::SessionMove(_) => CreationTopic::SessionMove,
            CreationMessage::SessionEnd(_) => CreationTopic::SessionEnd,
            CreationMessage::SessionClick(_) => CreationTopic::SessionClick,
            CreationMessage::BeforeCreate(_) => CreationTopic::BeforeCreate,
        }
    }

    pub fn sample(&self) -> Option<&PointerSample> {
        match self {
            CreationMessage::SessionStart(sample)
            | CreationMessage::SessionMove(sample)
            | CreationMessage::SessionEnd(sample)
            | CreationMessage::SessionClick(sample) => Some(sample),
            CreationMessage::BeforeCreate(_) => None,
        }
    }

    pub fn before_create(&self) -> Option<&BeforeCreate> {
        match self {
            CreationMessage::BeforeCreate(payload) => Some(payload),
            _ => None,
        }
    }
}
