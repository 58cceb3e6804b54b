// Time Grid Creation Library
// Pointer-driven creation of new events on calendar time grids

pub mod models;
pub mod services;
pub mod utils;

pub use models::creation::{CreationRange, CreationRequest};
pub use models::pointer::{PointerEvent, PointerSample};
pub use models::settings::GridSettings;
pub use models::time_column::{HitTarget, TimeColumn};
pub use services::creation::{
    CreationMessage, CreationTopic, DragInput, SessionState, TimeCreation,
};
