// Settings service
// Loads and stores the grid settings file

mod error;
mod service;

pub use error::SettingsError;
pub use service::SettingsService;
