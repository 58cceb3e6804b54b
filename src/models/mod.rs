// Module exports for models

pub mod creation;
pub mod pointer;
pub mod settings;
pub mod time_column;
