// Service module exports

pub mod column_lookup;
pub mod creation;
pub mod geometry;
pub mod publisher;
pub mod settings;
