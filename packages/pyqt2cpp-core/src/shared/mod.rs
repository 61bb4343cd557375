//! Shared module - common types used across features

pub mod models;

pub use models::*;
