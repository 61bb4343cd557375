//! Feature modules

pub mod parsing;
pub mod translation;
pub mod type_resolution;
