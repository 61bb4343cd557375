//! Pipeline orchestration

pub mod processor;

pub use processor::{translate_source, ModuleTranslator};
