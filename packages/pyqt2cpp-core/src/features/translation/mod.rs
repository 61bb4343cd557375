//! C++ declaration building
//!
//! ## Structure
//! - `models` - CppClass, CppSignal, CppType and header rendering
//! - `class_extractor` - class_definition nodes to CppClass
//! - `signal_extractor` - assignment statements to CppSignal

pub mod class_extractor;
pub mod models;
pub mod signal_extractor;

pub use class_extractor::extract_class;
pub use models::{CppClass, CppSignal, CppType, Primitive};
pub use signal_extractor::extract_signals;
