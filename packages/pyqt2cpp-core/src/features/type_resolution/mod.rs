//! Type classification
//!
//! Maps Python type expressions onto C++ type names.

pub mod registry;
pub mod resolver;

pub use registry::{QtTypeRegistry, QT_CLASS_NAMES};
pub use resolver::TypeResolver;
