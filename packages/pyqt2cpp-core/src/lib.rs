/*
 * pyqt2cpp core - PyQt signal declarations to C++ header fragments
 *
 * Feature-first layout:
 * - shared/    : Span and error types
 * - features/  : parsing, type_resolution, translation
 * - pipeline/  : module walk and entry points
 *
 * The pipeline recognizes one idiom: top-level Python classes binding
 * `pyqtSignal(...)` factory calls to class members. Each recognized
 * class renders as a C++ class declaration with a signals section.
 */

pub mod features;
pub mod pipeline;
pub mod shared;

pub use features::translation::models::{CppClass, CppSignal, CppType, Primitive};
pub use features::type_resolution::{QtTypeRegistry, TypeResolver, QT_CLASS_NAMES};
pub use pipeline::processor::{translate_source, ModuleTranslator};
pub use shared::models::{Result, Span, TranslateError};
