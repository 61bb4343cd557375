//! Shared models

mod error;
mod span;

pub use error::{Result, TranslateError};
pub use span::Span;
