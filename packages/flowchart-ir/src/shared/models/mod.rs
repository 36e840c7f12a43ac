//! Shared models

mod error;
mod span;

pub use error::{ErrorKind, FlowchartError, Result};
pub use span::Span;
