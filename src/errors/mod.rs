//! Structured error responses and their JSON envelope

pub mod entry;
pub mod envelope;
pub mod error;
pub mod response;
pub mod source;

pub use entry::ErrorEntry;
pub use envelope::{ErrorEnvelope, ErrorItem, ErrorItemSource};
pub use error::Error;
pub use response::ErrorResponse;
pub use source::{ErrorSource, SourceKey};
