// Library exports
pub mod api;
pub mod config;
pub mod errors;
pub mod metrics;

pub use api::producer::{JsonProducer, Producer};
pub use api::writer::{BufferedResponse, ResponseWriter};
pub use errors::{ErrorEntry, ErrorEnvelope, ErrorResponse, ErrorSource, SourceKey};
