use super::source::ErrorSource;

/// A single problem reported in an error response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub code: i32,
    pub title: String,
    pub details: String,
    pub source: Option<ErrorSource>,
}

impl ErrorEntry {
    pub fn new(code: i32, title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
            details: details.into(),
            source: None,
        }
    }

    /// Attribute the entry to a request location
    pub fn with_source(mut self, source: ErrorSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Fallback entry for errors that carry nothing but a message
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(0, super::response::UNKNOWN_ERROR_TITLE, message)
    }
}
