use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::{debug, error};

use super::entry::ErrorEntry;
use super::envelope::ErrorEnvelope;
use super::error::{Error, Result};
use crate::api::producer::{JsonProducer, Producer};
use crate::api::writer::{BufferedResponse, ResponseWriter};
use crate::metrics::{ERROR_ENTRIES_TOTAL, ERROR_RESPONSES_TOTAL, ERROR_SERIALIZATION_FAILURES_TOTAL};

pub(crate) const UNKNOWN_ERROR_TITLE: &str = "Unknown error";

/// HTTP error response accumulating structured error entries
///
/// Builder methods consume `self` and hand back the updated response, so a
/// response is only ever owned by the code currently building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    http_status: StatusCode,
    title: String,
    details: String,
    entries: Vec<ErrorEntry>,
}

impl ErrorResponse {
    /// Create a response with no entries
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            http_status: status,
            title: title.into(),
            details: String::new(),
            entries: Vec::new(),
        }
    }

    /// Create a response carrying a top-level explanation
    pub fn detailed(status: StatusCode, title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
            ..Self::new(status, title)
        }
    }

    /// Replace all entries. Anything appended earlier is discarded.
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = ErrorEntry>) -> Self {
        self.entries = entries.into_iter().collect();
        self
    }

    /// Append entries after the existing ones
    pub fn append_entries(mut self, entries: impl IntoIterator<Item = ErrorEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Append a code-0 entry per error, keeping only its message
    // TODO: map database and message-queue errors to structured codes instead of code 0
    pub fn append_unknown<E: fmt::Display>(mut self, errors: impl IntoIterator<Item = E>) -> Self {
        self.entries
            .extend(errors.into_iter().map(|err| ErrorEntry::unknown(err.to_string())));
        self
    }

    pub fn http_status(&self) -> u16 {
        self.http_status.as_u16()
    }

    pub fn status_code(&self) -> StatusCode {
        self.http_status
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Wire model for the current entries
    pub fn envelope(&self) -> ErrorEnvelope {
        self.entries.iter().collect()
    }

    /// Serialize the envelope; an empty response yields no bytes at all
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::to_vec(&self.envelope())?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(String::from_utf8(self.to_json_bytes()?)?)
    }

    /// Flatten entries to `"<code>. <title>. <details>"` fragments, unseparated
    pub fn error_message(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}. {}. {}", entry.code, entry.title, entry.details))
            .collect()
    }

    /// Write the status, then the envelope through `producer` if there is anything to report
    pub fn write_response<W, P>(&self, writer: &mut W, producer: &P) -> Result<()>
    where
        W: ResponseWriter + ?Sized,
        P: Producer + ?Sized,
    {
        let status = self.http_status.as_u16();
        ERROR_RESPONSES_TOTAL
            .with_label_values(&[&status.to_string()])
            .inc();

        if !self.entries.is_empty() {
            let content_type = HeaderValue::from_str(producer.content_type()).map_err(|e| {
                ERROR_SERIALIZATION_FAILURES_TOTAL.inc();
                error!(
                    status = %status,
                    content_type = %producer.content_type(),
                    "Producer content type is not a valid header value"
                );
                Error::from(e)
            })?;
            writer.headers_mut().insert(header::CONTENT_TYPE, content_type);
        }
        writer.write_header(self.http_status);

        if self.entries.is_empty() {
            debug!(status = %status, title = %self.title, "Wrote error response without body");
            return Ok(());
        }

        if let Err(e) = producer.produce(writer, &self.envelope()) {
            ERROR_SERIALIZATION_FAILURES_TOTAL.inc();
            error!(status = %status, error = %e, "Failed to produce error response body");
            return Err(e);
        }

        ERROR_ENTRIES_TOTAL.inc_by(self.entries.len() as u64);
        debug!(
            status = %status,
            title = %self.title,
            entries = self.entries.len(),
            "Wrote error response"
        );
        Ok(())
    }

    /// Generated responders expose a payload setter; this response builds its own payload
    pub fn with_payload(self, _payload: ErrorEnvelope) -> Result<Self> {
        Err(Error::Unsupported("ErrorResponse::with_payload"))
    }

    pub fn set_payload(&mut self, _payload: ErrorEnvelope) -> Result<()> {
        Err(Error::Unsupported("ErrorResponse::set_payload"))
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_message())
    }
}

impl std::error::Error for ErrorResponse {}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let mut writer = BufferedResponse::new();
        match self.write_response(&mut writer, &JsonProducer) {
            Ok(()) => writer.into_response(),
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Helpers for the common HTTP failures
impl ErrorResponse {
    pub fn unknown_error<E: fmt::Display>(err: E) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, UNKNOWN_ERROR_TITLE).append_unknown([err])
    }

    pub fn unprocessable_entity() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity")
    }

    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad request")
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden")
    }

    pub fn too_many_requests() -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, "Too many requests")
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    // Title kept as "Unauthorized"; clients already match on it
    pub fn teapot() -> Self {
        Self::new(StatusCode::IM_A_TEAPOT, "Unauthorized")
    }
}
