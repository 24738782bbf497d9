use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Part of the request an error is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceKey {
    /// Request header
    Header,
    /// Path parameter
    Path,
    /// Query string parameter
    Query,
    /// Request body
    Body,
}

impl SourceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Path => "path",
            Self::Query => "query",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of the offending value, e.g. `query` / `id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSource {
    pub key: SourceKey,
    pub value: String,
}

impl ErrorSource {
    pub fn new(key: SourceKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    pub fn header(name: impl Into<String>) -> Self {
        Self::new(SourceKey::Header, name)
    }

    pub fn path(name: impl Into<String>) -> Self {
        Self::new(SourceKey::Path, name)
    }

    pub fn query(name: impl Into<String>) -> Self {
        Self::new(SourceKey::Query, name)
    }

    pub fn body(pointer: impl Into<String>) -> Self {
        Self::new(SourceKey::Body, pointer)
    }
}
