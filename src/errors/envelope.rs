use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entry::ErrorEntry;
use super::source::SourceKey;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Problems in the order they were found
    pub errors: Vec<ErrorItem>,
}

/// One element of the `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorItem {
    /// Application error code, rendered as a string
    #[schema(example = "404")]
    pub code: String,
    /// Short summary of the problem
    pub title: String,
    /// Human-readable explanation
    #[serde(default)]
    pub detail: String,
    /// Request location the problem refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorItemSource>,
}

/// Request location of an error item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorItemSource {
    pub key: SourceKey,
    /// Name of the header/parameter, or a pointer into the body
    pub value: String,
}

impl From<&ErrorEntry> for ErrorItem {
    fn from(entry: &ErrorEntry) -> Self {
        Self {
            code: entry.code.to_string(),
            title: entry.title.clone(),
            detail: entry.details.clone(),
            source: entry.source.as_ref().map(|source| ErrorItemSource {
                key: source.key,
                value: source.value.clone(),
            }),
        }
    }
}

impl<'a> FromIterator<&'a ErrorEntry> for ErrorEnvelope {
    fn from_iter<I: IntoIterator<Item = &'a ErrorEntry>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(ErrorItem::from).collect(),
        }
    }
}
