use utoipa::OpenApi;

use crate::errors::{ErrorEnvelope, ErrorItem, ErrorItemSource, SourceKey};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swagger Errors",
        version = "0.1.0",
        description = "Standard error envelope returned by failing API operations. Every item carries a string code, a title, a detail message and optionally the request location it refers to.",
    ),
    components(
        schemas(
            ErrorEnvelope,
            ErrorItem,
            ErrorItemSource,
            SourceKey,
        )
    ),
    tags(
        (name = "errors", description = "Error response schemas"),
    )
)]
pub struct ErrorApiDoc;
