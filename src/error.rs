use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced while resolving a media URL.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The engine reported a structured extraction failure (unsupported or
    /// unreachable source, removed or restricted content). The message is
    /// the engine's own diagnostic, surfaced verbatim.
    #[error("{0}")]
    ExtractionFailed(String),

    /// Extraction succeeded but no candidate carried a usable URL.
    #[error("Unable to resolve direct media URL")]
    NoResolvableFormat,

    /// Anything unexpected: the engine could not be spawned, timed out, or
    /// produced output we could not decode.
    #[error("{0}")]
    Internal(String),
}

/// HTTP-facing error wrapper.
///
/// Every failure renders as `400 Bad Request` with a `{"detail": ...}` body;
/// the message is the only differentiator between kinds. Kinds are still
/// told apart in logs at the call site.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_failed_message_is_verbatim() {
        let err = ExtractError::ExtractionFailed("ERROR: unsupported URL".to_string());
        assert_eq!(err.to_string(), "ERROR: unsupported URL");
    }

    #[test]
    fn test_no_resolvable_format_has_fixed_message() {
        assert_eq!(
            ExtractError::NoResolvableFormat.to_string(),
            "Unable to resolve direct media URL"
        );
    }

    #[test]
    fn test_api_error_preserves_extract_message() {
        let err = ApiError::from(ExtractError::Internal("boom".to_string()));
        assert_eq!(err.to_string(), "boom");
    }
}
