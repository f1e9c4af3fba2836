//! Domain error to HTTP response mapping

use axum::{
    extract::rejection::BytesRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use quotes_core::QuoteError;
use serde::Serialize;
use thiserror::Error;
use tokio::time::error::Elapsed;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("failed to read the request body, err: {0}")]
    Body(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<BytesRejection> for ApiError {
    fn from(e: BytesRejection) -> Self {
        ApiError::Body(e.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Body(e.to_string())
    }
}

impl From<Elapsed> for ApiError {
    fn from(_: Elapsed) -> Self {
        ApiError::Quote(QuoteError::DeadlineExceeded)
    }
}

/// Error envelope returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
    pub status: u16,
}

impl ApiError {
    /// Status code and public message for this error
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Quote(QuoteError::MissingFields) => {
                (StatusCode::BAD_REQUEST, "validation failed")
            }
            ApiError::Quote(QuoteError::InvalidId) => (StatusCode::BAD_REQUEST, "incorrect id"),
            ApiError::Quote(QuoteError::RecordNotFound) => {
                (StatusCode::NOT_FOUND, "fail find the record")
            }
            ApiError::Quote(QuoteError::NoQuotesAvailable) => {
                (StatusCode::NOT_FOUND, "database empty")
            }
            ApiError::Quote(QuoteError::AuthorNotFound) => {
                (StatusCode::NOT_FOUND, "fail find the author")
            }
            ApiError::Quote(QuoteError::DeadlineExceeded) => (
                StatusCode::GATEWAY_TIMEOUT,
                "request processing exceeded the allowed time limit",
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "{}", message);
        } else {
            warn!(status = status.as_u16(), error = %self, "{}", message);
        }

        let body = ErrorBody {
            message: message.to_string(),
            error: self.to_string(),
            status: status.as_u16(),
        };

        match serde_json::to_vec(&body) {
            Ok(json) => (status, [(header::CONTENT_TYPE, "application/json")], json).into_response(),
            Err(e) => {
                error!("Failed to serialize error body: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_error_table() {
        let cases = [
            (QuoteError::MissingFields, 400, "validation failed"),
            (QuoteError::InvalidId, 400, "incorrect id"),
            (QuoteError::RecordNotFound, 404, "fail find the record"),
            (QuoteError::NoQuotesAvailable, 404, "database empty"),
            (QuoteError::AuthorNotFound, 404, "fail find the author"),
            (
                QuoteError::DeadlineExceeded,
                504,
                "request processing exceeded the allowed time limit",
            ),
            (QuoteError::IdsExhausted, 500, "internal server error"),
        ];

        for (err, code, message) in cases {
            let text = err.to_string();
            let (status, body) = render(ApiError::from(err)).await;
            assert_eq!(status.as_u16(), code);
            assert_eq!(body["status"], code);
            assert_eq!(body["message"], message);
            assert_eq!(body["error"], text);
        }
    }

    #[tokio::test]
    async fn test_body_decode_failure_is_internal_error() {
        let decode_err = serde_json::from_slice::<quotes_core::NewQuote>(b"{not json").unwrap_err();

        let (status, body) = render(ApiError::from(decode_err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "internal server error");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("failed to read the request body, err: "));
    }

    #[tokio::test]
    async fn test_elapsed_maps_to_gateway_timeout() {
        let elapsed = tokio::time::timeout(
            std::time::Duration::from_millis(1),
            std::future::pending::<()>(),
        )
        .await
        .unwrap_err();

        let (status, body) = render(ApiError::from(elapsed)).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["error"], "deadline exceeded");
    }
}
