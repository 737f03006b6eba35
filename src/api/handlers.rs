use crate::api::errors::ApiError;
use crate::constants::ROOT_MESSAGE;
use axum::http::Uri;
use axum::Json;
use serde::Serialize;
use tracing::debug;

/// Response payload of the root endpoint
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Returns the fixed API greeting.
///
/// Stateless: every call yields the same body.
#[axum::debug_handler]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}

/// Fallback for any path without a registered route
pub async fn not_found(uri: Uri) -> ApiError {
    debug!(path = %uri.path(), "No route matched");
    ApiError::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_returns_the_greeting() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Bita shop API");
    }

    #[tokio::test]
    async fn not_found_reports_404() {
        let err = not_found(Uri::from_static("/missing")).await;
        assert_eq!(err, ApiError::not_found());
    }
}
