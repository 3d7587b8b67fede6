use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Every failure a handler can surface, mapped to a status code and a
/// `{"error": ...}` body by the `IntoResponse` impl.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No Authorization header on a protected route.
    #[error("Access denied")]
    MissingToken,
    /// Token present but unverifiable: bad signature, malformed or expired.
    #[error("Invalid token")]
    InvalidToken,
    /// Unknown email and wrong password share this message on purpose, so
    /// login responses cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User not found")]
    NotFound,
    /// Anything unexpected, typically a failed store call. The detail is
    /// logged server-side and never sent to the client.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken | ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(e) => {
                error!(error = %e, "request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn status_and_body(err: ApiError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_token_maps_to_401() {
        let (status, body) = status_and_body(ApiError::MissingToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Access denied");
    }

    #[tokio::test]
    async fn invalid_token_maps_to_400() {
        let (status, body) = status_and_body(ApiError::InvalidToken).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid token");
    }

    #[tokio::test]
    async fn invalid_credentials_message_is_generic() {
        let (status, body) = status_and_body(ApiError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email or password");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = status_and_body(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn internal_error_detail_is_not_exposed() {
        let cause = anyhow::anyhow!("connection refused (postgres:5432)");
        let (status, body) = status_and_body(ApiError::Internal(cause)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }
}
