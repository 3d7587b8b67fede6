use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest, TokenResponse},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
    },
    error::ApiError,
    state::AppState,
    users::repo_types::User,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/protected", get(protected))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<User>, ApiError> {
    let hash = hash_password(&payload.password)?;
    let user =
        User::create_with_password(&state.db, &payload.name, &payload.email, &hash).await?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::InvalidCredentials
        })?;

    // Users created through the authenticated endpoint have no password and
    // cannot log in.
    let Some(hash) = user.password_hash.as_deref() else {
        warn!(user_id = %user.id, "login attempt for passwordless user");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&payload.password, hash)? {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;
    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[instrument]
pub async fn protected(AuthUser(user_id): AuthUser) -> &'static str {
    "This is protected route"
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    #[test]
    fn token_response_shape() {
        let json = serde_json::to_string(&TokenResponse {
            token: "abc".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"token":"abc"}"#);
    }

    #[test]
    fn register_request_requires_all_fields() {
        let err = serde_json::from_str::<RegisterRequest>(r#"{"name":"A","email":"a@x.com"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("password"));
    }
}
