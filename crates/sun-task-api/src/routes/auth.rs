//! Authentication routes

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

#[derive(Serialize)]
pub struct MeResponse {
    pub username: String,
    pub role: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.username == state.config.admin_username
        && payload.password == state.config.admin_password
    {
        let token = auth::create_token(&payload.username, &state.config.jwt_secret)
            .map_err(|e| ApiError::Internal {
                context: "Failed to issue token",
                details: e.to_string(),
            })?;

        Ok(Json(LoginResponse {
            token,
            expires_in: auth::TOKEN_TTL_SECS,
        }))
    } else {
        Err(ApiError::Unauthorized)
    }
}

pub async fn me(Extension(claims): Extension<Claims>) -> Json<MeResponse> {
    Json(MeResponse {
        username: claims.sub,
        role: claims.role,
    })
}
