//! Accounts service routes

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    error::AccountResult,
    models::{Credentials, CredentialsRequest, LoginResponse},
    state::AppState,
};

/// Create the router for the accounts service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/user", post(create_user))
        .route("/login", post(login))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let healthy = match state.accounts.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            error!("Health check failed: {}", e);
            false
        }
    };

    let (status, label) = if healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status,
        Json(json!({
            "status": label,
            "service": "accounts-service"
        })),
    )
}

/// User registration endpoint
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AccountResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let credentials = Credentials::try_from(payload)?;
    info!("Registration attempt for user: {}", credentials.username());

    let user = state.accounts.register(credentials).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AccountResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let credentials = Credentials::try_from(payload)?;
    info!("Login attempt for user: {}", credentials.username());

    state.accounts.authenticate(credentials).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            message: "Login successful".to_string(),
        }),
    ))
}
