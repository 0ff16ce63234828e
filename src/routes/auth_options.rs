use crate::app_state::ActiveAuthOptions;
use crate::oauth::options::AuthOptions;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn get_auth_options(State(active): State<ActiveAuthOptions>) -> Response {
    match active.get().await {
        Some(options) => Json(options).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Stored as given; the options are validated when a login is triggered.
pub async fn put_auth_options(
    State(active): State<ActiveAuthOptions>,
    Json(options): Json<AuthOptions>,
) -> StatusCode {
    tracing::debug!(client_id = %options.client_id, "active auth options replaced");
    active.set(Some(options)).await;
    StatusCode::NO_CONTENT
}

pub async fn clear_auth_options(State(active): State<ActiveAuthOptions>) -> StatusCode {
    active.set(None).await;
    StatusCode::NO_CONTENT
}
