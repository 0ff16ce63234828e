use crate::oauth::errors::AuthOptionsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub enum LoginErr {
    InvalidAuthOptions(AuthOptionsError),
    NoActiveAuthOptions,
}

impl From<AuthOptionsError> for LoginErr {
    fn from(err: AuthOptionsError) -> Self {
        LoginErr::InvalidAuthOptions(err)
    }
}

impl IntoResponse for LoginErr {
    fn into_response(self) -> Response {
        match self {
            LoginErr::InvalidAuthOptions(err) => {
                tracing::warn!("rejected login request: {err}");
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            LoginErr::NoActiveAuthOptions => (
                StatusCode::CONFLICT,
                "No auth options have been set for login",
            )
                .into_response(),
        }
    }
}
