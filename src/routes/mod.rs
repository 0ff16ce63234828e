use crate::app_state::AppState;
use crate::routes::auth_options::{clear_auth_options, get_auth_options, put_auth_options};
use crate::routes::login::{get_login, post_login};
use axum::routing::get;
use axum::Router;

mod auth_options;
mod login;

pub fn main_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/login", get(get_login).post(post_login))
        .route(
            "/auth-options",
            get(get_auth_options)
                .put(put_auth_options)
                .delete(clear_auth_options),
        )
}

async fn root() -> &'static str {
    "Login with Singpass"
}
