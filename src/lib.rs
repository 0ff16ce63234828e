pub use crate::app_state::{ActiveAuthOptions, AppState, Config};
pub use crate::oauth::errors::AuthOptionsError;
pub use crate::oauth::options::{AuthOptions, Environment};
pub use crate::oauth::primitives::{RandomTokenSource, SeededTokenSource, UuidTokenSource};
pub use crate::oauth::redirect::{redirect_to_singpass, AuthRedirectBuilder, AuthorizationRedirect};
use axum::Router;
use tower_http::trace::TraceLayer;

mod app_state;
pub mod oauth;
mod routes;

pub fn create_app(state: AppState) -> Router {
    routes::main_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
