mod errors;

use crate::oauth::options::AuthOptions;
use crate::oauth::redirect::AuthRedirectBuilder;
use crate::routes::login::errors::LoginErr;
use crate::AppState;
use axum::extract::State;
use axum::response::Redirect;
use axum::Json;

/// Redirects to Singpass using the active auth options.
pub async fn get_login(State(app_state): State<AppState>) -> Result<Redirect, LoginErr> {
    let options = app_state
        .active_options
        .get()
        .await
        .ok_or(LoginErr::NoActiveAuthOptions)?;
    redirect(&app_state.redirect_builder, &options)
}

/// Redirects to Singpass using the auth options in the request body.
pub async fn post_login(
    State(app_state): State<AppState>,
    Json(options): Json<AuthOptions>,
) -> Result<Redirect, LoginErr> {
    redirect(&app_state.redirect_builder, &options)
}

fn redirect(builder: &AuthRedirectBuilder, options: &AuthOptions) -> Result<Redirect, LoginErr> {
    let authorization = builder.build(options)?;
    Ok(Redirect::to(authorization.url.as_str()))
}
