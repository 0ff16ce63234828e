use crate::oauth::options::AuthOptions;
use crate::oauth::primitives::RandomTokenSource;
use crate::oauth::redirect::AuthRedirectBuilder;
use anyhow::Context;
use axum::extract::FromRef;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub redirect_builder: AuthRedirectBuilder,
    pub active_options: ActiveAuthOptions,
}

impl AppState {
    pub fn new(config: Config, tokens: Arc<dyn RandomTokenSource>) -> Self {
        AppState {
            redirect_builder: AuthRedirectBuilder::new(tokens),
            active_options: ActiveAuthOptions::new(config.initial_auth_options),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Seeds the active configuration at startup.
    pub initial_auth_options: Option<AuthOptions>,
}

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

impl Config {
    /// Reads `SINGPASS_*` variables. Call `dotenv` first to pick up a `.env`
    /// file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("SINGPASS_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("SINGPASS_LISTEN_ADDR is not a socket address")?;

        let client_id = lookup("SINGPASS_CLIENT_ID");
        let redirect_uri = lookup("SINGPASS_REDIRECT_URI");
        let initial_auth_options = if client_id.is_some() || redirect_uri.is_some() {
            let stg = lookup("SINGPASS_STG")
                .map(|v| v.parse::<bool>())
                .transpose()
                .context("SINGPASS_STG must be true or false")?;
            Some(AuthOptions {
                client_id: client_id.unwrap_or_default(),
                redirect_uri: redirect_uri.unwrap_or_default(),
                stg,
                scope: lookup("SINGPASS_SCOPE"),
                ui_locale: lookup("SINGPASS_UI_LOCALE"),
                ..Default::default()
            })
        } else {
            None
        };

        Ok(Config {
            listen_addr,
            initial_auth_options,
        })
    }
}

/// The one configuration the login trigger uses when it is given none.
#[derive(Clone, Default)]
pub struct ActiveAuthOptions(Arc<RwLock<Option<AuthOptions>>>);

impl ActiveAuthOptions {
    pub fn new(options: Option<AuthOptions>) -> Self {
        ActiveAuthOptions(Arc::new(RwLock::new(options)))
    }

    pub async fn get(&self) -> Option<AuthOptions> {
        self.0.read().await.clone()
    }

    /// Replaces the active configuration, returning the previous one.
    pub async fn set(&self, options: Option<AuthOptions>) -> Option<AuthOptions> {
        std::mem::replace(&mut *self.0.write().await, options)
    }
}
