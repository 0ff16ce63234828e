use singpass_login::{create_app, AppState, AuthOptions, Config, RandomTokenSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};
use url::Url;

static LOG_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Hands out `token-1`, `token-2`, ... in order.
#[derive(Default)]
pub struct CountingTokens(AtomicU32);

impl RandomTokenSource for CountingTokens {
    fn next_token(&self) -> String {
        format!("token-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

fn init_logging() {
    LOG_INITIALIZED.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter("singpass_login=debug,tower_http=debug")
            .with_test_writer()
            .init()
    });
}

pub fn test_state(initial_auth_options: Option<AuthOptions>) -> AppState {
    init_logging();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        initial_auth_options,
    };
    AppState::new(config, Arc::new(CountingTokens::default()))
}

/// Serves the app on a random local port and returns its base url.
pub async fn start_test_server(initial_auth_options: Option<AuthOptions>) -> Url {
    let app = create_app(test_state(initial_auth_options));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let mut base = Url::parse("http://127.0.0.1").unwrap();
    base.set_port(Some(listener.local_addr().unwrap().port()))
        .unwrap();
    tokio::spawn(async { axum::serve(listener, app).await.unwrap() });
    base
}

pub fn minimal_options() -> AuthOptions {
    AuthOptions::new("c1", "https://app.example/cb")
}

pub fn query_of(location: &str) -> HashMap<String, String> {
    let url = Url::parse(location).unwrap();
    serde_urlencoded::from_str(url.query().unwrap_or_default()).unwrap()
}
