use openidconnect::PkceCodeChallenge;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;
use url::Url;

pub const STAGING_AUTH_URL: &str = "https://stg-id.singpass.gov.sg/auth";
pub const PRODUCTION_AUTH_URL: &str = "https://id.singpass.gov.sg/auth";

pub const DEFAULT_SCOPE: &str = "openid";
pub const DEFAULT_RESPONSE_TYPE: &str = "code";

pub const SUPPORTED_CODE_CHALLENGE_METHOD: &str = "S256";
pub const SUPPORTED_UI_LOCALES: [&str; 4] = ["en", "ms", "ta", "zh-SG"];

static STAGING_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(STAGING_AUTH_URL).expect("staging authorization endpoint is a valid url")
});
static PRODUCTION_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(PRODUCTION_AUTH_URL).expect("production authorization endpoint is a valid url")
});

/// Configuration for one redirect to the Singpass authorization endpoint.
///
/// Field names on the wire (JSON) follow the camelCase shape host pages
/// already use. An empty string is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthOptions {
    /// Issued by the Singpass Developer Portal.
    #[serde(deserialize_with = "null_as_empty")]
    pub client_id: String,
    /// Where Singpass sends the user after login.
    #[serde(deserialize_with = "null_as_empty")]
    pub redirect_uri: String,
    /// Staging unless explicitly `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_challenge: Option<String>,
    /// Only `S256` is supported by Singpass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_challenge_method: Option<String>,
    /// One of `en`, `ms`, `ta`, `zh-SG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_locale: Option<String>,
    /// Needed when the redirect uri is an app claimed HTTPS URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri_https_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_launch_url: Option<String>,
    /// Internal use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esrvc: Option<String>,
    /// Internal use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acr_values: Option<String>,
}

impl AuthOptions {
    pub fn new<S: ToString, R: ToString>(client_id: S, redirect_uri: R) -> Self {
        AuthOptions {
            client_id: client_id.to_string(),
            redirect_uri: redirect_uri.to_string(),
            ..Default::default()
        }
    }

    /// Sets both PKCE fields from a generated challenge.
    pub fn with_pkce(mut self, challenge: &PkceCodeChallenge) -> Self {
        self.code_challenge = Some(challenge.as_str().to_string());
        self.code_challenge_method = Some(challenge.method().as_str().to_string());
        self
    }

    pub fn environment(&self) -> Environment {
        Environment::from_stg(self.stg)
    }
}

/// `null` reads as an empty string, which validation reports as missing.
fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Returns the value only when it is set and non-empty.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    /// Only an explicit `false` opts out of staging.
    pub fn from_stg(stg: Option<bool>) -> Self {
        match stg {
            Some(false) => Environment::Production,
            _ => Environment::Staging,
        }
    }

    pub fn auth_url(&self) -> Url {
        match self {
            Environment::Staging => STAGING_URL.clone(),
            Environment::Production => PRODUCTION_URL.clone(),
        }
    }
}
