use crate::oauth::errors::{AuthOptionsError, PkceField, RequiredField};
use crate::oauth::options::{
    present, AuthOptions, DEFAULT_RESPONSE_TYPE, DEFAULT_SCOPE, SUPPORTED_CODE_CHALLENGE_METHOD,
    SUPPORTED_UI_LOCALES,
};
use crate::oauth::primitives::{RandomTokenSource, UuidTokenSource};
use openidconnect::{CsrfToken, Nonce};
use std::sync::Arc;
use url::Url;

/// A fully built authorization request.
///
/// `nonce` and `state` are returned alongside the url so the caller can keep
/// them for verifying the callback.
#[derive(Debug, Clone)]
pub struct AuthorizationRedirect {
    pub url: Url,
    pub nonce: Nonce,
    pub state: CsrfToken,
}

/// Builds Singpass authorization urls from [`AuthOptions`].
#[derive(Clone)]
pub struct AuthRedirectBuilder {
    tokens: Arc<dyn RandomTokenSource>,
}

impl Default for AuthRedirectBuilder {
    fn default() -> Self {
        AuthRedirectBuilder::new(Arc::new(UuidTokenSource))
    }
}

impl AuthRedirectBuilder {
    pub fn new(tokens: Arc<dyn RandomTokenSource>) -> Self {
        AuthRedirectBuilder { tokens }
    }

    /// Validates `options` and assembles the redirect url. Nothing is built
    /// unless validation passes.
    pub fn build(&self, options: &AuthOptions) -> Result<AuthorizationRedirect, AuthOptionsError> {
        let pkce = validate(options)?;

        let mut url = options.environment().auth_url();
        let nonce = Nonce::new(self.tokens.next_token());
        let state = CsrfToken::new(match present(&options.state) {
            Some(state) => state.to_string(),
            None => self.tokens.next_token(),
        });

        let mut query = url.query_pairs_mut();
        query
            .append_pair("scope", present(&options.scope).unwrap_or(DEFAULT_SCOPE))
            .append_pair(
                "response_type",
                present(&options.response_type).unwrap_or(DEFAULT_RESPONSE_TYPE),
            )
            .append_pair("client_id", &options.client_id)
            .append_pair("redirect_uri", &options.redirect_uri)
            .append_pair("nonce", nonce.secret())
            .append_pair("state", state.secret());

        if let Some((challenge, method)) = pkce {
            query
                .append_pair("code_challenge", challenge)
                .append_pair("code_challenge_method", method);
        }

        let optional = [
            ("ui_locale", &options.ui_locale),
            ("redirect_uri_https_type", &options.redirect_uri_https_type),
            ("app_launch_url", &options.app_launch_url),
            ("esrvc", &options.esrvc),
            ("acr_values", &options.acr_values),
        ];
        for (key, value) in optional {
            if let Some(value) = present(value) {
                query.append_pair(key, value);
            }
        }
        drop(query);

        tracing::debug!(
            environment = ?options.environment(),
            client_id = %options.client_id,
            "built singpass authorization redirect"
        );

        Ok(AuthorizationRedirect { url, nonce, state })
    }
}

/// Builds a redirect with fresh UUID tokens.
pub fn redirect_to_singpass(options: &AuthOptions) -> Result<AuthorizationRedirect, AuthOptionsError> {
    AuthRedirectBuilder::default().build(options)
}

/// Checks required fields and the PKCE pair. Returns the PKCE pair when both
/// halves are present.
fn validate(options: &AuthOptions) -> Result<Option<(&str, &str)>, AuthOptionsError> {
    let missing: Vec<RequiredField> = [
        (RequiredField::ClientId, options.client_id.as_str()),
        (RequiredField::RedirectUri, options.redirect_uri.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();
    if !missing.is_empty() {
        return Err(AuthOptionsError::MissingRequiredFields(missing));
    }

    let pkce = match (
        present(&options.code_challenge),
        present(&options.code_challenge_method),
    ) {
        (Some(challenge), Some(method)) => Some((challenge, method)),
        (None, None) => None,
        (Some(_), None) => {
            return Err(AuthOptionsError::InvalidPkcePair {
                supplied: PkceField::CodeChallenge,
                missing: PkceField::CodeChallengeMethod,
            })
        }
        (None, Some(_)) => {
            return Err(AuthOptionsError::InvalidPkcePair {
                supplied: PkceField::CodeChallengeMethod,
                missing: PkceField::CodeChallenge,
            })
        }
    };

    if let Some((_, method)) = pkce {
        if method != SUPPORTED_CODE_CHALLENGE_METHOD {
            tracing::warn!(method, "unsupported code_challenge_method, Singpass expects S256");
        }
    }
    if let Some(locale) = present(&options.ui_locale) {
        if !SUPPORTED_UI_LOCALES.contains(&locale) {
            tracing::warn!(locale, "unsupported ui_locale");
        }
    }

    Ok(pkce)
}
