pub mod errors;
pub mod options;
pub mod primitives;
pub mod redirect;

pub use openidconnect::{PkceCodeChallenge, PkceCodeVerifier};

/// Fresh S256 PKCE challenge and the verifier to keep for the token exchange.
pub fn generate_pkce_pair() -> (PkceCodeChallenge, PkceCodeVerifier) {
    PkceCodeChallenge::new_random_sha256()
}
