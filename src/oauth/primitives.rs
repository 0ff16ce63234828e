use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use uuid::Uuid;

/// Source of the single-use tokens placed in an authorization request
/// (`nonce`, and `state` when the caller has none).
///
/// Every call must return a fresh value.
pub trait RandomTokenSource: Send + Sync {
    fn next_token(&self) -> String;
}

/// Random v4 UUIDs, hyphenated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokenSource;

impl RandomTokenSource for UuidTokenSource {
    fn next_token(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

/// UUID shaped tokens from a seeded generator. Two sources built from the same
/// seed produce the same sequence.
pub struct SeededTokenSource {
    rng: Mutex<StdRng>,
}

impl SeededTokenSource {
    pub fn new(seed: u64) -> Self {
        SeededTokenSource {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomTokenSource for SeededTokenSource {
    fn next_token(&self) -> String {
        // a poisoned lock still holds a usable generator
        let bytes: [u8; 16] = match self.rng.lock() {
            Ok(mut rng) => rng.gen(),
            Err(poisoned) => poisoned.into_inner().gen(),
        };
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }
}
