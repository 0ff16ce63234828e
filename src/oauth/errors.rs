use std::fmt;

/// Input fields that must be present before a redirect can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    ClientId,
    RedirectUri,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::ClientId => "clientId",
            RequiredField::RedirectUri => "redirectUri",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two halves of a PKCE challenge as named in `AuthOptions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PkceField {
    CodeChallenge,
    CodeChallengeMethod,
}

impl PkceField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PkceField::CodeChallenge => "codeChallenge",
            PkceField::CodeChallengeMethod => "codeChallengeMethod",
        }
    }
}

impl fmt::Display for PkceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthOptionsError {
    /// One or more required fields were absent or empty. Lists every one of
    /// them, in declaration order.
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingRequiredFields(Vec<RequiredField>),

    /// Exactly one of `codeChallenge` / `codeChallengeMethod` was given.
    #[error(
        "Both codeChallenge and codeChallengeMethod are required (got {supplied}, missing {missing})"
    )]
    InvalidPkcePair {
        supplied: PkceField,
        missing: PkceField,
    },
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
