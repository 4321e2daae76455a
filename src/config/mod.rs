#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::domain::ports::CredentialsProvider;
use crate::utils::error::{Result, SentiError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use file::FileConfig;

/// Environment variables checked when no explicit credentials are given.
pub const TOKEN_ENV_VAR: &str = "API_SENTIMENTINVESTOR_TOKEN";
pub const KEY_ENV_VAR: &str = "API_SENTIMENTINVESTOR_KEY";

/// A resolved token and key pair, ready to construct a client with.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
    pub key: String,
}

impl CredentialsProvider for Credentials {
    fn token(&self) -> &str {
        &self.token
    }

    fn key(&self) -> &str {
        &self.key
    }
}

impl Validate for Credentials {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("token", &self.token)?;
        validate_non_empty_string("key", &self.key)?;
        Ok(())
    }
}

/// Resolve credentials in precedence order: explicit values, then the
/// environment, then the optional config file.
pub fn resolve_credentials(
    token: Option<&str>,
    key: Option<&str>,
    file: Option<&FileConfig>,
) -> Result<Credentials> {
    let token = token
        .map(str::to_string)
        .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
        .or_else(|| file.and_then(|f| f.credentials.token.clone()))
        .ok_or_else(|| SentiError::MissingConfig {
            field: "token".to_string(),
        })?;

    let key = key
        .map(str::to_string)
        .or_else(|| std::env::var(KEY_ENV_VAR).ok())
        .or_else(|| file.and_then(|f| f.credentials.key.clone()))
        .ok_or_else(|| SentiError::MissingConfig {
            field: "key".to_string(),
        })?;

    let credentials = Credentials { token, key };
    credentials.validate()?;
    Ok(credentials)
}
