use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration file:
///
/// ```toml
/// [credentials]
/// token = "my-very-secret-token"
/// key = "my-very-secret-key"
///
/// [api]
/// base_url = "https://api.sentimentinvestor.com/v4/"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub credentials: CredentialSection,
    pub api: Option<ApiSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialSection {
    pub token: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.api.as_ref().and_then(|api| api.base_url.as_deref())
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = self.base_url() {
            validate_url("base_url", base_url)?;
        }
        Ok(())
    }
}
