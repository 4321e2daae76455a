use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentiError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("Incorrect key or token")]
    InvalidCredentials,

    #[error("API error: {message}")]
    ApiFailure { message: String },

    #[error("Unexpected response from API: {body}")]
    UnexpectedResponse { body: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl SentiError {
    /// Message shown at the CLI boundary, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SentiError::Transport(_) => {
                "Could not reach the SentimentInvestor API. Check your network connection."
                    .to_string()
            }
            SentiError::InvalidCredentials => {
                "The API rejected your token or key. Check your credentials on the SentimentInvestor dashboard."
                    .to_string()
            }
            SentiError::ApiFailure { message } => format!("The API reported an error: {}", message),
            SentiError::MissingConfig { field } => format!(
                "No {} configured. Pass --{}, set the environment variable, or add it to the config file.",
                field, field
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SentiError>;
