use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Word list is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Expected a number below 100, got {value}")]
    NumberOutOfRange { value: usize },
}

impl EtlError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::ApiError(e) => format!("Could not download the word list: {}", e),
            EtlError::IoError(e) => format!("File system operation failed: {}", e),
            EtlError::SerializationError(e) => format!("Could not write JSON output: {}", e),
            EtlError::Utf8Error(_) => "The cached word list is not valid UTF-8".to_string(),
            EtlError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            EtlError::ConfigError { message } => format!("Configuration problem: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            EtlError::NumberOutOfRange { value } => {
                format!("Found a word of length {}, file names only go up to 99", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::ApiError(_) => "Check the URL and your network connection, then run again",
            EtlError::IoError(_) => "Check permissions and free space of the output and cache paths",
            EtlError::SerializationError(_) => "Report this as a bug",
            EtlError::Utf8Error(_) => "Delete the cache file or point --url at a UTF-8 word list",
            EtlError::TomlError(_) | EtlError::ConfigError { .. } => {
                "Fix the configuration file and run again"
            }
            EtlError::InvalidConfigValueError { .. } => "Pass a valid value on the command line or in the config file",
            EtlError::NumberOutOfRange { .. } => "Remove overly long lines from the word list",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
