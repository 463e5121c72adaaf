/// Error types shared by the service client, file selection and config loading
use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to the image service.
///
/// Errors travel inside UI messages, so every variant owns plain data and
/// the whole enum is `Clone`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid service url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

/// Failure reading a file the user picked
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    #[error("could not read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("task join error: {0}")]
    TaskJoin(String),
}

/// Failure loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid service url {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
