// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid league JSON: {source} (path: {path})")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid league '{league_id}': {reason}")]
    InvalidLeague { league_id: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LinkError>;

// Allow `?` on std::io::Error by converting to LinkError::Io with unknown path.
impl From<std::io::Error> for LinkError {
    fn from(source: std::io::Error) -> Self {
        LinkError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Config files are small enough that the message alone locates the problem.
impl From<toml::de::Error> for LinkError {
    fn from(e: toml::de::Error) -> Self {
        LinkError::Config(e.to_string())
    }
}
