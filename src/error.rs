// ABOUTME: Error types with structured exit codes for CLI
// ABOUTME: Maps credential, transport, and malformed-data failures to exit codes

use std::path::PathBuf;
use thiserror::Error;

pub const AUTHORIZATION_DOCS: &str = "https://developer.todoist.com/sync/v8/?shell#authorization";

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "We need a valid todoist token inside the TODOIST_TOKEN environment variable\n\
         See the manual: {docs}\n\n\
         Alternatively, provide a configuration file at {}",
        .config_path.display(),
        docs = AUTHORIZATION_DOCS
    )]
    MissingToken { config_path: PathBuf },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status} on {endpoint}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid due date {date:?}: {source}")]
    InvalidDue {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingToken { .. } => 2,
            Error::Network(_) => 3,
            Error::Api { .. } => 4,
            Error::Parse(_) | Error::InvalidDue { .. } => 5,
            Error::Io(_) => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
