// Runtime configuration for the binary.
//
// Purpose
// - Tell the binary which session file to replay and how verbose to log.
//
// Responsibilities
// - Load a `.env` file when one exists, then read the process environment.
// - Report a malformed `.env` file instead of silently running without it.
// - Keep the variable parsing testable through an injected lookup.

use std::path::PathBuf;
use thiserror::Error;

pub const SESSION_VAR: &str = "COLLEGE_REGISTRATION_SESSION";
pub const LOG_VAR: &str = "COLLEGE_REGISTRATION_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("environment variable {0} must not be blank")]
    Blank(&'static str),

    #[error("invalid .env file: {0}")]
    DotEnv(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub session_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Reads `.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let session_path = lookup(SESSION_VAR).ok_or(ConfigError::Missing(SESSION_VAR))?;
        if session_path.trim().is_empty() {
            return Err(ConfigError::Blank(SESSION_VAR));
        }
        let log_filter = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            session_path: PathBuf::from(session_path),
            log_filter,
        })
    }
}

/// A missing `.env` file is fine; anything else about it is an error.
fn load_dotenv<T>(result: Result<T, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(ConfigError::DotEnv(error.to_string())),
    }
}
