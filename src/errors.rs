//! Unified application error type.
//! All modules (api, core, cli, db, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local audit database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Backend / HTTP
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status returned by the backend, with the server's
    /// error detail when the body carried one.
    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Api { status: u16, message: Option<String> },

    /// HTTP 401. Local credentials are cleared when this is raised.
    #[error("Not authorized: {}", .0.as_deref().unwrap_or("session expired or not logged in"))]
    Unauthorized(Option<String>),

    /// An attendance action the backend refused; the text is shown as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid server response: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Not logged in: run `wfclock login` first")]
    NotLoggedIn,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// The message the backend attached to a failed request, if any.
    ///
    /// Transport failures and bodies without a detail field yield `None`, so
    /// callers fall back to their own generic text.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api {
                message: Some(m), ..
            }
            | AppError::Unauthorized(Some(m)) => Some(m.as_str()),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_for_api_errors_with_detail() {
        let e = AppError::Api {
            status: 400,
            message: Some("Already checked in".into()),
        };
        assert_eq!(e.server_message(), Some("Already checked in"));

        let e = AppError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(e.server_message(), None);
        assert_eq!(e.to_string(), "Server returned 500: no details");

        assert_eq!(AppError::Unauthorized(None).server_message(), None);
        assert_eq!(
            AppError::Unauthorized(Some("Invalid credentials".into())).server_message(),
            Some("Invalid credentials")
        );
    }
}
