//! Unified application error type.
//! Every layer (db, core, export, cli, web) returns AppError so failures
//! travel to the caller unchanged and are reported in one place.

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
    // Store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid timestamp in store: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Input parsing
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid slot status: {0} (expected Running or Free)")]
    InvalidStatus(String),

    #[error("Invalid bind address: {0}")]
    InvalidBind(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Server
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// True for errors caused by the caller's input rather than the store or the host.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_) | AppError::InvalidStatus(_) | AppError::InvalidBind(_)
        )
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(format!("CSV error: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(format!("JSON serialization error: {e}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
