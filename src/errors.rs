//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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
    // Store (persistence) errors
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Habit not found: #{0}")]
    NotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for failures of the underlying store (connection, constraint,
    /// schema). These are reported as a generic failure and never retried:
    /// a toggle is not idempotent.
    pub fn is_store_error(&self) -> bool {
        matches!(self, AppError::Db(_) | AppError::Migration(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
