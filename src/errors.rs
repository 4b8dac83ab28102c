//! Unified application error type.
//! Every module (db, config, cli) returns AppError so failures reach the
//! entry point as values; only the binary turns them into the JSON envelope.

use serde::Serialize;
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
    // Database-related
    // ---------------------------
    #[error("Database connection failed: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Select query failed: {0}")]
    Select(#[source] rusqlite::Error),

    #[error("Select one query failed: {0}")]
    SelectOne(#[source] rusqlite::Error),

    #[error("Insert query failed: {0}")]
    Insert(#[source] rusqlite::Error),

    #[error("Update query failed: {0}")]
    Update(#[source] rusqlite::Error),

    #[error("Delete query failed: {0}")]
    Delete(#[source] rusqlite::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    // ---------------------------
    // Input / serialization
    // ---------------------------
    #[error("Invalid query parameters: {0}")]
    InvalidParams(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure body written by the binary: `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
}

impl AppError {
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            success: false,
            message: self.to_string(),
        }
    }
}
