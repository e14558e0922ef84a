//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::validation::ValidationError;
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
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Interval validation
    // ---------------------------
    #[error("Rejected: {0}")]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value: {0}")]
    InvalidFieldValue(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid hole status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No interval at row {0}")]
    InvalidRow(usize),

    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{0}")]
    OutOfRange(String),

    #[error("Hole already exists: {0}")]
    DuplicateHole(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
