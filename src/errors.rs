//! Unified application error type.
//! All modules (db, crypto, core, cli, utils) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Crypto / key store
    // ---------------------------
    #[error("Encryption error: {0}")]
    Crypto(String),

    #[error("Key store error: {0}")]
    KeyStore(String),

    // ---------------------------
    // Lock gate
    // ---------------------------
    #[error("Invalid PIN: {0}")]
    InvalidPin(String),

    #[error("No PIN has been set: set one with `pin set` first")]
    PinNotSet,

    #[error("Wrong PIN")]
    WrongPin,

    // ---------------------------
    // Settings
    // ---------------------------
    #[error("Invalid age: {0} (allowed range 18-100)")]
    InvalidAge(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Bad backup format: {0}")]
    BadBackupFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
