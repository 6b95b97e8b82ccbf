use crate::errors::{AppError, AppResult};
use sha2::{Digest, Sha256};

pub const PIN_LEN: usize = 4;

/// Lowercase hex SHA-256 of the PIN's UTF-8 bytes.
pub fn hash_pin(pin: &str) -> String {
    hex::encode(Sha256::digest(pin.as_bytes()))
}

/// A PIN is exactly four ASCII digits.
pub fn validate_pin(pin: &str) -> AppResult<()> {
    if pin.len() == PIN_LEN && pin.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::InvalidPin(format!(
            "expected {PIN_LEN} digits, got '{}'",
            "*".repeat(pin.chars().count())
        )))
    }
}
