use crate::models::note::EncryptedNote;
use serde::{Deserialize, Serialize};

/// One logged occurrence of the habit.
///
/// `date` is the local calendar day at creation time (`YYYY-MM-DD`) and is
/// never re-derived from `timestamp`. `note` is plaintext and only exists in
/// memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub timestamp: i64,
    pub date: String,
    pub note: Option<String>,
}

impl Record {
    /// A record not yet persisted (`id` = 0).
    pub fn new(timestamp: i64, date: impl Into<String>, note: Option<String>) -> Self {
        Self {
            id: 0,
            timestamp,
            date: date.into(),
            note,
        }
    }
}

/// Row of the `records` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: i64,
    pub timestamp: i64,
    pub date: String,
    pub note: Option<EncryptedNote>,
    pub created_at: i64,
}
