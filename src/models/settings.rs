use serde::{Deserialize, Serialize};

pub const DEFAULT_AGE: u32 = 25;

/// Singleton user preferences (row `id = 1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub age: u32,
    pub lock_enabled: bool,
    pub pin_hash: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            lock_enabled: false,
            pin_hash: None,
        }
    }
}

impl UserSettings {
    pub fn with_age(age: u32) -> Self {
        Self {
            age,
            ..Self::default()
        }
    }
}
