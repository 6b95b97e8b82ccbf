//! PIN lock gate.
//!
//! The gate only holds state; persisting `settings()` after a change and
//! asking for verification before sensitive actions is up to the caller.

use crate::crypto::{hash_pin, validate_pin};
use crate::errors::{AppError, AppResult};
use crate::models::settings::UserSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// No PIN was ever set.
    Unset,
    /// A PIN exists but the lock is off.
    Disabled,
    Locked,
    Unlocked,
}

#[derive(Debug, Clone)]
pub struct LockGate {
    settings: UserSettings,
    unlocked: bool,
}

impl LockGate {
    pub fn from_settings(settings: &UserSettings) -> Self {
        Self {
            settings: settings.clone(),
            unlocked: false,
        }
    }

    pub fn state(&self) -> LockState {
        match (&self.settings.pin_hash, self.settings.lock_enabled) {
            (None, _) => LockState::Unset,
            (Some(_), false) => LockState::Disabled,
            (Some(_), true) if self.unlocked => LockState::Unlocked,
            (Some(_), true) => LockState::Locked,
        }
    }

    /// True when access is allowed: lock off, no PIN, or a matching PIN.
    pub fn verify(&mut self, candidate: &str) -> bool {
        let Some(stored) = self.settings.pin_hash.as_deref() else {
            return true;
        };
        if !self.settings.lock_enabled {
            return true;
        }

        let ok = hash_pin(candidate) == stored;
        if ok {
            self.unlocked = true;
        }
        ok
    }

    /// Store a new PIN and turn the lock on.
    pub fn set_pin(&mut self, new_pin: &str) -> AppResult<()> {
        validate_pin(new_pin)?;
        self.settings.pin_hash = Some(hash_pin(new_pin));
        self.settings.lock_enabled = true;
        self.unlocked = true;
        Ok(())
    }

    pub fn toggle_lock(&mut self, enabled: bool) -> AppResult<()> {
        if enabled && self.settings.pin_hash.is_none() {
            return Err(AppError::PinNotSet);
        }
        self.settings.lock_enabled = enabled;
        Ok(())
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }
}
