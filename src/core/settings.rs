use crate::db::log::ttlog;
use crate::db::settings::{get_settings, save_settings};
use crate::errors::{AppError, AppResult};
use crate::models::settings::UserSettings;
use rusqlite::Connection;
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<u32> = 18..=100;

pub struct SettingsLogic;

impl SettingsLogic {
    /// Stored settings, or freshly saved defaults on first access.
    pub fn load_or_init(conn: &Connection, default_age: u32) -> AppResult<UserSettings> {
        if let Some(s) = get_settings(conn)? {
            return Ok(s);
        }

        let s = UserSettings::with_age(default_age);
        save_settings(conn, &s)?;
        Ok(s)
    }

    pub fn save(conn: &Connection, settings: &UserSettings) -> AppResult<()> {
        save_settings(conn, settings)
    }

    pub fn update_age(conn: &Connection, current: &UserSettings, age: u32) -> AppResult<UserSettings> {
        if !AGE_RANGE.contains(&age) {
            return Err(AppError::InvalidAge(age));
        }

        let updated = UserSettings {
            age,
            ..current.clone()
        };
        save_settings(conn, &updated)?;
        ttlog(conn, "settings", "age", &format!("Age set to {age}"))?;
        Ok(updated)
    }
}
