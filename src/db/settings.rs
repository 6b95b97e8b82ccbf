use crate::errors::AppResult;
use crate::models::settings::UserSettings;
use rusqlite::{Connection, OptionalExtension, params};

/// The settings row, if one was ever saved.
pub fn get_settings(conn: &Connection) -> AppResult<Option<UserSettings>> {
    let mut stmt =
        conn.prepare_cached("SELECT age, lock_enabled, pin_hash FROM user_settings WHERE id = 1")?;

    let settings = stmt
        .query_row([], |row| {
            Ok(UserSettings {
                age: row.get(0)?,
                lock_enabled: row.get::<_, i32>(1)? == 1,
                pin_hash: row.get(2)?,
            })
        })
        .optional()?;

    Ok(settings)
}

/// Upsert the singleton row.
pub fn save_settings(conn: &Connection, s: &UserSettings) -> AppResult<()> {
    conn.execute(
        "INSERT INTO user_settings (id, age, lock_enabled, pin_hash)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
            age = excluded.age,
            lock_enabled = excluded.lock_enabled,
            pin_hash = excluded.pin_hash",
        params![s.age, if s.lock_enabled { 1 } else { 0 }, s.pin_hash],
    )?;
    Ok(())
}
