//! One handler per subcommand, plus the session plumbing they share:
//! open the database, load settings, build the note cipher, pass the lock.

pub mod add;
pub mod clear;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod pin;
pub mod settings;
pub mod stats;
pub mod status;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::lock::{LockGate, LockState};
use crate::core::settings::SettingsLogic;
use crate::crypto::{FileKeyStore, NoteCipher};
use crate::db::initialize::open_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::settings::UserSettings;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Open database + settings + cipher for a data command.
pub struct Session {
    pub pool: DbPool,
    pub cipher: NoteCipher,
    pub settings: UserSettings,
}

/// Where the note key lives. Test runs keep it beside the database so that
/// nothing is written under the user's config directory.
pub fn key_dir(cli: &Cli, cfg: &Config) -> PathBuf {
    if cli.test {
        Path::new(&cfg.database)
            .parent()
            .map(|p| p.join("keys"))
            .unwrap_or_else(|| PathBuf::from("keys"))
    } else {
        PathBuf::from(&cfg.key_dir)
    }
}

pub fn open_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let pool = open_db(&cfg.database)?;
    let settings = SettingsLogic::load_or_init(&pool.conn, cfg.default_age)?;
    let store = FileKeyStore::new(key_dir(cli, cfg));
    let cipher = NoteCipher::new(&store, &cfg.key_alias);

    Ok(Session {
        pool,
        cipher,
        settings,
    })
}

/// PIN from `--pin`, otherwise asked on the terminal without echo.
fn read_pin(cli: &Cli, prompt: &str) -> AppResult<String> {
    match &cli.pin {
        Some(p) => Ok(p.clone()),
        None => Ok(rpassword::prompt_password(prompt)?),
    }
}

/// Gate for data commands: passes when the lock is off, otherwise needs the PIN.
pub fn require_unlocked(cli: &Cli, settings: &UserSettings) -> AppResult<()> {
    let mut gate = LockGate::from_settings(settings);
    if gate.state() != LockState::Locked {
        return Ok(());
    }

    let pin = read_pin(cli, "🔒 PIN: ")?;
    if gate.verify(pin.trim()) {
        debug!("lock gate passed");
        Ok(())
    } else {
        Err(AppError::WrongPin)
    }
}

/// Gate for PIN changes: whenever a PIN exists it must be given, even with
/// the lock turned off.
pub fn require_current_pin(cli: &Cli, settings: &UserSettings) -> AppResult<()> {
    if settings.pin_hash.is_none() {
        return Ok(());
    }

    let probe = UserSettings {
        lock_enabled: true,
        ..settings.clone()
    };
    let mut gate = LockGate::from_settings(&probe);

    let pin = read_pin(cli, "🔒 Current PIN: ")?;
    if gate.verify(pin.trim()) {
        Ok(())
    } else {
        Err(AppError::WrongPin)
    }
}

/// Open a session and pass the lock gate in one go.
pub fn unlocked_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let session = open_session(cli, cfg)?;
    require_unlocked(cli, &session.settings)?;
    Ok(session)
}
