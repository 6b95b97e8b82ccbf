use crate::cli::parser::{Cli, Commands, PinAction};
use crate::config::Config;
use crate::core::lock::LockGate;
use crate::core::settings::SettingsLogic;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Pin { action } = &cli.command else {
        return Ok(());
    };

    let session = super::open_session(cli, cfg)?;
    let conn = &session.pool.conn;
    let mut gate = LockGate::from_settings(&session.settings);

    match action {
        PinAction::Set { new_pin } => {
            super::require_current_pin(cli, &session.settings)?;
            gate.set_pin(new_pin.trim())?;
            SettingsLogic::save(conn, gate.settings())?;
            ttlog(conn, "pin_set", "", "PIN updated, lock enabled")?;
            success("PIN set. The lock is now enabled.");
        }
        PinAction::Verify { pin } => {
            if !gate.verify(pin.trim()) {
                return Err(AppError::WrongPin);
            }
            success("PIN accepted.");
        }
        PinAction::Enable => {
            gate.toggle_lock(true)?;
            SettingsLogic::save(conn, gate.settings())?;
            ttlog(conn, "lock_enabled", "", "Lock enabled")?;
            success("Lock enabled.");
        }
        PinAction::Disable => {
            super::require_current_pin(cli, &session.settings)?;
            gate.toggle_lock(false)?;
            SettingsLogic::save(conn, gate.settings())?;
            ttlog(conn, "lock_disabled", "", "Lock disabled")?;
            success("Lock disabled.");
        }
    }

    Ok(())
}
