use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::advice::recommended_weekly_frequency;
use crate::core::lock::{LockGate, LockState};
use crate::core::settings::SettingsLogic;
use crate::errors::AppResult;
use crate::models::settings::UserSettings;
use crate::ui::messages::success;
use crate::utils::colors::{CYAN, GREY, RESET};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings { print, age } = &cli.command {
        let session = super::unlocked_session(cli, cfg)?;
        let mut settings = session.settings.clone();

        if let Some(a) = age {
            settings = SettingsLogic::update_age(&session.pool.conn, &settings, *a)?;
            success(format!("Age set to {}", a));
        }

        if *print || age.is_none() {
            print_settings(&settings);
        }
    }
    Ok(())
}

fn print_settings(s: &UserSettings) {
    let band = recommended_weekly_frequency(s.age);
    let lock = match LockGate::from_settings(s).state() {
        LockState::Unset => format!("{GREY}no PIN{RESET}"),
        LockState::Disabled => "off".to_string(),
        LockState::Locked | LockState::Unlocked => "on".to_string(),
    };

    println!("⚙️  Settings:\n");
    println!("{}• Age:{} {}", CYAN, RESET, s.age);
    println!(
        "{}• Recommended per week:{} {}-{}",
        CYAN,
        RESET,
        band.start(),
        band.end()
    );
    println!("{}• PIN lock:{} {}", CYAN, RESET, lock);
}
