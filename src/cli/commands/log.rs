use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Log { print: true }) {
        let mut session = super::unlocked_session(cli, cfg)?;
        LogLogic::print_log(&mut session.pool)?;
    }

    Ok(())
}
