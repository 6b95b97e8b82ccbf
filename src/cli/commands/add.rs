use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::repository::RecordRepository;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { note } = &cli.command {
        let mut session = super::unlocked_session(cli, cfg)?;
        let mut repo = RecordRepository::new(&mut session.pool, &session.cipher);
        AddLogic::apply(&mut repo, note.clone())?;
    }
    Ok(())
}
