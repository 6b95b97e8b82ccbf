use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::repository::RecordRepository;
use crate::errors::AppResult;
use crate::utils::date::today;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        today: only_today,
    } = &cli.command
    {
        let mut session = super::unlocked_session(cli, cfg)?;
        let repo = RecordRepository::new(&mut session.pool, &session.cipher);

        let day = only_today.then(today);
        let records = ListLogic::select(&repo, period.as_deref(), day)?;
        ListLogic::print(&records);
    }
    Ok(())
}
