use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::repository::RecordRepository;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = &cli.command {
        let mut session = super::unlocked_session(cli, cfg)?;
        let mut repo = RecordRepository::new(&mut session.pool, &session.cipher);

        let outcome = BackupLogic::import_from_file(&mut repo, Path::new(file))?;
        success(format!("Imported {} record(s) from {}", outcome.imported, file));
        match outcome.skipped {
            0 => {}
            1 => warning("Skipped 1 malformed entry"),
            n => warning(format!("Skipped {n} malformed entries")),
        }
    }
    Ok(())
}
