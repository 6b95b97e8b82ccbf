use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::repository::RecordRepository;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = &cli.command {
        let mut session = super::unlocked_session(cli, cfg)?;
        let repo = RecordRepository::new(&mut session.pool, &session.cipher);

        let n = BackupLogic::export_to_file(&repo, Path::new(file), *force)?;
        success(format!("Exported {} record(s) to {}", n, file));
        warning("Notes are written in plaintext: keep the file somewhere safe.");
    }
    Ok(())
}
