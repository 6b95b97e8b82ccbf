use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::core::repository::RecordRepository;
use crate::errors::AppResult;
use std::io::{Write, stdin, stdout};

fn confirm() -> AppResult<bool> {
    print!("⚠️  This deletes ALL records. Continue? [y/N]: ");
    stdout().flush()?;

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = &cli.command {
        let mut session = super::unlocked_session(cli, cfg)?;

        if !*yes && !confirm()? {
            println!("❌ Clear cancelled by user.");
            return Ok(());
        }

        let mut repo = RecordRepository::new(&mut session.pool, &session.cipher);
        ClearLogic::apply(&mut repo)?;
    }
    Ok(())
}
