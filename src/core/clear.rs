use crate::core::repository::RecordRepository;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub struct ClearLogic;

impl ClearLogic {
    /// Delete every record. Settings and PIN are kept.
    pub fn apply(repo: &mut RecordRepository) -> AppResult<usize> {
        let removed = repo.clear_all()?;
        ttlog(
            repo.conn(),
            "clear",
            "records",
            &format!("Deleted {removed} records"),
        )?;
        success(format!("Deleted {removed} record(s)."));
        Ok(removed)
    }
}
