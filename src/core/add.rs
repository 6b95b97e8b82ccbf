use crate::core::repository::RecordRepository;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::ui::messages::success;
use crate::utils::date::format_millis;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(repo: &mut RecordRepository, note: Option<String>) -> AppResult<Record> {
        // Blank notes are not worth encrypting
        let note = note.filter(|n| !n.trim().is_empty());
        let has_note = note.is_some();

        let rec = repo.add_record(note)?;

        ttlog(
            repo.conn(),
            "add",
            &rec.date,
            &format!(
                "Record {} logged{}",
                rec.id,
                if has_note { " with note" } else { "" }
            ),
        )?;

        success(format!(
            "Record #{} logged at {}",
            rec.id,
            format_millis(rec.timestamp)
        ));
        Ok(rec)
    }
}
