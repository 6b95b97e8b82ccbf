//! JSON export / import of records.
//!
//! Export always writes the wrapped form:
//!
//! ```json
//! { "version": 1, "exportedAt": 1718000000000, "records": [ ... ] }
//! ```
//!
//! Import also accepts a bare top-level array of records. Notes travel as
//! plaintext and are sealed again with this device's key on import.

use crate::core::repository::RecordRepository;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::utils::date::now_millis;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupFile<'a> {
    version: u32,
    exported_at: i64,
    records: &'a [Record],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: usize,
}

/// Records recovered from a backup document plus the count of unusable entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedBackup {
    pub records: Vec<Record>,
    pub skipped: usize,
}

pub fn export_json(records: &[Record], exported_at: i64) -> AppResult<String> {
    let doc = BackupFile {
        version: BACKUP_VERSION,
        exported_at,
        records,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a backup document. Only the document shape can fail; bad entries
/// are skipped and counted.
pub fn parse_backup(text: &str) -> AppResult<ParsedBackup> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|e| AppError::BadBackupFormat(format!("not valid JSON: {e}")))?;

    let entries = match &doc {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("records") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(AppError::BadBackupFormat(
                    "object without a 'records' array".to_string(),
                ));
            }
        },
        _ => {
            return Err(AppError::BadBackupFormat(
                "expected an array or an object with 'records'".to_string(),
            ));
        }
    };

    let mut parsed = ParsedBackup::default();
    for (idx, entry) in entries.iter().enumerate() {
        match entry.as_object().and_then(parse_entry) {
            Some(rec) => parsed.records.push(rec),
            None => {
                debug!(index = idx, "skipping malformed backup entry");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

fn parse_timestamp(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        _ => None,
    }
}

fn parse_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(v.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_entry(obj: &Map<String, Value>) -> Option<Record> {
    let timestamp = parse_timestamp(obj.get("timestamp")?)?;
    let date = parse_text(obj.get("date")?)?;
    let note = obj.get("note").and_then(parse_text);

    Some(Record::new(timestamp, date, note))
}

pub struct BackupLogic;

impl BackupLogic {
    /// Write every record (plaintext notes) to `dest`.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn export_to_file(repo: &RecordRepository, dest: &Path, force: bool) -> AppResult<usize> {
        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "file '{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let records = repo.all_records()?;
        let json = export_json(&records, now_millis())?;
        fs::write(dest, json)?;

        info!(count = records.len(), path = %dest.display(), "records exported");
        ttlog(
            repo.conn(),
            "export",
            &dest.display().to_string(),
            &format!("Exported {} records", records.len()),
        )?;

        Ok(records.len())
    }

    pub fn import_text(repo: &mut RecordRepository, text: &str) -> AppResult<ImportOutcome> {
        let parsed = parse_backup(text)?;
        let imported = repo.import_records(&parsed.records)?;

        Ok(ImportOutcome {
            imported,
            skipped: parsed.skipped,
        })
    }

    pub fn import_from_file(repo: &mut RecordRepository, src: &Path) -> AppResult<ImportOutcome> {
        let text = fs::read_to_string(src)?;
        let outcome = Self::import_text(repo, &text)?;

        info!(
            imported = outcome.imported,
            skipped = outcome.skipped,
            "records imported"
        );
        ttlog(
            repo.conn(),
            "import",
            &src.display().to_string(),
            &format!(
                "Imported {} records ({} skipped)",
                outcome.imported, outcome.skipped
            ),
        )?;

        Ok(outcome)
    }
}
