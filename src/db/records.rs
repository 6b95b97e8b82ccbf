use crate::errors::AppResult;
use crate::models::note::EncryptedNote;
use crate::models::record::StoredRecord;
use rusqlite::{Connection, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, timestamp, date, note, created_at FROM records";

pub fn map_row(row: &Row) -> Result<StoredRecord> {
    let note: Option<String> = row.get("note")?;

    Ok(StoredRecord {
        id: row.get("id")?,
        timestamp: row.get("timestamp")?,
        date: row.get("date")?,
        note: note.map(EncryptedNote::from_stored),
        created_at: row.get("created_at")?,
    })
}

fn collect(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<StoredRecord>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Records whose `date` lies in `[start, end]` (`YYYY-MM-DD`, inclusive),
/// newest first.
pub fn get_records_between(conn: &Connection, start: &str, end: &str) -> AppResult<Vec<StoredRecord>> {
    collect(
        conn,
        &format!("{SELECT_COLUMNS} WHERE date >= ?1 AND date <= ?2 ORDER BY timestamp DESC"),
        params![start, end],
    )
}

/// Every record, newest first.
pub fn get_all_records(conn: &Connection) -> AppResult<Vec<StoredRecord>> {
    collect(
        conn,
        &format!("{SELECT_COLUMNS} ORDER BY timestamp DESC"),
        [],
    )
}

/// Insert one record and return its new id. `rec.id` is ignored.
pub fn insert_record(conn: &Connection, rec: &StoredRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO records (timestamp, date, note, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            rec.timestamp,
            rec.date,
            rec.note.as_ref().map(EncryptedNote::as_str),
            rec.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Bulk insert in a single transaction; ids are reassigned by SQLite.
pub fn insert_records(conn: &mut Connection, recs: &[StoredRecord]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO records (timestamp, date, note, created_at)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for rec in recs {
            stmt.execute(params![
                rec.timestamp,
                rec.date,
                rec.note.as_ref().map(EncryptedNote::as_str),
                rec.created_at,
            ])?;
        }
    }
    tx.commit()?;
    Ok(recs.len())
}

/// Delete every record. Returns the number of rows removed.
pub fn clear_all(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM records", [])?;
    Ok(n)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    Ok(n)
}
