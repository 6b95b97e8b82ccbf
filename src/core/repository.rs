//! Boundary between the plaintext domain (`Record`) and the encrypted rows
//! (`StoredRecord`). Notes are sealed on the way in and opened on the way out.

use crate::crypto::NoteCipher;
use crate::db::pool::DbPool;
use crate::db::records;
use crate::errors::AppResult;
use crate::models::record::{Record, StoredRecord};
use crate::utils::date::{format_date, now_millis, today};
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct RecordRepository<'a> {
    pool: &'a mut DbPool,
    cipher: &'a NoteCipher,
}

impl<'a> RecordRepository<'a> {
    pub fn new(pool: &'a mut DbPool, cipher: &'a NoteCipher) -> Self {
        Self { pool, cipher }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    fn to_domain(&self, row: StoredRecord) -> Record {
        Record {
            id: row.id,
            timestamp: row.timestamp,
            date: row.date,
            note: row.note.map(|n| self.cipher.open_or_empty(&n)),
        }
    }

    fn to_stored(&self, rec: &Record, created_at: i64) -> StoredRecord {
        StoredRecord {
            id: 0,
            timestamp: rec.timestamp,
            date: rec.date.clone(),
            note: rec.note.as_deref().map(|n| self.cipher.seal_or_plain(n)),
            created_at,
        }
    }

    /// Log a record for right now.
    pub fn add_record(&mut self, note: Option<String>) -> AppResult<Record> {
        self.add_record_at(now_millis(), &format_date(today()), note)
    }

    pub fn add_record_at(
        &mut self,
        timestamp: i64,
        date: &str,
        note: Option<String>,
    ) -> AppResult<Record> {
        let mut rec = Record::new(timestamp, date, note);
        let stored = self.to_stored(&rec, now_millis());
        rec.id = records::insert_record(&self.pool.conn, &stored)?;
        Ok(rec)
    }

    pub fn records_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Record>> {
        let rows =
            records::get_records_between(&self.pool.conn, &format_date(start), &format_date(end))?;
        Ok(rows.into_iter().map(|r| self.to_domain(r)).collect())
    }

    pub fn records_on(&self, day: NaiveDate) -> AppResult<Vec<Record>> {
        self.records_between(day, day)
    }

    pub fn all_records(&self) -> AppResult<Vec<Record>> {
        let rows = records::get_all_records(&self.pool.conn)?;
        Ok(rows.into_iter().map(|r| self.to_domain(r)).collect())
    }

    /// Insert `recs` in one transaction. Incoming ids are discarded.
    pub fn import_records(&mut self, recs: &[Record]) -> AppResult<usize> {
        let created_at = now_millis();
        let rows: Vec<StoredRecord> = recs.iter().map(|r| self.to_stored(r, created_at)).collect();
        records::insert_records(&mut self.pool.conn, &rows)
    }

    pub fn clear_all(&mut self) -> AppResult<usize> {
        records::clear_all(&self.pool.conn)
    }
}
