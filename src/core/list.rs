use crate::core::repository::RecordRepository;
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::ui::messages::info;
use crate::utils::colors::colorize_note;
use crate::utils::date::{format_millis, period_bounds};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ListLogic;

impl ListLogic {
    /// Records to show: a period, a single day, or everything.
    pub fn select(
        repo: &RecordRepository,
        period: Option<&str>,
        day: Option<NaiveDate>,
    ) -> AppResult<Vec<Record>> {
        if let Some(d) = day {
            return repo.records_on(d);
        }
        match period {
            Some(p) => {
                let (start, end) = period_bounds(p)?;
                repo.records_between(start, end)
            }
            None => repo.all_records(),
        }
    }

    pub fn render(records: &[Record]) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 6),
            Column::new("DATE", 10),
            Column::new("LOGGED AT", 16),
            Column::new("NOTE", 0),
        ]);

        for r in records {
            table.add_row(vec![
                r.id.to_string(),
                r.date.clone(),
                format_millis(r.timestamp),
                colorize_note(r.note.as_deref()),
            ]);
        }

        table.render()
    }

    pub fn print(records: &[Record]) {
        if records.is_empty() {
            info("No records found.");
            return;
        }

        println!("{}", Self::render(records));
        println!("{} record(s)", records.len());
    }
}
