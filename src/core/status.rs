use crate::core::repository::RecordRepository;
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::utils::date::week_bounds;
use chrono::NaiveDate;
use tracing::warn;

/// What the `status` screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub day: NaiveDate,
    pub today: Vec<Record>,
    pub week_count: usize,
    pub age: u32,
}

impl StatusSnapshot {
    pub fn load(repo: &RecordRepository, day: NaiveDate, age: u32) -> AppResult<Self> {
        let today = repo.records_on(day)?;
        let (monday, sunday) = week_bounds(day);
        let week_count = repo.records_between(monday, sunday)?.len();

        Ok(Self {
            day,
            today,
            week_count,
            age,
        })
    }
}

/// Holds the last snapshot that loaded successfully.
#[derive(Debug, Default)]
pub struct StatusView {
    last: Option<StatusSnapshot>,
}

impl StatusView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload. A failure keeps the previous snapshot when there is one and
    /// is only returned when there is nothing to show.
    pub fn refresh<F>(&mut self, load: F) -> AppResult<&StatusSnapshot>
    where
        F: FnOnce() -> AppResult<StatusSnapshot>,
    {
        match load() {
            Ok(snap) => Ok(&*self.last.insert(snap)),
            Err(e) => match self.last.as_ref() {
                Some(prev) => {
                    warn!(error = %e, "status refresh failed, keeping previous data");
                    Ok(prev)
                }
                None => Err(e),
            },
        }
    }

    pub fn current(&self) -> Option<&StatusSnapshot> {
        self.last.as_ref()
    }
}
