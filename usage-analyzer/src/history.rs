use chrono::{Days, NaiveDate};
use fuzzy_classifier::summary::{DailyRecord, UsageSummary};
use log::debug;

/// Rolling window of daily evaluations, at most one per date, oldest first
#[derive(Debug, Clone)]
pub struct UsageHistory {
    days: u32,
    records: Vec<DailyRecord>,
}

impl UsageHistory {
    pub fn new(days: u32) -> Self {
        Self {
            days,
            records: Vec::new(),
        }
    }

    /// Stores the record, replacing an earlier evaluation of the same day
    pub fn record(&mut self, record: DailyRecord) {
        match self
            .records
            .binary_search_by_key(&record.date, |r| r.date)
        {
            Ok(index) => {
                debug!("Replacing usage record of {}", record.date);
                self.records[index] = record;
            }
            Err(index) => self.records.insert(index, record),
        }

        if let Some(newest) = self.records.last().map(|r| r.date) {
            let cutoff = self.window_start(newest);
            self.records.retain(|r| r.date >= cutoff);
        }
    }

    pub fn summary(&self, today: NaiveDate) -> UsageSummary {
        let start = self.window_start(today);
        let lower = self.records.partition_point(|r| r.date < start);
        let upper = self.records.partition_point(|r| r.date <= today);

        UsageSummary::from_records(&self.records[lower..upper])
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// First date of the window of `days` dates ending at `day`
    fn window_start(&self, day: NaiveDate) -> NaiveDate {
        day.checked_sub_days(Days::new(self.days.saturating_sub(1).into()))
            .unwrap_or(NaiveDate::MIN)
    }
}
