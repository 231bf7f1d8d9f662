//! Purchase histories: synthetic generation and loading from CSV.

use crate::errors::{AppError, AppResult};
use crate::models::{EmissionRecord, HistoryEntry};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::index::sample;
use std::path::Path;
use tracing::{debug, info};

/// Parameters of a synthetic history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryGenerator {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub baskets: usize,
    pub max_items: usize,
}

impl HistoryGenerator {
    pub fn new(start: NaiveDate, end: NaiveDate, baskets: usize, max_items: usize) -> Self {
        Self {
            start,
            end,
            baskets,
            max_items,
        }
    }

    /// Number of days in the inclusive range, or an error if it is inverted.
    pub fn days_in_range(&self) -> AppResult<usize> {
        if self.start > self.end {
            return Err(AppError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok((self.end - self.start).num_days() as usize + 1)
    }

    fn validate(&self, dataset: &[EmissionRecord]) -> AppResult<usize> {
        let days = self.days_in_range()?;

        if self.baskets == 0 {
            return Err(AppError::InvalidArgument(
                "the number of baskets must be at least 1".into(),
            ));
        }
        if self.max_items == 0 {
            return Err(AppError::InvalidArgument(
                "the maximum basket size must be at least 1".into(),
            ));
        }
        if self.baskets > days {
            return Err(AppError::TooManyBaskets {
                requested: self.baskets,
                available: days,
            });
        }
        if dataset.is_empty() {
            return Err(AppError::EmptyDataset);
        }
        Ok(days)
    }

    /// Draw the history: one distinct date per basket, `1..=max_items` items
    /// per basket, items picked with replacement from `dataset`.
    pub fn generate<R: Rng>(
        &self,
        dataset: &[EmissionRecord],
        rng: &mut R,
    ) -> AppResult<Vec<HistoryEntry>> {
        let days = self.validate(dataset)?;

        let mut history = Vec::new();
        for offset in sample(rng, days, self.baskets).into_iter() {
            let date = self.start + Duration::days(offset as i64);
            let size = rng.gen_range(1..=self.max_items);

            for _ in 0..size {
                let record = &dataset[rng.gen_range(0..dataset.len())];
                history.push(HistoryEntry::purchase(date, record));
            }
            debug!(%date, items = size, "basket generated");
        }

        info!(
            baskets = self.baskets,
            entries = history.len(),
            "synthetic history generated"
        );
        Ok(history)
    }
}

/// Read a purchase history written in the dashboard's CSV layout.
///
/// Unparsable numeric cells become unknown; a missing column or a bad date
/// rejects the file.
pub fn load_history_csv(path: &Path) -> AppResult<Vec<HistoryEntry>> {
    let mut rdr = csv::Reader::from_path(path)?;
    read_history(&mut rdr)
}

fn read_history<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> AppResult<Vec<HistoryEntry>> {
    let mut out = Vec::new();
    for (idx, row) in rdr.deserialize::<HistoryEntry>().enumerate() {
        // header is line 1
        let entry = row.map_err(|e| AppError::InvalidHistory {
            row: idx + 2,
            reason: e.to_string(),
        })?;
        out.push(entry);
    }
    info!(entries = out.len(), "history loaded");
    Ok(out)
}
