//! Aggregates over a user-curated basket of reference records.

use crate::models::{EmissionRecord, NumericField};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Insertion-ordered list of records; duplicates are separate entries.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    entries: Vec<EmissionRecord>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &EmissionRecord) {
        self.entries.push(record.clone());
    }

    pub fn extend<'r>(&mut self, records: impl IntoIterator<Item = &'r EmissionRecord>) {
        self.entries.extend(records.into_iter().cloned());
    }

    pub fn entries(&self) -> &[EmissionRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of `field`; unknown values count as zero.
    pub fn total(&self, field: NumericField) -> f64 {
        self.entries
            .iter()
            .filter_map(|e| e.value(field))
            .fold(0.0, |acc, v| acc + v)
    }

    /// Mean of the known values of `field`.
    pub fn mean(&self, field: NumericField) -> Option<f64> {
        let known: Vec<f64> = self.entries.iter().filter_map(|e| e.value(field)).collect();
        if known.is_empty() {
            None
        } else {
            Some(known.iter().sum::<f64>() / known.len() as f64)
        }
    }

    /// Totals of all seven numeric columns, in `NumericField::ALL` order.
    pub fn totals(&self) -> Vec<(NumericField, f64)> {
        NumericField::ALL
            .iter()
            .map(|f| (*f, self.total(*f)))
            .collect()
    }

    pub fn distinct_items(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.food_name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Entry with the highest CO2e per kg; the first one wins a tie.
    pub fn most_polluting(&self) -> Option<&EmissionRecord> {
        let mut best: Option<(&EmissionRecord, f64)> = None;
        for e in &self.entries {
            if let Some(v) = e.co2e_per_kg
                && best.is_none_or(|(_, b)| v > b)
            {
                best = Some((e, v));
            }
        }
        best.map(|(e, _)| e)
    }

    /// One row per category in first-seen order.
    pub fn group_by_category_sum(&self, field: NumericField) -> Vec<CategoryTotal> {
        let mut out: Vec<CategoryTotal> = Vec::new();
        for e in &self.entries {
            let value = e.value(field).unwrap_or(0.0);
            match out.iter_mut().find(|c| c.category == e.category) {
                Some(row) => row.total += value,
                None => out.push(CategoryTotal {
                    category: e.category.clone(),
                    total: value,
                }),
            }
        }
        out
    }
}
