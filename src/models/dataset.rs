use super::emission_record::EmissionRecord;
use super::field::NumericField;
use std::collections::BTreeSet;

/// The normalized reference table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<EmissionRecord>,
    /// Numeric columns found in the source header
    pub numeric_columns: BTreeSet<NumericField>,
}

impl Dataset {
    pub fn new(records: Vec<EmissionRecord>, numeric_columns: BTreeSet<NumericField>) -> Self {
        Self {
            records,
            numeric_columns,
        }
    }

    pub fn has_column(&self, field: NumericField) -> bool {
        self.numeric_columns.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
