//! Raw table → typed dataset.

use crate::models::{Dataset, EmissionRecord, NumericField};
use crate::source::table::RawTable;
use std::collections::BTreeSet;
use tracing::debug;

/// Parse a locale-formatted decimal (`"2,5"`). Anything that is not a finite
/// number after swapping `,` for `.` is unknown.
pub fn coerce_decimal(cell: &str) -> Option<f64> {
    let cleaned = cell.replace(',', ".");
    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Build the dataset from the fetched cells.
///
/// Rows shorter than the header have their missing cells treated as absent.
/// Numeric columns missing from the header stay absent for every record.
pub fn normalize(raw: &RawTable) -> Dataset {
    let category_idx = column_index(&raw.headers, "Category");
    let food_idx = column_index(&raw.headers, "Food");

    let numeric_idx: Vec<(NumericField, usize)> = NumericField::ALL
        .iter()
        .filter_map(|field| {
            raw.headers
                .iter()
                .position(|h| field.matches_header(h))
                .map(|idx| (*field, idx))
        })
        .collect();

    let mut coercion_failures = 0usize;
    let mut records = Vec::with_capacity(raw.rows.len());

    for row in &raw.rows {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).map(|s| s.trim());

        let mut record = EmissionRecord {
            category: cell(category_idx).unwrap_or_default().to_string(),
            food_name: cell(food_idx).unwrap_or_default().to_string(),
            ..Default::default()
        };

        for (field, idx) in &numeric_idx {
            let value = match row.get(*idx) {
                Some(text) => {
                    let parsed = coerce_decimal(text);
                    if parsed.is_none() {
                        coercion_failures += 1;
                    }
                    parsed
                }
                None => None,
            };
            record.set_value(*field, value);
        }

        records.push(record);
    }

    if coercion_failures > 0 {
        debug!(cells = coercion_failures, "numeric cells coerced to unknown");
    }

    let numeric_columns: BTreeSet<NumericField> = numeric_idx.iter().map(|(f, _)| *f).collect();
    debug!(
        records = records.len(),
        numeric_columns = numeric_columns.len(),
        "dataset normalized"
    );

    Dataset::new(records, numeric_columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LifecycleStage;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn comma_decimal_is_parsed() {
        assert_eq!(coerce_decimal("2,5"), Some(2.5));
        assert_eq!(coerce_decimal(" 0,04 "), Some(0.04));
        assert_eq!(coerce_decimal("12"), Some(12.0));
    }

    #[test]
    fn garbage_is_unknown() {
        assert_eq!(coerce_decimal("N/A"), None);
        assert_eq!(coerce_decimal(""), None);
        assert_eq!(coerce_decimal("1,234,5"), None);
        assert_eq!(coerce_decimal("inf"), None);
        assert_eq!(coerce_decimal("NaN"), None);
    }

    #[test]
    fn beef_row_becomes_one_record() {
        let ds = normalize(&table(
            &["Category", "Food", "CO2e pr kg"],
            &[&["Meat", "Beef", "26,5"]],
        ));

        assert_eq!(
            ds.records,
            vec![EmissionRecord::new("Meat", "Beef", Some(26.5))]
        );
        assert!(ds.has_column(NumericField::Co2e));
        assert!(!ds.has_column(NumericField::Stage(LifecycleStage::Retail)));
    }

    #[test]
    fn bad_numeric_cell_keeps_the_row() {
        let ds = normalize(&table(
            &["Category", "Food", "CO2e pr kg", "Transport"],
            &[&["Drinks", "Tea", "N/A", "0,3"], &["Meat", "Lamb", "40,1", "x"]],
        ));

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].co2e_per_kg, None);
        assert_eq!(ds.records[0].transport, Some(0.3));
        assert_eq!(ds.records[1].co2e_per_kg, Some(40.1));
        assert_eq!(ds.records[1].transport, None);
    }

    #[test]
    fn short_rows_are_padded_with_absent_values() {
        let ds = normalize(&table(
            &["Category", "Food", "CO2e pr kg", "Agriculture"],
            &[&["Fruit"]],
        ));

        let r = &ds.records[0];
        assert_eq!(r.category, "Fruit");
        assert_eq!(r.food_name, "");
        assert_eq!(r.co2e_per_kg, None);
        assert_eq!(r.agriculture, None);
    }

    #[test]
    fn full_header_maps_all_stages() {
        let ds = normalize(&table(
            &[
                "Category",
                "Food",
                "CO2e pr kg",
                "Agriculture",
                "ILUC",
                "Processing",
                "Packaging",
                "Transport",
                "Retail",
            ],
            &[&["Dairy", "Milk", "1,3", "0,9", "0,2", "0,1", "0,05", "0,03", "0,02"]],
        ));

        let r = &ds.records[0];
        assert_eq!(ds.numeric_columns.len(), 7);
        assert_eq!(r.iluc, Some(0.2));
        assert_eq!(r.retail, Some(0.02));
    }

    #[test]
    fn duplicate_food_names_are_retained() {
        let ds = normalize(&table(
            &["Category", "Food", "CO2e pr kg"],
            &[&["Fish", "Cod", "3,1"], &["Fish", "Cod", "3,4"]],
        ));
        assert_eq!(ds.len(), 2);
    }
}
