//! Tables shared by several commands.

use crate::models::{EmissionRecord, HistoryEntry, LifecycleStage, NumericField};
use crate::ui::messages::warning;
use crate::utils::colors::paint_intensity;
use crate::utils::fmt_kg;
use crate::utils::table::{Column, Table};

pub(crate) fn dataset_unavailable(source: &str) {
    warning(format!(
        "No data found in {source}. Please check the database URL or table structure."
    ));
}

fn numeric_columns() -> impl Iterator<Item = Column> {
    NumericField::ALL.iter().map(|f| Column::right(f.header()))
}

pub(crate) fn records_table<'r>(records: impl IntoIterator<Item = &'r EmissionRecord>) -> Table {
    let mut columns = vec![Column::left("Category"), Column::left("Food")];
    columns.extend(numeric_columns());

    let mut table = Table::new(columns);
    for r in records {
        let mut row = vec![r.category.clone(), r.food_name.clone()];
        row.push(paint_intensity(&fmt_kg(r.co2e_per_kg), r.co2e_per_kg));
        row.extend(LifecycleStage::ALL.iter().map(|s| fmt_kg(r.stage(*s))));
        table.add_row(row);
    }
    table
}

pub(crate) fn history_table(history: &[HistoryEntry]) -> Table {
    let mut columns = vec![
        Column::left("Date of Purchase"),
        Column::left("Product"),
        Column::left("Category"),
    ];
    columns.extend(numeric_columns());

    let mut table = Table::new(columns);
    for e in history {
        let mut row = vec![e.date_str(), e.product.clone(), e.category.clone()];
        row.extend(NumericField::ALL.iter().map(|f| fmt_kg(e.value(*f))));
        table.add_row(row);
    }
    table
}
