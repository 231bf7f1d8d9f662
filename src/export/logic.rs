use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `file` as CSV or JSON.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    pub fn export<T: Serialize>(
        rows: &[T],
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        if rows.is_empty() {
            warning("Nothing to export.");
            return Ok(());
        }

        ensure_writable(file, force)?;

        match format {
            ExportFormat::Csv => export_csv(rows, file),
            ExportFormat::Json => export_json(rows, file),
        }
    }
}
