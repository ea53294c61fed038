// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export stored log entries of every habit.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or any expression accepted by
    ///   [`parse_range`]
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows: Vec<EntryExport> = load_all_entries(&pool.conn, date_bounds)?
            .iter()
            .map(|(name, entry)| EntryExport::from_entry(name, entry))
            .collect();

        if rows.is_empty() {
            warning("No log entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
