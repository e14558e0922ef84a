// src/export/logic.rs

use crate::core::persistence::SectionSink;
use crate::core::store::IntervalLogStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SectionExport;
use crate::models::section_key::SectionKey;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows of one active section.
    ///
    /// `file` must be absolute. An existing file is replaced only with
    /// `force` or after confirmation.
    pub fn export<S: SectionSink>(
        store: &IntervalLogStore<S>,
        key: &SectionKey,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let data = SectionExport::build(key, &store.list_entries(key));

        if data.is_empty() {
            warning(format!("No intervals logged for {}.", key));
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
        }

        Ok(())
    }
}
