// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{SectionExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(data: &SectionExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(data)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row first.
pub(crate) fn export_csv(data: &SectionExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(&data.headers)?;
    for row in &data.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
