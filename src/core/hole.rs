//! Hole register: creation form validation and CSV import.

use crate::db::log::ttlog;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::drill_hole::DrillHole;
use crate::models::hole_status::HoleStatus;
use crate::utils::date::parse_hole_date;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Deserialize;
use std::path::Path;

/// Create-hole form. Text fields are empty when not filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleDraft {
    pub hole_no: String,
    pub project_id: String,
    pub site_id: String,
    pub location: String,
    pub status: HoleStatus,
    pub country: String,
    pub hole_type: String,
    pub hole_size: String,
    pub contractor: String,
    pub logged_by: String,
    pub geologist: String,
    pub start_date: Option<NaiveDate>,
    pub maximum_depth: Option<f64>,
    pub azimuth: Option<f64>,
    pub dip: Option<f64>,
    pub drill_purpose: String,
}

impl Default for HoleDraft {
    fn default() -> Self {
        Self {
            hole_no: String::new(),
            project_id: String::new(),
            site_id: String::new(),
            location: String::new(),
            status: HoleStatus::Planned,
            country: "Ghana".to_string(),
            hole_type: String::new(),
            hole_size: String::new(),
            contractor: String::new(),
            logged_by: String::new(),
            geologist: String::new(),
            start_date: None,
            maximum_depth: None,
            azimuth: None,
            dip: None,
            drill_purpose: String::new(),
        }
    }
}

impl HoleDraft {
    /// Names of required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<String> {
        let text = [
            ("hole_no", &self.hole_no),
            ("project_id", &self.project_id),
            ("country", &self.country),
            ("hole_type", &self.hole_type),
            ("hole_size", &self.hole_size),
            ("contractor", &self.contractor),
            ("logged_by", &self.logged_by),
            ("geologist", &self.geologist),
        ];

        let mut missing: Vec<String> = text
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(k, _)| k.to_string())
            .collect();

        if self.start_date.is_none() {
            missing.push("start_date".into());
        }
        if self.maximum_depth.is_none() {
            missing.push("maximum_depth".into());
        }
        if self.azimuth.is_none() {
            missing.push("azimuth".into());
        }
        if self.dip.is_none() {
            missing.push("dip".into());
        }
        if self.drill_purpose.trim().is_empty() {
            missing.push("drill_purpose".into());
        }

        missing
    }

    pub fn validate(&self) -> AppResult<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        if let Some(az) = self.azimuth
            && !(0.0..=360.0).contains(&az)
        {
            return Err(AppError::OutOfRange("Azimuth must be between 0-360°".into()));
        }

        if let Some(dip) = self.dip
            && !(-90.0..=90.0).contains(&dip)
        {
            return Err(AppError::OutOfRange("Dip must be between -90 to +90°".into()));
        }

        Ok(())
    }

    /// Register entry for a freshly created hole.
    pub fn to_hole(&self) -> DrillHole {
        let mut hole = DrillHole::planned(
            self.hole_no.trim(),
            self.site_id.trim(),
            self.location.trim(),
            self.maximum_depth.unwrap_or(0.0),
        );
        hole.start_date = self.start_date;
        hole
    }
}

/// One row of a drilling-register CSV export.
#[derive(Debug, Deserialize)]
struct HoleRecord {
    id: String,
    site_id: String,
    location: String,
    status: String,
    planned_depth: f64,
    #[serde(default)]
    drilled_depth: f64,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
    #[serde(default)]
    status_note: String,
    #[serde(default)]
    has_photo: bool,
    #[serde(default)]
    has_litho: bool,
    #[serde(default)]
    has_samples: bool,
}

impl HoleRecord {
    fn into_hole(self) -> AppResult<DrillHole> {
        let status =
            HoleStatus::from_label(&self.status).ok_or(AppError::InvalidStatus(self.status))?;

        Ok(DrillHole {
            id: self.id.trim().to_string(),
            site_id: self.site_id,
            location: self.location,
            status,
            planned_depth: self.planned_depth,
            drilled_depth: self.drilled_depth,
            start_date: parse_hole_date(&self.start_date)?,
            end_date: parse_hole_date(&self.end_date)?,
            status_note: self.status_note,
            has_photo: self.has_photo,
            has_litho: self.has_litho,
            has_samples: self.has_samples,
        })
    }
}

/// Outcome of a register import.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
}

pub struct HoleLogic;

impl HoleLogic {
    /// Validate the form and register the hole as planned.
    pub fn create(conn: &Connection, draft: &HoleDraft) -> AppResult<DrillHole> {
        draft.validate()?;

        let id = draft.hole_no.trim();
        if queries::hole_exists(conn, id)? {
            return Err(AppError::DuplicateHole(id.to_string()));
        }

        let hole = draft.to_hole();
        queries::insert_hole(conn, &hole, Some(draft))?;

        ttlog(
            conn,
            "hole",
            &hole.id,
            &format!("Drill hole {} created successfully!", hole.id),
        )?;

        Ok(hole)
    }

    /// Parse a register CSV (header row required).
    pub fn read_csv(path: &Path) -> AppResult<Vec<DrillHole>> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_path(path)?;

        let mut out = Vec::new();
        for rec in rdr.deserialize::<HoleRecord>() {
            out.push(rec?.into_hole()?);
        }
        Ok(out)
    }

    /// Load register rows into the database. Existing holes are overwritten.
    pub fn import(conn: &Connection, path: &Path) -> AppResult<ImportSummary> {
        let holes = Self::read_csv(path)?;

        let tx = conn.unchecked_transaction()?;
        let mut summary = ImportSummary::default();

        for hole in &holes {
            if queries::hole_exists(&tx, &hole.id)? {
                queries::update_hole(&tx, hole)?;
                summary.updated += 1;
            } else {
                queries::insert_hole(&tx, hole, None)?;
                summary.inserted += 1;
            }
        }

        ttlog(
            &tx,
            "hole",
            &path.display().to_string(),
            &format!(
                "Imported {} holes ({} new, {} updated)",
                holes.len(),
                summary.inserted,
                summary.updated
            ),
        )?;

        tx.commit()?;
        Ok(summary)
    }
}
