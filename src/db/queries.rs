use crate::core::hole::HoleDraft;
use crate::errors::{AppError, AppResult};
use crate::models::drill_hole::DrillHole;
use crate::models::hole_status::HoleStatus;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn date_to_db(d: Option<NaiveDate>) -> Option<String> {
    d.map(|d| d.format("%Y-%m-%d").to_string())
}

fn date_from_db(s: Option<String>) -> Result<Option<NaiveDate>> {
    match s {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(s.clone())),
                )
            }),
    }
}

pub fn map_hole_row(row: &Row) -> Result<DrillHole> {
    let status_str: String = row.get("status")?;
    let status = HoleStatus::from_label(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(DrillHole {
        id: row.get("id")?,
        site_id: row.get("site_id")?,
        location: row.get("location")?,
        status,
        planned_depth: row.get("planned_depth")?,
        drilled_depth: row.get("drilled_depth")?,
        start_date: date_from_db(row.get("start_date")?)?,
        end_date: date_from_db(row.get("end_date")?)?,
        status_note: row.get("status_note")?,
        has_photo: row.get::<_, i32>("has_photo")? == 1,
        has_litho: row.get::<_, i32>("has_litho")? == 1,
        has_samples: row.get::<_, i32>("has_samples")? == 1,
    })
}

pub fn hole_exists(conn: &Connection, id: &str) -> AppResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM holes WHERE id = ?1", [id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Insert a hole. Form details are stored when the hole comes from the create form.
pub fn insert_hole(conn: &Connection, hole: &DrillHole, draft: Option<&HoleDraft>) -> AppResult<()> {
    let created_at = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO holes (id, site_id, location, status, planned_depth, drilled_depth,
                            start_date, end_date, status_note, has_photo, has_litho,
                            has_samples, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            hole.id,
            hole.site_id,
            hole.location,
            hole.status.to_db_str(),
            hole.planned_depth,
            hole.drilled_depth,
            date_to_db(hole.start_date),
            date_to_db(hole.end_date),
            hole.status_note,
            hole.has_photo as i32,
            hole.has_litho as i32,
            hole.has_samples as i32,
            created_at,
        ],
    )?;

    if let Some(d) = draft {
        conn.execute(
            "UPDATE holes
             SET project_id = ?2, country = ?3, hole_type = ?4, hole_size = ?5,
                 contractor = ?6, logged_by = ?7, geologist = ?8, azimuth = ?9,
                 dip = ?10, drill_purpose = ?11
             WHERE id = ?1",
            params![
                hole.id,
                d.project_id,
                d.country,
                d.hole_type,
                d.hole_size,
                d.contractor,
                d.logged_by,
                d.geologist,
                d.azimuth.unwrap_or(0.0),
                d.dip.unwrap_or(0.0),
                d.drill_purpose,
            ],
        )?;
    }

    Ok(())
}

/// Overwrite the register fields of an existing hole.
pub fn update_hole(conn: &Connection, hole: &DrillHole) -> AppResult<()> {
    conn.execute(
        "UPDATE holes
         SET site_id = ?2, location = ?3, status = ?4, planned_depth = ?5,
             drilled_depth = ?6, start_date = ?7, end_date = ?8, status_note = ?9,
             has_photo = ?10, has_litho = ?11, has_samples = ?12
         WHERE id = ?1",
        params![
            hole.id,
            hole.site_id,
            hole.location,
            hole.status.to_db_str(),
            hole.planned_depth,
            hole.drilled_depth,
            date_to_db(hole.start_date),
            date_to_db(hole.end_date),
            hole.status_note,
            hole.has_photo as i32,
            hole.has_litho as i32,
            hole.has_samples as i32,
        ],
    )?;
    Ok(())
}

/// Every registered hole, in insertion order.
pub fn load_holes(conn: &Connection) -> AppResult<Vec<DrillHole>> {
    let mut stmt = conn.prepare("SELECT * FROM holes ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_hole_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
