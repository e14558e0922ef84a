use crate::cli::parser::{Commands, HoleCommands};
use crate::config::Config;
use crate::core::dashboard::HoleFilter;
use crate::core::hole::{HoleDraft, HoleLogic};
use crate::db::pool::DbPool;
use crate::db::queries::load_holes;
use crate::errors::{AppError, AppResult};
use crate::models::drill_hole::DrillHole;
use crate::ui::messages::{ToastKind, info, success, toast};
use crate::utils::colors::{RESET, check_mark, color_for_status};
use crate::utils::date::{format_hole_date, parse_date};
use crate::utils::formatting::meters;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Hole { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_migrated(&cfg.database)?;

    match action {
        HoleCommands::Add {
            hole_no,
            project,
            site_id,
            location,
            status,
            country,
            hole_type,
            hole_size,
            contractor,
            logged_by,
            geologist,
            start_date,
            maximum_depth,
            azimuth,
            dip,
            drill_purpose,
        } => {
            let start_date = match start_date {
                Some(s) => Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
                None => None,
            };

            let text = |v: &Option<String>| v.clone().unwrap_or_default();

            let draft = HoleDraft {
                hole_no: text(hole_no),
                project_id: text(project),
                site_id: site_id.clone(),
                location: location.clone(),
                status: *status,
                country: country.clone(),
                hole_type: text(hole_type),
                hole_size: text(hole_size),
                contractor: text(contractor),
                logged_by: text(logged_by),
                geologist: text(geologist),
                start_date,
                maximum_depth: *maximum_depth,
                azimuth: *azimuth,
                dip: *dip,
                drill_purpose: text(drill_purpose),
            };

            match HoleLogic::create(&pool.conn, &draft) {
                Ok(hole) => toast(
                    "Drill Hole Created",
                    format!("Drill hole {} created successfully!", hole.id),
                    ToastKind::Default,
                ),
                Err(e @ (AppError::MissingFields(_) | AppError::OutOfRange(_))) => {
                    toast("Validation Error", &e, ToastKind::Destructive);
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        HoleCommands::Import { file } => {
            let path = expand_tilde(file);
            let summary = HoleLogic::import(&pool.conn, &path)?;
            success(format!(
                "Imported {} holes from {} ({} new, {} updated)",
                summary.inserted + summary.updated,
                path.display(),
                summary.inserted,
                summary.updated
            ));
        }

        HoleCommands::List {
            search,
            status,
            location,
        } => {
            let holes = load_holes(&pool.conn)?;
            let filter = HoleFilter {
                search: search.clone(),
                status: *status,
                location: location.clone(),
            };

            let shown = filter.apply(&holes);
            if shown.is_empty() {
                info("No drill holes found matching your filters.");
                return Ok(());
            }

            print!("{}", render_holes(&shown));
            println!("Showing {} of {} drill holes", shown.len(), holes.len());
        }
    }

    Ok(())
}

pub(crate) fn render_holes(holes: &[&DrillHole]) -> String {
    let mut table = Table::new(vec![
        Column::new("HOLE", 8),
        Column::new("SITE", 8),
        Column::new("LOCATION", 8),
        Column::new("STATUS", 8),
        Column::new("PLANNED", 8),
        Column::new("DRILLED", 8),
        Column::new("START", 9),
        Column::new("END", 9),
        Column::new("PHOTO", 5),
        Column::new("LITHO", 5),
        Column::new("SAMPLES", 7),
    ]);

    for h in holes {
        table.add_row(vec![
            h.id.clone(),
            h.site_id.clone(),
            h.location.clone(),
            format!("{}{}{RESET}", color_for_status(h.status), h.status),
            meters(h.planned_depth),
            meters(h.drilled_depth),
            h.start_date
                .map(|d| format_hole_date(Some(d)))
                .unwrap_or_else(|| "-".into()),
            format_hole_date(h.end_date),
            check_mark(h.has_photo),
            check_mark(h.has_litho),
            check_mark(h.has_samples),
        ]);
    }

    table.render()
}
