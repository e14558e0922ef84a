use crate::cli::commands::print_section;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::IntervalLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::field::Field;
use crate::ui::messages::{ToastKind, toast, warning};

/// Edit one field of an interval.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        section,
        target,
        field,
        value,
    } = cmd
    {
        let key = section.key();
        let field = Field::from_name(field).ok_or_else(|| AppError::UnknownField(field.clone()))?;

        if field == Field::SulphidePercent {
            check_percentage(value)?;
        }

        let pool = DbPool::open_migrated(&cfg.database)?;

        match IntervalLogic::set(&pool.conn, cfg, &key, &target.entry_ref(), field, value) {
            Ok((true, rows)) => print_section(&key, &rows),
            Ok((false, rows)) => {
                warning("No interval with that id, nothing changed.");
                print_section(&key, &rows);
            }
            Err(AppError::Validation(e)) => {
                toast("Validation error", e.describe(), ToastKind::Destructive);
                return Err(AppError::Validation(e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// The percentage input only offers 0..=100.
fn check_percentage(raw: &str) -> AppResult<()> {
    match raw.trim().parse::<u8>() {
        Ok(p) if p <= 100 => Ok(()),
        _ => Err(AppError::OutOfRange(format!(
            "Sulphide % must be a whole number between 0 and 100 (got '{}')",
            raw
        ))),
    }
}
