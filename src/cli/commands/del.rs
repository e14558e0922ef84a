use crate::cli::commands::print_section;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::IntervalLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{ToastKind, toast, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { section, target } = cmd {
        let key = section.key();
        let pool = DbPool::open_migrated(&cfg.database)?;

        let (removed, rows) = IntervalLogic::del(&pool.conn, cfg, &key, &target.entry_ref())?;

        if removed {
            toast("Row deleted", "Logging interval removed", ToastKind::Destructive);
        } else {
            warning("No interval with that id, nothing deleted.");
        }
        print_section(&key, &rows);
    }

    Ok(())
}
