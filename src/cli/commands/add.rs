use crate::cli::commands::print_section;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::IntervalLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{ToastKind, toast};

/// Append a new interval to the section.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { section } = cmd {
        let key = section.key();
        let pool = DbPool::open_migrated(&cfg.database)?;

        let (id, rows) = IntervalLogic::add(&pool.conn, cfg, &key)?;

        toast("Row added", "New logging interval created", ToastKind::Default);
        println!("{}", id);
        print_section(&key, &rows);
    }

    Ok(())
}
