use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::IntervalLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{ToastKind, toast};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save { section } = cmd {
        let key = section.key();
        let pool = DbPool::open_migrated(&cfg.database)?;

        let receipt = IntervalLogic::save(&pool.conn, cfg, &key)?;
        toast("Saved", receipt.message(), ToastKind::Default);
    }
    Ok(())
}
