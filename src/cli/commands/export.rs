use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::IntervalLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        section,
        format,
        file,
        force,
    } = cmd
    {
        let key = section.key();
        let pool = DbPool::open_migrated(&cfg.database)?;

        let store = IntervalLogic::open(&pool.conn, cfg, &key)?;
        ExportLogic::export(&store, &key, *format, file, *force)?;
    }
    Ok(())
}
