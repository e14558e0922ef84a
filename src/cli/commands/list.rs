use crate::cli::commands::print_section;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::IntervalLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { section, json } = cmd {
        let key = section.key();
        let pool = DbPool::open_migrated(&cfg.database)?;

        let rows = IntervalLogic::list(&pool.conn, cfg, &key)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            print_section(&key, &rows);
        }
    }
    Ok(())
}
