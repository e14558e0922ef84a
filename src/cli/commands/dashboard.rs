use crate::cli::commands::hole::render_holes;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{DashboardLogic, HoleFilter, group_by_location};
use crate::db::pool::DbPool;
use crate::db::queries::load_holes;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, meters, separator};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Dashboard {
        search,
        status,
        location,
        json,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::open_migrated(&cfg.database)?;
    let holes = load_holes(&pool.conn)?;
    let summary = DashboardLogic::summarize(&holes);

    if *json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let rule = separator(&cfg.separator_char, 48);
    let k = &summary.kpis;

    header("Drilling Progress");
    println!("Total holes     {}", k.total_holes());
    println!("Drilled         {}", k.drilled);
    println!("Drilling        {}", k.drilling);
    println!("Not drilled     {}", k.planned);
    println!("Abandoned       {}", k.abandoned);
    println!("Meters drilled  {}", bold(&meters(k.total_meters)));
    println!("Average depth   {}", meters(k.avg_depth));
    println!("{}", rule);

    header("Meters by location");
    for l in &summary.locations {
        println!("{:<16} {:>10}  ({} holes)", l.location, meters(l.meters), l.holes);
    }
    println!("{}", rule);

    header("Completed per month");
    for m in &summary.timeline {
        println!("{:<8} {:>3} holes  {:>10}", m.label(), m.holes, meters(m.meters));
    }
    println!("{}", rule);

    header("Planned depth distribution");
    for d in &summary.depths {
        println!("{:<10} {}", d.range, d.count);
    }
    println!("{}", rule);

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

    for (loc, group) in group_by_location(&shown) {
        header(&loc);
        print!("{}", render_holes(&group));
    }
    println!("Showing {} of {} drill holes", shown.len(), holes.len());

    Ok(())
}
