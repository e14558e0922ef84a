pub mod add;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod export;
pub mod hole;
pub mod init;
pub mod list;
pub mod log;
pub mod options;
pub mod save;
pub mod set;

use crate::models::log_entry::LogRow;
use crate::models::section_key::SectionKey;
use crate::core::interval::IntervalLogic;
use crate::ui::messages::header;

/// Re-render the table after a mutation.
pub(crate) fn print_section(key: &SectionKey, rows: &[LogRow]) {
    header(format!("{} · {} · {}", key.project_id, key.hole_id, key.section));
    if rows.is_empty() {
        println!("No intervals logged.");
    } else {
        print!("{}", IntervalLogic::render_table(key.section, rows));
    }
}
