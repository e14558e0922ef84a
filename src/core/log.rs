use crate::db::log::{LogLine, load_log};
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use crate::utils::table::visible_width;
use ansi_term::Colour;
use rusqlite::Connection;

const OP_MAX_WIDTH: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "set" => Colour::Yellow,
        "save" => Colour::Cyan,
        "hole" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One formatted line per log row, operation coloured.
    pub fn render(lines: &[LogLine]) -> Vec<String> {
        let op_targets: Vec<String> = lines
            .iter()
            .map(|l| {
                let s = if l.target.is_empty() {
                    l.operation.clone()
                } else {
                    format!("{} ({})", l.operation, l.target)
                };
                truncate(&s, OP_MAX_WIDTH)
            })
            .collect();

        let op_w = op_targets
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(10);
        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);

        lines
            .iter()
            .zip(op_targets)
            .map(|(l, op_target)| {
                let date = chrono::DateTime::parse_from_rfc3339(&l.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| l.date.clone());

                let color = color_for_operation(&l.operation);
                let colored = match op_target.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(op_target.as_str()).to_string(),
                };

                let padding = " ".repeat(op_w.saturating_sub(visible_width(&colored)));

                format!(
                    "{:>id_w$}: {:<25} | {}{} => {}",
                    l.id,
                    date,
                    colored,
                    padding,
                    l.message,
                    id_w = id_w
                )
            })
            .collect()
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let lines = load_log(conn)?;

        println!("📜 Internal log:\n");
        for line in Self::render(&lines) {
            println!("{}", line);
        }

        Ok(())
    }
}
