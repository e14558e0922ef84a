/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Large intervals are highlighted in the logging table.
pub fn color_for_interval(large: bool) -> &'static str {
    if large { YELLOW } else { RESET }
}

/// Status badge colour in the holes table.
pub fn color_for_status(status: crate::models::hole_status::HoleStatus) -> &'static str {
    use crate::models::hole_status::HoleStatus;

    match status {
        HoleStatus::Drilled => GREEN,
        HoleStatus::Drilling => BLUE,
        HoleStatus::Planned => GREY,
        HoleStatus::Abandoned => RED,
    }
}

/// Grey placeholder for unset cells, value as-is otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// ✓ / ✗ marker for the photo / litho / samples columns.
pub fn check_mark(done: bool) -> String {
    if done {
        format!("{GREEN}✓{RESET}")
    } else {
        format!("{GREY}✗{RESET}")
    }
}
