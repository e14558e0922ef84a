//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Meters with one decimal and a unit: "521.7 m".
pub fn meters(v: f64) -> String {
    format!("{:.1} m", v)
}

/// Horizontal rule built from the configured separator.
pub fn separator(ch: &str, width: usize) -> String {
    let ch = if ch.is_empty() { "-" } else { ch };
    ch.repeat(width)
}

/// Cut `s` to at most `max` chars, marking the cut with '…'.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
