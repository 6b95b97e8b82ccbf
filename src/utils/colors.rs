/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Returns GREY for a zero count and GREEN otherwise.
pub fn color_for_count(count: u32) -> &'static str {
    if count == 0 { GREY } else { GREEN }
}

/// Bar of `█` proportional to `count` (one block per record, capped).
pub fn bar(count: u32, max_width: usize) -> String {
    let n = (count as usize).min(max_width);
    let mut s = "█".repeat(n);
    if (count as usize) > max_width {
        s.push('+');
    }
    format!("{MAGENTA}{s}{RESET}")
}

/// Note text: grey placeholder when absent or empty.
pub fn colorize_note(note: Option<&str>) -> String {
    match note {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}
