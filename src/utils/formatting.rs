//! Formatting utilities used for CLI outputs.

use crate::utils::colors::{RESET, color_for_status};

/// "1 day", "2 days", "0 days".
pub fn plural_days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

/// Check mark for a completed day, dot otherwise.
pub fn status_mark(done: bool) -> &'static str {
    if done { "✔" } else { "·" }
}

pub fn colored_mark(done: bool) -> String {
    format!("{}{}{}", color_for_status(done), status_mark(done), RESET)
}

/// Horizontal bar for a 0..=7 weekly count.
pub fn week_bar(completed: u8) -> String {
    let filled = usize::from(completed.min(7));
    format!("{}{}", "█".repeat(filled), "░".repeat(7 - filled))
}

/// Share of completed days as a whole percentage.
pub fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((completed * 100) as f64 / total as f64).round() as u32
    }
}
