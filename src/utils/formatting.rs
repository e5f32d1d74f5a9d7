//! Formatting utilities used for CLI, page and export outputs.

use chrono::Duration;

/// Render a span as `H:MM:SS`, with a `N day(s), ` prefix for spans of a
/// day or more. Hours are not zero-padded.
///
/// Negative spans keep their sign: `-0:30:00`.
pub fn format_duration(d: Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.unsigned_abs();

    let days = secs / 86_400;
    let rem = secs % 86_400;
    let (hours, minutes, seconds) = (rem / 3_600, (rem % 3_600) / 60, rem % 60);

    let day_part = match days {
        0 => String::new(),
        1 => "1 day, ".to_string(),
        n => format!("{n} days, "),
    };

    format!("{sign}{day_part}{hours}:{minutes:02}:{seconds:02}")
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}
