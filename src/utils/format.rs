//! Display formatting for dates, uptimes, and URLs.

use chrono::{DateTime, Utc};

/// Formats an optional timestamp for display, e.g. `Jan 5, 2026 14:32`.
///
/// Absent timestamps render as `Never` (a link that was never accessed).
pub fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%b %-d, %Y %H:%M").to_string(),
        None => "Never".to_string(),
    }
}

/// Formats a timestamp relative to `now`, e.g. `5 min ago`.
///
/// Anything under a minute is `Just now`; anything a week or older falls back
/// to the absolute date.
pub fn format_relative_time(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = timestamp else {
        return "Never".to_string();
    };

    let seconds = (now - ts).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }
    if days < 7 {
        return format!("{days} day{} ago", plural(days));
    }

    format_date(Some(ts))
}

/// Formats an uptime in seconds as `1d 2h 3m 4s`, omitting zero parts.
pub fn format_uptime(uptime_seconds: u64) -> String {
    let days = uptime_seconds / 86_400;
    let hours = (uptime_seconds % 86_400) / 3_600;
    let minutes = (uptime_seconds % 3_600) / 60;
    let seconds = uptime_seconds % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }

    parts.join(" ")
}

/// Truncates a URL for table display, appending `...` past `max_length`.
pub fn truncate_url(url: &str, max_length: usize) -> String {
    if url.chars().count() <= max_length {
        return url.to_string();
    }

    let cut: String = url.chars().take(max_length).collect();
    format!("{cut}...")
}

fn plural(count: i64) -> &'static str {
    if count > 1 { "s" } else { "" }
}
