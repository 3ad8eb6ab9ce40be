/// Formats a duration in seconds as clock-style `m:ss` text
///
/// Examples:
/// - 0 seconds: "0:00"
/// - 65 seconds: "1:05"
/// - 120 seconds: "2:00"
pub fn format_clock(total_seconds: f64) -> String {
    let whole = total_seconds.max(0.0).round() as i64;
    let minutes = whole / 60;
    let seconds = whole % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Formats an average answer time with one decimal, e.g. "2.3s"
pub fn format_average_seconds(seconds: f64) -> String {
    format!("{:.1}s", seconds)
}
