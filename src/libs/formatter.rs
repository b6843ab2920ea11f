//! Small text formatting helpers shared by the view layer.

/// Formats a minute count the way the dashboard displays study time:
/// `"1h 30m"` for durations of an hour or more, `"45m"` below that.
pub fn format_minutes(minutes: u32) -> String {
    if minutes >= 60 {
        let hours = minutes / 60;
        let remaining_minutes = minutes % 60;
        format!("{}h {}m", hours, remaining_minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Capitalizes the first character of a string, leaving the rest untouched.
///
/// Used for group headers ("daily" -> "Daily Goals").
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
