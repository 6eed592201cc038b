use chrono::Duration;

/// "m:ss" label for the results footer.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
