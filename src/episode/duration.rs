/// Format a duration in whole seconds as a zero-padded "HH:MM:SS" string.
///
/// The hours field widens beyond two digits for very long durations.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Parse a "HH:MM:SS" string back into whole seconds.
///
/// Inverse of [`format_duration`]: for every `d`,
/// `parse_duration(&format_duration(d)) == Some(d)`. Returns `None` for
/// anything that is not three numeric fields with in-range minutes and
/// seconds.
pub fn parse_duration(value: &str) -> Option<u64> {
    let mut parts = value.split(':');

    let hours: u64 = parts.next()?.parse().ok()?;
    let minutes: u64 = parts.next()?.parse().ok()?;
    let seconds: u64 = parts.next()?.parse().ok()?;

    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }

    Some(hours * 3600 + minutes * 60 + seconds)
}
