//! `MM:SS` formatting for elapsed and remaining time.
//!
//! Minutes never roll over into hours: 3661 seconds is `61:01`. Stored
//! score history depends on this shape.

/// Format whole seconds as zero-padded `MM:SS`.
pub fn format_elapsed(seconds: u64) -> String {
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    format!("{minutes:02}:{seconds:02}")
}

/// Parse `M:SS` text back into whole seconds.
///
/// Accepts any number of minute digits. Seconds must be two digits below 60.
pub fn parse_elapsed(text: &str) -> Option<u64> {
    let (minutes, seconds) = text.trim().split_once(':')?;
    if minutes.is_empty() || seconds.len() != 2 {
        return None;
    }
    if !minutes.bytes().all(|b| b.is_ascii_digit()) || !seconds.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}
