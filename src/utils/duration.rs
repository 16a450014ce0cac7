//! Elapsed-time formatting.

use std::time::Duration;

/// Format an elapsed duration as `H:MM:SS`, trimming leading zero fields.
///
/// Anything below one second renders as `00:00`.
///
/// ```rust
/// use std::time::Duration;
/// use tagline::utils::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::ZERO), "00:00");
/// assert_eq!(format_elapsed(Duration::from_secs(75)), "1:15");
/// assert_eq!(format_elapsed(Duration::from_secs(3661)), "1:01:01");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    if total == 0 {
        return "00:00".to_string();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
