//! ANSI control sequences written around redraws.
//!
//! Colors never appear here; they go through the
//! [`StyleFormatter`](crate::style::StyleFormatter).

/// Hide the cursor while a bar is live.
pub const CURSOR_HIDE: &str = "\x1b[?25l";
/// Restore the cursor once the bar completes.
pub const CURSOR_SHOW: &str = "\x1b[?25h";
/// Move the cursor one line up.
pub const CURSOR_UP: &str = "\x1b[1A";
/// Return to column 0, erase the line, return to column 0 again.
pub const CLEAR_LINE: &str = "\r\x1b[2K\r";
