//! Level curve - derived difficulty and descent speed
//!
//! Level is never stored; it is recomputed from the line count whenever it is
//! needed.

use crate::types::{DROP_STEP_MS, LINES_PER_LEVEL, MAX_LEVEL, MAX_LEVEL_LINES, START_LEVEL};

/// Level for a given number of completed lines.
///
/// Level 1 until the first line, then grows by 1/10 per line (real division),
/// pinned at 10 from 91 lines on.
///
/// ```
/// use blockfall_core::level::level_for_lines;
///
/// assert_eq!(level_for_lines(0), 1.0);
/// assert_eq!(level_for_lines(91), 10.0);
/// ```
pub fn level_for_lines(lines: u32) -> f64 {
    if lines == 0 {
        return START_LEVEL;
    }
    if lines >= MAX_LEVEL_LINES {
        return MAX_LEVEL;
    }
    START_LEVEL + (lines - 1) as f64 / LINES_PER_LEVEL
}

/// Forced-descent interval in milliseconds for a level.
pub fn drop_interval_ms(level: f64) -> f64 {
    DROP_STEP_MS * (MAX_LEVEL + 1.0 - level)
}
