//! Elapsed-time tracking for progress and milestone lines.

use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock timer started at construction. Monotonic, never resets.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Instant,
}

impl Timer {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since construction.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_duration(self.elapsed()))
    }
}

/// Humanize a duration for inline display: `950ms`, `4.2s`, `1m03s`, `1h02m`.
pub(crate) fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m{:02}s", secs / 60, secs % 60)
    } else {
        format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
    }
}
