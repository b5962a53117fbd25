//! Terminal output helpers for live progress.
//!
//! - LineWriter for in-place progress lines versus permanent lines
//! - Timer for humanized elapsed time
//! - progress() for the bar/spinner indicator

mod line_writer;
mod progress;
mod timer;

pub use line_writer::LineWriter;
pub use progress::progress;
pub use timer::Timer;
