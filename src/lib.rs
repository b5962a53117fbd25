//! looplog - run a function over each element of a sequence, capturing
//! faults and warnings into a queryable run log.
//!
//! One element's fault or warning never aborts the run: each step executes
//! inside its own capture scope, is classified (success / warning / error /
//! skipped), and appended to a [`RunLog`] that can render a summary line, a
//! grouped report, and a full chronological detail view. While the run is in
//! flight a single live progress line is kept up to date on the terminal.
//!
//! ```no_run
//! use looplog::{Fault, Runner, StepValue::{Skip, Value}};
//!
//! let grades: Vec<Option<f64>> = vec![Some(12.0), Some(11.25), None, Some(0.0)];
//! let logs = Runner::new("validate grades")
//!     .run(grades, |grade, step| {
//!         let Some(grade) = grade else { return Ok(Skip) };
//!         if grade.fract() != 0.0 {
//!             step.warn("RoundWarning", "input will be rounded");
//!         }
//!         if grade == 0.0 {
//!             return Err(Fault::new("ZeroDivisionError", "division by zero"));
//!         }
//!         Ok(Value(10.0 / grade))
//!     })?;
//! println!("{}", logs.summary());
//! # Ok::<(), looplog::LooplogError>(())
//! ```

pub mod error;
pub mod runlog;
pub mod runner;
pub mod step;
pub mod term;

pub use error::{LooplogError, Result};
pub use runlog::RunLog;
pub use runner::Runner;
pub use step::{Fault, StepKind, StepOutcome, StepScope, StepValue, WarningRecord};

/// Separator line between detail blocks and report sections.
pub const SEPARATOR: &str =
    "----------------------------------------------------------------------------------------";

/// Bold separator bracketing run milestones.
pub const SEPARATOR_BOLD: &str =
    "========================================================================================";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_widths() {
        assert_eq!(SEPARATOR.len(), 88);
        assert_eq!(SEPARATOR_BOLD.len(), 88);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
        assert!(SEPARATOR_BOLD.chars().all(|c| c == '='));
    }
}
