//! Per-step types - faults, warnings, and classified outcomes.
//!
//! This module provides everything the step function and the runner exchange:
//! - Fault and WarningRecord for captured diagnostics
//! - StepScope for raising warnings from inside a step
//! - StepValue for the skip sentinel
//! - StepOutcome, the classified result of one step

mod fault;
mod outcome;

pub use fault::{Fault, StepScope, WarningRecord};
pub use outcome::{StepKind, StepOutcome, StepValue};
