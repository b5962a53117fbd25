//! Classified outcome of one step.

use log::{Level, Log, Record};
use serde::{Deserialize, Serialize};

use crate::SEPARATOR;
use crate::step::{Fault, WarningRecord};

/// Return value of a step function: a real output, or the skip sentinel.
///
/// Skip is a dedicated tag, never compared against user output, so a
/// legitimate output can never collide with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValue<U> {
    /// The step produced an output
    Value(U),
    /// The step deliberately opted out; counted as skipped, not success
    Skip,
}

/// Possible step result types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    Skipped,
    Success,
    Warning,
    Error,
}

impl StepKind {
    /// One-character glyph used in compact renderings.
    pub fn symbol(&self) -> char {
        match self {
            StepKind::Skipped => '-',
            StepKind::Success => '.',
            StepKind::Warning => '!',
            StepKind::Error => 'X',
        }
    }
}

/// Logging output of a step.
///
/// Immutable once constructed. The classification ([`StepOutcome::kind`]) is
/// derived from the captured diagnostics, never stored separately, so an
/// outcome always has exactly one kind.
///
/// Invariant: `fault` and `skipped` are mutually exclusive; the runner never
/// marks a faulting step as skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome<U> {
    /// Human label for the element, caller-supplied or `step_<n>`
    pub name: String,
    /// Captured fault, if the step function raised one
    pub fault: Option<Fault>,
    /// Warnings captured during the step, in raise order
    pub warnings: Vec<WarningRecord>,
    /// Whether the step function returned the skip sentinel
    pub skipped: bool,
    /// The step function's output, retained for caller inspection
    pub output: Option<U>,
}

impl<U> StepOutcome<U> {
    /// Step kind, based on the captured diagnostics.
    ///
    /// Priority order: Error > Warning > Skipped > Success.
    pub fn kind(&self) -> StepKind {
        if self.fault.is_some() {
            StepKind::Error
        } else if !self.warnings.is_empty() {
            StepKind::Warning
        } else if self.skipped {
            StepKind::Skipped
        } else {
            StepKind::Success
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind() == StepKind::Success
    }

    pub fn is_warning(&self) -> bool {
        self.kind() == StepKind::Warning
    }

    pub fn is_error(&self) -> bool {
        self.kind() == StepKind::Error
    }

    pub fn is_skipped(&self) -> bool {
        self.kind() == StepKind::Skipped
    }

    /// Emit corresponding records to the provided sink. Can emit multiple
    /// records: one Error for a fault, one Warn per warning, one Debug for a
    /// skip or a clean success.
    pub fn emit(&self, logger: &dyn Log) {
        if let Some(fault) = &self.fault {
            logger.log(
                &Record::builder()
                    .args(format_args!("{} {}", self.name, fault))
                    .level(Level::Error)
                    .target("looplog")
                    .build(),
            );
        }
        for warning in &self.warnings {
            logger.log(
                &Record::builder()
                    .args(format_args!("{} {}", self.name, warning.message))
                    .level(Level::Warn)
                    .target("looplog")
                    .build(),
            );
        }
        if self.skipped {
            logger.log(
                &Record::builder()
                    .args(format_args!("{} skipped", self.name))
                    .level(Level::Debug)
                    .target("looplog")
                    .build(),
            );
        }
        if self.fault.is_none() && self.warnings.is_empty() && !self.skipped {
            logger.log(
                &Record::builder()
                    .args(format_args!("{} succeeded", self.name))
                    .level(Level::Debug)
                    .target("looplog")
                    .build(),
            );
        }
    }

    /// One formatted line per captured diagnostic, warnings first.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        for warning in &self.warnings {
            messages.push(format!("    WARN:  {}", warning.message));
        }
        if let Some(fault) = &self.fault {
            let mut line = format!("    ERROR: {}", fault.message);
            if !fault.notes.is_empty() {
                line.push_str(&format!(" [notes: {}]", fault.notes.join(", ")));
            }
            messages.push(line);
        }
        messages
    }

    /// Multi-line detail block for this step, separator-terminated.
    ///
    /// Empty for a clean success or skip; the detail view omits
    /// uninteresting entries.
    pub fn details(&self) -> String {
        let mut retval = String::new();
        if self.fault.is_some() || !self.warnings.is_empty() {
            retval.push_str(&self.name);
            retval.push('\n');
            for message in self.messages() {
                retval.push_str(&message);
                retval.push('\n');
            }
            retval.push_str(SEPARATOR);
            retval.push('\n');
        }
        retval
    }
}
