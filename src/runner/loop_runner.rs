//! Runner implementation - executes a function once per element, isolating
//! faults and warnings into per-step outcomes.

use std::io::Write;

use log::Log;

use crate::error::{LooplogError, Result};
use crate::runlog::RunLog;
use crate::step::{Fault, StepOutcome, StepScope, StepValue};
use crate::term::{LineWriter, Timer, progress};
use crate::{SEPARATOR, SEPARATOR_BOLD};

/// Configurable driver for one run.
///
/// Each element is processed in order, inside a fault-isolation scope: a
/// fault or warning raised by one step is captured into that step's outcome
/// and never affects later steps. The accumulated [`RunLog`] is returned
/// when the sequence is exhausted or the limit is reached.
///
/// ```no_run
/// use looplog::{Runner, StepValue::Value};
///
/// let logs = Runner::new("double")
///     .run(vec![1, 2, 3], |n, _step| Ok(Value(n * 2)))
///     .unwrap();
/// assert_eq!(logs.count_ok(), 3);
/// ```
pub struct Runner<'a, T> {
    name: String,
    logger: Option<&'a dyn Log>,
    check_tty: bool,
    limit: Option<usize>,
    step_name: Option<Box<dyn Fn(&T) -> String + 'a>>,
    unmanaged: bool,
}

impl<'a, T> Runner<'a, T> {
    /// Create a runner. The name appears only in progress and milestone text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logger: None,
            check_tty: true,
            limit: None,
            step_name: None,
            unmanaged: false,
        }
    }

    /// Forward every step outcome to the given sink.
    pub fn logger(mut self, logger: &'a dyn Log) -> Self {
        self.logger = Some(logger);
        self
    }

    /// If true (the default), the live progress line is rendered only when
    /// stdout is an interactive terminal. Pass false to force it on.
    pub fn check_tty(mut self, check_tty: bool) -> Self {
        self.check_tty = check_tty;
        self
    }

    /// Process at most `limit` elements; the rest are not visited.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Derive each step's display name from its element. Defaults to
    /// `step_<n>` (1-based).
    pub fn step_name(mut self, step_name: impl Fn(&T) -> String + 'a) -> Self {
        self.step_name = Some(Box::new(step_name));
        self
    }

    /// Disable fault isolation: a fault aborts the whole run and propagates
    /// to the caller, and captured warnings are forwarded to the global log.
    /// For debugging a single failing element without the capture harness.
    pub fn unmanaged(mut self, unmanaged: bool) -> Self {
        self.unmanaged = unmanaged;
        self
    }

    /// Run `func` against each element of `values`.
    ///
    /// The total is taken from the iterator's size hint when its bounds
    /// agree; otherwise progress falls back to the indeterminate form.
    ///
    /// In unmanaged mode a faulting step returns
    /// [`LooplogError::Unmanaged`] and the outcomes accumulated so far are
    /// discarded.
    pub fn run<I, U, F>(self, values: I, func: F) -> Result<RunLog<U>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T, &mut StepScope) -> std::result::Result<StepValue<U>, Fault>,
    {
        let mut writer = LineWriter::stdout(self.check_tty);
        self.run_with_writer(&mut writer, values, func)
    }

    /// Same as [`Runner::run`], but against a caller-supplied writer.
    pub(crate) fn run_with_writer<W, I, U, F>(
        self,
        writer: &mut LineWriter<W>,
        values: I,
        mut func: F,
    ) -> Result<RunLog<U>>
    where
        W: Write,
        I: IntoIterator<Item = T>,
        F: FnMut(T, &mut StepScope) -> std::result::Result<StepValue<U>, Fault>,
    {
        let iter = values.into_iter();
        let total = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        };

        let mut logs = RunLog::new();
        let timer = Timer::start();

        writer.writeln(SEPARATOR_BOLD)?;
        writer.writeln(&format!("Starting loop `{}`...", self.name))?;
        writer.writeln(SEPARATOR_BOLD)?;

        let mut visited = 0usize;
        for (i, value) in iter.enumerate() {
            if let Some(limit) = self.limit
                && i >= limit
            {
                break;
            }

            let name = match &self.step_name {
                Some(step_name) => step_name(&value),
                None => format!("step_{}", i + 1),
            };

            let mut scope = StepScope::new();
            let mut fault = None;
            let mut skipped = false;
            let mut output = None;
            match func(value, &mut scope) {
                Ok(StepValue::Value(v)) => output = Some(v),
                Ok(StepValue::Skip) => skipped = true,
                Err(e) => {
                    if self.unmanaged {
                        return Err(LooplogError::Unmanaged {
                            step: name,
                            fault: e,
                        });
                    }
                    fault = Some(e);
                }
            }
            let warnings = scope.into_warnings();
            if self.unmanaged {
                for warning in &warnings {
                    log::warn!(target: "looplog", "{} {}", name, warning.message);
                }
            }

            let step = StepOutcome {
                name,
                fault,
                warnings,
                skipped,
                output,
            };
            if let Some(logger) = self.logger {
                step.emit(logger);
            }
            logs.append(step);
            visited += 1;

            writer.provln(&format!(
                "{} [{}][{}/{}][{}][{}]",
                self.name,
                progress(i + 1, total),
                i + 1,
                total.map_or_else(|| "?".to_string(), |t| t.to_string()),
                timer,
                logs.summary()
            ))?;

            // borrow the appended outcome back for its permanent detail block
            if let Some(step) = logs.steps().last()
                && (step.fault.is_some() || !step.warnings.is_empty())
            {
                writer.writeln(&step.name)?;
                for message in step.messages() {
                    writer.writeln(&message)?;
                }
                writer.writeln(SEPARATOR)?;
            }
        }

        writer.writeln(&format!(
            "Finished `{}` [{} steps][in {}][{}]",
            self.name,
            visited,
            timer,
            logs.summary()
        ))?;

        Ok(logs)
    }
}
