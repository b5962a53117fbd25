//! Run-level aggregate - ordered outcomes plus running counters.

use std::fmt;
use std::ops::Add;

use indexmap::IndexMap;
use serde::Serialize;

use crate::SEPARATOR;
use crate::step::{StepKind, StepOutcome};

/// Ordered list of step outcomes for one run, with running counters.
///
/// Counters are maintained on [`RunLog::append`], never recomputed by
/// rescanning, so appending stays O(1). They always equal the number of
/// outcomes of each kind currently in the list.
#[derive(Debug, Clone, Serialize)]
pub struct RunLog<U> {
    steps: Vec<StepOutcome<U>>,
    count_ok: usize,
    count_warn: usize,
    count_ko: usize,
    count_skip: usize,
}

impl<U> Default for RunLog<U> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            count_ok: 0,
            count_warn: 0,
            count_ko: 0,
            count_skip: 0,
        }
    }
}

impl<U> RunLog<U> {
    /// Create an empty run log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome, updating the counter matching its kind.
    pub fn append(&mut self, step: StepOutcome<U>) {
        match step.kind() {
            StepKind::Error => self.count_ko += 1,
            StepKind::Warning => self.count_warn += 1,
            StepKind::Skipped => self.count_skip += 1,
            StepKind::Success => self.count_ok += 1,
        }
        self.steps.push(step);
    }

    /// Number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All outcomes, in chronological order.
    pub fn steps(&self) -> &[StepOutcome<U>] {
        &self.steps
    }

    pub fn count_ok(&self) -> usize {
        self.count_ok
    }

    pub fn count_warn(&self) -> usize {
        self.count_warn
    }

    pub fn count_ko(&self) -> usize {
        self.count_ko
    }

    pub fn count_skip(&self) -> usize {
        self.count_skip
    }

    /// Outcomes that completed cleanly.
    pub fn successes(&self) -> impl Iterator<Item = &StepOutcome<U>> {
        self.steps.iter().filter(|step| step.is_success())
    }

    /// Outcomes that raised warnings but no fault.
    pub fn warnings(&self) -> impl Iterator<Item = &StepOutcome<U>> {
        self.steps.iter().filter(|step| step.is_warning())
    }

    /// Outcomes that faulted.
    pub fn errors(&self) -> impl Iterator<Item = &StepOutcome<U>> {
        self.steps.iter().filter(|step| step.is_error())
    }

    /// Outcomes that returned the skip sentinel.
    pub fn skipped(&self) -> impl Iterator<Item = &StepOutcome<U>> {
        self.steps.iter().filter(|step| step.is_skipped())
    }

    /// Fixed-order one-line summary: `<ok> ok / <warn> warn / <err> err / <skip> skip`.
    pub fn summary(&self) -> String {
        format!(
            "{} ok / {} warn / {} err / {} skip",
            self.count_ok, self.count_warn, self.count_ko, self.count_skip
        )
    }

    /// Grouped report: fault counts by category and warning counts by
    /// category, in first-seen order.
    ///
    /// Warnings are collected across all outcomes, not just warning-kind
    /// ones, since a faulting step may also have raised warnings.
    pub fn report(&self) -> String {
        let mut error_counts: IndexMap<&str, usize> = IndexMap::new();
        let mut warning_counts: IndexMap<&str, usize> = IndexMap::new();
        for step in &self.steps {
            if let Some(fault) = &step.fault {
                *error_counts.entry(fault.kind.as_str()).or_insert(0) += 1;
            }
            for warning in &step.warnings {
                *warning_counts.entry(warning.category.as_str()).or_insert(0) += 1;
            }
        }
        let mut retval = format!("{SEPARATOR}\n");
        retval.push_str("Errors:\n");
        for (kind, count) in &error_counts {
            retval.push_str(&format!("    {count:<3} {kind}\n"));
        }
        retval.push_str("Warnings:\n");
        for (category, count) in &warning_counts {
            retval.push_str(&format!("    {count:<3} {category}\n"));
        }
        retval
    }

    /// Full chronological detail: every outcome's detail block, in order.
    pub fn details(&self) -> String {
        let mut retval = format!("{SEPARATOR}\n");
        for step in &self.steps {
            retval.push_str(&step.details());
        }
        retval
    }
}

/// Combine two run logs into a new one: self's outcomes first, counters
/// summed. Consumes both inputs; neither is mutated in place.
impl<U> Add for RunLog<U> {
    type Output = RunLog<U>;

    fn add(self, other: RunLog<U>) -> RunLog<U> {
        let mut sum = RunLog::new();
        for step in self.steps {
            sum.append(step);
        }
        for step in other.steps {
            sum.append(step);
        }
        sum
    }
}

impl<U> fmt::Display for RunLog<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.details(), self.summary())
    }
}
