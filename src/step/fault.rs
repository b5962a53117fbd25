//! Captured diagnostics - faults, warnings, and the per-step capture scope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An unhandled error raised by a step function, captured as a plain record.
///
/// A fault carries a category (`kind`), a message, and optional supplementary
/// notes. Step functions either construct one explicitly or let `?` convert
/// any [`std::error::Error`] into one, in which case the category is the
/// error's type name.
///
/// `Fault` intentionally does not implement [`std::error::Error`]: it is a
/// record of a captured error, not an error to propagate, and keeping it off
/// the trait is what allows the blanket `From` conversion below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// Error category, grouped on in reports (e.g. "ZeroDivisionError")
    pub kind: String,
    /// Human-readable description of what went wrong
    pub message: String,
    /// Supplementary notes attached at the raise site; often empty
    pub notes: Vec<String>,
}

impl Fault {
    /// Create a new fault with the given category and message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Attach a supplementary note, preserving insertion order.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl<E: std::error::Error> From<E> for Fault {
    fn from(err: E) -> Self {
        // "core::num::ParseIntError" groups as "ParseIntError". Types whose
        // leaf name is just "Error" keep their qualifying path segment so
        // e.g. io::Error and fmt::Error stay distinct categories; a parent
        // module itself named "error" adds nothing and is skipped.
        let mut segments = std::any::type_name::<E>().rsplit("::");
        let leaf = segments.next().unwrap_or("Error");
        let kind = if leaf == "Error" {
            match segments.find(|segment| *segment != "error") {
                Some(parent) => format!("{parent}::{leaf}"),
                None => leaf.to_string(),
            }
        } else {
            leaf.to_string()
        };
        Fault::new(kind, err.to_string())
    }
}

/// A soft diagnostic raised during a step; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRecord {
    /// Warning category, grouped on in reports (e.g. "RoundWarning")
    pub category: String,
    /// Human-readable description
    pub message: String,
}

/// Capture scope for warnings raised during one step.
///
/// The runner creates a fresh scope per element and passes it `&mut` to the
/// step function, so captured warnings are owned by that element alone and
/// the scope is torn down on every exit path, fault included.
#[derive(Debug, Default)]
pub struct StepScope {
    warnings: Vec<WarningRecord>,
}

impl StepScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a warning; recorded in order, any number per step.
    pub fn warn(&mut self, category: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(WarningRecord {
            category: category.into(),
            message: message.into(),
        });
    }

    /// Tear down the scope, yielding the captured warnings.
    pub(crate) fn into_warnings(self) -> Vec<WarningRecord> {
        self.warnings
    }
}
