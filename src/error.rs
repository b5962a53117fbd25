//! Error types for looplog
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::step::Fault;

/// All error types that can occur when driving a loop
#[derive(Debug, Error)]
pub enum LooplogError {
    /// A step faulted while the runner was in unmanaged mode.
    ///
    /// Outcomes accumulated before the faulting step are discarded; this is
    /// the intended debugging behavior of unmanaged mode.
    #[error("unmanaged fault in `{step}`: {fault}")]
    Unmanaged {
        /// Name of the step whose fault aborted the run
        step: String,
        /// The fault raised by the step function
        fault: Fault,
    },

    /// IO error while writing progress or milestone lines
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for looplog operations
pub type Result<T> = std::result::Result<T, LooplogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmanaged_error_display() {
        let err = LooplogError::Unmanaged {
            step: "step_3".to_string(),
            fault: Fault::new("ValueError", "input out of range"),
        };
        assert_eq!(
            err.to_string(),
            "unmanaged fault in `step_3`: ValueError: input out of range"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LooplogError::from(io);
        assert!(matches!(err, LooplogError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
