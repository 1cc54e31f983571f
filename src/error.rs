//! Error types for the Aheui interpreter

use thiserror::Error;

/// Aheui interpreter errors
///
/// Operand underflow is not an error: the machine recovers from it by
/// reversing the cursor, so it never reaches this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading program input or writing program output failed
    ///
    /// **Triggered by:** A closed stdout, an unreadable stdin
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Division or modulo with a zero divisor
    ///
    /// **Triggered by:** `나` or `라` when the top of the active storage is 0
    /// **Example:** `반바나` (push 2, push 0, divide)
    #[error("Division by zero at row {y}, column {x}")]
    DivisionByZero {
        /// Column of the offending instruction
        x: i64,
        /// Row of the offending instruction
        y: i64,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The run cannot continue
    Fatal,
    /// The host stream went away; the program state itself is intact
    Environmental,
}

impl Error {
    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::DivisionByZero { .. } => ErrorSeverity::Fatal,
            Error::Io(_) => ErrorSeverity::Environmental,
        }
    }
}

/// Result type for Aheui operations
pub type Result<T> = std::result::Result<T, Error>;
