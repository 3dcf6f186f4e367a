use thiserror::Error;

/// Errors raised by the mixed-radix index codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Flat index {index} is out of range for cardinality {cardinality}")]
    OutOfRange { index: i128, cardinality: usize },

    #[error("Expected {expected} digits, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Digit {digit} on axis {axis} exceeds radix {radix}")]
    DigitOutOfRange {
        axis: usize,
        digit: usize,
        radix: usize,
    },

    #[error("Product of radices overflows usize")]
    Overflow,
}
