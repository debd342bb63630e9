//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// Error that occurs when a numeric string contains no digits.
    #[error("the input string contains no digits")]
    EmptyInput,
    /// Error that occurs when a numeric string contains an invalid digit.
    #[error("invalid digit {ch:?} for radix {radix} at byte {index}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// The radix the string was parsed under.
        radix: u32,
        /// Byte offset of the character in the input.
        index: usize,
    },
    /// Error that occurs when dividing by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Error that occurs when a modulus is constructed from zero.
    #[error("the modulus must be nonzero")]
    ZeroModulus,
    /// Error that occurs when a modulus does not have the shape `2^k - c`
    /// with a single-word `c`.
    #[error("the modulus is not of the form 2^k - c: the fold offset spans {offset_bytes} bytes")]
    NotMersenneForm {
        /// Real byte width of the computed fold offset.
        offset_bytes: usize,
    },
    /// Error that occurs when an exponent is too wide for plain
    /// exponentiation.
    #[error("exponent of {bytes} bytes exceeds the supported {max} bytes")]
    ExponentTooWide {
        /// Real byte width of the rejected exponent.
        bytes: usize,
        /// Widest supported exponent in bytes.
        max: usize,
    },
    /// Error that occurs when an internal arithmetic invariant is violated.
    ///
    /// This signals a defect in the division or reduction logic, never bad
    /// input. The violated operation returns this error instead of a wrong
    /// numeric result.
    #[error("internal arithmetic invariant violated: {0}")]
    InternalInvariant(&'static str),
}
