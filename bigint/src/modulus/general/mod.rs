use std::fmt::Display;

use crate::{BigInt, BigIntError};

mod ops;

/// A modulus, using division-based reduction.
///
/// Works for any nonzero modulus. Reduction leaves operands whose magnitude
/// is already below the modulus untouched and takes the division remainder
/// otherwise.
#[derive(Debug, Clone)]
pub struct Modulus {
    /// the value to indicate the modulus
    value: BigInt,
}

impl Modulus {
    /// Creates a [`Modulus`] from `value`. The sign of `value` is ignored;
    /// reduction works on magnitudes.
    ///
    /// # Errors
    ///
    /// [`BigIntError::ZeroModulus`] when `value` is zero.
    pub fn new(value: BigInt) -> Result<Self, BigIntError> {
        if value.is_zero() {
            return Err(BigIntError::ZeroModulus);
        }
        let mut value = value;
        value.set_negative(false);
        Ok(Self { value })
    }

    /// Returns the value of this [`Modulus`].
    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }
}

impl Display for Modulus {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
