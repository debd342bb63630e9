use std::fmt::Display;

use crate::{BigInt, BigIntError};

mod ops;

/// A modulus of the form `2^k - c` for a small `c`.
///
/// The shape admits reduction by window folding — `2^k ≡ c (mod 2^k - c)`,
/// so the operand's high windows fold back into the low bits instead of
/// running long division. The struct stores the modulus value and some
/// precomputed data.
#[derive(Debug, Clone)]
pub struct MersenneModulus {
    /// the value to indicate the modulus
    value: BigInt,
    /// window width `k` in bits
    shift: u32,
    /// fold weight `c = 2^k - value`
    offset: BigInt,
}

impl MersenneModulus {
    /// The fold offset must fit one 8-byte word.
    const MAX_OFFSET_BYTES: usize = 8;

    /// Creates a [`MersenneModulus`] from `value`, validating the shape and
    /// precomputing the window width `k` and fold weight `c`. The sign of
    /// `value` is ignored.
    ///
    /// # Errors
    ///
    /// [`BigIntError::ZeroModulus`] when `value` is zero;
    /// [`BigIntError::NotMersenneForm`] when `2^k - value` does not fit a
    /// single word, i.e. the modulus is too far below a power of two for
    /// folding to pay off.
    pub fn new(value: BigInt) -> Result<Self, BigIntError> {
        if value.is_zero() {
            return Err(BigIntError::ZeroModulus);
        }
        let mut value = value;
        value.set_negative(false);

        let shift = value.bit_count();
        let offset = &BigInt::power_of_two(shift) - &value;
        let offset_bytes = offset.real_size();
        if offset_bytes > Self::MAX_OFFSET_BYTES {
            return Err(BigIntError::NotMersenneForm { offset_bytes });
        }

        Ok(Self {
            value,
            shift,
            offset,
        })
    }

    /// Returns the value of this [`MersenneModulus`].
    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Returns the window width `k` of this [`MersenneModulus`].
    #[inline]
    pub fn shift(&self) -> u32 {
        self.shift
    }
}

impl Display for MersenneModulus {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
