use num_traits::One;

use crate::error::BigIntError;
use crate::integer::BigInt;

impl BigInt {
    /// Widest exponent accepted by [`BigInt::pow`], in real-size bytes.
    pub const MAX_POW_EXPONENT_BYTES: usize = 4;

    /// Plain (non-modular) exponentiation by square-and-multiply.
    ///
    /// The exponent is taken by magnitude. Exponent bits are scanned from
    /// least- to most-significant: a set bit multiplies the accumulator by
    /// the current base power, and the base power is squared after every bit
    /// but the last. `0^0` is 1 by the empty-product convention. The result
    /// is negative iff the base is negative and the exponent odd.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let two = BigInt::from(2u64);
    /// let small = BigInt::from(100u64);
    /// assert_eq!(two.pow(&small).unwrap(), BigInt::power_of_two(100));
    /// ```
    ///
    /// # Errors
    ///
    /// [`BigIntError::ExponentTooWide`] when the exponent's real size
    /// exceeds [`BigInt::MAX_POW_EXPONENT_BYTES`] — the result width grows
    /// with `2^(exponent bits)` and is unsupported beyond that.
    pub fn pow(&self, exponent: &BigInt) -> Result<BigInt, BigIntError> {
        let width = exponent.real_size();
        if width > Self::MAX_POW_EXPONENT_BYTES {
            return Err(BigIntError::ExponentTooWide {
                bytes: width,
                max: Self::MAX_POW_EXPONENT_BYTES,
            });
        }

        let bits = exponent.bit_count();
        let mut acc = BigInt::one();
        let mut power = self.magnitude();
        for k in 0..bits {
            if exponent.bit(k) {
                acc = &acc * &power;
            }
            if k + 1 < bits {
                power = &power * &power;
            }
        }

        let negative = self.is_negative() && exponent.is_odd() && !acc.is_zero();
        acc.set_negative(negative);
        Ok(acc)
    }
}
