use std::cmp::Ordering;

use crate::reduce::Reduce;
use crate::{BigInt, BigIntError};

use super::MersenneModulus;

impl Reduce<&BigInt> for &MersenneModulus {
    type Output = Result<BigInt, BigIntError>;

    /// Calculates `value (mod modulus)` by window folding.
    ///
    /// A value whose magnitude is below the modulus is returned unchanged,
    /// and a value no wider (in real words) than the modulus falls back to
    /// the division path — folding only pays off once the operand overhangs
    /// the window. Otherwise the magnitude is split at the window width `k`
    /// and the overhang folded back (`high·2^k + low ≡ high·c + low`) until
    /// it fits `k` bits, then at most one subtraction lands it below the
    /// modulus. The result keeps the value's sign, like the division
    /// remainder.
    fn reduce(self, value: &BigInt) -> Self::Output {
        if self.value.cmp_magnitude(value) == Ordering::Greater {
            return Ok(value.clone());
        }
        if self.value.real_word_size() == value.real_word_size() {
            let (_quotient, remainder) = value.div_rem(&self.value)?;
            return Ok(remainder);
        }

        let mut acc = value.magnitude();
        while acc.bit_count() > self.shift {
            let high = acc.shift_right(self.shift);
            let low = acc.mask_low(self.shift);
            acc = &(&high * &self.offset) + &low;
        }
        if acc.cmp_magnitude(&self.value) != Ordering::Less {
            acc = &acc - &self.value;
        }

        acc.set_negative(value.is_negative() && !acc.is_zero());
        Ok(acc)
    }
}
