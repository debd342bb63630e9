use num_traits::One;

use crate::reduce::{Reduce, ReduceExp};
use crate::{BigInt, BigIntError};

impl<M> ReduceExp<&BigInt> for M
where
    M: Copy + for<'m> Reduce<&'m BigInt, Output = Result<BigInt, BigIntError>>,
{
    type Output = Result<BigInt, BigIntError>;

    /// Square-and-multiply with every intermediate kept below the modulus.
    ///
    /// The same bit-scan as plain exponentiation, except that the
    /// accumulator and the running base power are re-reduced after every
    /// multiplication and squaring, so the exponent width is unrestricted.
    /// The result is negative iff the base is negative and the exponent odd.
    fn reduce_exp(self, base: &BigInt, exponent: &BigInt) -> Self::Output {
        let bits = exponent.bit_count();
        if bits == 0 {
            return self.reduce(&BigInt::one());
        }

        let mut power = self.reduce(&base.magnitude())?;
        let mut acc = BigInt::one();
        for k in 0..bits {
            if exponent.bit(k) {
                acc = self.reduce(&(&acc * &power))?;
            }
            if k + 1 < bits {
                power = self.reduce(&(&power * &power))?;
            }
        }

        let negative = base.is_negative() && exponent.is_odd() && !acc.is_zero();
        acc.set_negative(negative);
        Ok(acc)
    }
}
