use std::cmp::Ordering;

use crate::reduce::Reduce;
use crate::{BigInt, BigIntError};

use super::Modulus;

impl Reduce<&BigInt> for &Modulus {
    type Output = Result<BigInt, BigIntError>;

    /// Calculates `value (mod modulus)`.
    ///
    /// A value whose magnitude is below the modulus is returned unchanged;
    /// anything wider takes the division remainder, which keeps the value's
    /// sign.
    fn reduce(self, value: &BigInt) -> Self::Output {
        if self.value().cmp_magnitude(value) == Ordering::Greater {
            return Ok(value.clone());
        }
        let (_quotient, remainder) = value.div_rem(self.value())?;
        Ok(remainder)
    }
}
