use std::ops::{Sub, SubAssign};

use crate::integer::BigInt;

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Signed subtraction: addition of the negated duplicate of `rhs`.
    /// Neither operand is mutated.
    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &(-rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        &self - rhs
    }
}

impl Sub<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: BigInt) -> BigInt {
        self - &rhs
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

impl SubAssign for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInt) {
        *self = &*self - &rhs;
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;

    #[test]
    fn test_sub_simple() {
        let a = BigInt::from(1000u64);
        let b = BigInt::from(1u64);
        assert_eq!(&a - &b, BigInt::from(999u64));
        assert_eq!(&b - &a, BigInt::from(-999i64));
    }

    #[test]
    fn test_self_inverse() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let raw: [u8; 24] = rng.gen();
            let a = BigInt::from_le_bytes(&raw, rng.gen());
            let diff = &a - &a;
            assert!(diff.is_zero());
        }
    }

    #[test]
    fn test_sub_negative_rhs() {
        let a = BigInt::from(10u64);
        let b = BigInt::from(-32i64);
        assert_eq!(&a - &b, BigInt::from(42u64));
        assert_eq!(&b - &a, BigInt::from(-42i64));
    }
}
