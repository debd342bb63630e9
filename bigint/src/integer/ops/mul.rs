use std::ops::{Mul, MulAssign};

use crate::integer::{BigInt, WORD_BYTES};
use crate::Widening;

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Schoolbook multiplication over 4-byte limbs.
    ///
    /// Each limb product is accumulated through a double-width cell and the
    /// carry rippled into higher limbs; the result buffer is sized from both
    /// capacities plus one word so no ripple can escape. The result is
    /// negative iff exactly one operand is.
    fn mul(self, rhs: &BigInt) -> BigInt {
        let mut res = BigInt::zeroed(self.capacity() + rhs.capacity() + WORD_BYTES);
        let lhs_limbs = self.real_limb_size();
        let rhs_limbs = rhs.real_limb_size();

        for i in 0..lhs_limbs {
            let lhs_limb = self.limb(i);
            if lhs_limb == 0 {
                continue;
            }

            let mut carry = 0u32;
            for j in 0..rhs_limbs {
                let (low, high) = lhs_limb.carry_mul(rhs.limb(j), carry);
                let (cell, overflow) = res.limb(i + j).carry_add(low, false);
                res.set_limb(i + j, cell);
                carry = high + overflow as u32;
            }

            let mut k = i + rhs_limbs;
            while carry != 0 {
                let (cell, overflow) = res.limb(k).carry_add(carry, false);
                res.set_limb(k, cell);
                carry = overflow as u32;
                k += 1;
            }
        }

        res.set_negative(self.is_negative() != rhs.is_negative() && !res.is_zero());
        res
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        &self * rhs
    }
}

impl Mul<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: BigInt) -> BigInt {
        self * &rhs
    }
}

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl MulAssign for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = &*self * &rhs;
    }
}
