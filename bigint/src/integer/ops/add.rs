use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

use crate::integer::BigInt;
use crate::Widening;

impl BigInt {
    /// Word-wise magnitude addition; the result buffer always keeps one
    /// extra word over the wider operand, so the carry cannot escape.
    pub(crate) fn add_magnitudes(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let size = lhs.capacity().max(rhs.capacity());
        let mut res = BigInt::zeroed(size + 1);

        let mut carry = false;
        for i in 0..res.word_count() {
            let (sum, next) = lhs.word(i).carry_add(rhs.word(i), carry);
            res.set_word(i, sum);
            carry = next;
        }
        res
    }

    /// Word-wise magnitude subtraction; requires `|lhs| >= |rhs|`.
    pub(crate) fn sub_magnitudes(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let size = lhs.capacity().max(rhs.capacity());
        let mut res = BigInt::zeroed(size + 1);

        let mut borrow = false;
        for i in 0..res.word_count() {
            let (diff, next) = lhs.word(i).borrow_sub(rhs.word(i), borrow);
            res.set_word(i, diff);
            borrow = next;
        }
        debug_assert!(!borrow);
        res
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Signed addition. When the signs differ the operation degrades to a
    /// magnitude subtraction of the smaller operand from the larger; the
    /// result is negative iff both operands are negative or the
    /// larger-magnitude operand is.
    fn add(self, rhs: &BigInt) -> BigInt {
        let negative = (self.is_negative() && rhs.is_negative())
            || (self.is_negative() && self.cmp_magnitude(rhs) == Ordering::Greater)
            || (rhs.is_negative() && rhs.cmp_magnitude(self) == Ordering::Greater);

        let mut res = if self.is_negative() != rhs.is_negative() {
            match self.cmp_magnitude(rhs) {
                Ordering::Less => BigInt::sub_magnitudes(rhs, self),
                _ => BigInt::sub_magnitudes(self, rhs),
            }
        } else {
            BigInt::add_magnitudes(self, rhs)
        };

        res.set_negative(negative);
        res
    }
}

impl Add for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> BigInt {
        &self + rhs
    }
}

impl Add<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: BigInt) -> BigInt {
        self + &rhs
    }
}

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

impl AddAssign for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        *self = &*self + &rhs;
    }
}
