use std::cmp::Ordering;

use super::{BigInt, WORD_BYTES};

impl BigInt {
    /// Compares magnitudes, ignoring signs.
    ///
    /// Real sizes are compared first (the longer magnitude wins); on a tie
    /// the aligned 8-byte words are compared from most- to least-significant
    /// and the first difference decides.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let lhs_size = self.real_size();
        let rhs_size = other.real_size();
        if lhs_size != rhs_size {
            return lhs_size.cmp(&rhs_size);
        }

        let words = lhs_size.div_ceil(WORD_BYTES);
        for i in (0..words).rev() {
            match self.word(i).cmp(&other.word(i)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        Ordering::Equal
    }

    /// Returns whether every buffer word is zero, whatever the sign flag.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&byte| byte == 0)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        if self.cmp_magnitude(other) != Ordering::Equal {
            return false;
        }
        self.negative == other.negative || self.is_zero()
    }
}

impl Eq for BigInt {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs_negative = self.negative && !self.is_zero();
        let rhs_negative = other.negative && !other.is_zero();
        match (lhs_negative, rhs_negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
