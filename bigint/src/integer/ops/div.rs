use std::cmp::Ordering;

use num_traits::Zero;

use crate::error::BigIntError;
use crate::integer::{BigInt, WORD_BYTES};
use crate::Widening;

impl BigInt {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// When the dividend magnitude is smaller than the divisor's, the
    /// quotient is zero and the remainder is the unchanged dividend.
    /// Otherwise the magnitudes run through digit-estimate long division
    /// over 8-byte words. The quotient is negative iff exactly one operand
    /// is; the remainder takes the dividend's sign, so
    /// `self == divisor * quotient + remainder` with `|remainder| < |divisor|`.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a: BigInt = "100000000000000000000000001".parse().unwrap();
    /// let b: BigInt = "99999999999999".parse().unwrap();
    /// let (quotient, remainder) = a.div_rem(&b).unwrap();
    /// assert_eq!(quotient.to_string(), "1000000000000");
    /// assert_eq!(remainder.to_string(), "1000000000001");
    /// ```
    ///
    /// # Errors
    ///
    /// [`BigIntError::DivisionByZero`] when `divisor` is zero;
    /// [`BigIntError::InternalInvariant`] if the digit-estimate correction
    /// ever fails to contain a borrow, which signals a defect in the
    /// division logic rather than bad input.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.cmp_magnitude(divisor) == Ordering::Less {
            return Ok((BigInt::zero(), self.clone()));
        }

        let dividend = self.to_real_words();
        let divider = divisor.to_real_words();
        let (q_words, r_words) = if divider.len() == 1 {
            div_rem_by_word(&dividend, divider[0])
        } else {
            div_rem_words(&dividend, &divider)?
        };

        let mut quotient = BigInt::from_words(&q_words);
        let mut remainder = BigInt::from_words(&r_words);
        quotient
            .set_negative(self.is_negative() != divisor.is_negative() && !quotient.is_zero());
        remainder.set_negative(self.is_negative() && !remainder.is_zero());
        Ok((quotient, remainder))
    }

    /// The magnitude as 8-byte words, trailing zero words trimmed.
    fn to_real_words(&self) -> Vec<u64> {
        (0..self.real_word_size()).map(|i| self.word(i)).collect()
    }

    /// Packs 8-byte words back into an aligned byte buffer.
    fn from_words(words: &[u64]) -> BigInt {
        let mut num = BigInt::zeroed(words.len() * WORD_BYTES);
        for (i, &word) in words.iter().enumerate() {
            num.set_word(i, word);
        }
        num
    }
}

/// Short division by a single word.
fn div_rem_by_word(dividend: &[u64], divisor: u64) -> (Vec<u64>, Vec<u64>) {
    let mut quotient = vec![0u64; dividend.len()];
    let mut remainder = 0u128;
    for i in (0..dividend.len()).rev() {
        let acc = (remainder << 64) | dividend[i] as u128;
        quotient[i] = (acc / divisor as u128) as u64;
        remainder = acc % divisor as u128;
    }
    (quotient, vec![remainder as u64])
}

/// Long division by digit estimation (Knuth's Algorithm D over 8-byte
/// words). Requires a divisor of at least two words with a nonzero top
/// word, and `dividend.len() >= divisor.len()`.
///
/// Both operands are normalized so the divisor's top word has its high bit
/// set; each window then yields a quotient digit from a two-word estimate
/// against the divisor's top word, with a correction loop guarding against
/// overestimates before the scaled subtraction.
fn div_rem_words(dividend: &[u64], divisor: &[u64]) -> Result<(Vec<u64>, Vec<u64>), BigIntError> {
    let n = divisor.len();
    let m = dividend.len() - n;

    let shift = divisor[n - 1].leading_zeros();
    let divider = shl_words(divisor, shift);
    let mut window = shl_words_extended(dividend, shift);
    let mut quotient = vec![0u64; m + 1];

    for j in (0..=m).rev() {
        let top = ((window[j + n] as u128) << 64) | window[j + n - 1] as u128;
        let mut q_hat = top / divider[n - 1] as u128;
        let mut r_hat = top % divider[n - 1] as u128;

        while q_hat >> 64 != 0
            || q_hat * divider[n - 2] as u128 > (r_hat << 64) | window[j + n - 2] as u128
        {
            q_hat -= 1;
            r_hat += divider[n - 1] as u128;
            if r_hat >> 64 != 0 {
                break;
            }
        }

        // subtract q_hat * divider from the current window in place
        let mut q_word = q_hat as u64;
        let mut mul_carry = 0u64;
        let mut borrow = false;
        for i in 0..n {
            let (low, high) = divider[i].carry_mul(q_word, mul_carry);
            mul_carry = high;
            let (diff, next) = window[j + i].borrow_sub(low, borrow);
            window[j + i] = diff;
            borrow = next;
        }
        let (diff, next) = window[j + n].borrow_sub(mul_carry, borrow);
        window[j + n] = diff;

        if next {
            // estimate was one too high: add the divisor back once
            q_word -= 1;
            let mut carry = false;
            for i in 0..n {
                let (sum, c) = window[j + i].carry_add(divider[i], carry);
                window[j + i] = sum;
                carry = c;
            }
            let (sum, c) = window[j + n].carry_add(0, carry);
            window[j + n] = sum;
            if !c {
                return Err(BigIntError::InternalInvariant(
                    "division borrow escaped the working buffer",
                ));
            }
        }

        quotient[j] = q_word;
    }

    let remainder = shr_words(&window[..n], shift);
    Ok((quotient, remainder))
}

fn shl_words(words: &[u64], shift: u32) -> Vec<u64> {
    if shift == 0 {
        return words.to_vec();
    }
    let mut out = vec![0u64; words.len()];
    for i in 0..words.len() {
        out[i] = words[i] << shift;
        if i > 0 {
            out[i] |= words[i - 1] >> (64 - shift);
        }
    }
    out
}

/// Left shift into a buffer one word longer, keeping the spill.
fn shl_words_extended(words: &[u64], shift: u32) -> Vec<u64> {
    let mut out = vec![0u64; words.len() + 1];
    if shift == 0 {
        out[..words.len()].copy_from_slice(words);
        return out;
    }
    for i in 0..words.len() {
        out[i] |= words[i] << shift;
        out[i + 1] |= words[i] >> (64 - shift);
    }
    out
}

fn shr_words(words: &[u64], shift: u32) -> Vec<u64> {
    if shift == 0 {
        return words.to_vec();
    }
    let mut out = vec![0u64; words.len()];
    for i in 0..words.len() {
        out[i] = words[i] >> shift;
        if i + 1 < words.len() {
            out[i] |= words[i + 1] << (64 - shift);
        }
    }
    out
}
