//! The dynamically sized signed-magnitude integer value.

use num_traits::{One, Zero};

mod cmp;
mod fmt;
mod ops;
mod parse;

#[cfg(feature = "serde")]
mod serde;

/// Width in bytes of the 8-byte words most loops operate on.
pub(crate) const WORD_BYTES: usize = 8;
/// Width in bytes of the 4-byte limbs used by multiplication.
pub(crate) const LIMB_BYTES: usize = 4;

/// Rounds `len` up to the next multiple of [`WORD_BYTES`], minimum one word.
pub(crate) const fn align_to_word(len: usize) -> usize {
    if len == 0 {
        WORD_BYTES
    } else {
        len.div_ceil(WORD_BYTES) * WORD_BYTES
    }
}

/// An arbitrary-precision signed integer.
///
/// The magnitude lives in a little-endian byte buffer whose length (the
/// *capacity*) is always a positive multiple of 8 bytes; the sign is a
/// separate flag. The *real size* — the minimal prefix holding all nonzero
/// content — is recomputed on demand and never cached, so intermediate
/// results may keep slack capacity without going stale.
///
/// An all-zero buffer is canonically zero. Arithmetic tolerates a zero that
/// still carries a negative flag: comparisons, formatting and equality all
/// treat it as plain zero.
#[derive(Clone)]
pub struct BigInt {
    /// little-endian magnitude, `data.len() % WORD_BYTES == 0`
    data: Vec<u8>,
    /// sign flag, `false` = non-negative
    negative: bool,
}

impl BigInt {
    /// Allocates a zero-filled value with capacity for at least `len` bytes.
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0; align_to_word(len)],
            negative: false,
        }
    }

    /// Creates a value from a little-endian magnitude and a sign flag.
    ///
    /// The buffer is copied into aligned storage; trailing zero bytes in
    /// `bytes` only affect the capacity, not the value.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let num = BigInt::from_le_bytes(&[0x39, 0x30], false);
    /// assert_eq!(num.to_string(), "12345");
    /// ```
    pub fn from_le_bytes(bytes: &[u8], negative: bool) -> Self {
        let mut num = Self::zeroed(bytes.len());
        num.data[..bytes.len()].copy_from_slice(bytes);
        num.negative = negative;
        num
    }

    /// Returns `2^bit`.
    pub fn power_of_two(bit: u32) -> Self {
        let byte = bit as usize / 8;
        let mut num = Self::zeroed(byte + 1);
        num.data[byte] = 1 << (bit % 8);
        num
    }

    /// Returns the allocated buffer length in bytes, always a multiple of 8.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the minimal prefix length holding all nonzero bytes.
    ///
    /// Zero has real size 0.
    pub fn real_size(&self) -> usize {
        match self.data.iter().rposition(|&byte| byte != 0) {
            Some(top) => top + 1,
            None => 0,
        }
    }

    /// Returns the real size rounded up to whole 8-byte words.
    #[inline]
    pub fn real_word_size(&self) -> usize {
        self.real_size().div_ceil(WORD_BYTES)
    }

    /// Returns the position of the highest set bit plus one, 0 for zero.
    pub fn bit_count(&self) -> u32 {
        match self.data.iter().rposition(|&byte| byte != 0) {
            Some(top) => top as u32 * 8 + (8 - self.data[top].leading_zeros()),
            None => 0,
        }
    }

    /// Returns whether the sign flag is set.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns whether the lowest magnitude bit is set.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.data[0] & 1 == 1
    }

    /// Returns bit `index` of the magnitude, 0 beyond the buffer.
    pub fn bit(&self, index: u32) -> bool {
        let byte = index as usize / 8;
        byte < self.data.len() && (self.data[byte] >> (index % 8)) & 1 == 1
    }

    /// Returns the full little-endian magnitude buffer, slack zeros included.
    #[inline]
    pub fn as_le_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Reallocates the buffer to the aligned ceiling of `new_len` bytes, or,
    /// if `new_len` is 0, shrinks it to fit the current real size.
    ///
    /// Overlapping bytes are preserved; growth is zero-filled, shrinking
    /// truncates high-order bytes.
    pub fn resize(&mut self, new_len: usize) {
        let target = if new_len == 0 {
            align_to_word(self.real_size())
        } else {
            align_to_word(new_len)
        };
        self.data.resize(target, 0);
    }

    /// Deep copy of the magnitude with the sign cleared.
    pub(crate) fn magnitude(&self) -> Self {
        Self {
            data: self.data.clone(),
            negative: false,
        }
    }

    #[inline]
    pub(crate) fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    // The byte buffer is canonical; the word and limb views below are
    // explicit little-endian decode/encode accessors, not reinterpretation.

    #[inline]
    pub(crate) fn word_count(&self) -> usize {
        self.data.len() / WORD_BYTES
    }

    /// Reads 8-byte word `index`, 0 beyond the buffer.
    pub(crate) fn word(&self, index: usize) -> u64 {
        let at = index * WORD_BYTES;
        if at >= self.data.len() {
            return 0;
        }
        let mut raw = [0u8; WORD_BYTES];
        raw.copy_from_slice(&self.data[at..at + WORD_BYTES]);
        u64::from_le_bytes(raw)
    }

    pub(crate) fn set_word(&mut self, index: usize, value: u64) {
        let at = index * WORD_BYTES;
        self.data[at..at + WORD_BYTES].copy_from_slice(&value.to_le_bytes());
    }

    /// Reads 4-byte limb `index`, 0 beyond the buffer.
    pub(crate) fn limb(&self, index: usize) -> u32 {
        let at = index * LIMB_BYTES;
        if at >= self.data.len() {
            return 0;
        }
        let mut raw = [0u8; LIMB_BYTES];
        raw.copy_from_slice(&self.data[at..at + LIMB_BYTES]);
        u32::from_le_bytes(raw)
    }

    pub(crate) fn set_limb(&mut self, index: usize, value: u32) {
        let at = index * LIMB_BYTES;
        self.data[at..at + LIMB_BYTES].copy_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub(crate) fn real_limb_size(&self) -> usize {
        self.real_size().div_ceil(LIMB_BYTES)
    }

    /// Magnitude shifted right by `bits`, sign dropped.
    pub(crate) fn shift_right(&self, bits: u32) -> Self {
        let size = self.real_size();
        let byte_shift = bits as usize / 8;
        if byte_shift >= size {
            return Self::zeroed(0);
        }
        let bit_shift = bits % 8;
        let out_len = size - byte_shift;
        let mut out = Self::zeroed(out_len);
        if bit_shift == 0 {
            out.data[..out_len].copy_from_slice(&self.data[byte_shift..size]);
        } else {
            for i in 0..out_len {
                let low = self.data[byte_shift + i] >> bit_shift;
                let high = if byte_shift + i + 1 < size {
                    self.data[byte_shift + i + 1] << (8 - bit_shift)
                } else {
                    0
                };
                out.data[i] = low | high;
            }
        }
        out
    }

    /// Low `bits` bits of the magnitude, sign dropped.
    pub(crate) fn mask_low(&self, bits: u32) -> Self {
        let size = self.real_size();
        let full = (bits as usize).div_ceil(8);
        let keep = full.min(size);
        let mut out = Self::zeroed(keep);
        out.data[..keep].copy_from_slice(&self.data[..keep]);
        let partial = bits % 8;
        if partial != 0 && keep == full {
            out.data[keep - 1] &= (1u8 << partial) - 1;
        }
        out
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        Self::zeroed(0)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        let mut num = Self::zeroed(WORD_BYTES);
        num.set_word(0, value);
        num
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let mut num = Self::from(value.unsigned_abs());
        num.negative = value < 0;
        num
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> Self {
        Self::zeroed(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> Self {
        Self::from(1u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment() {
        assert_eq!(align_to_word(0), 8);
        assert_eq!(align_to_word(1), 8);
        assert_eq!(align_to_word(8), 8);
        assert_eq!(align_to_word(9), 16);

        assert_eq!(BigInt::from_le_bytes(&[1, 2, 3], false).capacity(), 8);
        assert_eq!(BigInt::from_le_bytes(&[0; 17], true).capacity(), 24);
    }

    #[test]
    fn test_real_size() {
        let num = BigInt::from_le_bytes(&[0xFF, 0, 1, 0, 0], false);
        assert_eq!(num.capacity(), 8);
        assert_eq!(num.real_size(), 3);
        assert_eq!(num.real_word_size(), 1);
        assert_eq!(num.bit_count(), 17);

        assert_eq!(BigInt::zero().real_size(), 0);
        assert_eq!(BigInt::zero().bit_count(), 0);
    }

    #[test]
    fn test_resize() {
        let mut num = BigInt::from_le_bytes(&[1, 2, 3], false);
        num.resize(20);
        assert_eq!(num.capacity(), 24);
        assert_eq!(num.real_size(), 3);

        // shrink to fit
        num.resize(0);
        assert_eq!(num.capacity(), 8);
        assert_eq!(num.as_le_bytes()[..3], [1, 2, 3]);

        // truncation drops high bytes
        let mut num = BigInt::from_le_bytes(&[1; 16], false);
        num.resize(8);
        assert_eq!(num.capacity(), 8);
        assert_eq!(num.real_size(), 8);
    }

    #[test]
    fn test_views() {
        let mut num = BigInt::zeroed(16);
        num.set_word(1, 0x0102_0304_0506_0708);
        assert_eq!(num.word(1), 0x0102_0304_0506_0708);
        assert_eq!(num.limb(2), 0x0506_0708);
        assert_eq!(num.limb(3), 0x0102_0304);
        assert_eq!(num.word(7), 0);

        num.set_limb(0, 0xA1B2_C3D4);
        assert_eq!(num.as_le_bytes()[0], 0xD4);
    }

    #[test]
    fn test_shift_helpers() {
        let num = BigInt::from(0b1011_0110_1010u64);
        assert_eq!(num.shift_right(4).word(0), 0b1011_0110);
        assert_eq!(num.mask_low(4).word(0), 0b1010);
        assert_eq!(num.shift_right(64).word(0), 0);
        assert_eq!(num.mask_low(0).word(0), 0);

        let wide = BigInt::power_of_two(131);
        assert_eq!(wide.shift_right(131).word(0), 1);
        assert!(wide.mask_low(131).is_zero());
    }
}
