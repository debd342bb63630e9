use std::str::FromStr;

use crate::error::BigIntError;
use crate::Widening;

use super::{BigInt, WORD_BYTES};

impl BigInt {
    /// Parses a decimal string: an optional leading `-`, then digits `0`-`9`.
    ///
    /// The result buffer is shrunk to the aligned ceiling of the real size.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let num = BigInt::from_decimal_str("-12345678901234567890").unwrap();
    /// assert_eq!(num.to_string(), "-12345678901234567890");
    /// ```
    ///
    /// # Errors
    ///
    /// [`BigIntError::EmptyInput`] when no digits follow the sign,
    /// [`BigIntError::InvalidDigit`] on the first non-decimal character.
    pub fn from_decimal_str(text: &str) -> Result<Self, BigIntError> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if digits.is_empty() {
            return Err(BigIntError::EmptyInput);
        }

        // every decimal digit carries less than 4 bits
        let mut num = Self::zeroed(digits.len() / 2 + 1);
        for (index, ch) in digits.char_indices() {
            let digit = match ch.to_digit(10) {
                Some(digit) => digit as u64,
                None => {
                    return Err(BigIntError::InvalidDigit {
                        ch,
                        radix: 10,
                        index: index + usize::from(negative),
                    })
                }
            };
            num.mul_word_in_place(10);
            num.add_word_in_place(digit);
        }

        num.resize(0);
        num.negative = negative;
        Ok(num)
    }

    /// Parses a hexadecimal string: an optional leading `-`, an optional
    /// `0x`/`0X` prefix, then case-insensitive hex digits. An odd leading
    /// nibble is permitted.
    ///
    /// # Errors
    ///
    /// [`BigIntError::EmptyInput`] when no digits remain after the prefixes,
    /// [`BigIntError::InvalidDigit`] on the first non-hex character.
    pub fn from_hex_str(text: &str) -> Result<Self, BigIntError> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (skipped, body) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
            Some(rest) => (2, rest),
            None => (0, body),
        };
        if body.is_empty() {
            return Err(BigIntError::EmptyInput);
        }

        let mut nibbles = Vec::with_capacity(body.len());
        for (index, ch) in body.char_indices() {
            match ch.to_digit(16) {
                Some(digit) => nibbles.push(digit as u8),
                None => {
                    return Err(BigIntError::InvalidDigit {
                        ch,
                        radix: 16,
                        index: index + skipped + usize::from(negative),
                    })
                }
            }
        }

        // pair nibbles from the least-significant end
        let mut num = Self::zeroed(nibbles.len().div_ceil(2));
        for (i, pair) in nibbles.rchunks(2).enumerate() {
            num.data[i] = if let [high, low] = pair {
                (high << 4) | low
            } else {
                pair[0]
            };
        }
        num.negative = negative;
        Ok(num)
    }

    /// Multiplies the magnitude by `multiplier` in place, word by word with
    /// the carry rippled upward; grows the buffer if a carry remains.
    fn mul_word_in_place(&mut self, multiplier: u64) {
        let mut carry = 0u64;
        for i in 0..self.word_count() {
            let (low, high) = self.word(i).carry_mul(multiplier, carry);
            self.set_word(i, low);
            carry = high;
        }
        if carry != 0 {
            let at = self.word_count();
            self.data.resize(self.data.len() + WORD_BYTES, 0);
            self.set_word(at, carry);
        }
    }

    /// Adds `value` to the magnitude in place, propagating the carry across
    /// words; grows the buffer if a carry remains.
    fn add_word_in_place(&mut self, value: u64) {
        let mut carry = value;
        let mut i = 0;
        while carry != 0 {
            if i == self.word_count() {
                self.data.resize(self.data.len() + WORD_BYTES, 0);
            }
            let (sum, overflow) = self.word(i).overflowing_add(carry);
            self.set_word(i, sum);
            carry = overflow as u64;
            i += 1;
        }
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parses decimal text, or hexadecimal when the digits carry a `0x`/`0X`
    /// prefix.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let body = text.strip_prefix('-').unwrap_or(text);
        if body.starts_with("0x") || body.starts_with("0X") {
            Self::from_hex_str(text)
        } else {
            Self::from_decimal_str(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_round_trip() {
        for text in [
            "0",
            "7",
            "255",
            "12345678901234567890",
            "-98765432109876543210",
            "340282366920938463463374607431768211456",
        ] {
            let num = BigInt::from_decimal_str(text).unwrap();
            assert_eq!(num.to_string(), text);
        }

        // leading zeros are stripped, "-0" canonicalizes to "0"
        assert_eq!(BigInt::from_decimal_str("007").unwrap().to_string(), "7");
        assert_eq!(BigInt::from_decimal_str("-0").unwrap().to_string(), "0");
    }

    #[test]
    fn test_decimal_word_boundary() {
        // 2^64 and 2^64 - 1 straddle the first word
        let num = BigInt::from_decimal_str("18446744073709551615").unwrap();
        assert_eq!(num.word(0), u64::MAX);
        assert_eq!(num.real_size(), 8);

        let num = BigInt::from_decimal_str("18446744073709551616").unwrap();
        assert_eq!(num.word(0), 0);
        assert_eq!(num.word(1), 1);
    }

    #[test]
    fn test_decimal_errors() {
        assert_eq!(
            BigInt::from_decimal_str(""),
            Err(BigIntError::EmptyInput)
        );
        assert_eq!(
            BigInt::from_decimal_str("-"),
            Err(BigIntError::EmptyInput)
        );
        assert_eq!(
            BigInt::from_decimal_str("12x4"),
            Err(BigIntError::InvalidDigit {
                ch: 'x',
                radix: 10,
                index: 2
            })
        );
        assert_eq!(
            BigInt::from_decimal_str("-1a"),
            Err(BigIntError::InvalidDigit {
                ch: 'a',
                radix: 10,
                index: 2
            })
        );
    }

    #[test]
    fn test_hex_parsing() {
        let num = BigInt::from_hex_str("0x0000F01000000000").unwrap();
        assert_eq!(num.word(0), 0x0000_F010_0000_0000);

        // case-insensitive, prefix optional
        assert_eq!(
            BigInt::from_hex_str("DeadBeef").unwrap(),
            BigInt::from_hex_str("0XDEADBEEF").unwrap()
        );

        // odd leading nibble
        let num = BigInt::from_hex_str("F01").unwrap();
        assert_eq!(num.word(0), 0xF01);
        assert_eq!(num.real_size(), 2);

        let num = BigInt::from_hex_str("-0x20000000000000040").unwrap();
        assert!(num.is_negative());
        assert_eq!(num.word(0), 0x40);
        assert_eq!(num.word(1), 2);
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(BigInt::from_hex_str("0x"), Err(BigIntError::EmptyInput));
        assert_eq!(
            BigInt::from_hex_str("-0x12G4"),
            Err(BigIntError::InvalidDigit {
                ch: 'G',
                radix: 16,
                index: 5
            })
        );
    }

    #[test]
    fn test_from_str_dispatch() {
        let hex: BigInt = "0xFF".parse().unwrap();
        let dec: BigInt = "255".parse().unwrap();
        assert_eq!(hex, dec);

        let negative_hex: BigInt = "-0xff".parse().unwrap();
        assert_eq!(negative_hex, BigInt::from(-255i64));
    }
}
