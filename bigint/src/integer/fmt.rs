use std::fmt;

use super::BigInt;

impl BigInt {
    /// Renders the value as uppercase hexadecimal, most-significant byte
    /// first, two characters per real-size byte. Zero renders as `"00"`.
    #[inline]
    pub fn to_hex(&self) -> String {
        format!("{self:X}")
    }

    fn fmt_hex(&self, f: &mut fmt::Formatter<'_>, table: &[u8; 16]) -> fmt::Result {
        if self.negative && !self.is_zero() {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }

        let size = self.real_size();
        if size == 0 {
            return f.write_str("00");
        }
        let mut out = String::with_capacity(2 * size);
        for &byte in self.data[..size].iter().rev() {
            out.push(table[(byte >> 4) as usize] as char);
            out.push(table[(byte & 0xF) as usize] as char);
        }
        f.write_str(&out)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, b"0123456789ABCDEF")
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, b"0123456789abcdef")
    }
}

impl fmt::Display for BigInt {
    /// Formats the value in decimal, with a leading `-` when negative.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.negative {
            f.write_str("-")?;
        }

        // repeatedly divide a working copy by 10, byte by byte from the top,
        // collecting remainder digits least-significant-first
        let mut work = self.data[..self.real_size()].to_vec();
        let mut digits = Vec::new();
        while work.iter().any(|&byte| byte != 0) {
            let mut remainder = 0u32;
            for byte in work.iter_mut().rev() {
                let acc = (remainder << 8) | *byte as u32;
                *byte = (acc / 10) as u8;
                remainder = acc % 10;
            }
            digits.push(b'0' + remainder as u8);
        }

        let text: String = digits.iter().rev().map(|&digit| digit as char).collect();
        f.write_str(&text)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("capacity", &self.capacity())
            .field("real_size", &self.real_size())
            .field("value", &format_args!("{self:#X}"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_output() {
        let num = BigInt::from_le_bytes(&[0x4E, 0x28, 0x77, 0xF6], false);
        assert_eq!(num.to_hex(), "F677284E");
        assert_eq!(format!("{num:x}"), "f677284e");
        assert_eq!(format!("{num:#X}"), "0xF677284E");

        // two characters per real-size byte: no nibble stripping
        let num = BigInt::from_le_bytes(&[0x0F], true);
        assert_eq!(num.to_hex(), "-0F");

        assert_eq!(BigInt::from(0u64).to_hex(), "00");
    }

    #[test]
    fn test_hex_round_trip() {
        for text in ["00", "01", "0F", "FF", "F01000000000", "-0F677284E1"] {
            let num = BigInt::from_hex_str(text).unwrap();
            assert_eq!(num.to_hex(), text);
        }
    }

    #[test]
    fn test_decimal_output() {
        assert_eq!(BigInt::from(0u64).to_string(), "0");
        assert_eq!(BigInt::from(256u64).to_string(), "256");
        assert_eq!(BigInt::from(-1_000_000_007i64).to_string(), "-1000000007");

        // a sign-flagged zero still renders as plain zero
        let mut zero = BigInt::from(0u64);
        zero.set_negative(true);
        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero.to_hex(), "00");
    }
}
