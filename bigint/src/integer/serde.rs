use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::BigInt;

/// Portable shape: sign flag plus the real-size little-endian magnitude.
/// Deserialization goes through [`BigInt::from_le_bytes`] so the buffer
/// alignment invariant is re-established, never trusted from the input.
#[derive(Serialize)]
#[serde(rename = "BigInt")]
struct BorrowedRepr<'a> {
    negative: bool,
    magnitude: &'a [u8],
}

#[derive(Deserialize)]
#[serde(rename = "BigInt")]
struct OwnedRepr {
    negative: bool,
    magnitude: Vec<u8>,
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BorrowedRepr {
            negative: self.negative,
            magnitude: &self.data[..self.real_size()],
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = OwnedRepr::deserialize(deserializer)?;
        Ok(BigInt::from_le_bytes(&repr.magnitude, repr.negative))
    }
}
