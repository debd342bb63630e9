#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Arbitrary-precision signed integer arithmetic for operands wider than a
//! machine word, aimed at cryptographic-scale computation.
//!
//! The central type is [`BigInt`], a signed-magnitude integer backed by a
//! word-aligned little-endian byte buffer. On top of it the crate provides
//! the usual arithmetic operators, division with remainder, plain
//! exponentiation, and modular reduction/exponentiation through the moduli in
//! [`modulus`]: a division-based [`modulus::Modulus`] for arbitrary moduli
//! and a [`modulus::MersenneModulus`] that reduces `2^k - c` moduli by window
//! folding instead of division.
//!
//! ```
//! use bigint::modulus::MersenneModulus;
//! use bigint::reduce::ReduceExp;
//! use bigint::BigInt;
//!
//! let base: BigInt = "0xF2B9F3D7464C523FA37B5CE8DAFF2272".parse().unwrap();
//! let exponent = BigInt::from(0xFFu64);
//! let modulus = MersenneModulus::new(
//!     "0x7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED"
//!         .parse()
//!         .unwrap(),
//! )
//! .unwrap();
//!
//! let power = modulus.reduce_exp(&base, &exponent).unwrap();
//! assert!(power.cmp_magnitude(modulus.value()).is_lt());
//! ```

pub mod error;
pub mod modulus;
pub mod reduce;

mod integer;
mod numeric;

pub use error::BigIntError;
pub use integer::BigInt;

pub(crate) use numeric::Widening;
