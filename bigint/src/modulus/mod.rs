//! Defines some moduli.

mod general;
mod mersenne;
mod ops;

pub use general::Modulus;
pub use mersenne::MersenneModulus;
