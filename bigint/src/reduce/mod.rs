//! This module defines the traits for modular reduction and modular
//! exponentiation.

mod ops;

pub use ops::*;
