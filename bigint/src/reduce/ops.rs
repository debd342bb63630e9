use crate::BigInt;

/// The modulo operation.
pub trait Reduce<T> {
    /// Output type.
    type Output;

    /// Calculates `value (mod modulus)` where `self` is modulus.
    fn reduce(self, value: T) -> Self::Output;
}

/// The modular exponentiation.
pub trait ReduceExp<T> {
    /// Output type.
    type Output;

    /// Calculates `base^exponent (mod modulus)` where `self` is modulus.
    ///
    /// The exponent is scanned by magnitude; every intermediate stays
    /// bounded by the modulus, so the exponent width is unrestricted.
    fn reduce_exp(self, base: T, exponent: &BigInt) -> Self::Output;
}
