//! Arithmetic checked against `num-bigint` as the trusted reference.

use bigint::BigInt;
use num_bigint::Sign;
use rand::{thread_rng, Rng};

fn to_reference(value: &BigInt) -> num_bigint::BigInt {
    let sign = if value.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    num_bigint::BigInt::from_bytes_le(sign, value.as_le_bytes())
}

fn from_reference(value: &num_bigint::BigInt) -> BigInt {
    let (sign, magnitude) = value.to_bytes_le();
    BigInt::from_le_bytes(&magnitude, sign == Sign::Minus)
}

fn random_value(rng: &mut impl Rng, max_len: usize) -> BigInt {
    let len = rng.gen_range(1..=max_len);
    let raw: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
    BigInt::from_le_bytes(&raw, rng.gen())
}

#[test]
fn decimal_addition_scenario() {
    let a = BigInt::from_decimal_str("12345678901234567890").unwrap();
    let b = BigInt::from_decimal_str("98765432109876543210").unwrap();
    assert_eq!((&a + &b).to_string(), "111111111011111111100");
}

#[test]
fn mixed_width_signed_addition() {
    // a positive 16-byte value plus a negative 8-byte value
    let a = BigInt::from_le_bytes(
        &[
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, //
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
        ],
        false,
    );
    let b = BigInt::from_le_bytes(&[0x00, 0x00, 0xF0, 0x10, 0x00, 0x00, 0x00, 0x00], true);

    let sum = &a + &b;
    assert_eq!(to_reference(&sum), to_reference(&a) + to_reference(&b));
    assert_eq!(sum.to_hex(), "40000000000000001FFFFFFFEF100000");
}

#[test]
fn addition_matches_reference() {
    let mut rng = thread_rng();
    for _ in 0..300 {
        let a = random_value(&mut rng, 48);
        let b = random_value(&mut rng, 24);

        let sum = &a + &b;
        assert_eq!(to_reference(&sum), to_reference(&a) + to_reference(&b));
        assert_eq!(sum, &b + &a);

        let diff = &a - &b;
        assert_eq!(to_reference(&diff), to_reference(&a) - to_reference(&b));
    }
}

#[test]
fn subtraction_of_self_is_zero() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let a = random_value(&mut rng, 40);
        assert!((&a - &a).is_zero());
    }
}

#[test]
fn multiplication_matches_reference() {
    let mut rng = thread_rng();
    for _ in 0..300 {
        let a = random_value(&mut rng, 40);
        let b = random_value(&mut rng, 17);
        assert_eq!(
            to_reference(&(&a * &b)),
            to_reference(&a) * to_reference(&b)
        );
    }
}

#[test]
fn division_identity_against_reference() {
    let mut rng = thread_rng();
    for _ in 0..300 {
        let a = random_value(&mut rng, 48);
        let mut b = random_value(&mut rng, 20);
        if b.is_zero() {
            b = BigInt::from(1u64);
        }

        let (quotient, remainder) = a.div_rem(&b).unwrap();
        assert_eq!(&b * &quotient + &remainder, a);
        assert!(remainder.cmp_magnitude(&b).is_lt());

        // truncated division, like the reference
        let expected_q = to_reference(&a) / to_reference(&b);
        let expected_r = to_reference(&a) % to_reference(&b);
        assert_eq!(to_reference(&quotient), expected_q);
        assert_eq!(to_reference(&remainder), expected_r);
    }
}

#[test]
fn small_dividend_degrades() {
    let dividend = BigInt::from(-41i64);
    let divisor = BigInt::from(1000u64);
    let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
    assert!(quotient.is_zero());
    assert_eq!(remainder, dividend);
}

#[test]
fn pow_matches_reference() {
    let mut rng = thread_rng();
    for _ in 0..60 {
        let base = random_value(&mut rng, 8);
        let exponent: u32 = rng.gen_range(0..=16);

        let mut expected = num_bigint::BigInt::from(1u32);
        for _ in 0..exponent {
            expected *= to_reference(&base);
        }

        let power = base.pow(&BigInt::from(exponent as u64)).unwrap();
        assert_eq!(to_reference(&power), expected);
    }
}

#[test]
fn decimal_round_trip_against_reference() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let value = from_reference(&to_reference(&random_value(&mut rng, 32)));
        let text = value.to_string();
        assert_eq!(text, to_reference(&value).to_string());
        assert_eq!(BigInt::from_decimal_str(&text).unwrap(), value);
    }
}

#[test]
fn hex_round_trip() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let value = random_value(&mut rng, 32);
        assert_eq!(BigInt::from_hex_str(&value.to_hex()).unwrap(), value);
    }
}
