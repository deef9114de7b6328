use bignat::{BigInt, BigIntError};

use num_bigint::BigUint;

/// 1024-bit RSA public modulus used by the deterministic scenario.
const MODULUS_HEX: &str = "d94d889e88853dd89769a18015a0a2e6bf82bf356fe14f251fb4f5e2df0d9f9a94a68a30c428b39e3362fb3779a497eceaea37100f264d7fb9fb1a97fbf621133de55fdcb9b1ad0d7a31b379216d79252f5c527b9bc63d83d4ecf4d1d45cbf843e8474babc655e9bb6799cba77a47eafa838296474afc24beb9c825b73ebf549";

/// Matching private exponent for [`MODULUS_HEX`].
const PRIVATE_EXPONENT_HEX: &str = "047b9cfde843176b88741d68cf096952e950813151058ce46f2b048791a26e507a1095793c12bae1e09d82213ad9326928cf7c2350acb19c98f19d32d577d666cd7bb8b2b5ba629d25ccf72a5ceb8a8da038906c84dcdb1fe677dffb2c029fd8926318eede1b58272af22bda5c5232be066839398e42f5352df58848adad11a1";

/// `0xABCDEF1234 ^ 0x010001 mod MODULUS`, computed independently.
const EXPECTED_CIPHERTEXT_HEX: &str = "5C604E27E8FC1D5849B72D009BC614DACF7ACFB9F36F05D36DF8DDED00B3F8BDE1EFD40ABC37FF83790DA1D5A721E127392743CF7D89145EE45598983F50E5A726EBACA88E6F16C1F1B712DA0CB625673413BAAEB07378BF06AE64F2B526DF69311451958D839CE7D7FC6A79A7C6AE777547F91F8B3366229C03745C84615B9F";

fn reference(n: &BigInt) -> BigUint {
    let hex = n.to_hex();
    if hex.is_empty() {
        BigUint::from(0u8)
    } else {
        BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
    }
}

/// Native-width modular exponentiation for cross-checking small cases.
fn pow_mod_u128(mut base: u128, mut exponent: u128, modulus: u128) -> u128 {
    let mut result = 1u128 % modulus;
    base %= modulus;
    while exponent != 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        exponent >>= 1;
        base = base * base % modulus;
    }
    result
}

#[test]
fn small_known_value() {
    let result = BigInt::from(5u64)
        .pow_mod(&BigInt::from(117u64), &BigInt::from(19u64))
        .unwrap();
    assert_eq!(result.to_u64(), 1);
}

#[test]
fn matches_native_for_small_operands() {
    let bases = [0u64, 1, 2, 5, 117, 255, 256, 0x3b9aca00];
    let exponents = [0u64, 1, 2, 3, 16, 117, 65537];
    let moduli = [2u64, 3, 19, 497, 0x2720, 0xFFFF_FFFB];

    for &b in &bases {
        for &e in &exponents {
            for &m in &moduli {
                let result = BigInt::from(b)
                    .pow_mod(&BigInt::from(e), &BigInt::from(m))
                    .unwrap();
                let expected = pow_mod_u128(b as u128, e as u128, m as u128);
                assert_eq!(result.to_u64(), expected as u64, "{b}^{e} mod {m}");
            }
        }
    }
}

#[test]
fn zero_exponent_yields_one() {
    let result = BigInt::from(0xDEADu64)
        .pow_mod(&BigInt::ZERO, &BigInt::from(19u64))
        .unwrap();
    assert_eq!(result.to_u64(), 1);

    // Documented edge: with modulus one the zero exponent still yields
    // the initial accumulator.
    let result = BigInt::from(5u64)
        .pow_mod(&BigInt::ZERO, &BigInt::from(1u64))
        .unwrap();
    assert_eq!(result.to_u64(), 1);
}

#[test]
fn zero_modulus_is_an_error() {
    let result = BigInt::from(5u64).pow_mod(&BigInt::from(117u64), &BigInt::ZERO);
    assert!(matches!(result, Err(BigIntError::DivisionByZero)));
}

#[test]
fn rsa_encrypt_matches_fixed_ciphertext() {
    let modulus = BigInt::from_hex(MODULUS_HEX).unwrap();
    let public_exponent = BigInt::from_hex("010001").unwrap();
    let message = BigInt::from(0xABCD_EF12_34u64);

    let ciphertext = message.pow_mod(&public_exponent, &modulus).unwrap();
    assert_eq!(ciphertext.to_hex(), EXPECTED_CIPHERTEXT_HEX);

    // No randomness anywhere: a second run produces the same bytes.
    let again = message.pow_mod(&public_exponent, &modulus).unwrap();
    assert_eq!(again, ciphertext);
}

#[test]
fn rsa_decrypt_recovers_the_message() {
    let modulus = BigInt::from_hex(MODULUS_HEX).unwrap();
    let private_exponent = BigInt::from_hex(PRIVATE_EXPONENT_HEX).unwrap();
    let ciphertext = BigInt::from_hex(EXPECTED_CIPHERTEXT_HEX).unwrap();

    let plaintext = ciphertext.pow_mod(&private_exponent, &modulus).unwrap();
    assert_eq!(plaintext.to_u64(), 0xABCD_EF12_34);
}

#[test]
fn cross_checked_against_reference_modpow() {
    let modulus = BigInt::from_hex(MODULUS_HEX).unwrap();
    let exponent = BigInt::from_hex("010001").unwrap();
    let message = BigInt::from(0xABCD_EF12_34u64);

    let ours = message.pow_mod(&exponent, &modulus).unwrap();
    let expected = reference(&message).modpow(&reference(&exponent), &reference(&modulus));
    assert_eq!(reference(&ours), expected);
}
