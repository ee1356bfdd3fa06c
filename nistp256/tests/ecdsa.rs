//! ECDSA tests.

use hex_literal::hex;
use nistp256::{
    BigUint, Error, NistP256, PublicKey, SecretKey,
    ecdsa::{self, MAX_SIGNING_ATTEMPTS, Signature, SigningKey, VerifyingKey, hazmat},
};
use proptest::prelude::*;
use rand_core::{CryptoRng, RngCore};
use std::collections::VecDeque;

/// Replays a fixed sequence of 32-byte draws, then repeats the last one.
struct ScriptedRng {
    draws: VecDeque<[u8; 32]>,
    last: [u8; 32],
}

impl ScriptedRng {
    /// Script the nonces `k` returned by successive scalar draws.
    fn with_nonces(nonces: &[BigUint]) -> Self {
        let draws: VecDeque<[u8; 32]> = nonces
            .iter()
            .map(|k| {
                // scalars are drawn as `1 + candidate`
                let candidate = (k - 1u8).to_bytes_be();
                let mut bytes = [0u8; 32];
                bytes[32 - candidate.len()..].copy_from_slice(&candidate);
                bytes
            })
            .collect();

        let last = draws.back().copied().unwrap_or_default();
        Self { draws, last }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        unimplemented!()
    }

    fn next_u64(&mut self) -> u64 {
        unimplemented!()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        assert_eq!(dst.len(), 32);
        let draw = self.draws.pop_front().unwrap_or(self.last);
        dst.copy_from_slice(&draw);
    }
}

impl CryptoRng for ScriptedRng {}

/// Deterministic xorshift stream for property tests.
struct XorShiftRng(u64);

impl RngCore for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let word = self.next_u64().to_be_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

impl CryptoRng for XorShiftRng {}

/// `r` for `d = 1, k = 1, e = 1`, i.e. `Gx mod n`.
const UNIT_R: [u8; 32] = hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");

/// `s` for `d = 1, k = 1, e = 1`, i.e. `e + r`.
const UNIT_S: [u8; 32] = hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c297");

fn scalar(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn generator_public_key() -> PublicKey {
    PublicKey::try_from(NistP256::params().generator().clone()).unwrap()
}

#[test]
fn unit_key_and_nonce() {
    // d = 1, Q = G, e = 1, k = 1
    let secret_key = SecretKey::from_scalar(&BigUint::from(1u8)).unwrap();
    let public_key = secret_key.public_key().unwrap();
    assert_eq!(public_key, generator_public_key());

    let e = BigUint::from(1u8);
    let signature = hazmat::sign_prehashed_with_nonce(&e, &secret_key, &BigUint::from(1u8)).unwrap();

    let expected_r = scalar(&UNIT_R);
    let expected_s = scalar(&UNIT_S);

    assert_eq!(signature.r(), &expected_r);
    assert_eq!(signature.s(), &expected_s);
    assert!(ecdsa::verify(&e, &public_key, &expected_r, &expected_s));
}

#[cfg(feature = "test-vectors")]
#[test]
fn sign_with_scripted_nonce_matches_vectors() {
    use nistp256::test_vectors::ecdsa::ECDSA_TEST_VECTORS;

    for vector in ECDSA_TEST_VECTORS {
        let secret_key = SecretKey::from_slice(vector.d).unwrap();
        let public_key = secret_key.public_key().unwrap();
        assert_eq!(public_key.x(), &scalar(vector.q_x));
        assert_eq!(public_key.y(), &scalar(vector.q_y));

        let mut rng = ScriptedRng::with_nonces(&[scalar(vector.k)]);
        let signature = ecdsa::sign(&mut rng, &scalar(vector.m), &secret_key).unwrap();

        assert_eq!(signature.r(), &scalar(vector.r));
        assert_eq!(signature.s(), &scalar(vector.s));
        assert!(ecdsa::verify(&scalar(vector.m), &public_key, signature.r(), signature.s()));
    }
}

#[cfg(feature = "test-vectors")]
#[test]
fn verify_vectors() {
    use nistp256::test_vectors::ecdsa::ECDSA_TEST_VECTORS;

    for vector in ECDSA_TEST_VECTORS {
        let verifying_key = VerifyingKey::from_affine(scalar(vector.q_x), scalar(vector.q_y)).unwrap();
        let signature = Signature::from_scalars(scalar(vector.r), scalar(vector.s)).unwrap();
        assert!(verifying_key.verify_prehash(&scalar(vector.m), &signature));

        let verification =
            verifying_key.verify_prehash_with_diagnostic(&scalar(vector.m), &signature);
        assert!(verification.is_valid());
        assert_eq!(verification.v(), Some(signature.r()));
    }
}

#[test]
fn zero_component_is_retried_with_fresh_nonce() {
    // d = 1 and k = 1 give s = e + Gx (mod n), which is zero for e = n - Gx
    let secret_key = SecretKey::from_scalar(&BigUint::from(1u8)).unwrap();
    let n = NistP256::order();
    let e = n - scalar(&NistP256::GENERATOR_X) % n;

    let mut rng = ScriptedRng::with_nonces(&[BigUint::from(1u8), BigUint::from(2u8)]);
    let signature = ecdsa::sign(&mut rng, &e, &secret_key).unwrap();

    let expected = hazmat::sign_prehashed_with_nonce(&e, &secret_key, &BigUint::from(2u8)).unwrap();
    assert_eq!(signature, expected);
    assert!(ecdsa::verify(&e, &secret_key.public_key().unwrap(), signature.r(), signature.s()));
}

#[test]
fn retry_budget_is_bounded() {
    let secret_key = SecretKey::from_scalar(&BigUint::from(1u8)).unwrap();
    let n = NistP256::order();
    let e = n - scalar(&NistP256::GENERATOR_X) % n;

    let nonces = vec![BigUint::from(1u8); MAX_SIGNING_ATTEMPTS];
    let mut rng = ScriptedRng::with_nonces(&nonces);

    assert_eq!(
        ecdsa::sign(&mut rng, &e, &secret_key),
        Err(Error::RetryLimitExceeded)
    );
}

#[test]
fn out_of_range_components_do_not_verify() {
    let public_key = generator_public_key();
    let e = BigUint::from(1u8);
    let r = scalar(&UNIT_R);
    let s = scalar(&UNIT_S);
    assert!(ecdsa::verify(&e, &public_key, &r, &s));
    let zero = BigUint::from(0u8);
    let n = NistP256::order();

    assert!(!ecdsa::verify(&e, &public_key, &zero, &s));
    assert!(!ecdsa::verify(&e, &public_key, &r, &zero));
    assert!(!ecdsa::verify(&e, &public_key, n, &s));
    assert!(!ecdsa::verify(&e, &public_key, &r, n));
    assert!(!ecdsa::verify(&e, &public_key, &(n + &r), &s));

    let verification = ecdsa::verify_with_diagnostic(&e, &public_key, n, &s);
    assert!(!verification.is_valid());
    assert_eq!(verification.v(), None);
}

#[test]
fn mismatch_reports_recomputed_value() {
    let public_key = generator_public_key();
    let e = BigUint::from(2u8);
    let r = scalar(&UNIT_R);

    let verification = ecdsa::verify_with_diagnostic(&e, &public_key, &r, &scalar(&UNIT_S));
    assert!(!verification.is_valid());
    assert!(verification.v().is_some());
    assert_ne!(verification.v(), Some(&r));
}

#[test]
fn generate_keypair_from_injected_rng() {
    let mut rng = XorShiftRng(0x9e37_79b9_7f4a_7c15);
    let (secret_key, public_key) = ecdsa::generate_keypair(&mut rng).unwrap();
    assert_eq!(secret_key.public_key().unwrap(), public_key);

    let e = BigUint::from(0xdead_beefu32);
    let signature = ecdsa::sign(&mut rng, &e, &secret_key).unwrap();
    assert!(ecdsa::verify(&e, &public_key, signature.r(), signature.s()));
}

#[cfg(feature = "getrandom")]
#[test]
fn os_rng_round_trip() {
    let signing_key = SigningKey::generate().unwrap();
    let e = BigUint::from(1234u16);
    let signature = signing_key.sign_prehash(&e).unwrap();
    assert!(signing_key.verifying_key().verify_prehash(&e, &signature));
}

#[cfg(feature = "sha256")]
#[test]
fn message_round_trip() {
    let signing_key = SigningKey::from_bytes(&hex!(
        "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"
    ))
    .unwrap();
    let mut rng = XorShiftRng(7);

    let signature = signing_key.sign_with_rng(&mut rng, b"sample").unwrap();
    assert!(signing_key.verifying_key().verify(b"sample", &signature));
    assert!(!signing_key.verifying_key().verify(b"example", &signature));
}

#[test]
fn signing_key_equality() {
    let bytes = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
    let a = SigningKey::from_bytes(&bytes).unwrap();
    let b = SigningKey::new(&SecretKey::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_bytes(), bytes);
    assert_eq!(VerifyingKey::from(&a), b.verifying_key().clone());
}

prop_compose! {
    fn secret_key()(bytes in any::<[u8; 32]>()) -> SecretKey {
        let d = BigUint::from_bytes_be(&bytes) % (NistP256::order() - 1u8) + 1u8;
        SecretKey::from_scalar(&d).unwrap()
    }
}

prop_compose! {
    fn digest()(bytes in any::<[u8; 32]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_and_verify(sk in secret_key(), e in digest(), seed in 1u64..) {
        let public_key = sk.public_key().unwrap();
        let signature = ecdsa::sign(&mut XorShiftRng(seed), &e, &sk).unwrap();

        prop_assert!(ecdsa::verify(&e, &public_key, signature.r(), signature.s()));
    }

    #[test]
    fn reject_tampered_signature(sk in secret_key(), e in digest(), seed in 1u64..) {
        let public_key = sk.public_key().unwrap();
        let (r, s) = ecdsa::sign(&mut XorShiftRng(seed), &e, &sk).unwrap().split_scalars();
        let n = NistP256::order();

        let mut tampered_r = (&r + 1u8) % n;
        if tampered_r == BigUint::from(0u8) {
            tampered_r = BigUint::from(1u8);
        }

        prop_assert!(!ecdsa::verify(&e, &public_key, &tampered_r, &s));
        prop_assert!(!ecdsa::verify(&(&e + 1u8), &public_key, &r, &s));
    }

    #[test]
    fn reject_flipped_signature_bit(sk in secret_key(), byte in 0usize..64, bit in 0usize..8) {
        let mut rng = XorShiftRng(0x5eed);
        let verifying_key = SigningKey::new(&sk).unwrap().verifying_key().clone();
        let e = BigUint::from(42u8);
        let mut bytes = ecdsa::sign(&mut rng, &e, &sk).unwrap().to_bytes();

        // tweak signature to make it invalid
        bytes[byte] ^= 1 << bit;

        if let Ok(signature) = Signature::from_bytes(&bytes) {
            prop_assert!(!verifying_key.verify_prehash(&e, &signature));
        }
    }
}
