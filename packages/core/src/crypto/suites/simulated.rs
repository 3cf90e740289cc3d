//! Hash-based stand-ins for CRYSTALS-Kyber-768 and CRYSTALS-Dilithium2.
//!
//! They keep the binary contracts of the real schemes (sizes, determinism,
//! composition order) without any lattice algebra. Two known gaps are kept
//! on purpose and logged at `warn` level:
//!
//! - decapsulation does not depend on the secret key;
//! - verification accepts any well-sized signature.

use crate::crypto::drbg::DeterministicStream;
use crate::crypto::keys::{Encapsulation, KeyPair, SharedSecret};
use crate::crypto::provider::{KemScheme, SignatureScheme};
use crate::error::{ensure_size, Result};
use sha2::{Digest, Sha256, Sha512};
use tracing::{debug, warn};
use zeroize::Zeroizing;

pub const KYBER_PUBLIC_KEY_SIZE: usize = 1184;
pub const KYBER_SECRET_KEY_SIZE: usize = 2400;
pub const KYBER_CIPHERTEXT_SIZE: usize = 1088;
pub const KYBER_SHARED_SECRET_SIZE: usize = 32;

pub const DILITHIUM_PUBLIC_KEY_SIZE: usize = 1312;
pub const DILITHIUM_SECRET_KEY_SIZE: usize = 2560;
pub const DILITHIUM_SIGNATURE_SIZE: usize = 2420;

/// Fills a public/secret buffer pair from one deterministic stream, public first.
fn keypair_from_seed(seed: &[u8], public_size: usize, secret_size: usize) -> KeyPair {
    let mut rng = DeterministicStream::new(seed);
    let mut public_key = vec![0u8; public_size];
    let mut secret_key = vec![0u8; secret_size];
    rng.fill(&mut public_key);
    rng.fill(&mut secret_key);
    KeyPair::new(public_key, secret_key)
}

/// Repeats `digest` until `len` bytes are produced.
fn tile(digest: &[u8], len: usize) -> Vec<u8> {
    digest.iter().copied().cycle().take(len).collect()
}

/// Simulated Kyber-768 KEM.
pub struct SimulatedKyber;

impl KemScheme for SimulatedKyber {
    const NAME: &'static str = "Kyber768 (simulated)";
    const PUBLIC_KEY_SIZE: usize = KYBER_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = KYBER_SECRET_KEY_SIZE;
    const CIPHERTEXT_SIZE: usize = KYBER_CIPHERTEXT_SIZE;
    const SHARED_SECRET_SIZE: usize = KYBER_SHARED_SECRET_SIZE;

    fn generate_keypair(seed: &[u8]) -> Result<KeyPair> {
        let keys = keypair_from_seed(seed, KYBER_PUBLIC_KEY_SIZE, KYBER_SECRET_KEY_SIZE);
        debug!(
            target: "crypto::suites::simulated",
            public_key = %hex::encode(&keys.public_key[..8]),
            "Generated Kyber keypair"
        );
        Ok(keys)
    }

    /// Ciphertext is `SHA-256(public_key)` tiled to 1088 bytes, the secret is
    /// `SHA-256(ciphertext)`. No per-call randomness: the same public key
    /// always yields the same pair.
    fn encapsulate(public_key: &[u8]) -> Result<Encapsulation> {
        ensure_size("KEM public key", public_key.len(), KYBER_PUBLIC_KEY_SIZE)?;

        let ciphertext = tile(&Sha256::digest(public_key), KYBER_CIPHERTEXT_SIZE);
        let shared_secret = Zeroizing::new(Sha256::digest(&ciphertext).to_vec());

        Ok(Encapsulation {
            ciphertext,
            shared_secret,
        })
    }

    fn decapsulate(ciphertext: &[u8], secret_key: &[u8]) -> Result<SharedSecret> {
        ensure_size("KEM ciphertext", ciphertext.len(), KYBER_CIPHERTEXT_SIZE)?;
        ensure_size("KEM secret key", secret_key.len(), KYBER_SECRET_KEY_SIZE)?;

        warn!(
            target: "crypto::suites::simulated",
            "Simulated decapsulation ignores the secret key; any key recovers the secret"
        );
        Ok(Zeroizing::new(Sha256::digest(ciphertext).to_vec()))
    }
}

/// Simulated Dilithium2 signatures.
pub struct SimulatedDilithium;

impl SignatureScheme for SimulatedDilithium {
    const NAME: &'static str = "Dilithium2 (simulated)";
    const PUBLIC_KEY_SIZE: usize = DILITHIUM_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = DILITHIUM_SECRET_KEY_SIZE;
    const SIGNATURE_SIZE: usize = DILITHIUM_SIGNATURE_SIZE;

    fn generate_keypair(seed: &[u8]) -> Result<KeyPair> {
        let keys = keypair_from_seed(seed, DILITHIUM_PUBLIC_KEY_SIZE, DILITHIUM_SECRET_KEY_SIZE);
        debug!(
            target: "crypto::suites::simulated",
            public_key = %hex::encode(&keys.public_key[..8]),
            "Generated Dilithium keypair"
        );
        Ok(keys)
    }

    fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
        ensure_size("signature secret key", secret_key.len(), DILITHIUM_SECRET_KEY_SIZE)?;

        let mut hasher = Sha512::new();
        hasher.update(secret_key);
        hasher.update(message);
        Ok(tile(&hasher.finalize(), DILITHIUM_SIGNATURE_SIZE))
    }

    fn verify(_message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        ensure_size("signature", signature.len(), DILITHIUM_SIGNATURE_SIZE)?;
        ensure_size("signature public key", public_key.len(), DILITHIUM_PUBLIC_KEY_SIZE)?;

        warn!(
            target: "crypto::suites::simulated",
            "Simulated verification accepts every well-formed signature"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryptoError;

    #[test]
    fn test_tile_wraps_digest() {
        assert_eq!(tile(&[1, 2, 3], 7), vec![1, 2, 3, 1, 2, 3, 1]);
        assert!(tile(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_kyber_keygen_sizes_for_any_seed_length() {
        for seed_len in [1usize, 12, 64, 200] {
            let keys = SimulatedKyber::generate_keypair(&vec![0x5a; seed_len]).unwrap();
            assert_eq!(keys.public_key.len(), 1184);
            assert_eq!(keys.secret_key.len(), 2400);
        }
    }

    #[test]
    fn test_kyber_public_key_precedes_secret_key_in_stream() {
        let keys = SimulatedKyber::generate_keypair(b"seed").unwrap();
        let mut stream = DeterministicStream::new(b"seed");
        let mut expected = vec![0u8; 1184 + 2400];
        stream.fill(&mut expected);
        assert_eq!(keys.public_key.as_slice(), &expected[..1184]);
        assert_eq!(keys.secret_key.as_slice(), &expected[1184..]);
    }

    #[test]
    fn test_encapsulate_is_function_of_public_key() {
        let keys = SimulatedKyber::generate_keypair(b"seed").unwrap();
        let a = SimulatedKyber::encapsulate(&keys.public_key).unwrap();
        let b = SimulatedKyber::encapsulate(&keys.public_key).unwrap();
        assert_eq!(a.ciphertext, b.ciphertext);
        assert_eq!(*a.shared_secret, *b.shared_secret);
        assert_eq!(a.ciphertext.len(), 1088);
        assert_eq!(a.shared_secret.len(), 32);

        let digest = Sha256::digest(&keys.public_key);
        assert_eq!(&a.ciphertext[..32], digest.as_slice());
        assert_eq!(&a.ciphertext[1056..], digest.as_slice());
    }

    #[test]
    fn test_decapsulate_ignores_secret_key() {
        let keys = SimulatedKyber::generate_keypair(b"seed").unwrap();
        let encap = SimulatedKyber::encapsulate(&keys.public_key).unwrap();

        let with_own = SimulatedKyber::decapsulate(&encap.ciphertext, &keys.secret_key).unwrap();
        let with_other = SimulatedKyber::decapsulate(&encap.ciphertext, &[0u8; 2400]).unwrap();

        assert_eq!(*with_own, *encap.shared_secret);
        assert_eq!(*with_other, *encap.shared_secret);
    }

    #[test]
    fn test_kem_size_contract_enforced() {
        let err = SimulatedKyber::encapsulate(&[0u8; 32]).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidSizeError { expected: 1184, actual: 32, .. }
        ));

        let err = SimulatedKyber::decapsulate(&[0u8; 1087], &[0u8; 2400]).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidSizeError { expected: 1088, actual: 1087, .. }
        ));

        let err = SimulatedKyber::decapsulate(&[0u8; 1088], &[0u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidSizeError { expected: 2400, actual: 16, .. }
        ));
    }

    #[test]
    fn test_dilithium_sign_is_tiled_sha512() {
        let keys = SimulatedDilithium::generate_keypair(b"seed").unwrap();
        assert_eq!(keys.public_key.len(), 1312);
        assert_eq!(keys.secret_key.len(), 2560);

        let sig = SimulatedDilithium::sign(b"message", &keys.secret_key).unwrap();
        assert_eq!(sig.len(), 2420);

        let mut hasher = Sha512::new();
        hasher.update(keys.secret_key.as_slice());
        hasher.update(b"message");
        let digest = hasher.finalize();
        assert_eq!(&sig[..64], digest.as_slice());
        assert_eq!(&sig[2368..2420], &digest[..52]);
    }

    #[test]
    fn test_dilithium_sign_deterministic_and_message_bound() {
        let keys = SimulatedDilithium::generate_keypair(b"seed").unwrap();
        let a = SimulatedDilithium::sign(b"one", &keys.secret_key).unwrap();
        let b = SimulatedDilithium::sign(b"one", &keys.secret_key).unwrap();
        let c = SimulatedDilithium::sign(b"two", &keys.secret_key).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_dilithium_verify_placeholder_accepts_forgery() {
        let keys = SimulatedDilithium::generate_keypair(b"seed").unwrap();
        let forged = vec![0u8; 2420];
        assert!(SimulatedDilithium::verify(b"anything", &forged, &keys.public_key).unwrap());
    }

    #[test]
    fn test_dilithium_verify_rejects_wrong_sizes() {
        let keys = SimulatedDilithium::generate_keypair(b"seed").unwrap();
        let err = SimulatedDilithium::verify(b"m", &[0u8; 64], &keys.public_key).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidSizeError { what: "signature", .. }
        ));

        let err = SimulatedDilithium::verify(b"m", &[0u8; 2420], &[0u8; 1184]).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidSizeError { what: "signature public key", .. }
        ));

        let err = SimulatedDilithium::sign(b"m", &[0u8; 2400]).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidSizeError { expected: 2560, actual: 2400, .. }
        ));
    }
}
