//! Defines the KEM and signature capability traits for crypto-agility.
//!
//! The hybrid orchestrator only talks to these traits, so a real PQC backend
//! can replace the simulated suite without touching orchestration logic.

use crate::crypto::keys::{Encapsulation, KeyPair, SharedSecret};
use crate::error::Result;

/// Key Encapsulation Mechanism with fixed binary sizes.
pub trait KemScheme: Send + Sync + 'static {
    /// Human-readable scheme name for logs and reports.
    const NAME: &'static str;
    const PUBLIC_KEY_SIZE: usize;
    const SECRET_KEY_SIZE: usize;
    const CIPHERTEXT_SIZE: usize;
    const SHARED_SECRET_SIZE: usize;

    /// Generates a key pair deterministically from `seed`.
    fn generate_keypair(seed: &[u8]) -> Result<KeyPair>;

    /// Encapsulates a shared secret against the recipient's public key.
    fn encapsulate(public_key: &[u8]) -> Result<Encapsulation>;

    /// Recovers the shared secret from a ciphertext with the recipient's secret key.
    fn decapsulate(ciphertext: &[u8], secret_key: &[u8]) -> Result<SharedSecret>;
}

/// Digital signature scheme with fixed binary sizes.
pub trait SignatureScheme: Send + Sync + 'static {
    const NAME: &'static str;
    const PUBLIC_KEY_SIZE: usize;
    const SECRET_KEY_SIZE: usize;
    const SIGNATURE_SIZE: usize;

    /// Generates a key pair deterministically from `seed`.
    fn generate_keypair(seed: &[u8]) -> Result<KeyPair>;

    /// Signs `message` with the secret key.
    fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>>;

    /// Verifies `signature` over `message`.
    ///
    /// Size violations are errors; a well-formed but wrong signature is `Ok(false)`.
    fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool>;
}
