//! AEAD Transport Codec
//!
//! Самодостаточный конверт: `nonce(12) ‖ ciphertext(len = plaintext) ‖ tag(16)`.
//! Поля длины нет, границы вычисляются от общей длины.
//!
//! Ключ 32 байта (совпадает с размером общего секрета KEM). Nonce берётся из
//! `OsRng` на каждый `seal`.

use crate::error::{CryptoError, Result};
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm,
};
use chacha20poly1305::ChaCha20Poly1305;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const AEAD_KEY_SIZE: usize = 32;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16;
/// Минимальная длина конверта (пустой plaintext)
pub const ENVELOPE_OVERHEAD: usize = NONCE_SIZE + TAG_SIZE;

/// Симметричный шифр конверта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AeadAlgorithm {
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,
    #[serde(rename = "chacha20-poly1305")]
    ChaCha20Poly1305,
}

impl AeadAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            AeadAlgorithm::Aes256Gcm => "aes-256-gcm",
            AeadAlgorithm::ChaCha20Poly1305 => "chacha20-poly1305",
        }
    }
}

impl fmt::Display for AeadAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AeadAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes-256-gcm" | "aes256gcm" | "aes" => Ok(AeadAlgorithm::Aes256Gcm),
            "chacha20-poly1305" | "chacha20poly1305" | "chacha" => {
                Ok(AeadAlgorithm::ChaCha20Poly1305)
            }
            other => Err(CryptoError::InvalidConfigError(format!(
                "unknown AEAD algorithm: {}",
                other
            ))),
        }
    }
}

/// Зашифрованный конверт; длина всегда не меньше [`ENVELOPE_OVERHEAD`]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ByteBuf", into = "ByteBuf")]
pub struct EncryptedEnvelope(Vec<u8>);

#[allow(clippy::len_without_is_empty)]
impl EncryptedEnvelope {
    /// Разобрать конверт из байтов, проверив минимальную длину
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < ENVELOPE_OVERHEAD {
            return Err(CryptoError::MalformedEnvelopeError {
                actual: bytes.len(),
                minimum: ENVELOPE_OVERHEAD,
            });
        }
        Ok(Self(bytes))
    }

    pub fn nonce(&self) -> &[u8] {
        &self.0[..NONCE_SIZE]
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.0[NONCE_SIZE..self.0.len() - TAG_SIZE]
    }

    pub fn tag(&self) -> &[u8] {
        &self.0[self.0.len() - TAG_SIZE..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Конверт никогда не бывает пустым; true только если plaintext был пуст
    pub fn has_empty_plaintext(&self) -> bool {
        self.0.len() == ENVELOPE_OVERHEAD
    }
}

impl AsRef<[u8]> for EncryptedEnvelope {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for EncryptedEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedEnvelope")
            .field("nonce", &hex::encode(self.nonce()))
            .field("ciphertext_len", &self.ciphertext().len())
            .finish()
    }
}

impl TryFrom<ByteBuf> for EncryptedEnvelope {
    type Error = CryptoError;

    fn try_from(buf: ByteBuf) -> Result<Self> {
        Self::from_bytes(buf.into_vec())
    }
}

impl From<EncryptedEnvelope> for ByteBuf {
    fn from(envelope: EncryptedEnvelope) -> Self {
        ByteBuf::from(envelope.0)
    }
}

/// Кодек конверта для выбранного алгоритма
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeadCodec {
    algorithm: AeadAlgorithm,
}

impl Default for AeadCodec {
    fn default() -> Self {
        Self::new(crate::config::Config::global().aead_algorithm)
    }
}

impl AeadCodec {
    pub fn new(algorithm: AeadAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> AeadAlgorithm {
        self.algorithm
    }

    /// Зашифровать `plaintext` ключом `key` со свежим nonce
    pub fn seal(&self, plaintext: &[u8], key: &[u8]) -> Result<EncryptedEnvelope> {
        check_key(key)?;

        let mut nonce = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce);

        // aead-крейты возвращают ciphertext ‖ tag, остаётся дописать nonce спереди
        let sealed = match self.algorithm {
            AeadAlgorithm::Aes256Gcm => {
                let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| key_size_error(key))?;
                cipher.encrypt(aes_gcm::Nonce::from_slice(&nonce), plaintext)
            }
            AeadAlgorithm::ChaCha20Poly1305 => {
                let cipher =
                    ChaCha20Poly1305::new_from_slice(key).map_err(|_| key_size_error(key))?;
                cipher.encrypt(chacha20poly1305::Nonce::from_slice(&nonce), plaintext)
            }
        }
        .map_err(|e| CryptoError::AeadEncryptionError(e.to_string()))?;

        let mut envelope = Vec::with_capacity(NONCE_SIZE + sealed.len());
        envelope.extend_from_slice(&nonce);
        envelope.extend_from_slice(&sealed);

        debug!(
            target: "crypto::aead",
            algorithm = %self.algorithm,
            plaintext_len = plaintext.len(),
            envelope_len = envelope.len(),
            "Sealed envelope"
        );

        Ok(EncryptedEnvelope(envelope))
    }

    /// Расшифровать конверт и проверить тег
    pub fn open(&self, envelope: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        check_key(key)?;

        if envelope.len() < ENVELOPE_OVERHEAD {
            return Err(CryptoError::MalformedEnvelopeError {
                actual: envelope.len(),
                minimum: ENVELOPE_OVERHEAD,
            });
        }

        let (nonce, sealed) = envelope.split_at(NONCE_SIZE);
        let plaintext = match self.algorithm {
            AeadAlgorithm::Aes256Gcm => {
                let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| key_size_error(key))?;
                cipher.decrypt(aes_gcm::Nonce::from_slice(nonce), sealed)
            }
            AeadAlgorithm::ChaCha20Poly1305 => {
                let cipher =
                    ChaCha20Poly1305::new_from_slice(key).map_err(|_| key_size_error(key))?;
                cipher.decrypt(chacha20poly1305::Nonce::from_slice(nonce), sealed)
            }
        }?;

        debug!(
            target: "crypto::aead",
            algorithm = %self.algorithm,
            plaintext_len = plaintext.len(),
            "Opened envelope"
        );

        Ok(plaintext)
    }
}

fn key_size_error(key: &[u8]) -> CryptoError {
    CryptoError::InvalidKeySizeError {
        expected: AEAD_KEY_SIZE,
        actual: key.len(),
    }
}

fn check_key(key: &[u8]) -> Result<()> {
    if key.len() != AEAD_KEY_SIZE {
        return Err(key_size_error(key));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALGORITHMS: [AeadAlgorithm; 2] =
        [AeadAlgorithm::Aes256Gcm, AeadAlgorithm::ChaCha20Poly1305];

    #[test]
    fn test_seal_open_roundtrip() {
        let key = [7u8; 32];
        for algorithm in ALGORITHMS {
            let codec = AeadCodec::new(algorithm);
            let envelope = codec.seal(b"test", &key).unwrap();
            assert_eq!(codec.open(envelope.as_bytes(), &key).unwrap(), b"test");
        }
    }

    #[test]
    fn test_envelope_length_invariant() {
        let key = [1u8; 32];
        let codec = AeadCodec::new(AeadAlgorithm::Aes256Gcm);
        for len in [0usize, 1, 15, 16, 17, 1000] {
            let plaintext = vec![0x42; len];
            let envelope = codec.seal(&plaintext, &key).unwrap();
            assert_eq!(envelope.len(), len + 28);
            assert_eq!(envelope.nonce().len(), 12);
            assert_eq!(envelope.ciphertext().len(), len);
            assert_eq!(envelope.tag().len(), 16);
        }
    }

    #[test]
    fn test_empty_plaintext_roundtrip() {
        let key = [3u8; 32];
        let codec = AeadCodec::new(AeadAlgorithm::ChaCha20Poly1305);
        let envelope = codec.seal(b"", &key).unwrap();
        assert!(envelope.has_empty_plaintext());
        assert_eq!(envelope.len(), ENVELOPE_OVERHEAD);
        assert!(!codec.seal(b"x", &key).unwrap().has_empty_plaintext());
        assert!(codec.open(envelope.as_bytes(), &key).unwrap().is_empty());
    }

    #[test]
    fn test_tamper_any_byte_fails_authentication() {
        let key = [9u8; 32];
        for algorithm in ALGORITHMS {
            let codec = AeadCodec::new(algorithm);
            let envelope = codec.seal(b"tamper-evident payload", &key).unwrap();

            for i in 0..envelope.len() {
                let mut corrupted = envelope.as_bytes().to_vec();
                corrupted[i] ^= 0x01;
                assert_eq!(
                    codec.open(&corrupted, &key).unwrap_err(),
                    CryptoError::AuthenticationError,
                    "{} accepted corruption at byte {}",
                    algorithm,
                    i
                );
            }
        }
    }

    #[test]
    fn test_wrong_key_fails_authentication() {
        let codec = AeadCodec::new(AeadAlgorithm::Aes256Gcm);
        let envelope = codec.seal(b"secret", &[0u8; 32]).unwrap();
        assert_eq!(
            codec.open(envelope.as_bytes(), &[1u8; 32]).unwrap_err(),
            CryptoError::AuthenticationError
        );
    }

    #[test]
    fn test_cross_algorithm_open_fails() {
        let key = [5u8; 32];
        let envelope = AeadCodec::new(AeadAlgorithm::Aes256Gcm)
            .seal(b"payload", &key)
            .unwrap();
        let result = AeadCodec::new(AeadAlgorithm::ChaCha20Poly1305).open(envelope.as_bytes(), &key);
        assert_eq!(result.unwrap_err(), CryptoError::AuthenticationError);
    }

    #[test]
    fn test_short_envelope_is_malformed() {
        let codec = AeadCodec::new(AeadAlgorithm::Aes256Gcm);
        assert_eq!(
            codec.open(&[0u8; 27], &[0u8; 32]).unwrap_err(),
            CryptoError::MalformedEnvelopeError {
                actual: 27,
                minimum: 28
            }
        );
        assert!(EncryptedEnvelope::from_bytes(vec![0u8; 27]).is_err());
        assert!(EncryptedEnvelope::from_bytes(vec![0u8; 28]).is_ok());
    }

    #[test]
    fn test_invalid_key_size() {
        let codec = AeadCodec::new(AeadAlgorithm::ChaCha20Poly1305);
        assert_eq!(
            codec.seal(b"x", &[0u8; 16]).unwrap_err(),
            CryptoError::InvalidKeySizeError {
                expected: 32,
                actual: 16
            }
        );
        assert_eq!(
            codec.open(&[0u8; 40], &[0u8; 33]).unwrap_err(),
            CryptoError::InvalidKeySizeError {
                expected: 32,
                actual: 33
            }
        );
    }

    #[test]
    fn test_fresh_nonce_per_seal() {
        let key = [2u8; 32];
        let codec = AeadCodec::new(AeadAlgorithm::Aes256Gcm);
        let a = codec.seal(b"same", &key).unwrap();
        let b = codec.seal(b"same", &key).unwrap();
        assert_ne!(a.nonce(), b.nonce());
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_algorithm_parse_and_display() {
        assert_eq!(
            "chacha20-poly1305".parse::<AeadAlgorithm>().unwrap(),
            AeadAlgorithm::ChaCha20Poly1305
        );
        assert_eq!(" AES-256-GCM ".parse::<AeadAlgorithm>().unwrap(), AeadAlgorithm::Aes256Gcm);
        assert!("rot13".parse::<AeadAlgorithm>().is_err());
        assert_eq!(AeadAlgorithm::Aes256Gcm.to_string(), "aes-256-gcm");
        assert_eq!(
            serde_json::to_string(&AeadAlgorithm::ChaCha20Poly1305).unwrap(),
            "\"chacha20-poly1305\""
        );
        assert_eq!(
            serde_json::to_string(&AeadAlgorithm::Aes256Gcm).unwrap(),
            "\"aes-256-gcm\""
        );
    }
}
