//! Hybrid Orchestrator
//!
//! Единственный компонент, который знает обо всех остальных.
//!
//! ```text
//! QuantumBitVector
//!   │ seed::expand
//!   ▼
//! SeedMaterial ──► K::generate_keypair ──► K::encapsulate(pk) ──► shared secret
//!   │                                                                │
//!   │                                               AeadCodec::seal ◄┘
//!   │                                                    │
//!   └──────────► S::generate_keypair ──► S::sign(envelope)
//!                                                    │
//!                         SessionTranscript ◄────────┘
//!                                │
//!           S::verify ──► K::decapsulate(ct, sk) ──► AeadCodec::open ──► plaintext
//! ```
//!
//! ## Ответственность
//!
//! - Порядок шагов и короткое замыкание на первой ошибке
//! - Разделение на половину отправителя (`seal_and_sign`) и получателя (`verify_and_open`)
//! - Итоговая проверка: восстановленный plaintext совпадает с исходным
//!
//! ## Не отвечает за
//!
//! - Сами примитивы (это [`KemScheme`] / [`SignatureScheme`] / [`AeadCodec`])
//! - Квантовый обмен и CLI

use crate::config::Config;
use crate::crypto::aead::{AeadAlgorithm, AeadCodec};
use crate::crypto::provider::{KemScheme, SignatureScheme};
use crate::crypto::seed::{self, QuantumBitVector, SeedMaterial};
use crate::crypto::suites::simulated::{SimulatedDilithium, SimulatedKyber};
use crate::error::{CryptoError, Result};
use crate::protocol::messages::SessionTranscript;
use crate::utils::preview::hex_preview;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// Пайплайн на симулированных Kyber/Dilithium
pub type SimulatedPipeline = HybridPipeline<SimulatedKyber, SimulatedDilithium>;

/// Итог полного прогона encrypt-sign / verify-decrypt
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridReport {
    pub session_id: String,
    pub kem_scheme: &'static str,
    pub signature_scheme: &'static str,
    pub aead_algorithm: AeadAlgorithm,
    pub kem_public_key_preview: String,
    pub envelope_len: usize,
    pub signature_len: usize,
    #[serde(skip)]
    pub recovered_plaintext: Vec<u8>,
    /// Plaintext как UTF-8, если он валиден
    pub recovered_text: Option<String>,
    pub success: bool,
}

impl HybridReport {
    pub fn recovered_text(&self) -> Option<&str> {
        self.recovered_text.as_deref()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CryptoError::SerializationError(e.to_string()))
    }
}

/// Отдельная демонстрация KEM: keygen → encapsulate → decapsulate
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KemReport {
    pub kem_scheme: &'static str,
    pub public_key_preview: String,
    pub ciphertext_preview: String,
    pub ciphertext_len: usize,
    pub shared_secret_len: usize,
    pub secrets_match: bool,
}

/// Отдельная демонстрация подписи: keygen → sign → verify
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureReport {
    pub signature_scheme: &'static str,
    pub public_key_preview: String,
    /// SHA-256 сообщения (hex)
    pub message_digest: String,
    pub signature_preview: String,
    pub signature_len: usize,
    pub signature_valid: bool,
}

/// Оркестратор поверх двух capability trait'ов
///
/// ## Generics
///
/// - `K`: KemScheme - KEM (Kyber-shaped)
/// - `S`: SignatureScheme - подписи (Dilithium-shaped)
pub struct HybridPipeline<K: KemScheme, S: SignatureScheme> {
    codec: AeadCodec,
    preview_bytes: usize,
    _phantom: PhantomData<(K, S)>,
}

impl<K: KemScheme, S: SignatureScheme> Default for HybridPipeline<K, S> {
    fn default() -> Self {
        Self::new(Config::global())
    }
}

impl<K: KemScheme, S: SignatureScheme> HybridPipeline<K, S> {
    pub fn new(config: &Config) -> Self {
        Self {
            codec: AeadCodec::new(config.aead_algorithm),
            preview_bytes: config.preview_bytes,
            _phantom: PhantomData,
        }
    }

    pub fn codec(&self) -> AeadCodec {
        self.codec
    }

    /// Полный прогон: derive → keygen → encapsulate → seal → sign → verify → decapsulate → open
    pub fn run(&self, bits: &QuantumBitVector, plaintext: &[u8]) -> Result<HybridReport> {
        let session_id = new_session_id();
        info!(
            target: "crypto::hybrid",
            session_id = %session_id,
            bits = bits.len(),
            plaintext_len = plaintext.len(),
            kem = K::NAME,
            signature = S::NAME,
            aead = %self.codec.algorithm(),
            "Starting hybrid session"
        );

        let seed = seed::expand(bits)?;

        // KEM пара принадлежит получателю; здесь обе стороны в одном процессе
        let kem_keys = K::generate_keypair(seed.as_bytes())?;

        let transcript =
            self.seal_and_sign_session(session_id, &seed, &kem_keys.public_key, plaintext)?;
        let recovered = self.verify_and_open(&transcript, &kem_keys.secret_key)?;

        let success = recovered == plaintext;
        if !success {
            warn!(
                target: "crypto::hybrid",
                session_id = %transcript.session_id,
                "Recovered plaintext differs from the original"
            );
        }

        info!(
            target: "crypto::hybrid",
            session_id = %transcript.session_id,
            envelope_len = transcript.envelope.len(),
            signature_len = transcript.signature.len(),
            success,
            "Hybrid session finished"
        );

        let recovered_text = String::from_utf8(recovered.clone()).ok();
        Ok(HybridReport {
            session_id: transcript.session_id,
            kem_scheme: K::NAME,
            signature_scheme: S::NAME,
            aead_algorithm: transcript.aead_algorithm,
            kem_public_key_preview: hex_preview(&kem_keys.public_key, self.preview_bytes),
            envelope_len: transcript.envelope.len(),
            signature_len: transcript.signature.len(),
            recovered_plaintext: recovered,
            recovered_text,
            success,
        })
    }

    /// Половина отправителя: encapsulate → seal → sign
    pub fn seal_and_sign(
        &self,
        seed: &SeedMaterial,
        recipient_kem_public_key: &[u8],
        plaintext: &[u8],
    ) -> Result<SessionTranscript> {
        self.seal_and_sign_session(new_session_id(), seed, recipient_kem_public_key, plaintext)
    }

    fn seal_and_sign_session(
        &self,
        session_id: String,
        seed: &SeedMaterial,
        recipient_kem_public_key: &[u8],
        plaintext: &[u8],
    ) -> Result<SessionTranscript> {
        let encapsulation = K::encapsulate(recipient_kem_public_key)?;
        debug!(
            target: "crypto::hybrid",
            session_id = %session_id,
            ciphertext = %hex_preview(&encapsulation.ciphertext, self.preview_bytes),
            "KEM encapsulation done"
        );

        let envelope = self.codec.seal(plaintext, &encapsulation.shared_secret)?;

        let signing_keys = S::generate_keypair(seed.as_bytes())?;
        let signature = S::sign(envelope.as_bytes(), &signing_keys.secret_key)?;
        debug!(
            target: "crypto::hybrid",
            session_id = %session_id,
            envelope_len = envelope.len(),
            signature = %hex_preview(&signature, self.preview_bytes),
            "Envelope signed"
        );

        Ok(SessionTranscript {
            session_id,
            kem_ciphertext: encapsulation.ciphertext,
            aead_algorithm: self.codec.algorithm(),
            envelope,
            signature,
            signature_public_key: signing_keys.public_key,
        })
    }

    /// Половина получателя: verify → decapsulate → open
    ///
    /// При отказе проверки подписи дальше ничего не выполняется и plaintext не возвращается.
    pub fn verify_and_open(
        &self,
        transcript: &SessionTranscript,
        kem_secret_key: &[u8],
    ) -> Result<Vec<u8>> {
        let valid = S::verify(
            transcript.envelope.as_bytes(),
            &transcript.signature,
            &transcript.signature_public_key,
        )?;
        if !valid {
            warn!(
                target: "crypto::hybrid",
                session_id = %transcript.session_id,
                "Signature rejected, aborting receive path"
            );
            return Err(CryptoError::SignatureVerificationError(format!(
                "{} rejected the envelope signature",
                S::NAME
            )));
        }

        let shared_secret = K::decapsulate(&transcript.kem_ciphertext, kem_secret_key)?;
        let plaintext =
            AeadCodec::new(transcript.aead_algorithm).open(transcript.envelope.as_bytes(), &shared_secret)?;

        debug!(
            target: "crypto::hybrid",
            session_id = %transcript.session_id,
            plaintext_len = plaintext.len(),
            "Envelope verified and opened"
        );
        Ok(plaintext)
    }

    /// Демонстрация KEM отдельно от пайплайна
    pub fn kem_roundtrip(&self, seed: &SeedMaterial) -> Result<KemReport> {
        let keys = K::generate_keypair(seed.as_bytes())?;
        let encapsulation = K::encapsulate(&keys.public_key)?;
        let decapsulated = K::decapsulate(&encapsulation.ciphertext, &keys.secret_key)?;

        let secrets_match = *encapsulation.shared_secret == *decapsulated;
        debug!(target: "crypto::hybrid", secrets_match, "KEM round trip done");

        Ok(KemReport {
            kem_scheme: K::NAME,
            public_key_preview: hex_preview(&keys.public_key, self.preview_bytes),
            ciphertext_preview: hex_preview(&encapsulation.ciphertext, self.preview_bytes),
            ciphertext_len: encapsulation.ciphertext.len(),
            shared_secret_len: decapsulated.len(),
            secrets_match,
        })
    }

    /// Демонстрация подписи отдельно от пайплайна
    pub fn signature_roundtrip(&self, seed: &SeedMaterial, message: &[u8]) -> Result<SignatureReport> {
        let keys = S::generate_keypair(seed.as_bytes())?;
        let signature = S::sign(message, &keys.secret_key)?;
        let signature_valid = S::verify(message, &signature, &keys.public_key)?;
        debug!(target: "crypto::hybrid", signature_valid, "Signature round trip done");

        Ok(SignatureReport {
            signature_scheme: S::NAME,
            public_key_preview: hex_preview(&keys.public_key, self.preview_bytes),
            message_digest: hex::encode(Sha256::digest(message)),
            signature_preview: hex_preview(&signature, self.preview_bytes),
            signature_len: signature.len(),
            signature_valid,
        })
    }
}

fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Демонстрационный прогон с сообщением из глобальной конфигурации
pub fn run_demo(bits: &QuantumBitVector) -> Result<HybridReport> {
    let config = Config::global();
    SimulatedPipeline::new(config).run(bits, config.demo_message.as_bytes())
}
