// Типы сообщений протокола
// То, что реально уходит от отправителя к получателю за один запуск

use crate::crypto::aead::{AeadAlgorithm, EncryptedEnvelope};
use serde::{Deserialize, Serialize};

/// Транскрипт сессии: всё, что нужно получателю кроме его секретного KEM ключа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTranscript {
    /// UUID v4 идентификатор запуска
    pub session_id: String,
    /// Шифротекст KEM (1088 bytes для Kyber-768)
    #[serde(with = "serde_bytes")]
    pub kem_ciphertext: Vec<u8>,
    /// Алгоритм, которым запечатан конверт
    pub aead_algorithm: AeadAlgorithm,
    /// nonce ‖ ciphertext ‖ tag
    pub envelope: EncryptedEnvelope,
    /// Подпись над байтами конверта
    #[serde(with = "serde_bytes")]
    pub signature: Vec<u8>,
    /// Публичный ключ подписи отправителя
    #[serde(with = "serde_bytes")]
    pub signature_public_key: Vec<u8>,
}
