// Типы ошибок пайплайна
// Все ошибки терминальны для текущего запуска: никаких retry и частичного восстановления

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Empty input: no quantum bits supplied")]
    EmptyInputError,
    #[error("Invalid {what} size: expected {expected} bytes, got {actual}")]
    InvalidSizeError {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid AEAD key size: expected {expected} bytes, got {actual}")]
    InvalidKeySizeError { expected: usize, actual: usize },
    #[error("Malformed envelope: {actual} bytes, need at least {minimum}")]
    MalformedEnvelopeError { actual: usize, minimum: usize },
    #[error("AEAD authentication failed: wrong key or corrupted envelope")]
    AuthenticationError,
    #[error("Signature verification failed: {0}")]
    SignatureVerificationError(String),
    #[error("AEAD encryption failed: {0}")]
    AeadEncryptionError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfigError(String),
}

impl From<aes_gcm::Error> for CryptoError {
    fn from(_: aes_gcm::Error) -> Self {
        // aead::Error намеренно непрозрачна; на open это всегда несовпадение тега
        CryptoError::AuthenticationError
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Проверка длины буфера против фиксированной константы схемы
pub(crate) fn ensure_size(what: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(CryptoError::InvalidSizeError {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}
