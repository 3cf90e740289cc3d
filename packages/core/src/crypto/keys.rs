// Ключевой материал одного запуска пайплайна
// Секреты живут только внутри запуска и обнуляются при drop

use zeroize::Zeroizing;

/// Общий секрет KEM (32 байта для Kyber-подобной схемы)
pub type SharedSecret = Zeroizing<Vec<u8>>;

/// Пара ключей, принадлежащая стороне, которая её сгенерировала.
///
/// Публичный ключ можно отдавать, секретный не должен покидать владельца.
#[derive(Clone)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    pub secret_key: Zeroizing<Vec<u8>>,
}

impl KeyPair {
    pub fn new(public_key: Vec<u8>, secret_key: Vec<u8>) -> Self {
        Self {
            public_key,
            secret_key: Zeroizing::new(secret_key),
        }
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key_len", &self.public_key.len())
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Результат инкапсуляции: шифротекст уходит получателю, секрет остаётся у отправителя
#[derive(Clone)]
pub struct Encapsulation {
    pub ciphertext: Vec<u8>,
    pub shared_secret: SharedSecret,
}

impl std::fmt::Debug for Encapsulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encapsulation")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("shared_secret", &"[REDACTED]")
            .finish()
    }
}
