//! Seed Expander
//!
//! Превращает сырой битовый вектор из квантового обмена (BB84) в 64 байта
//! seed material для детерминированной генерации ключей.
//!
//! ```text
//! bits: [1,0,1,1,0,0,1,0, 1,1,0,0]
//!         │ LSB-first внутри байта
//!         ▼
//! packed: [0x4d, 0x03]
//!         │ SHA-512
//!         ▼
//! SeedMaterial (64 bytes)
//! ```

use crate::error::{CryptoError, Result};
use sha2::{Digest, Sha512};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Размер seed material (выход SHA-512)
pub const SEED_SIZE: usize = 64;

/// Упорядоченная последовательность битов от внешнего квантового обмена
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuantumBitVector {
    bits: Vec<bool>,
}

impl QuantumBitVector {
    /// Из значений 0/1; любой байт кроме 1 считается нулевым битом
    pub fn from_bits(bits: &[u8]) -> Self {
        bits.iter().map(|&b| b == 1).collect()
    }

    /// Из 64-битных значений, которые отдаёт симулятор BB84
    pub fn from_values(values: &[i64]) -> Self {
        values.iter().map(|&v| v == 1).collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Упаковать биты: бит `i` попадает в байт `i / 8`, позицию `i % 8`
    pub fn pack(&self) -> Vec<u8> {
        let mut packed = vec![0u8; (self.bits.len() + 7) / 8];
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                packed[i / 8] |= 1 << (i % 8);
            }
        }
        packed
    }
}

impl FromIterator<bool> for QuantumBitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

/// Seed material, выведенный из квантового ключа
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SeedMaterial([u8; SEED_SIZE]);

impl SeedMaterial {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SeedMaterial {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SeedMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SeedMaterial([REDACTED; 64])")
    }
}

/// Развернуть битовый вектор в [`SeedMaterial`]
pub fn expand(bits: &QuantumBitVector) -> Result<SeedMaterial> {
    if bits.is_empty() {
        return Err(CryptoError::EmptyInputError);
    }

    let mut packed = bits.pack();
    let mut seed = [0u8; SEED_SIZE];
    seed.copy_from_slice(&Sha512::digest(&packed));
    packed.zeroize();

    debug!(
        target: "crypto::seed",
        bits = bits.len(),
        seed_len = SEED_SIZE,
        "Quantum key expanded into seed material"
    );

    Ok(SeedMaterial(seed))
}
