//! Deterministic Byte Stream
//!
//! Расширяемый поток псевдослучайных байт от seed. Заменяет внутреннюю
//! случайность схем при генерации ключей, чтобы ключи воспроизводились из seed.
//!
//! Состояние: пул SHA-512 (64 байта) + курсор. Когда курсор доходит до конца пула,
//! пул заменяется на `SHA-512(pool)`.
//!
//! ⚠️ Это не проверенный CSPRNG, поэтому `CryptoRng` здесь не реализован.

use rand_core::{impls, Error, RngCore};
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

const POOL_SIZE: usize = 64;

#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DeterministicStream {
    pool: [u8; POOL_SIZE],
    cursor: usize,
}

impl DeterministicStream {
    /// Создать поток из seed произвольной длины (в том числе пустого)
    pub fn new(seed: &[u8]) -> Self {
        let mut pool = [0u8; POOL_SIZE];
        pool.copy_from_slice(&Sha512::digest(seed));
        Self { pool, cursor: 0 }
    }

    /// Заполнить `buffer` следующими байтами потока
    pub fn fill(&mut self, buffer: &mut [u8]) {
        let mut written = 0;
        while written < buffer.len() {
            if self.cursor == POOL_SIZE {
                self.rekey();
            }
            let take = (POOL_SIZE - self.cursor).min(buffer.len() - written);
            buffer[written..written + take]
                .copy_from_slice(&self.pool[self.cursor..self.cursor + take]);
            self.cursor += take;
            written += take;
        }
    }

    fn rekey(&mut self) {
        let next = Sha512::digest(self.pool);
        self.pool.copy_from_slice(&next);
        self.cursor = 0;
    }
}

impl RngCore for DeterministicStream {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_block_is_hash_of_seed() {
        let mut stream = DeterministicStream::new(b"abc");
        let mut out = [0u8; 64];
        stream.fill(&mut out);
        assert_eq!(out.to_vec(), Sha512::digest(b"abc").to_vec());
    }

    #[test]
    fn test_pool_rekeys_across_boundary() {
        let mut stream = DeterministicStream::new(b"abc");
        let mut out = [0u8; 70];
        stream.fill(&mut out);

        let first = Sha512::digest(b"abc");
        let second = Sha512::digest(first);
        assert_eq!(&out[..64], first.as_slice());
        assert_eq!(&out[64..], &second[..6]);
        assert_eq!(hex::encode(&out[64..]), "373a9f3a902c");
    }

    #[test]
    fn test_chunking_does_not_change_output() {
        let mut whole = DeterministicStream::new(b"seed");
        let mut a = vec![0u8; 300];
        whole.fill(&mut a);

        let mut pieces = DeterministicStream::new(b"seed");
        let mut b = vec![0u8; 300];
        for chunk in b.chunks_mut(7) {
            pieces.fill(chunk);
        }

        assert_eq!(a, b);
    }

    #[test]
    fn test_identical_seeds_identical_streams() {
        let mut s1 = DeterministicStream::new(&[7u8; 64]);
        let mut s2 = DeterministicStream::new(&[7u8; 64]);
        assert_eq!(s1.next_u64(), s2.next_u64());

        let mut a = vec![0u8; 1000];
        let mut b = vec![0u8; 1000];
        s1.fill_bytes(&mut a);
        s2.fill_bytes(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_seed_is_accepted() {
        let mut stream = DeterministicStream::new(&[]);
        let mut out = [0u8; 16];
        stream.fill(&mut out);
        assert_eq!(&out[..], &Sha512::digest(b"")[..16]);
    }
}
