//! Криптографические наборы (Crypto Suites)
//!
//! Реализации [`KemScheme`](crate::crypto::provider::KemScheme) и
//! [`SignatureScheme`](crate::crypto::provider::SignatureScheme).
//!
//! ## Доступные наборы
//!
//! ### Simulated Suite (текущий)
//! - **KEM**: Kyber-768-shaped, SHA-256 based (pk 1184, sk 2400, ct 1088, ss 32)
//! - **Signatures**: Dilithium2-shaped, SHA-512 based (pk 1312, sk 2560, sig 2420)
//!
//! Настоящий PQC backend подключается новой реализацией тех же trait'ов.
//!
//! ```rust
//! use qkd_pqc_core::crypto::provider::KemScheme;
//! use qkd_pqc_core::crypto::suites::simulated::SimulatedKyber;
//!
//! let keys = SimulatedKyber::generate_keypair(b"seed")?;
//! let encap = SimulatedKyber::encapsulate(&keys.public_key)?;
//! assert_eq!(encap.ciphertext.len(), SimulatedKyber::CIPHERTEXT_SIZE);
//! # Ok::<(), qkd_pqc_core::error::CryptoError>(())
//! ```

pub mod simulated;
