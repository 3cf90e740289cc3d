//! Криптографический модуль
//!
//! # Архитектура
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  HybridPipeline (Orchestrator)              │
//! │  - seal_and_sign: encapsulate → seal → sign                 │
//! │  - verify_and_open: verify → decapsulate → open             │
//! │  - run: полный прогон + сравнение plaintext                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        ▼                     ▼                     ▼
//! ┌──────────────┐  ┌────────────────────┐  ┌──────────────────┐
//! │ Seed (QKD)   │  │ KemScheme /        │  │ AeadCodec        │
//! │ - pack bits  │  │ SignatureScheme    │  │ - AES-256-GCM    │
//! │ - SHA-512    │  │ - simulated suite  │  │ - ChaCha20-Poly  │
//! └──────────────┘  └────────────────────┘  └──────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              DeterministicStream (SHA-512 chain)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Модули
//!
//! ### Core Traits
//! - [`provider`]: KemScheme / SignatureScheme для crypto-agility
//!
//! ### Implementations
//! - [`suites`]: симулированные Kyber768 / Dilithium2
//! - [`aead`]: AEAD конверт nonce ‖ ciphertext ‖ tag
//!
//! ### High-Level APIs
//! - [`hybrid`]: HybridPipeline
//!
//! ### Utilities
//! - [`seed`]: QuantumBitVector → SeedMaterial
//! - [`drbg`]: детерминированный поток байт из seed
//! - [`keys`]: KeyPair, Encapsulation

// ============================================================================
// Core Traits
// ============================================================================

/// KEM и Signature trait'ы для crypto-agility
pub mod provider;

// ============================================================================
// Implementations
// ============================================================================

/// Криптографические наборы (Simulated)
pub mod suites;

/// AEAD (AES-256-GCM, ChaCha20-Poly1305)
pub mod aead;

// ============================================================================
// High-Level APIs
// ============================================================================

/// Hybrid pipeline - объединяет seed + KEM + AEAD + подписи
pub mod hybrid;

// ============================================================================
// Utilities
// ============================================================================

pub mod seed;

pub mod drbg;

pub mod keys;

// ============================================================================
// Re-exports для удобства
// ============================================================================

pub use aead::{AeadAlgorithm, AeadCodec, EncryptedEnvelope};
pub use hybrid::{HybridPipeline, HybridReport, SimulatedPipeline};
pub use provider::{KemScheme, SignatureScheme};
pub use seed::{QuantumBitVector, SeedMaterial};
