// QKD-PQC Core
// Hybrid QKD seed → post-quantum KEM/signatures → AEAD pipeline

#![warn(clippy::all)]

// Модули
pub mod config;
pub mod crypto;
pub mod error;
pub mod protocol;
pub mod utils;

// Re-exports для удобства
pub use config::Config;
pub use crypto::hybrid::{run_demo, HybridPipeline, HybridReport, SimulatedPipeline};
pub use error::{CryptoError, Result};
