//! MRG32k3a Reference Generator
//!
//! Deterministic pseudo-random number generation with bit-exact
//! reproducibility across implementations.
//!
//! # Architecture
//!
//! - **rng**: the MRG32k3a combined multiple recursive generator
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded, no entropy sources)
//! 2. Outputs are raw u32 draws in [0, 4294967087), never floats
//! 3. State words always stay below their register's modulus

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{Mrg32k3a, SeedError};
