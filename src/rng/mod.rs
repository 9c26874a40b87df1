//! Deterministic random number generation
//!
//! Uses L'Ecuyer's MRG32k3a combined multiple recursive generator.
//! CRITICAL: the output stream is a reference sequence; it must match
//! other implementations bit-for-bit.

mod mrg32k3a;

pub use mrg32k3a::{Mrg32k3a, SeedError};
