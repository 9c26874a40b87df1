//! MRG32k3a combined multiple recursive generator
//!
//! L'Ecuyer's MRG32k3a: two order-3 linear recurrences modulo two distinct
//! primes just below 2^32, combined by subtraction. Period ~2^191.
//!
//! # Determinism
//!
//! Same seed → same sequence, bit-for-bit, on every platform. This is
//! CRITICAL for:
//! - Debugging (reproduce exact runs)
//! - Testing (golden-value fixtures)
//! - Research (validate results against other implementations)
//!
//! # Output
//!
//! Unlike the published paper, which normalizes the combined difference
//! into a uniform float in (0, 1), this generator returns the raw integer
//! difference wrapped into [0, m1). Callers get a `u32` stream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Modulus of the first recurrence (2^32 - 209, prime)
const M1: i64 = 4_294_967_087;

/// Modulus of the second recurrence (2^32 - 22853, prime)
const M2: i64 = 4_294_944_443;

/// First recurrence coefficients: p1 = a12*a1 - a13n*a0 (mod m1)
const A12: i64 = 1_403_580;
const A13N: i64 = 810_728;

/// Second recurrence coefficients: p2 = a21*b2 - a23n*b0 (mod m2)
const A21: i64 = 527_612;
const A23N: i64 = 1_370_589;

/// Canonical seed value for every state word
const CANONICAL_SEED_WORD: u32 = 12_345;

/// Errors that can occur when seeding the generator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed word {index} is {value}, must be below modulus {modulus}")]
    WordOutOfRange {
        index: usize,
        value: u32,
        modulus: u32,
    },

    #[error("Register {register} seed is all zero, a fixed point of the recurrence")]
    DegenerateRegister { register: char },
}

/// Deterministic random number generator using MRG32k3a
///
/// The state is two 3-word shift registers, one per recurrence, oldest
/// word first. Each call to [`next`](Mrg32k3a::next) advances both
/// registers by one step and combines the freshly produced words.
///
/// # Example
/// ```
/// use mrg32k3a::Mrg32k3a;
///
/// let mut rng = Mrg32k3a::new();
/// assert_eq!(rng.next(), 545508589);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mrg32k3a {
    /// Register A: feeds the first recurrence, words in [0, m1)
    a: [i64; 3],
    /// Register B: feeds the second recurrence, words in [0, m2)
    b: [i64; 3],
}

impl Mrg32k3a {
    /// Create a generator in the canonical seeded state
    ///
    /// All six state words start at 12345.
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::Mrg32k3a;
    ///
    /// let rng = Mrg32k3a::new();
    /// assert_eq!(rng.state(), [12345; 6]);
    /// ```
    pub fn new() -> Self {
        Self {
            a: [i64::from(CANONICAL_SEED_WORD); 3],
            b: [i64::from(CANONICAL_SEED_WORD); 3],
        }
    }

    /// Create a generator from a custom six-word seed
    ///
    /// Words 0..3 seed register A (oldest first), words 3..6 register B.
    ///
    /// # Returns
    /// - Ok(generator) if every word is below its register's modulus and
    ///   neither register is all zero
    /// - Err otherwise (the all-zero register state never leaves zero)
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::Mrg32k3a;
    ///
    /// let mut rng = Mrg32k3a::with_seed([12345; 6]).unwrap();
    /// assert_eq!(rng.next(), 545508589);
    ///
    /// assert!(Mrg32k3a::with_seed([0, 0, 0, 12345, 12345, 12345]).is_err());
    /// ```
    pub fn with_seed(seed: [u32; 6]) -> Result<Self, SeedError> {
        for (index, &value) in seed.iter().enumerate() {
            let modulus = if index < 3 { M1 } else { M2 };
            if i64::from(value) >= modulus {
                return Err(SeedError::WordOutOfRange {
                    index,
                    value,
                    modulus: modulus as u32,
                });
            }
        }
        if seed[..3] == [0, 0, 0] {
            return Err(SeedError::DegenerateRegister { register: 'A' });
        }
        if seed[3..] == [0, 0, 0] {
            return Err(SeedError::DegenerateRegister { register: 'B' });
        }

        Ok(Self {
            a: [
                i64::from(seed[0]),
                i64::from(seed[1]),
                i64::from(seed[2]),
            ],
            b: [
                i64::from(seed[3]),
                i64::from(seed[4]),
                i64::from(seed[5]),
            ],
        })
    }

    /// Generate the next random u32 value
    ///
    /// Advances both registers by one step and returns the combined
    /// output, always in [0, 4294967087).
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::Mrg32k3a;
    ///
    /// let mut rng = Mrg32k3a::new();
    /// let value = rng.next();
    /// assert!((value as i64) < 4294967087);
    /// ```
    pub fn next(&mut self) -> u32 {
        // First recurrence. The quotient must truncate toward zero, with a
        // single corrective add for negative residues; i64 division does
        // exactly that. A floored modulo is not equivalent here.
        let mut p1 = A12 * self.a[1] - A13N * self.a[0];
        p1 -= (p1 / M1) * M1;
        if p1 < 0 {
            p1 += M1;
        }
        self.a = [self.a[1], self.a[2], p1];

        // Second recurrence: taps the newest and oldest words, unlike the
        // first which taps the middle and oldest.
        let mut p2 = A21 * self.b[2] - A23N * self.b[0];
        p2 -= (p2 / M2) * M2;
        if p2 < 0 {
            p2 += M2;
        }
        self.b = [self.b[1], self.b[2], p2];

        // Combine by subtraction, wrapped into [0, m1). The paper scales
        // by 1/m1 into a float here; we keep the raw integer.
        if p1 <= p2 {
            (p1 - p2 + M1) as u32
        } else {
            (p1 - p2) as u32
        }
    }

    /// Get the current six-word state (for checkpointing/replay)
    ///
    /// Words 0..3 are register A (oldest first), words 3..6 register B.
    /// Feeding the snapshot back through [`with_seed`](Mrg32k3a::with_seed)
    /// resumes the exact stream.
    ///
    /// # Example
    /// ```
    /// use mrg32k3a::Mrg32k3a;
    ///
    /// let mut rng = Mrg32k3a::new();
    /// rng.next();
    ///
    /// let mut replay = Mrg32k3a::with_seed(rng.state()).unwrap();
    /// assert_eq!(replay.next(), rng.next());
    /// ```
    pub fn state(&self) -> [u32; 6] {
        [
            self.a[0] as u32,
            self.a[1] as u32,
            self.a[2] as u32,
            self.b[0] as u32,
            self.b[1] as u32,
            self.b[2] as u32,
        ]
    }
}

impl Default for Mrg32k3a {
    fn default() -> Self {
        Self::new()
    }
}
