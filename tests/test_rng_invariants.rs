//! Range and degeneracy invariants
//!
//! Every output lies in [0, m1); every state word stays below its
//! register's modulus; the canonical stream never collapses to zero.

use mrg32k3a::{Mrg32k3a, SeedError};
use proptest::prelude::*;

const M1: u32 = 4294967087;
const M2: u32 = 4294944443;

#[test]
fn test_outputs_below_m1() {
    let mut rng = Mrg32k3a::new();

    for i in 0..10_000 {
        let value = rng.next();
        assert!(
            value < M1,
            "Output {} at draw {} is outside [0, m1)",
            value,
            i
        );
    }
}

#[test]
fn test_state_words_below_moduli() {
    let mut rng = Mrg32k3a::new();

    for _ in 0..10_000 {
        rng.next();
        let state = rng.state();
        for (i, &word) in state.iter().enumerate() {
            let modulus = if i < 3 { M1 } else { M2 };
            assert!(
                word < modulus,
                "State word {} is {}, must stay below {}",
                i,
                word,
                modulus
            );
        }
    }
}

#[test]
fn test_canonical_stream_never_degenerates() {
    // Spot check over the first million draws: neither register may reach
    // the all-zero fixed point.
    let mut rng = Mrg32k3a::new();

    for i in 0..1_000_000 {
        rng.next();
        let state = rng.state();
        assert!(
            state[..3] != [0, 0, 0] && state[3..] != [0, 0, 0],
            "Register collapsed to zero at draw {}",
            i
        );
    }
}

proptest! {
    #[test]
    fn prop_valid_seeds_accepted_and_stay_in_range(
        a in [0u32..M1, 0u32..M1, 0u32..M1],
        b in [0u32..M2, 0u32..M2, 0u32..M2],
    ) {
        prop_assume!(a != [0, 0, 0]);
        prop_assume!(b != [0, 0, 0]);

        let seed = [a[0], a[1], a[2], b[0], b[1], b[2]];
        let mut rng = Mrg32k3a::with_seed(seed).unwrap();

        for _ in 0..64 {
            let value = rng.next();
            prop_assert!(value < M1);
        }

        let state = rng.state();
        for (i, &word) in state.iter().enumerate() {
            let modulus = if i < 3 { M1 } else { M2 };
            prop_assert!(word < modulus);
        }
    }

    #[test]
    fn prop_out_of_range_word_rejected(
        index in 0usize..6,
        excess in 0u32..200,
    ) {
        let modulus = if index < 3 { M1 } else { M2 };
        let mut seed = [12345u32; 6];
        seed[index] = modulus + excess;

        let err = Mrg32k3a::with_seed(seed).unwrap_err();
        prop_assert_eq!(
            err,
            SeedError::WordOutOfRange {
                index,
                value: modulus + excess,
                modulus,
            }
        );
    }

    #[test]
    fn prop_seeded_streams_are_deterministic(
        a in [1u32..M1, 0u32..M1, 0u32..M1],
        b in [1u32..M2, 0u32..M2, 0u32..M2],
    ) {
        let seed = [a[0], a[1], a[2], b[0], b[1], b[2]];
        let mut rng1 = Mrg32k3a::with_seed(seed).unwrap();
        let mut rng2 = Mrg32k3a::with_seed(seed).unwrap();

        for _ in 0..32 {
            prop_assert_eq!(rng1.next(), rng2.next());
        }
    }
}
