//! Diagnostic round tracing, enabled with the `trace` feature.
//!
//! Records the four-word state at entry to each full round and once before
//! the terminal half-round. The trace is a read-only observation of the
//! round network; the computed block is identical to the untraced result.

use crate::{BLOCK_SIZE, KEY_SIZE, NUM_ROUNDS, SCHEDULE_WORDS, rounds, schedule};

/// Per-round word states recorded during a single block operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundTrace {
    /// State at entry to rounds `0..8`, plus the state before the half-round
    /// in the last slot.
    pub states: [[u16; 4]; NUM_ROUNDS + 1],
    /// The transformed block.
    pub output: [u8; BLOCK_SIZE],
}

/// Encrypts one block while recording the round states.
pub fn encrypt_traced(block: [u8; BLOCK_SIZE], key: [u8; KEY_SIZE]) -> RoundTrace {
    crypt_traced(block, &schedule::expand(&key))
}

/// Decrypts one block while recording the round states.
pub fn decrypt_traced(block: [u8; BLOCK_SIZE], key: [u8; KEY_SIZE]) -> RoundTrace {
    crypt_traced(block, &schedule::invert(&schedule::expand(&key)))
}

fn crypt_traced(block: [u8; BLOCK_SIZE], sched: &[u16; SCHEDULE_WORDS]) -> RoundTrace {
    let mut states = [[0u16; 4]; NUM_ROUNDS + 1];
    let mut words = rounds::to_words(&block);
    rounds::crypt_with(&mut words, sched, |round, state| states[round] = state);
    let mut output = [0u8; BLOCK_SIZE];
    rounds::from_words(words, &mut output);
    RoundTrace { states, output }
}
