//! IDEA (International Data Encryption Algorithm) block cipher.
//!
//! This implementation is compatible with the `cipher` crate traits.
//! IDEA is a Lai-Massey design operating on 64-bit blocks with 128-bit
//! keys: eight full rounds of mixing over two incompatible group
//! operations (addition modulo 2^16 and multiplication modulo 2^16 + 1)
//! plus a terminal half-round. Decryption reuses the same round network
//! with an algebraically derived inverse key schedule.
//!
//! No claim of side-channel resistance is made, and only single-block
//! (ECB-style) operation is provided; chaining modes are the caller's
//! responsibility.

#![no_std]

pub use cipher; // Re-export cipher crate for downstream users

use cfg_if::cfg_if;

// --- Core Cipher Logic ---

pub(crate) mod core;
pub(crate) mod ops;
pub(crate) mod rounds;
pub(crate) mod schedule;

// --- Diagnostics ---

cfg_if! {
    if #[cfg(feature = "trace")] {
        pub mod trace;
    }
}

pub use crate::core::Idea;

// --- Constants ---

/// Block length in bytes.
pub const BLOCK_SIZE: usize = 8;
/// Key length in bytes.
pub const KEY_SIZE: usize = 16;
/// Number of full rounds. The schedule length and the round network both
/// depend on this structurally; it is not a tunable.
pub const NUM_ROUNDS: usize = 8;

/// Subkeys consumed by the round network: six per full round plus four for
/// the terminal half-round.
pub(crate) const SCHEDULE_WORDS: usize = NUM_ROUNDS * 6 + 4;

// --- Convenience One-Shot API ---

/// Encrypts a single 8-byte block with a 16-byte key.
///
/// Pure function: expands the schedule, runs the round network, and keeps no
/// state. Callers encrypting many blocks under one key should construct an
/// [`Idea`] instead to expand the schedule once.
pub fn encrypt(block: [u8; BLOCK_SIZE], key: [u8; KEY_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut words = rounds::to_words(&block);
    rounds::crypt(&mut words, &schedule::expand(&key));
    let mut out = [0u8; BLOCK_SIZE];
    rounds::from_words(words, &mut out);
    out
}

/// Decrypts a single 8-byte block with a 16-byte key.
///
/// Inverse of [`encrypt`] for the same key.
pub fn decrypt(block: [u8; BLOCK_SIZE], key: [u8; KEY_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut words = rounds::to_words(&block);
    rounds::crypt(&mut words, &schedule::invert(&schedule::expand(&key)));
    let mut out = [0u8; BLOCK_SIZE];
    rounds::from_words(words, &mut out);
    out
}

// --- Tests ---
