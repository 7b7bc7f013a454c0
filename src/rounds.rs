//! The Lai-Massey round network.
//!
//! Eight full rounds followed by a terminal half-round, driven entirely by
//! the 52-word schedule. Encryption and decryption share this network; the
//! direction is selected by which schedule is supplied.

use crate::ops;
use crate::{NUM_ROUNDS, SCHEDULE_WORDS};

/// Splits an 8-byte block into four big-endian words.
#[inline]
pub(crate) fn to_words(block: &[u8; 8]) -> [u16; 4] {
    [
        u16::from_be_bytes([block[0], block[1]]),
        u16::from_be_bytes([block[2], block[3]]),
        u16::from_be_bytes([block[4], block[5]]),
        u16::from_be_bytes([block[6], block[7]]),
    ]
}

/// Serializes four words back into big-endian bytes.
#[inline]
pub(crate) fn from_words(words: [u16; 4], out: &mut [u8]) {
    out[0..2].copy_from_slice(&words[0].to_be_bytes());
    out[2..4].copy_from_slice(&words[1].to_be_bytes());
    out[4..6].copy_from_slice(&words[2].to_be_bytes());
    out[6..8].copy_from_slice(&words[3].to_be_bytes());
}

/// Runs the full round network over `words` in place.
#[inline]
pub(crate) fn crypt(words: &mut [u16; 4], schedule: &[u16; SCHEDULE_WORDS]) {
    crypt_with(words, schedule, |_, _| {});
}

/// Round network with an observer called with the word state at entry to
/// each full round and once before the half-round. The observer never feeds
/// back into the computation; with the no-op closure in [`crypt`] it
/// monomorphizes away entirely.
pub(crate) fn crypt_with(
    words: &mut [u16; 4],
    schedule: &[u16; SCHEDULE_WORDS],
    mut observe: impl FnMut(usize, [u16; 4]),
) {
    let [mut w, mut x, mut y, mut z] = *words;

    for (round, k) in schedule[..NUM_ROUNDS * 6].chunks_exact(6).enumerate() {
        observe(round, [w, x, y, z]);

        // Mixing half: two multiplicative and two additive subkeys.
        w = ops::mul(w, k[0]);
        x = ops::add(x, k[1]);
        y = ops::add(y, k[2]);
        z = ops::mul(z, k[3]);

        // Confusion step coupling all four words.
        let mut u = ops::mul(w ^ y, k[4]);
        let v = ops::mul(ops::add(x ^ z, u), k[5]);
        u = ops::add(u, v);

        w ^= v;
        x ^= u;
        y ^= v;
        z ^= u;

        core::mem::swap(&mut x, &mut y);
    }

    observe(NUM_ROUNDS, [w, x, y, z]);

    // Terminal half-round: undo the last swap, then apply only the four
    // mixing operations. No confusion step.
    core::mem::swap(&mut x, &mut y);
    let k = &schedule[NUM_ROUNDS * 6..];
    w = ops::mul(w, k[0]);
    x = ops::add(x, k[1]);
    y = ops::add(y, k[2]);
    z = ops::mul(z, k[3]);

    *words = [w, x, y, z];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule;

    #[test]
    fn word_serialization_round_trips() {
        let block = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];
        let words = to_words(&block);
        assert_eq!(words, [0x1234, 0x5678, 0x9ABC, 0xDEF0]);
        let mut out = [0u8; 8];
        from_words(words, &mut out);
        assert_eq!(out, block);
    }

    #[test]
    fn inverse_schedule_undoes_the_network() {
        let key = [0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, 0xAB, 0xF7, 0x15, 0x88, 0x09,
            0xCF, 0x4F, 0x3C];
        let enc = schedule::expand(&key);
        let dec = schedule::invert(&enc);

        let mut words = [0x0123, 0x4567, 0x89AB, 0xCDEF];
        let original = words;
        crypt(&mut words, &enc);
        assert_ne!(words, original);
        crypt(&mut words, &dec);
        assert_eq!(words, original);
    }
}
