//! Key-schedule expansion and the derived decryption schedule.
//!
//! Encryption uses 52 sixteen-bit subkeys extracted from overlapping windows
//! of the 128-bit key. Decryption uses no independent key material: its
//! schedule is the encryption schedule traversed in reverse round order with
//! the mixing subkeys replaced by their group inverses.

use crate::ops;
use crate::{NUM_ROUNDS, SCHEDULE_WORDS};

/// Expands a 128-bit key into the 52-word encryption schedule.
///
/// Subkey `i` is the 16-bit window starting `(i*16 + i/8*25) % 128` bits
/// below the top of the key register. The window wraps cyclically, which is
/// the classic 144-bit construction (the key with its own top 16 bits
/// appended) expressed as a rotation of the 128-bit scalar.
pub(crate) fn expand(key: &[u8; 16]) -> [u16; SCHEDULE_WORDS] {
    let bigkey = u128::from_be_bytes(*key);
    let mut schedule = [0u16; SCHEDULE_WORDS];
    for (i, subkey) in schedule.iter_mut().enumerate() {
        // The 25-bit stride advances the window past the wrap seam once
        // every eight subkeys.
        let offset = (i * 16 + i / 8 * 25) % 128;
        *subkey = bigkey.rotate_left(offset as u32 + 16) as u16;
    }
    schedule
}

/// How a decryption subkey is derived from its encryption-schedule source.
#[derive(Clone, Copy)]
enum KeyOp {
    /// Multiplicative inverse modulo 2^16 + 1.
    Reciprocal,
    /// Additive inverse modulo 2^16.
    Negate,
    /// Taken unchanged (diffusion subkeys).
    Copy,
}

/// `(source index, derivation)` for every slot of the decryption schedule.
///
/// The traversal runs backward through the 6-word round groups while each
/// group keeps part of its internal order and swaps the rest, so the mapping
/// is spelled out as a table instead of reversed-index arithmetic.
const INVERSION_MAP: [(usize, KeyOp); SCHEDULE_WORDS] = inversion_map();

const fn inversion_map() -> [(usize, KeyOp); SCHEDULE_WORDS] {
    let mut map = [(0usize, KeyOp::Copy); SCHEDULE_WORDS];

    // The first group inverts the source's final half-round keys and takes
    // the diffusion keys of its last full round.
    map[0] = (SCHEDULE_WORDS - 4, KeyOp::Reciprocal);
    map[1] = (SCHEDULE_WORDS - 3, KeyOp::Negate);
    map[2] = (SCHEDULE_WORDS - 2, KeyOp::Negate);
    map[3] = (SCHEDULE_WORDS - 1, KeyOp::Reciprocal);
    map[4] = (SCHEDULE_WORDS - 6, KeyOp::Copy);
    map[5] = (SCHEDULE_WORDS - 5, KeyOp::Copy);

    // Interior rounds: the word swap inside each full round exchanges the
    // two additive subkeys relative to the first and last groups.
    let mut round = 1;
    while round < NUM_ROUNDS {
        let dst = round * 6;
        let src = SCHEDULE_WORDS - round * 6;
        map[dst] = (src - 4, KeyOp::Reciprocal);
        map[dst + 1] = (src - 2, KeyOp::Negate);
        map[dst + 2] = (src - 3, KeyOp::Negate);
        map[dst + 3] = (src - 1, KeyOp::Reciprocal);
        map[dst + 4] = (src - 6, KeyOp::Copy);
        map[dst + 5] = (src - 5, KeyOp::Copy);
        round += 1;
    }

    // The final half-round inverts the source's first-round mixing keys.
    map[SCHEDULE_WORDS - 4] = (0, KeyOp::Reciprocal);
    map[SCHEDULE_WORDS - 3] = (1, KeyOp::Negate);
    map[SCHEDULE_WORDS - 2] = (2, KeyOp::Negate);
    map[SCHEDULE_WORDS - 1] = (3, KeyOp::Reciprocal);

    map
}

/// Derives the decryption schedule from an encryption schedule.
pub(crate) fn invert(schedule: &[u16; SCHEDULE_WORDS]) -> [u16; SCHEDULE_WORDS] {
    let mut inverted = [0u16; SCHEDULE_WORDS];
    for (subkey, &(source, op)) in inverted.iter_mut().zip(INVERSION_MAP.iter()) {
        *subkey = match op {
            KeyOp::Reciprocal => ops::reciprocal(schedule[source]),
            KeyOp::Negate => ops::negate(schedule[source]),
            KeyOp::Copy => schedule[source],
        };
    }
    inverted
}
