//! The cipher state type and its `cipher` trait implementations.

use cipher::consts::{U8, U16};
use cipher::{AlgorithmName, BlockCipher, Key, KeyInit, KeySizeUser};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{SCHEDULE_WORDS, rounds, schedule};

/// The IDEA block cipher with pre-expanded round-key schedules.
///
/// Both directions are derived once at construction; encrypting and
/// decrypting borrow the value immutably, so a single instance may be shared
/// across threads. The expanded schedules are scrubbed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Idea {
    enc_schedule: [u16; SCHEDULE_WORDS],
    dec_schedule: [u16; SCHEDULE_WORDS],
}

impl KeySizeUser for Idea {
    type KeySize = U16;
}

impl KeyInit for Idea {
    fn new(key: &Key<Self>) -> Self {
        let key_bytes: &[u8; 16] = key.as_ref();
        let enc_schedule = schedule::expand(key_bytes);
        let dec_schedule = schedule::invert(&enc_schedule);
        Self {
            enc_schedule,
            dec_schedule,
        }
    }
}

impl BlockCipher for Idea {}

impl AlgorithmName for Idea {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Idea")
    }
}

impl fmt::Debug for Idea {
    // Deliberately opaque: the schedules are key material.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Idea { .. }")
    }
}

cipher::impl_simple_block_encdec!(
    Idea, U8, cipher, block,
    encrypt: {
        let bytes: &[u8; 8] = block.get_in().as_ref();
        let mut words = rounds::to_words(bytes);
        rounds::crypt(&mut words, &cipher.enc_schedule);
        rounds::from_words(words, block.get_out().as_mut_slice());
    }
    decrypt: {
        let bytes: &[u8; 8] = block.get_in().as_ref();
        let mut words = rounds::to_words(bytes);
        rounds::crypt(&mut words, &cipher.dec_schedule);
        rounds::from_words(words, block.get_out().as_mut_slice());
    }
);
