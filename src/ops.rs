//! The two finite-domain operations of the cipher and their inverses.
//!
//! All words live in the 16-bit value space. Addition is taken modulo 2^16.
//! Multiplication is taken modulo 2^16 + 1 (a prime), with `0x0000` encoding
//! the residue `0x10000`; under that remap the 16-bit space forms a complete
//! multiplicative group of order 65536 over the residues `1..=65536`.

const MUL_MODULUS: u64 = 0x1_0001;

/// Addition modulo 2^16.
#[inline(always)]
pub(crate) fn add(a: u16, b: u16) -> u16 {
    a.wrapping_add(b)
}

/// Multiplication modulo 2^16 + 1 with the `0x0000` <-> `0x10000` remap
/// applied to both operands and to the product.
#[inline(always)]
pub(crate) fn mul(a: u16, b: u16) -> u16 {
    let a = if a == 0 { 0x1_0000 } else { u64::from(a) };
    let b = if b == 0 { 0x1_0000 } else { u64::from(b) };
    let product = a * b % MUL_MODULUS;
    if product == 0x1_0000 { 0 } else { product as u16 }
}

/// Additive inverse modulo 2^16.
#[inline]
pub(crate) fn negate(a: u16) -> u16 {
    a.wrapping_neg()
}

/// Multiplicative inverse modulo 2^16 + 1, computed as `a^65535` by Fermat's
/// little theorem. `0` encodes `0x10000 = -1`, which is its own inverse and
/// re-encodes to `0`, so it maps to itself.
pub(crate) fn reciprocal(a: u16) -> u16 {
    if a == 0 {
        return 0;
    }
    let mut base = u64::from(a);
    let mut exponent = 0xFFFFu32;
    let mut acc = 1u64;
    while exponent != 0 {
        if exponent & 1 != 0 {
            acc = acc * base % MUL_MODULUS;
        }
        base = base * base % MUL_MODULUS;
        exponent >>= 1;
    }
    acc as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_group_laws() {
        for a in 0..=u16::MAX {
            assert_eq!(add(a, negate(a)), 0);
        }
        assert_eq!(add(0xFFFF, 1), 0);
        assert_eq!(add(0x8000, 0x8000), 0);
    }

    #[test]
    fn multiplication_identity_convention() {
        // 0 encodes 0x10000 = -1 mod 65537, so 0 * 0 = 1 and 0 * 1 = -1 = 0.
        assert_eq!(mul(0, 0), 1);
        assert_eq!(mul(0, 1), 0);
        assert_eq!(mul(1, 0), 0);
        assert_eq!(mul(1, 1), 1);
        assert_eq!(mul(0xFFFF, 0xFFFF), 4);
    }

    #[test]
    fn reciprocal_inverts_multiplication() {
        for a in 0..=u16::MAX {
            // Holds for a == 0 as well: mul(0, reciprocal(0)) = mul(0, 0) = 1.
            assert_eq!(mul(a, reciprocal(a)), 1);
        }
    }

    #[test]
    fn reciprocal_is_an_involution() {
        for a in 0..=u16::MAX {
            assert_eq!(reciprocal(reciprocal(a)), a);
        }
    }
}
