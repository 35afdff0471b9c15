//! Fixed-width unsigned integer for exact rounding decisions
//!
//! Only the three operations the midpoint comparison needs are provided:
//! multiplication by a small factor or a power of five, left shift, and
//! ordering. Storage is inline so the converter never allocates.

use core::cmp::Ordering;

/// 64-bit limbs; 18 digits times 5^351 shifted into range stays under 900 bits
const LIMBS: usize = 20;

/// Largest power of five below 2^63
const POW5_STEP: u64 = 7_450_580_596_923_828_125;
const POW5_STEP_EXPONENT: u32 = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bignum {
    /// Little-endian limbs
    limbs: [u64; LIMBS],
}

impl Bignum {
    pub(crate) fn from_u128(value: u128) -> Self {
        let mut limbs = [0; LIMBS];
        limbs[0] = value as u64;
        limbs[1] = (value >> 64) as u64;
        Self { limbs }
    }

    /// Multiply in place by a single limb
    pub(crate) fn mul_small(&mut self, factor: u64) {
        let mut carry: u128 = 0;
        for limb in self.limbs.iter_mut() {
            carry += u128::from(*limb) * u128::from(factor);
            *limb = carry as u64;
            carry >>= 64;
        }
        debug_assert_eq!(carry, 0, "bignum overflow");
    }

    /// Multiply in place by `5^exponent`
    pub(crate) fn mul_pow5(&mut self, mut exponent: u32) {
        while exponent >= POW5_STEP_EXPONENT {
            self.mul_small(POW5_STEP);
            exponent -= POW5_STEP_EXPONENT;
        }
        if exponent > 0 {
            self.mul_small(5u64.pow(exponent));
        }
    }

    /// Shift left by `bits`
    pub(crate) fn shl(&mut self, bits: u32) {
        let limbs = (bits / 64) as usize;
        let bits = bits % 64;
        debug_assert!(limbs < LIMBS, "bignum overflow");
        if limbs > 0 {
            self.limbs.copy_within(..LIMBS - limbs, limbs);
            self.limbs[..limbs].fill(0);
        }
        if bits > 0 {
            let mut carry = 0;
            for limb in self.limbs[limbs..].iter_mut() {
                let next = *limb >> (64 - bits);
                *limb = (*limb << bits) | carry;
                carry = next;
            }
            debug_assert_eq!(carry, 0, "bignum overflow");
        }
    }
}

impl Ord for Bignum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs.iter().rev().cmp(other.limbs.iter().rev())
    }
}

impl PartialOrd for Bignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
