//! Decimal to binary64 conversion
//!
//! Turns a digit buffer, a decimal scale and a sign into the nearest `f64`.
//! The product of the leading digits and at most two entries of the
//! precomputed power tables in [`tables`] gives a 64-bit estimate whose
//! error is a few units in its last place. When the bits below the retained
//! mantissa are that close to the halfway point, the decision is settled by
//! comparing against the exact midpoint in fixed-width big integer arithmetic.
//!
//! The value described by the triple is `digits * 10^(scale - digits.len())`,
//! i.e. `scale` is the position of the decimal point relative to the first
//! digit. Out-of-range magnitudes saturate to zero or infinity; they are not
//! errors.

mod bignum;
pub mod tables;

use crate::error::{CodecError, Result};
use bignum::Bignum;
use core::cmp::Ordering;
use tables::{
    MAX_DECIMAL_EXPONENT, POWERS_OF_0_1, POWERS_OF_10, POWERS_OF_1E16, POWERS_OF_1E_16,
    POWER_EXPONENTS, POWER_EXPONENTS_1E16,
};

/// Significant digits that contribute to the mantissa; later digits only move the scale
pub const MAX_SIGNIFICANT_DIGITS: usize = 18;

/// Digits that always fit in a `u32` accumulator
const DIGITS_PER_CHUNK: usize = 9;

const SIGN_BIT: u64 = 1 << 63;
const INFINITY_BITS: u64 = 0x7FF0_0000_0000_0000;

/// Binary exponent of the smallest subnormal
const MIN_BINARY_EXPONENT: i32 = -1074;

/// Bits of the 64-bit estimate below the 53-bit mantissa
const DROPPED_BITS: i32 = 11;

/// Bound on the estimate's error in units of its last bit, with margin
const MIDPOINT_TOLERANCE: u128 = 16;

/// Convert a decimal digit buffer to the nearest `f64`
///
/// `digits` must contain only ASCII `'0'..='9'`; anything else fails with
/// [`CodecError::InvalidDigit`]. Leading zeros are allowed and ignored. Only
/// the first [`MAX_SIGNIFICANT_DIGITS`] significant digits are used.
///
/// ```
/// use numbytes_core::decimal_to_f64;
///
/// assert_eq!(decimal_to_f64(b"12345", 3, false), Ok(123.45));
/// assert_eq!(decimal_to_f64(b"0", 1, true).map(f64::to_bits), Ok(0x8000_0000_0000_0000));
/// ```
pub fn decimal_to_f64(digits: &[u8], scale: i32, negative: bool) -> Result<f64> {
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(CodecError::InvalidDigit);
    }
    Ok(ascii_digits_to_f64(digits, scale, negative))
}

/// [`decimal_to_f64`] for buffers already known to hold only ASCII digits
pub(crate) fn ascii_digits_to_f64(digits: &[u8], scale: i32, negative: bool) -> f64 {
    debug_assert!(digits.iter().all(u8::is_ascii_digit));
    let sign = if negative { SIGN_BIT } else { 0 };
    f64::from_bits(magnitude_bits(digits, scale) | sign)
}

/// Bit pattern of the unsigned result
fn magnitude_bits(digits: &[u8], scale: i32) -> u64 {
    let leading_zeros = digits.iter().take_while(|&&d| d == b'0').count();
    let significant = &digits[leading_zeros..];
    if significant.is_empty() {
        return 0;
    }

    let (high, rest) = significant.split_at(significant.len().min(DIGITS_PER_CHUNK));
    let low = &rest[..rest.len().min(DIGITS_PER_CHUNK)];

    let mut mantissa = u64::from(accumulate(high));
    if !low.is_empty() {
        mantissa = mantissa * u64::from(10u32.pow(low.len() as u32)) + u64::from(accumulate(low));
    }

    let consumed = (leading_zeros + high.len() + low.len()) as i64;
    let decimal_exponent = i64::from(scale) - consumed;
    let magnitude = decimal_exponent.unsigned_abs();
    if magnitude >= u64::from(MAX_DECIMAL_EXPONENT) {
        return if decimal_exponent > 0 { INFINITY_BITS } else { 0 };
    }
    let magnitude = magnitude as usize;
    let reciprocal = decimal_exponent < 0;

    let shift = mantissa.leading_zeros();
    let significand = mantissa;
    let mut mantissa = mantissa << shift;
    let mut exponent = 64 - shift as i32;

    let low_index = magnitude & 15;
    if low_index != 0 {
        let (power, power_exponent) = if reciprocal {
            (POWERS_OF_0_1[low_index - 1], 1 - POWER_EXPONENTS[low_index - 1])
        } else {
            (POWERS_OF_10[low_index - 1], POWER_EXPONENTS[low_index - 1])
        };
        exponent += power_exponent;
        mantissa = mul_high(mantissa, power, &mut exponent);
    }

    let high_index = magnitude >> 4;
    if high_index != 0 {
        let (power, power_exponent) = if reciprocal {
            (POWERS_OF_1E_16[high_index - 1], 1 - POWER_EXPONENTS_1E16[high_index - 1])
        } else {
            (POWERS_OF_1E16[high_index - 1], POWER_EXPONENTS_1E16[high_index - 1])
        };
        exponent += power_exponent;
        mantissa = mul_high(mantissa, power, &mut exponent);
    }

    // The value is now close to mantissa * 2^binary_exponent. Subnormals
    // keep fewer than 53 bits.
    let binary_exponent = exponent - 64;
    let dropped = (MIN_BINARY_EXPONENT - binary_exponent).max(DROPPED_BITS);
    if dropped >= 128 {
        return 0;
    }
    let mantissa = u128::from(mantissa);
    let half = 1u128 << (dropped - 1);
    let remainder = mantissa & ((half << 1) - 1);
    let quotient = (mantissa >> dropped) as u64;

    let round_up = if remainder.abs_diff(half) <= MIDPOINT_TOLERANCE {
        let midpoint_exponent = binary_exponent + dropped - 1;
        match compare_to_midpoint(significand, decimal_exponent, quotient, midpoint_exponent) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => quotient & 1 == 1,
        }
    } else {
        remainder > half
    };

    // A carry out of the mantissa increments the exponent field; past
    // f64::MAX that yields the infinity pattern
    let biased = (binary_exponent + dropped - MIN_BINARY_EXPONENT) as u64;
    ((biased << 52) + quotient + u64::from(round_up)).min(INFINITY_BITS)
}

/// Order `significand * 10^decimal_exponent` against the midpoint
/// `(2 * quotient + 1) * 2^binary_exponent`
fn compare_to_midpoint(
    significand: u64,
    decimal_exponent: i64,
    quotient: u64,
    binary_exponent: i32,
) -> Ordering {
    let mut value = Bignum::from_u128(u128::from(significand));
    let mut midpoint = Bignum::from_u128(2 * u128::from(quotient) + 1);

    // 10^e = 5^e * 2^e; the power of five goes to whichever side keeps it integral
    let fives = decimal_exponent.unsigned_abs() as u32;
    if decimal_exponent >= 0 {
        value.mul_pow5(fives);
    } else {
        midpoint.mul_pow5(fives);
    }

    let twos = decimal_exponent - i64::from(binary_exponent);
    if twos >= 0 {
        value.shl(twos as u32);
    } else {
        midpoint.shl(twos.unsigned_abs() as u32);
    }
    value.cmp(&midpoint)
}

/// Fold at most nine ASCII digits into an integer
fn accumulate(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'))
}

/// High 64 bits of the product of two normalized mantissas, renormalized
fn mul_high(a: u64, b: u64, exponent: &mut i32) -> u64 {
    let product = ((u128::from(a) * u128::from(b)) >> 64) as u64;
    if product & SIGN_BIT == 0 {
        *exponent -= 1;
        product << 1
    } else {
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(digits: &[u8], scale: i32, negative: bool) -> u64 {
        decimal_to_f64(digits, scale, negative).unwrap().to_bits()
    }

    #[test]
    fn test_small_integers_are_exact() {
        assert_eq!(decimal_to_f64(b"1", 1, false), Ok(1.0));
        assert_eq!(decimal_to_f64(b"42", 2, false), Ok(42.0));
        assert_eq!(decimal_to_f64(b"42", 2, true), Ok(-42.0));
        assert_eq!(decimal_to_f64(b"1", 4, false), Ok(1000.0));
        assert_eq!(decimal_to_f64(b"9007199254740992", 16, false), Ok(9007199254740992.0));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(decimal_to_f64(b"12345", 3, false), Ok(123.45));
        assert_eq!(decimal_to_f64(b"1", 0, false), Ok(0.1));
        assert_eq!(decimal_to_f64(b"25", 1, false), Ok(2.5));
        assert_eq!(decimal_to_f64(b"314159265358979", 1, false), Ok(3.14159265358979));
    }

    #[test]
    fn test_zero_keeps_sign() {
        assert_eq!(bits(b"0", 1, false), 0);
        assert_eq!(bits(b"0000", 1, true), SIGN_BIT);
        assert_eq!(bits(b"", 0, true), SIGN_BIT);
    }

    #[test]
    fn test_leading_zeros_ignored() {
        assert_eq!(bits(b"00012345", 6, false), bits(b"12345", 3, false));
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(decimal_to_f64(b"12a", 3, false), Err(CodecError::InvalidDigit));
        assert_eq!(decimal_to_f64(b"-1", 1, false), Err(CodecError::InvalidDigit));
        assert_eq!(decimal_to_f64(b"1.5", 1, false), Err(CodecError::InvalidDigit));
    }

    #[test]
    fn test_excess_digits_only_move_scale() {
        let exact = bits(b"123456789012345678", 18, false);
        assert_eq!(exact, 123456789012345678.0f64.to_bits());
        assert_eq!(bits(b"1234567890123456789999", 22, false), bits(b"123456789012345678", 22, false));
    }

    #[test]
    fn test_saturation() {
        assert_eq!(bits(b"1", 400, false), INFINITY_BITS);
        assert_eq!(bits(b"1", 400, true), INFINITY_BITS | SIGN_BIT);
        assert_eq!(bits(b"1", -400, false), 0);
        assert_eq!(bits(b"1", -400, true), SIGN_BIT);
        // 10^309 is within the table range but past f64::MAX
        assert_eq!(bits(b"1", 310, false), INFINITY_BITS);
        assert_eq!(bits(b"1", i32::MIN, false), 0);
        assert_eq!(bits(b"1", i32::MAX, false), INFINITY_BITS);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(bits(b"17976931348623157", 309, false), f64::MAX.to_bits());
        assert_eq!(bits(b"17976931348623159", 309, false), INFINITY_BITS);
        assert_eq!(bits(b"22250738585072014", -307, false), f64::MIN_POSITIVE.to_bits());
        // Largest subnormal
        assert_eq!(bits(b"22250738585072009", -307, false), 0x000F_FFFF_FFFF_FFFF);
        assert_eq!(bits(b"49406564584124654", -323, false), 1);
        assert_eq!(bits(b"5", -323, false), 1);
        assert_eq!(bits(b"1", -322, false), 2);
    }

    #[test]
    fn test_half_epsilon() {
        // Epsilon / 2 is 2.4703282292062327208...e-324
        assert_eq!(bits(b"2470328229206232731", -323, false), 1);
        assert_eq!(bits(b"24703282292062328", -323, false), 1);
        assert_eq!(bits(b"24703282292063", -323, false), 1);
        assert_eq!(bits(b"24703282292062327", -323, false), 0);
        assert_eq!(bits(b"24703282292062", -323, false), 0);
        assert_eq!(bits(b"2", -323, false), 0);
    }

    #[test]
    fn test_estimate_near_midpoint() {
        // The table products land within a few units of the halfway pattern
        assert_eq!(bits(b"2018260545369191", -307, false), 0x000E_834A_4D49_A4AB);
        assert_eq!(bits(b"5779048601856848", -108, true), 0xA975_B73B_2E1C_8511);
        assert_eq!(bits(b"3567780387991439", -226, false), 0x10EB_0BCD_F3DA_2EC1);
    }

    #[test]
    fn test_compare_to_midpoint() {
        // 3 against 3 * 2^0
        assert_eq!(compare_to_midpoint(3, 0, 1, 0), Ordering::Equal);
        assert_eq!(compare_to_midpoint(4, 0, 1, 0), Ordering::Greater);
        // 1.5 against 3 * 2^-1, and 1.4 against it
        assert_eq!(compare_to_midpoint(15, -1, 1, -1), Ordering::Equal);
        assert_eq!(compare_to_midpoint(14, -1, 1, -1), Ordering::Less);
        // 2^-1075 is 2.4703282292062327208...e-324
        assert_eq!(compare_to_midpoint(247032822920623272, -341, 0, -1075), Ordering::Less);
        assert_eq!(compare_to_midpoint(247032822920623273, -341, 0, -1075), Ordering::Greater);
    }

    #[test]
    fn test_round_half_to_even() {
        // 2^52 + 0.5 ties to the even 2^52, 2^52 + 1.5 ties to the even 2^52 + 2
        assert_eq!(bits(b"45035996273704965", 16, false), 0x4330_0000_0000_0000);
        assert_eq!(bits(b"45035996273704975", 16, false), 0x4330_0000_0000_0002);
        // 2^53 + 1 and 2^53 + 3
        assert_eq!(bits(b"9007199254740993", 16, false), 0x4340_0000_0000_0000);
        assert_eq!(bits(b"9007199254740995", 16, false), 0x4340_0000_0000_0002);
    }

    #[test]
    fn test_powers_of_ten() {
        assert_eq!(bits(b"1", 23, false), 1e22f64.to_bits());
        assert_eq!(bits(b"1", -21, false), 1e-22f64.to_bits());
        assert_eq!(bits(b"1", 24, false), 1e23f64.to_bits());
        assert_eq!(bits(b"602214076", 24, false), 6.02214076e23f64.to_bits());
        assert_eq!(bits(b"1602176634", -18, false), 1.602176634e-19f64.to_bits());
    }
}
