//! Symbol-level number grammar
//!
//! [`NumberBuilder`] accepts recognized [`Symbol`]s one at a time and keeps
//! the significant digits, decimal scale and sign of the number they spell
//! in a fixed-size [`DecimalNumber`]. Nothing here allocates.
//!
//! Accepted shape, in symbols:
//!
//! ```text
//! number   := sign? ( Infinity | NaN | mantissa exponent? )
//! mantissa := digit+ ( DecimalSeparator digit* )? | DecimalSeparator digit+
//! exponent := ( Exponent | ExponentSecondary ) sign? digit+
//! ```
//!
//! Group separators are not accepted.

use crate::decimal::ascii_digits_to_f64;
use crate::error::{CodecError, Result};
use crate::symbols::Symbol;

#[cfg(feature = "alloc")]
use crate::symbols::FormattingData;

/// Exponent digits beyond this value cannot change the result
const MAX_EXPONENT_VALUE: i32 = 99_999;

/// Significant digits, decimal scale and sign of a parsed number
///
/// The value is `0.d1 d2 d3... * 10^scale`, negated when `negative` is set.
/// Leading zeros are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalNumber {
    digits: [u8; Self::CAPACITY],
    len: usize,
    scale: i32,
    negative: bool,
}

impl DecimalNumber {
    /// Significant digits kept; later digits only adjust the scale
    pub const CAPACITY: usize = 20;

    /// Positive zero
    pub const fn new() -> Self {
        Self {
            digits: [0; Self::CAPACITY],
            len: 0,
            scale: 0,
            negative: false,
        }
    }

    /// Stored significant digits as ASCII
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Decimal point position relative to the first stored digit
    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True when no non-zero digit has been seen
    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    /// Nearest `f64`
    pub fn to_f64(&self) -> f64 {
        // push_digit only stores ASCII digits
        ascii_digits_to_f64(self.digits(), self.scale, self.negative)
    }

    fn push_digit(&mut self, value: u8, fraction: bool) {
        if self.len == 0 && value == 0 {
            // Leading zero: only fraction zeros move the point
            if fraction {
                self.scale = self.scale.saturating_sub(1);
            }
            return;
        }
        if self.len < Self::CAPACITY {
            self.digits[self.len] = b'0' + value;
            self.len += 1;
        }
        if !fraction {
            self.scale = self.scale.saturating_add(1);
        }
    }
}

impl Default for DecimalNumber {
    fn default() -> Self {
        Self::new()
    }
}

/// Finished number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Finite(DecimalNumber),
    Infinity { negative: bool },
    NaN,
}

impl Number {
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Finite(decimal) => decimal.to_f64(),
            Number::Infinity { negative: false } => f64::INFINITY,
            Number::Infinity { negative: true } => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Signed,
    Integer,
    Fraction,
    ExponentMarker,
    ExponentSign,
    ExponentDigits,
    Infinity,
    NaN,
}

/// Incremental number recognizer fed one symbol at a time
#[derive(Debug, Clone, Copy)]
pub struct NumberBuilder {
    state: State,
    decimal: DecimalNumber,
    mantissa_digits: usize,
    exponent: i32,
    exponent_negative: bool,
}

impl NumberBuilder {
    pub const fn new() -> Self {
        Self {
            state: State::Start,
            decimal: DecimalNumber::new(),
            mantissa_digits: 0,
            exponent: 0,
            exponent_negative: false,
        }
    }

    /// Extend the number with `symbol`
    ///
    /// Returns `false`, leaving the builder untouched, when the symbol cannot
    /// continue the number.
    pub fn push(&mut self, symbol: Symbol) -> bool {
        let next = match (self.state, symbol) {
            (State::Start, Symbol::MinusSign) => {
                self.decimal.negative = true;
                State::Signed
            }
            (State::Start, Symbol::PlusSign) => State::Signed,
            (State::Start | State::Signed, Symbol::Infinity) => State::Infinity,
            (State::Start | State::Signed, Symbol::NaN) => State::NaN,
            (State::Start | State::Signed | State::Integer, Symbol::DecimalSeparator) => State::Fraction,
            (State::Start | State::Signed | State::Integer, _) if symbol.digit_value().is_some() => {
                self.push_mantissa_digit(symbol, false);
                State::Integer
            }
            (State::Fraction, _) if symbol.digit_value().is_some() => {
                self.push_mantissa_digit(symbol, true);
                State::Fraction
            }
            (State::Integer, _) if symbol.is_exponent() => State::ExponentMarker,
            (State::Fraction, _) if symbol.is_exponent() && self.mantissa_digits > 0 => {
                State::ExponentMarker
            }
            (State::ExponentMarker, Symbol::MinusSign) => {
                self.exponent_negative = true;
                State::ExponentSign
            }
            (State::ExponentMarker, Symbol::PlusSign) => State::ExponentSign,
            (State::ExponentMarker | State::ExponentSign | State::ExponentDigits, _) => {
                let Some(value) = symbol.digit_value() else {
                    return false;
                };
                self.exponent = (self.exponent * 10 + i32::from(value)).min(MAX_EXPONENT_VALUE);
                State::ExponentDigits
            }
            _ => return false,
        };
        self.state = next;
        true
    }

    /// Whether the symbols so far spell a number
    pub fn is_complete(&self) -> bool {
        match self.state {
            State::Integer | State::ExponentDigits | State::Infinity | State::NaN => true,
            State::Fraction => self.mantissa_digits > 0,
            State::Start | State::Signed | State::ExponentMarker | State::ExponentSign => false,
        }
    }

    /// The number spelled so far
    ///
    /// An exponent marker without digits is ignored. Fails with
    /// [`CodecError::InvalidInput`] when no digits were seen.
    pub fn finish(&self) -> Result<Number> {
        match self.state {
            State::Infinity => Ok(Number::Infinity {
                negative: self.decimal.negative,
            }),
            State::NaN => Ok(Number::NaN),
            _ if self.mantissa_digits == 0 => Err(CodecError::InvalidInput),
            State::ExponentDigits => {
                let mut decimal = self.decimal;
                let exponent = if self.exponent_negative {
                    -self.exponent
                } else {
                    self.exponent
                };
                decimal.scale = decimal.scale.saturating_add(exponent);
                Ok(Number::Finite(decimal))
            }
            _ => Ok(Number::Finite(self.decimal)),
        }
    }

    fn push_mantissa_digit(&mut self, symbol: Symbol, fraction: bool) {
        if let Some(value) = symbol.digit_value() {
            self.decimal.push_digit(value, fraction);
            self.mantissa_digits += 1;
        }
    }
}

impl Default for NumberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the longest number starting at `buffer[index]`
///
/// Returns the value and the number of bytes it spans. Fails with
/// [`CodecError::InvalidInput`] when the buffer is empty, `index` is out of
/// bounds, or no number starts at `index`.
///
/// ```
/// use numbytes_core::{parse_f64, FormattingData};
///
/// let data = FormattingData::invariant_utf8();
/// assert_eq!(parse_f64(&data, b"x=-1.5e3;", 2), Ok((-1500.0, 6)));
/// ```
#[cfg(feature = "alloc")]
pub fn parse_f64(data: &FormattingData, buffer: &[u8], index: usize) -> Result<(f64, usize)> {
    if index >= buffer.len() {
        return Err(CodecError::InvalidInput);
    }

    let mut builder = NumberBuilder::new();
    let mut accepted = None;
    let mut pos = index;
    while let Some((symbol, len)) = data.next_symbol(buffer, pos) {
        if !builder.push(symbol) {
            break;
        }
        pos += len;
        if builder.is_complete() {
            accepted = Some((builder, pos));
        }
    }

    let (builder, end) = accepted.ok_or(CodecError::InvalidInput)?;
    let number = builder.finish()?;
    Ok((number.to_f64(), end - index))
}
