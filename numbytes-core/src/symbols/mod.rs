//! Locale symbol definitions and the byte-level symbol codec
//!
//! A [`FormattingData`] maps each [`Symbol`] to the byte sequence a locale
//! uses for it, in a given [`Encoding`], and recognizes those sequences one
//! byte at a time.

#[cfg(feature = "alloc")]
pub mod table;
#[cfg(feature = "alloc")]
mod trie;

#[cfg(feature = "alloc")]
pub use table::{Cursor, Decode, FormattingData};

use crate::error::CodecError;

/// Tokens a numeric symbol table can define
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Symbol {
    Digit0 = 0,
    Digit1 = 1,
    Digit2 = 2,
    Digit3 = 3,
    Digit4 = 4,
    Digit5 = 5,
    Digit6 = 6,
    Digit7 = 7,
    Digit8 = 8,
    Digit9 = 9,
    DecimalSeparator = 10,
    GroupSeparator = 11,
    Infinity = 12,
    MinusSign = 13,
    PlusSign = 14,
    NaN = 15,
    Exponent = 16,
    ExponentSecondary = 17,
}

impl Symbol {
    /// Number of symbols a table has slots for
    pub const COUNT: usize = 18;

    /// All symbols in table order
    pub const ALL: [Symbol; Self::COUNT] = [
        Symbol::Digit0,
        Symbol::Digit1,
        Symbol::Digit2,
        Symbol::Digit3,
        Symbol::Digit4,
        Symbol::Digit5,
        Symbol::Digit6,
        Symbol::Digit7,
        Symbol::Digit8,
        Symbol::Digit9,
        Symbol::DecimalSeparator,
        Symbol::GroupSeparator,
        Symbol::Infinity,
        Symbol::MinusSign,
        Symbol::PlusSign,
        Symbol::NaN,
        Symbol::Exponent,
        Symbol::ExponentSecondary,
    ];

    /// Slot of this symbol in a table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol stored at a table slot
    pub const fn from_index(index: usize) -> Option<Symbol> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Digit symbol for a value in `0..=9`
    pub const fn digit(value: u8) -> Option<Symbol> {
        if value < 10 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Numeric value of a digit symbol
    pub const fn digit_value(self) -> Option<u8> {
        let index = self as u8;
        if index < 10 {
            Some(index)
        } else {
            None
        }
    }

    /// Sign symbols (`-` and `+` in the invariant table)
    pub const fn is_sign(self) -> bool {
        matches!(self, Symbol::MinusSign | Symbol::PlusSign)
    }

    /// Either exponent marker
    pub const fn is_exponent(self) -> bool {
        matches!(self, Symbol::Exponent | Symbol::ExponentSecondary)
    }
}

impl TryFrom<u8> for Symbol {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Symbol::from_index(value as usize).ok_or(CodecError::InvalidInput)
    }
}

impl core::fmt::Display for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(value) = self.digit_value() {
            return write!(f, "digit {value}");
        }
        let name = match self {
            Symbol::DecimalSeparator => "decimal separator",
            Symbol::GroupSeparator => "group separator",
            Symbol::Infinity => "infinity",
            Symbol::MinusSign => "minus sign",
            Symbol::PlusSign => "plus sign",
            Symbol::NaN => "NaN",
            Symbol::Exponent => "exponent",
            Symbol::ExponentSecondary => "secondary exponent",
            _ => "digit",
        };
        write!(f, "{name}")
    }
}

/// Text encoding of a symbol table's byte sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    #[default]
    Utf8,
    /// Little-endian UTF-16 code units
    Utf16,
}

impl Encoding {
    /// Bytes per code unit
    pub const fn unit_size(self) -> usize {
        match self {
            Encoding::Utf8 => 1,
            Encoding::Utf16 => 2,
        }
    }

    /// Encode text into this encoding's byte form
    #[cfg(feature = "alloc")]
    pub fn encode(self, text: &str) -> alloc::vec::Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Utf16 => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }
}

impl core::fmt::Display for Encoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16 => write!(f, "UTF-16"),
        }
    }
}

/// Symbol strings of the invariant (locale-independent) table, in table order
pub const INVARIANT_SYMBOLS: [Option<&str>; Symbol::COUNT] = [
    Some("0"),
    Some("1"),
    Some("2"),
    Some("3"),
    Some("4"),
    Some("5"),
    Some("6"),
    Some("7"),
    Some("8"),
    Some("9"),
    Some("."),
    Some(","),
    Some("Infinity"),
    Some("-"),
    Some("+"),
    Some("NaN"),
    Some("E"),
    Some("e"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_indices() {
        for (index, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), index);
            assert_eq!(Symbol::from_index(index), Some(*symbol));
            assert_eq!(Symbol::try_from(index as u8), Ok(*symbol));
        }
        assert_eq!(Symbol::from_index(Symbol::COUNT), None);
        assert_eq!(Symbol::try_from(18), Err(CodecError::InvalidInput));
    }

    #[test]
    fn test_digits() {
        for value in 0..10 {
            let symbol = Symbol::digit(value).unwrap();
            assert_eq!(symbol.digit_value(), Some(value));
        }
        assert_eq!(Symbol::digit(10), None);
        assert_eq!(Symbol::DecimalSeparator.digit_value(), None);
        assert_eq!(Symbol::ExponentSecondary.digit_value(), None);
    }

    #[test]
    fn test_classification() {
        assert!(Symbol::MinusSign.is_sign());
        assert!(Symbol::PlusSign.is_sign());
        assert!(!Symbol::Digit0.is_sign());
        assert!(Symbol::Exponent.is_exponent());
        assert!(Symbol::ExponentSecondary.is_exponent());
        assert!(!Symbol::NaN.is_exponent());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_encoding() {
        assert_eq!(Encoding::Utf8.encode("1."), b"1.".to_vec());
        assert_eq!(Encoding::Utf16.encode("1."), [0x31, 0x00, 0x2E, 0x00].to_vec());
        // U+0660 ARABIC-INDIC DIGIT ZERO
        assert_eq!(Encoding::Utf8.encode("\u{0660}"), [0xD9, 0xA0].to_vec());
        assert_eq!(Encoding::Utf16.encode("\u{0660}"), [0x60, 0x06].to_vec());
        assert_eq!(Encoding::Utf16.unit_size(), 2);
    }
}
