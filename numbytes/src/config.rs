//! JSON-loadable symbol tables
//!
//! ```json
//! {
//!   "encoding": "utf16",
//!   "digits": ["٠", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩"],
//!   "decimal_separator": "٫",
//!   "minus_sign": "\u061C-"
//! }
//! ```
//!
//! Omitted symbols are left undefined; a table without a decimal separator
//! only parses integers.

use std::io::Read;

use numbytes_core::{Encoding, FormattingData, Symbol, INVARIANT_SYMBOLS};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Symbol strings for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    #[serde(default)]
    pub encoding: Encoding,
    /// Digits zero through nine
    pub digits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infinity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minus_sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent_secondary: Option<String>,
}

impl TableConfig {
    /// Parse a table from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        log::trace!("parsing table config ({} bytes)", json.len());
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a table from a JSON source
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ConfigError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Set the encoding of the built table
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Replace one symbol's string, or remove it with `None`
    ///
    /// Digits can be replaced but not removed.
    pub fn with_symbol(mut self, symbol: Symbol, text: Option<&str>) -> Self {
        match symbol.digit_value() {
            Some(value) => {
                if let (Some(text), Some(slot)) = (text, self.digits.get_mut(usize::from(value))) {
                    *slot = text.to_owned();
                }
            }
            None => {
                if let Some(slot) = self.named_mut(symbol) {
                    *slot = text.map(str::to_owned);
                }
            }
        }
        self
    }

    /// Build the decode table
    pub fn build(&self) -> Result<FormattingData, ConfigError> {
        if self.digits.len() != 10 {
            return Err(ConfigError::DigitCount(self.digits.len()));
        }

        let mut symbols: [Option<&str>; Symbol::COUNT] = [None; Symbol::COUNT];
        for (slot, digit) in symbols.iter_mut().zip(&self.digits) {
            *slot = Some(digit.as_str());
        }
        for (symbol, text) in self.named() {
            symbols[symbol.index()] = text;
        }

        let data = FormattingData::from_strs(symbols, self.encoding)?;
        log::trace!("built {} table from config", self.encoding);
        Ok(data)
    }

    fn named(&self) -> [(Symbol, Option<&str>); 8] {
        [
            (Symbol::DecimalSeparator, self.decimal_separator.as_deref()),
            (Symbol::GroupSeparator, self.group_separator.as_deref()),
            (Symbol::Infinity, self.infinity.as_deref()),
            (Symbol::MinusSign, self.minus_sign.as_deref()),
            (Symbol::PlusSign, self.plus_sign.as_deref()),
            (Symbol::NaN, self.nan.as_deref()),
            (Symbol::Exponent, self.exponent.as_deref()),
            (Symbol::ExponentSecondary, self.exponent_secondary.as_deref()),
        ]
    }

    fn named_mut(&mut self, symbol: Symbol) -> Option<&mut Option<String>> {
        match symbol {
            Symbol::DecimalSeparator => Some(&mut self.decimal_separator),
            Symbol::GroupSeparator => Some(&mut self.group_separator),
            Symbol::Infinity => Some(&mut self.infinity),
            Symbol::MinusSign => Some(&mut self.minus_sign),
            Symbol::PlusSign => Some(&mut self.plus_sign),
            Symbol::NaN => Some(&mut self.nan),
            Symbol::Exponent => Some(&mut self.exponent),
            Symbol::ExponentSecondary => Some(&mut self.exponent_secondary),
            _ => None,
        }
    }
}

impl Default for TableConfig {
    /// The invariant table in UTF-8
    fn default() -> Self {
        let text = |symbol: Symbol| INVARIANT_SYMBOLS[symbol.index()].map(str::to_owned);
        Self {
            encoding: Encoding::Utf8,
            digits: (0..10)
                .filter_map(|value| INVARIANT_SYMBOLS[value].map(str::to_owned))
                .collect(),
            decimal_separator: text(Symbol::DecimalSeparator),
            group_separator: text(Symbol::GroupSeparator),
            infinity: text(Symbol::Infinity),
            minus_sign: text(Symbol::MinusSign),
            plus_sign: text(Symbol::PlusSign),
            nan: text(Symbol::NaN),
            exponent: text(Symbol::Exponent),
            exponent_secondary: text(Symbol::ExponentSecondary),
        }
    }
}
