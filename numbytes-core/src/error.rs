//! Error types for numbytes operations

/// Errors that can occur while building tables, encoding symbols or converting numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Malformed input, out-of-range index or empty buffer
    InvalidInput,
    /// Non-digit byte handed to the decimal converter
    InvalidDigit,
    /// Output buffer too small for the symbol's code
    InsufficientSpace,
    /// Two symbols share the same byte sequence
    DuplicateCode,
    /// The table defines no byte sequence for the symbol
    UndefinedSymbol,
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            CodecError::InvalidInput => "Invalid input buffer or index",
            CodecError::InvalidDigit => "Non-digit byte in digit buffer",
            CodecError::InsufficientSpace => "Insufficient buffer space",
            CodecError::DuplicateCode => "Duplicate symbol code in table",
            CodecError::UndefinedSymbol => "Symbol not defined by table",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for CodecError {}

/// Result type for numbytes operations
pub type Result<T> = core::result::Result<T, CodecError>;
