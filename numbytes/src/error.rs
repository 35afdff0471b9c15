//! Errors raised while loading symbol tables

use numbytes_core::{CodecError, Symbol};

/// Errors that can occur while loading or building a symbol table
#[derive(Debug)]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong type
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    /// Reading the source failed
    Io(std::io::Error),
    /// The codes do not form a valid table
    Codec(CodecError),
    /// A table must define exactly ten digits
    DigitCount(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            ConfigError::Json(err) => write!(f, "Invalid table JSON: {err}"),
            ConfigError::Io(err) => write!(f, "Failed to read table: {err}"),
            ConfigError::Codec(err) => write!(f, "Invalid symbol table: {err}"),
            ConfigError::DigitCount(count) => {
                let expected = Symbol::Digit9.index() + 1;
                write!(f, "Expected {expected} digits, found {count}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            ConfigError::Json(err) => Some(err),
            ConfigError::Io(err) => Some(err),
            ConfigError::Codec(err) => Some(err),
            ConfigError::DigitCount(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<CodecError> for ConfigError {
    fn from(err: CodecError) -> Self {
        ConfigError::Codec(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        assert_eq!(ConfigError::DigitCount(9).to_string(), "Expected 10 digits, found 9");
        let err = ConfigError::from(CodecError::DuplicateCode);
        assert!(err.to_string().starts_with("Invalid symbol table: "));
    }

    #[test]
    fn test_source_chain() {
        let err = ConfigError::from(CodecError::InvalidInput);
        let source = err.source().and_then(|s| s.downcast_ref::<CodecError>());
        assert_eq!(source, Some(&CodecError::InvalidInput));
        assert!(ConfigError::DigitCount(3).source().is_none());

        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        assert!(ConfigError::from(io).source().is_some());
    }
}
