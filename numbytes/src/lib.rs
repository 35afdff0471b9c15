//! numbytes - locale-aware number parsing straight from bytes
//!
//! Parses `f64` values out of UTF-8 or UTF-16 byte buffers using per-locale
//! symbol tables, without building intermediate strings.
//!
//! ## Architecture
//!
//! - **numbytes-core**: the `no_std` converter, symbol tables and number grammar
//! - **numbytes**: shared default tables, JSON table configs, streaming and
//!   batch parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use numbytes::{parse_utf8, stream::{Progress, StreamParser}, defaults};
//!
//! assert_eq!(parse_utf8(b"-12.5e-1 rest"), Ok((-1.25, 8)));
//!
//! let mut parser = StreamParser::new(defaults::invariant_utf8());
//! assert_eq!(parser.push(b"Infin"), Ok(Progress::NeedMore));
//! assert_eq!(parser.push(b"ity;"), Ok(Progress::Done { value: f64::INFINITY, consumed: 8 }));
//! ```
//!
//! ## Features
//!
//! - **serde**: load symbol tables from JSON ([`config::TableConfig`])
//! - **parallel**: parse batches of buffers on the rayon pool
//! - **cli**: the `numparse` example

// Re-export the core codec
pub use numbytes_core::{
    // Conversion
    decimal_to_f64, DecimalNumber, Number, NumberBuilder, MAX_SIGNIFICANT_DIGITS,
    // Symbol tables
    Cursor, Decode, Encoding, FormattingData, Symbol, INVARIANT_SYMBOLS,
    // Parsing
    parse_f64,
    // Error handling
    CodecError, Result,
};

pub mod batch;
#[cfg(feature = "serde")]
pub mod config;
pub mod defaults;
pub mod error;
pub mod stream;
pub mod utf16;

pub use batch::{parse_all, BatchConfig};
#[cfg(feature = "serde")]
pub use config::TableConfig;
pub use error::ConfigError;
pub use stream::{Progress, StreamParser};
pub use utf16::parse_utf16;

/// Parse a number at the start of a UTF-8 buffer with the invariant table
///
/// Returns the value and the number of bytes it spans.
pub fn parse_utf8(buffer: &[u8]) -> Result<(f64, usize)> {
    parse_f64(defaults::invariant_utf8(), buffer, 0)
}
