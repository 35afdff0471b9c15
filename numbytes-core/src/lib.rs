#![no_std]

//! numbytes core - byte level numeric codec primitives
//!
//! This crate converts between locale-specific byte sequences and `f64`
//! without building intermediate strings:
//!
//! - [`decimal`]: digit buffer, scale and sign to the nearest binary64
//! - [`symbols`]: per-locale symbol tables decoded one byte at a time
//! - [`number`]: the symbol grammar joining the two
//!
//! Tables need the `alloc` feature; the converter works without it.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod decimal;
pub mod error;
pub mod number;
pub mod symbols;

pub use decimal::{decimal_to_f64, MAX_SIGNIFICANT_DIGITS};
pub use error::*;
pub use number::{DecimalNumber, Number, NumberBuilder};
pub use symbols::{Encoding, Symbol, INVARIANT_SYMBOLS};

#[cfg(feature = "alloc")]
pub use number::parse_f64;
#[cfg(feature = "alloc")]
pub use symbols::{Cursor, Decode, FormattingData};
