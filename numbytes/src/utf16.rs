//! Parsing and writing UTF-16 code unit slices
//!
//! Tables store UTF-16 as little-endian bytes. On little-endian targets a
//! `&[u16]` is viewed as those bytes directly.

use numbytes_core::{parse_f64, CodecError, Encoding, FormattingData, Result, Symbol};

use crate::defaults;

/// Parse a number at the start of `units` with the invariant UTF-16 table
///
/// Returns the value and the number of code units it spans.
pub fn parse_utf16(units: &[u16]) -> Result<(f64, usize)> {
    parse_utf16_with(defaults::invariant_utf16(), units, 0)
}

/// Parse a number at `units[index]` with a UTF-16 table
pub fn parse_utf16_with(data: &FormattingData, units: &[u16], index: usize) -> Result<(f64, usize)> {
    if data.encoding() != Encoding::Utf16 {
        return Err(CodecError::InvalidInput);
    }
    let start = index.checked_mul(2).ok_or(CodecError::InvalidInput)?;

    #[cfg(target_endian = "little")]
    let (value, consumed) = parse_f64(data, bytemuck::cast_slice(units), start)?;

    #[cfg(not(target_endian = "little"))]
    let (value, consumed) = {
        let bytes: Vec<u8> = units.iter().flat_map(|unit| unit.to_le_bytes()).collect();
        parse_f64(data, &bytes, start)?
    };

    Ok((value, consumed / 2))
}

/// Write `symbol` from a UTF-16 table as code units
///
/// Returns the number of units written; nothing is written when `out` is too
/// short.
pub fn write_utf16(data: &FormattingData, symbol: Symbol, out: &mut [u16]) -> Result<usize> {
    if data.encoding() != Encoding::Utf16 {
        return Err(CodecError::InvalidInput);
    }
    let code = data.code(symbol).ok_or(CodecError::UndefinedSymbol)?;
    let target = out.get_mut(..code.len() / 2).ok_or(CodecError::InsufficientSpace)?;

    #[cfg(target_endian = "little")]
    data.write(symbol, bytemuck::cast_slice_mut(target))?;

    #[cfg(not(target_endian = "little"))]
    for (unit, pair) in target.iter_mut().zip(code.chunks_exact(2)) {
        *unit = u16::from_le_bytes([pair[0], pair[1]]);
    }

    Ok(target.len())
}
