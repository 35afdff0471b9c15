//! Process-wide invariant tables
//!
//! Each table is built on first use and shared for the rest of the process.

use std::sync::OnceLock;

use numbytes_core::{Encoding, FormattingData};

static INVARIANT_UTF8: OnceLock<FormattingData> = OnceLock::new();
static INVARIANT_UTF16: OnceLock<FormattingData> = OnceLock::new();

/// Invariant table with UTF-8 codes
pub fn invariant_utf8() -> &'static FormattingData {
    INVARIANT_UTF8.get_or_init(|| {
        log::debug!("initializing invariant UTF-8 table");
        FormattingData::invariant_utf8()
    })
}

/// Invariant table with UTF-16LE codes
pub fn invariant_utf16() -> &'static FormattingData {
    INVARIANT_UTF16.get_or_init(|| {
        log::debug!("initializing invariant UTF-16 table");
        FormattingData::invariant_utf16()
    })
}

/// Invariant table for `encoding`
pub fn invariant(encoding: Encoding) -> &'static FormattingData {
    match encoding {
        Encoding::Utf8 => invariant_utf8(),
        Encoding::Utf16 => invariant_utf16(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_shared() {
        assert!(std::ptr::eq(invariant_utf8(), invariant_utf8()));
        assert!(std::ptr::eq(invariant(Encoding::Utf16), invariant_utf16()));
        assert!(!std::ptr::eq(invariant_utf8(), invariant_utf16()));
    }

    #[test]
    fn test_table_encodings() {
        assert_eq!(invariant_utf8().encoding(), Encoding::Utf8);
        assert_eq!(invariant_utf16().encoding(), Encoding::Utf16);
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| invariant_utf16() as *const FormattingData as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
