//! Chunk-fed number parsing
//!
//! [`StreamParser`] recognizes one number across input that arrives in
//! pieces. Each byte is looked at once; a symbol split between chunks is
//! carried in the decode cursor rather than buffered.

use numbytes_core::{CodecError, Cursor, Decode, FormattingData, NumberBuilder, Result, Symbol};

/// Outcome of feeding a chunk
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// Every byte so far may still belong to the number
    NeedMore,
    /// The number ended; `consumed` counts its bytes from the start of the stream
    Done { value: f64, consumed: usize },
}

/// Incremental parser for a single number
#[derive(Debug, Clone)]
pub struct StreamParser<'a> {
    data: &'a FormattingData,
    cursor: Cursor,
    builder: NumberBuilder,
    /// Bytes of fully recognized symbols
    position: usize,
    /// Builder state and position of the longest complete number
    accepted: Option<(NumberBuilder, usize)>,
    done: Option<(f64, usize)>,
}

impl<'a> StreamParser<'a> {
    pub fn new(data: &'a FormattingData) -> Self {
        Self {
            data,
            cursor: Cursor::START,
            builder: NumberBuilder::new(),
            position: 0,
            accepted: None,
            done: None,
        }
    }

    /// Bytes of the stream fed so far that belong to recognized symbols
    pub fn position(&self) -> usize {
        self.position
    }

    /// Feed the next chunk of input
    ///
    /// Once the number has ended, later calls return the same
    /// [`Progress::Done`]. Fails with [`CodecError::InvalidInput`] when the
    /// input cannot start a number.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Progress> {
        if let Some((value, consumed)) = self.done {
            return Ok(Progress::Done { value, consumed });
        }
        log::trace!(
            "stream chunk of {} bytes at offset {}, {} bytes pending",
            chunk.len(),
            self.position,
            self.cursor.depth()
        );

        for &byte in chunk {
            loop {
                match self.data.feed(byte, self.cursor) {
                    Decode::Continue(cursor) => {
                        self.cursor = cursor;
                        break;
                    }
                    Decode::Matched { symbol, len } => {
                        // A shorter code matched on a miss leaves the byte unread
                        let byte_used = len > self.cursor.depth();
                        self.cursor = Cursor::START;
                        if !self.accept(symbol, len) {
                            return self.conclude();
                        }
                        if byte_used {
                            break;
                        }
                    }
                    Decode::Invalid => return self.conclude(),
                }
            }
        }
        Ok(Progress::NeedMore)
    }

    /// Signal the end of input and return the parsed value
    pub fn finish(mut self) -> Result<f64> {
        if let Some((value, _)) = self.done {
            return Ok(value);
        }
        if let Some((symbol, len)) = self.data.finish(self.cursor) {
            self.accept(symbol, len);
        }
        match self.conclude()? {
            Progress::Done { value, .. } => Ok(value),
            Progress::NeedMore => Err(CodecError::InvalidInput),
        }
    }

    fn accept(&mut self, symbol: Symbol, len: usize) -> bool {
        if !self.builder.push(symbol) {
            return false;
        }
        self.position += len;
        if self.builder.is_complete() {
            self.accepted = Some((self.builder, self.position));
        }
        true
    }

    fn conclude(&mut self) -> Result<Progress> {
        let (builder, consumed) = self.accepted.ok_or(CodecError::InvalidInput)?;
        let value = builder.finish()?.to_f64();
        log::trace!("stream number ended after {consumed} bytes");
        self.done = Some((value, consumed));
        Ok(Progress::Done { value, consumed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use numbytes_core::{Encoding, INVARIANT_SYMBOLS};

    fn push_all(parser: &mut StreamParser<'_>, chunks: &[&[u8]]) -> Result<Progress> {
        let mut progress = Ok(Progress::NeedMore);
        for chunk in chunks {
            progress = parser.push(chunk);
            if !matches!(progress, Ok(Progress::NeedMore)) {
                break;
            }
        }
        progress
    }

    #[test]
    fn test_single_chunk() {
        let mut parser = StreamParser::new(defaults::invariant_utf8());
        assert_eq!(parser.push(b"3.25;"), Ok(Progress::Done { value: 3.25, consumed: 4 }));
        // Later chunks repeat the result
        assert_eq!(parser.push(b"9"), Ok(Progress::Done { value: 3.25, consumed: 4 }));
    }

    #[test]
    fn test_every_split_point() {
        let input = b"-1.5E+3 ";
        for split in 0..=input.len() {
            let (head, tail) = input.split_at(split);
            let mut parser = StreamParser::new(defaults::invariant_utf8());
            let progress = push_all(&mut parser, &[head, tail]);
            assert_eq!(progress, Ok(Progress::Done { value: -1500.0, consumed: 7 }), "split {split}");
        }
    }

    #[test]
    fn test_byte_at_a_time_utf16() {
        let input = Encoding::Utf16.encode("-Infinity,");
        let mut parser = StreamParser::new(defaults::invariant_utf16());
        let chunks: Vec<&[u8]> = input.chunks(1).collect();
        assert_eq!(
            push_all(&mut parser, &chunks),
            Ok(Progress::Done { value: f64::NEG_INFINITY, consumed: 18 })
        );
    }

    #[test]
    fn test_finish_at_end_of_input() {
        let mut parser = StreamParser::new(defaults::invariant_utf8());
        assert_eq!(parser.push(b"12"), Ok(Progress::NeedMore));
        assert_eq!(parser.push(b"5e-1"), Ok(Progress::NeedMore));
        assert_eq!(parser.position(), 6);
        assert_eq!(parser.finish(), Ok(12.5));

        let mut parser = StreamParser::new(defaults::invariant_utf8());
        assert_eq!(parser.push(b"7e"), Ok(Progress::NeedMore));
        assert_eq!(parser.finish(), Ok(7.0));
    }

    #[test]
    fn test_dangling_exponent_not_consumed() {
        let mut parser = StreamParser::new(defaults::invariant_utf8());
        assert_eq!(parser.push(b"7e+x"), Ok(Progress::Done { value: 7.0, consumed: 1 }));
    }

    #[test]
    fn test_prefix_symbol_across_chunks() {
        let mut symbols = INVARIANT_SYMBOLS;
        symbols[Symbol::ExponentSecondary.index()] = Some("Ex");
        let data = FormattingData::from_strs(symbols, Encoding::Utf8).unwrap();

        // "E" is only known to be complete once the next byte is seen
        let mut parser = StreamParser::new(&data);
        assert_eq!(parser.push(b"2E"), Ok(Progress::NeedMore));
        assert_eq!(parser.push(b"2 "), Ok(Progress::Done { value: 200.0, consumed: 3 }));

        let mut parser = StreamParser::new(&data);
        assert_eq!(push_all(&mut parser, &[&b"2E"[..], b"x", b"3"]), Ok(Progress::NeedMore));
        assert_eq!(parser.finish(), Ok(2000.0));
    }

    #[test]
    fn test_no_number() {
        let mut parser = StreamParser::new(defaults::invariant_utf8());
        assert_eq!(parser.push(b"x1"), Err(CodecError::InvalidInput));

        let mut parser = StreamParser::new(defaults::invariant_utf8());
        assert_eq!(parser.push(b"-"), Ok(Progress::NeedMore));
        assert_eq!(parser.finish(), Err(CodecError::InvalidInput));

        let mut parser = StreamParser::new(defaults::invariant_utf8());
        assert_eq!(parser.push(b"Inf"), Ok(Progress::NeedMore));
        assert_eq!(parser.finish(), Err(CodecError::InvalidInput));

        assert_eq!(StreamParser::new(defaults::invariant_utf8()).finish(), Err(CodecError::InvalidInput));
    }

    #[test]
    fn test_group_separator_ends_number() {
        let mut parser = StreamParser::new(defaults::invariant_utf8());
        assert_eq!(parser.push(b"1,000"), Ok(Progress::Done { value: 1.0, consumed: 1 }));
    }
}
