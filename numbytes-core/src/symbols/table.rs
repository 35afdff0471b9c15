//! Symbol tables with incremental decode and direct encode
//!
//! A [`FormattingData`] is built once from up to [`Symbol::COUNT`] byte
//! sequences and is immutable afterwards, so a single table can be shared by
//! any number of threads. Decode state lives in a caller-held [`Cursor`].

use alloc::vec::Vec;

use super::trie::{Key, Node, NodeKind, Trie};
use super::{Encoding, Symbol, INVARIANT_SYMBOLS};
use crate::error::{CodecError, Result};

/// Resumable position inside a table's decode trie
///
/// A fresh cursor is [`Cursor::START`]. Callers pass the cursor returned in
/// [`Decode::Continue`] back into the next [`FormattingData::feed`] and go
/// back to `START` after a match or an invalid byte.
///
/// A cursor only has meaning for the table that produced it. Handing it to
/// another table never panics; a position that table does not have decodes as
/// [`Decode::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    node: Option<u32>,
    depth: u32,
}

impl Cursor {
    /// No bytes fed yet
    pub const START: Cursor = Cursor {
        node: None,
        depth: 0,
    };

    /// Whether no bytes of the current symbol have been fed
    pub fn is_start(&self) -> bool {
        self.node.is_none()
    }

    /// Bytes of the current symbol fed so far
    pub fn depth(&self) -> usize {
        self.depth as usize
    }
}

/// Outcome of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decode {
    /// A complete symbol was recognized.
    ///
    /// `len` is the total length of the symbol's code. It is one less than
    /// the number of bytes fed when the symbol is a strict prefix of another
    /// code and was only settled by a byte that could not extend it; that
    /// byte is not part of the symbol and must be fed again from
    /// [`Cursor::START`].
    Matched { symbol: Symbol, len: usize },
    /// More bytes are needed
    Continue(Cursor),
    /// The bytes fed so far match no symbol
    Invalid,
}

/// Byte sequences for each numeric symbol plus their decode trie
#[derive(Debug, Clone)]
pub struct FormattingData {
    codes: [Option<Vec<u8>>; Symbol::COUNT],
    encoding: Encoding,
    trie: Trie,
}

impl FormattingData {
    /// Build a table from per-symbol byte sequences in [`Symbol`] order
    ///
    /// `None` leaves a symbol undefined. Fails with
    /// [`CodecError::DuplicateCode`] when two symbols share a sequence and
    /// with [`CodecError::InvalidInput`] for an empty sequence.
    pub fn new(codes: [Option<Vec<u8>>; Symbol::COUNT], encoding: Encoding) -> Result<Self> {
        let trie = Trie::build(&codes)?;
        log::debug!(
            "built {} symbol table: {} codes, {} trie nodes",
            encoding,
            codes.iter().flatten().count(),
            trie.len()
        );
        Ok(Self {
            codes,
            encoding,
            trie,
        })
    }

    /// Build a table from symbol strings, encoding each one with `encoding`
    pub fn from_strs(symbols: [Option<&str>; Symbol::COUNT], encoding: Encoding) -> Result<Self> {
        Self::new(symbols.map(|text| text.map(|text| encoding.encode(text))), encoding)
    }

    /// Locale-independent table with one byte per symbol where possible
    pub fn invariant_utf8() -> Self {
        Self::from_strs(INVARIANT_SYMBOLS, Encoding::Utf8).expect("invariant symbols are distinct")
    }

    /// Locale-independent table using little-endian UTF-16 code units
    pub fn invariant_utf16() -> Self {
        Self::from_strs(INVARIANT_SYMBOLS, Encoding::Utf16).expect("invariant symbols are distinct")
    }

    /// Encoding the table's sequences are written in
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Byte sequence for `symbol`, if the table defines one
    pub fn code(&self, symbol: Symbol) -> Option<&[u8]> {
        self.codes[symbol.index()].as_deref()
    }

    /// Defined symbols with their byte sequences
    pub fn symbols(&self) -> impl Iterator<Item = (Symbol, &[u8])> + '_ {
        Symbol::ALL
            .into_iter()
            .filter_map(|symbol| self.code(symbol).map(|code| (symbol, code)))
    }

    /// Number of nodes in the decode trie
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    /// Feed one byte to the decoder
    pub fn feed(&self, byte: u8, cursor: Cursor) -> Decode {
        let depth = cursor.depth as usize;
        let span = match cursor.node {
            None => self.trie.root(),
            Some(index) => match self.trie.node(index).map(|node| node.kind) {
                None => return Decode::Invalid,
                Some(NodeKind::Branch(span)) => span,
                Some(NodeKind::Leaf(symbol)) => {
                    // Unique prefix already seen; check the rest of the code
                    return if self.code_bytes(symbol).get(depth) == Some(&byte) {
                        self.enter(index, depth + 1)
                    } else {
                        Decode::Invalid
                    };
                }
            },
        };

        let children = self.trie.children(span);
        match children.binary_search_by(|node| node.key.cmp(&Key::Byte(byte))) {
            Ok(offset) => self.enter(span.start + offset as u32, depth + 1),
            Err(_) => match end_leaf(children) {
                Some(symbol) => Decode::Matched { symbol, len: depth },
                None => Decode::Invalid,
            },
        }
    }

    /// Feed bytes until a symbol completes, the input turns invalid or the
    /// slice runs out
    ///
    /// Also returns how many bytes of `bytes` were fed. Splitting a sequence
    /// across several calls yields the same result as one call.
    pub fn feed_slice(&self, bytes: &[u8], mut cursor: Cursor) -> (Decode, usize) {
        for (offset, &byte) in bytes.iter().enumerate() {
            match self.feed(byte, cursor) {
                Decode::Continue(next) => cursor = next,
                done => return (done, offset + 1),
            }
        }
        (Decode::Continue(cursor), bytes.len())
    }

    /// Resolve a cursor at end of input
    ///
    /// Returns the symbol whose code ends exactly at the cursor, which only
    /// happens when that code is a strict prefix of another.
    pub fn finish(&self, cursor: Cursor) -> Option<(Symbol, usize)> {
        match self.trie.node(cursor.node?)?.kind {
            NodeKind::Branch(span) => {
                end_leaf(self.trie.children(span)).map(|symbol| (symbol, cursor.depth as usize))
            }
            NodeKind::Leaf(_) => None,
        }
    }

    /// Recognize the symbol starting at `buffer[pos]`
    ///
    /// Returns the symbol and its length in bytes, or `None` when the bytes
    /// at `pos` do not start with any complete symbol.
    pub fn next_symbol(&self, buffer: &[u8], pos: usize) -> Option<(Symbol, usize)> {
        let rest = buffer.get(pos..)?;
        match self.feed_slice(rest, Cursor::START) {
            (Decode::Matched { symbol, len }, _) => Some((symbol, len)),
            (Decode::Continue(cursor), _) => self.finish(cursor),
            (Decode::Invalid, _) => None,
        }
    }

    /// Copy `symbol`'s byte sequence to the front of `out`
    ///
    /// Nothing is written when `out` is too small.
    pub fn write(&self, symbol: Symbol, out: &mut [u8]) -> Result<usize> {
        let code = self.code(symbol).ok_or(CodecError::UndefinedSymbol)?;
        let dest = out
            .get_mut(..code.len())
            .ok_or(CodecError::InsufficientSpace)?;
        dest.copy_from_slice(code);
        Ok(code.len())
    }

    /// Check that `buffer[offset..]` continues `symbol`'s code after its
    /// first `consumed` bytes
    pub fn verify(&self, buffer: &[u8], offset: usize, symbol: Symbol, consumed: usize) -> bool {
        let Some(remaining) = self.code(symbol).and_then(|code| code.get(consumed..)) else {
            return false;
        };
        buffer
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(remaining))
    }

    fn code_bytes(&self, symbol: Symbol) -> &[u8] {
        self.code(symbol).unwrap_or_default()
    }

    /// Step onto a node after `depth` bytes
    fn enter(&self, index: u32, depth: usize) -> Decode {
        match self.trie.node(index).map(|node| node.kind) {
            Some(NodeKind::Leaf(symbol)) if self.code_bytes(symbol).len() == depth => {
                Decode::Matched { symbol, len: depth }
            }
            _ => Decode::Continue(Cursor {
                node: Some(index),
                depth: depth as u32,
            }),
        }
    }
}

/// Symbol ending exactly at a branch; `End` sorts first
fn end_leaf(children: &[Node]) -> Option<Symbol> {
    match children.first() {
        Some(Node {
            key: Key::End,
            kind: NodeKind::Leaf(symbol),
        }) => Some(*symbol),
        _ => None,
    }
}
