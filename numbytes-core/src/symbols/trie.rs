//! Decode trie over symbol byte sequences
//!
//! Nodes live in one flat pool. Every branch owns a contiguous run of
//! children sorted by [`Key`], so lookups are a binary search. Leaves sit at
//! the shallowest depth where their sequence becomes unique; the bytes past
//! that point are checked against the stored sequence during decode.

use alloc::vec::Vec;

use super::Symbol;
use crate::error::{CodecError, Result};

/// Child key: the next byte, or the end of a sequence that is a strict
/// prefix of a longer one. `End` orders before every byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Key {
    End,
    Byte(u8),
}

impl Key {
    fn at(code: &[u8], depth: usize) -> Self {
        match code.get(depth) {
            Some(&byte) => Key::Byte(byte),
            None => Key::End,
        }
    }
}

/// Contiguous run of nodes in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Span {
    pub start: u32,
    pub len: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Leaf(Symbol),
    Branch(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub key: Key,
    pub kind: NodeKind,
}

/// Immutable trie built once per table
#[derive(Debug, Clone)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
    root: Span,
}

impl Trie {
    /// Build from per-symbol codes. Absent codes are skipped; empty codes
    /// are rejected.
    pub fn build(codes: &[Option<Vec<u8>>; Symbol::COUNT]) -> Result<Self> {
        let mut root = Vec::new();
        for symbol in Symbol::ALL {
            match codes[symbol.index()].as_deref() {
                None => continue,
                Some([]) => return Err(CodecError::InvalidInput),
                Some(_) => insert(&mut root, codes, symbol, 0)?,
            }
        }

        let mut nodes = Vec::new();
        let root = place(root, &mut nodes);
        Ok(Self { nodes, root })
    }

    pub fn root(&self) -> Span {
        self.root
    }

    pub fn node(&self, index: u32) -> Option<&Node> {
        self.nodes.get(index as usize)
    }

    pub fn children(&self, span: Span) -> &[Node] {
        let start = span.start as usize;
        &self.nodes[start..start + span.len as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Node under construction
struct Pending {
    key: Key,
    kind: PendingKind,
}

enum PendingKind {
    Leaf(Symbol),
    Branch(Vec<Pending>),
}

fn code_of(codes: &[Option<Vec<u8>>; Symbol::COUNT], symbol: Symbol) -> &[u8] {
    codes[symbol.index()].as_deref().unwrap_or_default()
}

/// Insert `symbol` into a sorted level, splitting a colliding leaf into a
/// branch one byte deeper.
fn insert(
    level: &mut Vec<Pending>,
    codes: &[Option<Vec<u8>>; Symbol::COUNT],
    symbol: Symbol,
    depth: usize,
) -> Result<()> {
    let key = Key::at(code_of(codes, symbol), depth);

    let pos = match level.binary_search_by(|pending| pending.key.cmp(&key)) {
        Ok(pos) => pos,
        Err(pos) => {
            level.insert(
                pos,
                Pending {
                    key,
                    kind: PendingKind::Leaf(symbol),
                },
            );
            return Ok(());
        }
    };

    let existing = match level[pos].kind {
        PendingKind::Branch(ref mut children) => {
            return insert(children, codes, symbol, depth + 1);
        }
        PendingKind::Leaf(existing) => existing,
    };

    // Both sequences ended at the same byte
    if key == Key::End {
        return Err(CodecError::DuplicateCode);
    }

    let mut children = Vec::with_capacity(2);
    insert(&mut children, codes, existing, depth + 1)?;
    insert(&mut children, codes, symbol, depth + 1)?;
    level[pos].kind = PendingKind::Branch(children);
    Ok(())
}

/// Lay out one level contiguously, then each branch's children after it
fn place(level: Vec<Pending>, nodes: &mut Vec<Node>) -> Span {
    let start = nodes.len();
    let mut deferred = Vec::new();

    for pending in level {
        let kind = match pending.kind {
            PendingKind::Leaf(symbol) => NodeKind::Leaf(symbol),
            PendingKind::Branch(children) => {
                deferred.push((nodes.len(), children));
                NodeKind::Branch(Span::default())
            }
        };
        nodes.push(Node {
            key: pending.key,
            kind,
        });
    }

    let span = Span {
        start: start as u32,
        len: (nodes.len() - start) as u32,
    };

    for (index, children) in deferred {
        let child_span = place(children, nodes);
        nodes[index].kind = NodeKind::Branch(child_span);
    }

    span
}
