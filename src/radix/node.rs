use smallvec::SmallVec;
use std::sync::Arc;

use crate::pattern::{Capture, Token};

pub(crate) type Segment = SmallVec<[Token; 16]>;
pub(crate) type Edges = SmallVec<[Edge; 4]>;

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub key: Token,
    pub child: NodeId,
}

/// A registered route: the caller's payload and the variable names of the
/// pattern that produced it.
#[derive(Debug, Clone)]
pub struct Route<T> {
    pub payload: T,
    pub captures: Arc<[Capture]>,
}

#[derive(Debug, Clone)]
pub struct RadixTreeNode<T> {
    pub(crate) segment: Segment,
    // sorted by key, no duplicates
    pub(crate) edges: Edges,
    pub(crate) route: Option<Route<T>>,
}

impl<T> Default for RadixTreeNode<T> {
    fn default() -> Self {
        Self {
            segment: Segment::new(),
            edges: Edges::new(),
            route: None,
        }
    }
}

impl<T> RadixTreeNode<T> {
    pub(super) fn leaf(segment: &[Token], route: Route<T>) -> Self {
        Self {
            segment: Segment::from_slice(segment),
            edges: Edges::new(),
            route: Some(route),
        }
    }

    pub fn segment(&self) -> &[Token] {
        &self.segment
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn route(&self) -> Option<&Route<T>> {
        self.route.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.route.is_some()
    }

    #[inline]
    pub(crate) fn find_edge(&self, key: Token) -> Option<NodeId> {
        self.edges
            .binary_search_by(|edge| edge.key.cmp(&key))
            .ok()
            .map(|pos| self.edges[pos].child)
    }

    /// Children worth trying at a node boundary, best first: the literal
    /// edge for the next path byte, then the wildcard edge, then the
    /// catch-all edge. `byte` is `None` once the path is exhausted, where
    /// only a catch-all can still match.
    #[inline]
    pub(crate) fn candidates(&self, byte: Option<u8>) -> SmallVec<[NodeId; 3]> {
        let mut out = SmallVec::new();
        if let Some(byte) = byte
            && let Some(child) = self.find_edge(Token::Literal(byte))
        {
            out.push(child);
        }
        for edge in self.dynamic_edges() {
            if edge.key == Token::Wildcard && byte.is_none() {
                continue;
            }
            out.push(edge.child);
        }
        out
    }

    /// Wildcard and catch-all edges; they sort after every literal.
    #[inline]
    pub(crate) fn dynamic_edges(&self) -> &[Edge] {
        let start = self.edges.partition_point(|edge| !edge.key.is_dynamic());
        &self.edges[start..]
    }

    pub(super) fn insert_edge(&mut self, key: Token, child: NodeId) {
        let pos = self.edges.partition_point(|edge| edge.key < key);
        self.edges.insert(pos, Edge { key, child });
    }
}
