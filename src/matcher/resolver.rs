use memchr::memchr;
use smallvec::SmallVec;

use super::params::{Match, Params};
use crate::pattern::Token;
use crate::radix::{NodeId, RadixTree, RadixTreeNode, Route};
use crate::types::SpanList;

/// Observer of one traversal. The matcher is generic over it so that
/// `match_only` compiles to a walk that records nothing.
pub(crate) trait Visitor {
    #[inline(always)]
    fn capture(&mut self, _start: usize, _end: usize) {}
    #[inline(always)]
    fn enter_node(&mut self) {}
    #[inline(always)]
    fn compare(&mut self) {}
    #[inline(always)]
    fn lookup_edge(&mut self) {}
    /// Position to come back to if the branch about to be taken fails.
    #[inline(always)]
    fn mark(&self) -> usize {
        0
    }
    #[inline(always)]
    fn rewind(&mut self, _mark: usize) {}
}

impl Visitor for SpanList {
    #[inline(always)]
    fn capture(&mut self, start: usize, end: usize) {
        self.push((start, end));
    }

    #[inline(always)]
    fn mark(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn rewind(&mut self, mark: usize) {
        self.truncate(mark);
    }
}

struct Discard;

impl Visitor for Discard {}

/// Work done by one traversal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub matched: bool,
    pub nodes_visited: usize,
    /// Literal token comparisons against path bytes.
    pub token_comparisons: usize,
    /// Children descended into, fallbacks included.
    pub edge_lookups: usize,
    /// Times a failed branch was abandoned for a dynamic sibling.
    pub fallbacks: usize,
}

impl Visitor for Probe {
    fn enter_node(&mut self) {
        self.nodes_visited += 1;
    }

    fn compare(&mut self) {
        self.token_comparisons += 1;
    }

    fn lookup_edge(&mut self) {
        self.edge_lookups += 1;
    }

    fn rewind(&mut self, _mark: usize) {
        self.fallbacks += 1;
    }
}

/// A sibling left untried at a node boundary.
struct Fallback {
    child: NodeId,
    pos: usize,
    mark: usize,
}

enum Segment {
    Consumed,
    Mismatch,
    /// A catch-all took the rest of the path.
    Rest,
}

#[inline]
fn consume_segment<T, V: Visitor>(
    node: &RadixTreeNode<T>,
    bytes: &[u8],
    pos: &mut usize,
    visitor: &mut V,
) -> Segment {
    for token in node.segment() {
        match *token {
            Token::Literal(expected) => {
                visitor.compare();
                if bytes.get(*pos) != Some(&expected) {
                    return Segment::Mismatch;
                }
                *pos += 1;
            }
            Token::Wildcard => {
                let start = *pos;
                let end = memchr(b'/', &bytes[start..]).map_or(bytes.len(), |i| start + i);
                if end == start {
                    return Segment::Mismatch;
                }
                visitor.capture(start, end);
                *pos = end;
            }
            Token::CatchAll => {
                visitor.capture(*pos, bytes.len());
                return Segment::Rest;
            }
        }
    }
    Segment::Consumed
}

/// Depth-first walk over the trie. At each node boundary the literal edge
/// for the next byte is tried first; the wildcard and catch-all siblings are
/// kept as fallbacks and tried, in that order, only if it fails. Every
/// boundary contributes at most two fallbacks.
pub(crate) fn walk<'t, T, V: Visitor>(
    tree: &'t RadixTree<T>,
    path: &str,
    visitor: &mut V,
) -> Option<&'t Route<T>> {
    let bytes = path.as_bytes();
    let mut fallbacks: SmallVec<[Fallback; 8]> = SmallVec::new();
    let mut pos = 0usize;
    let mut node = tree.root();

    loop {
        visitor.enter_node();

        let next = match consume_segment(node, bytes, &mut pos, visitor) {
            Segment::Rest => return node.route(),
            Segment::Consumed if pos == bytes.len() && node.is_terminal() => {
                return node.route();
            }
            Segment::Consumed => {
                let mut candidates = node.candidates(bytes.get(pos).copied()).into_iter();
                let first = candidates.next();
                let mark = visitor.mark();
                for child in candidates.rev() {
                    fallbacks.push(Fallback { child, pos, mark });
                }
                first
            }
            Segment::Mismatch => None,
        };

        let child = match next {
            Some(child) => child,
            None => {
                let fallback = fallbacks.pop()?;
                visitor.rewind(fallback.mark);
                pos = fallback.pos;
                fallback.child
            }
        };

        visitor.lookup_edge();
        node = tree.node(child);
    }
}

impl<T> RadixTree<T> {
    /// Looks up `path`, returning the payload and the captured variables of
    /// the route it matches, or `None` when no route matches.
    pub fn match_full<'t, 'p>(&'t self, path: &'p str) -> Option<Match<'t, 'p, T>> {
        tracing::event!(tracing::Level::TRACE, operation="match_full", path=%path);
        let mut spans = SpanList::new();
        let route = walk(self, path, &mut spans)?;

        Some(Match {
            payload: &route.payload,
            params: Params::new(&route.captures, path, spans),
        })
    }

    /// Same traversal as [`RadixTree::match_full`] without collecting
    /// captures.
    pub fn match_only(&self, path: &str) -> bool {
        walk(self, path, &mut Discard).is_some()
    }

    /// Same traversal as [`RadixTree::match_only`], reporting how much work
    /// it did.
    pub fn probe(&self, path: &str) -> Probe {
        let mut probe = Probe::default();
        let matched = walk(self, path, &mut probe).is_some();
        probe.matched = matched;
        probe
    }
}
