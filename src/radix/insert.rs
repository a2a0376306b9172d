use std::sync::Arc;

use super::node::{NodeId, RadixTreeNode, Route};
use super::tree::{MAX_NODES, TreeFlags};
use super::{RadixError, RadixResult, RadixTree};
use crate::pattern::{CompiledPattern, Shape, Token, compile};

// an insert adds at most a split tail and a new leaf
const NODES_PER_INSERT: usize = 2;

impl<T> RadixTree<T> {
    pub fn insert(&mut self, pattern: &CompiledPattern, payload: T) -> RadixResult<()> {
        tracing::event!(tracing::Level::TRACE, operation="insert", pattern=%pattern.source(), nodes=self.nodes.len() as u64);
        if self.is_sealed() {
            return Err(RadixError::TreeSealed {
                operation: "insert",
                pattern: Some(pattern.source().to_string()),
            });
        }

        if self.nodes.len() + NODES_PER_INSERT > MAX_NODES {
            return Err(RadixError::MaxNodesExceeded {
                current: self.nodes.len(),
                limit: MAX_NODES,
            });
        }

        let route = Route {
            payload,
            captures: Arc::from(pattern.captures()),
        };
        self.insert_tokens(pattern.tokens(), route)?;

        for token in pattern.tokens() {
            match token {
                Token::Wildcard => self.flags.insert(TreeFlags::HAS_WILDCARD),
                Token::CatchAll => self.flags.insert(TreeFlags::HAS_CATCHALL),
                Token::Literal(_) => {}
            }
        }
        self.route_count += 1;

        Ok(())
    }

    /// Compiles `pattern` and inserts it.
    pub fn insert_pattern(&mut self, pattern: &str, payload: T) -> RadixResult<()> {
        let compiled = compile(pattern)?;
        self.insert(&compiled, payload)
    }

    /// Whether a route with the same shape as `pattern` is registered.
    pub fn contains(&self, pattern: &CompiledPattern) -> bool {
        let mut node = self.root();
        let mut rest = pattern.tokens();

        loop {
            let Some(tail) = rest.strip_prefix(node.segment()) else {
                return false;
            };
            rest = tail;

            let Some(&key) = rest.first() else {
                return node.is_terminal();
            };
            match node.find_edge(key) {
                Some(child) => node = self.node(child),
                None => return false,
            }
        }
    }

    fn insert_tokens(&mut self, tokens: &[Token], route: Route<T>) -> RadixResult<()> {
        let mut current = NodeId::ROOT;
        let mut rest = tokens;

        loop {
            let node = self.node(current);
            let diff = common_prefix_len(&node.segment, rest);

            if diff < node.segment.len() {
                self.split(current, diff);

                if diff == rest.len() {
                    self.node_mut(current).route = Some(route);
                } else {
                    let leaf = self.push_node(RadixTreeNode::leaf(&rest[diff..], route));
                    self.node_mut(current).insert_edge(rest[diff], leaf);
                }
                return Ok(());
            }

            if diff == rest.len() {
                let node = self.node_mut(current);
                if node.route.is_some() {
                    return Err(RadixError::DuplicateRoute {
                        shape: Shape(tokens).to_string(),
                    });
                }
                node.route = Some(route);
                return Ok(());
            }

            rest = &rest[diff..];
            match node.find_edge(rest[0]) {
                Some(child) => current = child,
                None => {
                    let leaf = self.push_node(RadixTreeNode::leaf(rest, route));
                    self.node_mut(current).insert_edge(rest[0], leaf);
                    return Ok(());
                }
            }
        }
    }

    /// Moves `segment[at..]`, the edges and the route of `id` into a new
    /// child, leaving `id` as a branch point owning `segment[..at]`.
    fn split(&mut self, id: NodeId, at: usize) {
        let node = self.node_mut(id);
        let tail: super::node::Segment = node.segment.drain(at..).collect();
        let key = tail[0];
        let child = RadixTreeNode {
            segment: tail,
            edges: std::mem::take(&mut node.edges),
            route: node.route.take(),
        };

        let child_id = self.push_node(child);
        self.node_mut(id).insert_edge(key, child_id);
    }
}

#[inline]
fn common_prefix_len(a: &[Token], b: &[Token]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
