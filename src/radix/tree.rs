use bitflags::bitflags;

use super::node::{NodeId, RadixTreeNode};

// NodeId is a u32 index
pub const MAX_NODES: usize = u32::MAX as usize;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TreeFlags: u8 {
        const SEALED = 0b0000_0001;
        const HAS_WILDCARD = 0b0000_0010;
        const HAS_CATCHALL = 0b0000_0100;
    }
}

/// Compressed prefix trie over pattern tokens.
///
/// Nodes live in one vector owned by the tree and refer to their children by
/// [`NodeId`]. The root is always at index 0 and is the only node allowed an
/// empty segment.
///
/// Building takes `&mut self` and is single-threaded. Matching takes `&self`,
/// never mutates, and can run from any number of threads once the tree is
/// shared.
#[derive(Debug, Clone)]
pub struct RadixTree<T> {
    pub(crate) nodes: Vec<RadixTreeNode<T>>,
    pub(crate) route_count: usize,
    pub(crate) flags: TreeFlags,
}

impl<T> Default for RadixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RadixTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![RadixTreeNode::default()],
            route_count: 0,
            flags: TreeFlags::empty(),
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        self.route_count == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn flags(&self) -> TreeFlags {
        self.flags
    }

    pub fn is_sealed(&self) -> bool {
        self.flags.contains(TreeFlags::SEALED)
    }

    pub fn root(&self) -> &RadixTreeNode<T> {
        &self.nodes[NodeId::ROOT.index()]
    }

    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &RadixTreeNode<T> {
        &self.nodes[id.index()]
    }

    #[inline(always)]
    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut RadixTreeNode<T> {
        &mut self.nodes[id.index()]
    }

    pub(super) fn push_node(&mut self, node: RadixTreeNode<T>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Marks the tree read-only and releases spare capacity.
    pub fn seal(&mut self) {
        if self.is_sealed() {
            return;
        }

        for node in self.nodes.iter_mut() {
            node.segment.shrink_to_fit();
            node.edges.shrink_to_fit();
        }
        self.nodes.shrink_to_fit();
        self.flags.insert(TreeFlags::SEALED);

        tracing::debug!(
            routes = self.route_count as u64,
            nodes = self.nodes.len() as u64,
            "radix tree sealed"
        );
    }

    /// An unsealed copy that accepts further inserts; `self` is untouched.
    pub fn to_builder(&self) -> Self
    where
        T: Clone,
    {
        let mut copy = self.clone();
        copy.flags.remove(TreeFlags::SEALED);
        copy
    }
}
