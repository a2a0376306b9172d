mod error;
mod insert;
pub mod node;
pub mod traversal;
mod tree;

pub use error::{RadixError, RadixResult};
pub use node::{Edge, NodeId, RadixTreeNode, Route};
pub use traversal::TreeStats;
pub use tree::{MAX_NODES, RadixTree, TreeFlags};
