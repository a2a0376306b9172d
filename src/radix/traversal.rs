use super::RadixTree;
use super::node::{NodeId, RadixTreeNode, Route};
use crate::pattern::{Shape, Token};

const TRAVERSAL_STACK_CAPACITY: usize = 64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub routes: usize,
    /// Longest root-to-leaf chain, counted in edges.
    pub max_depth: usize,
    pub max_segment_len: usize,
}

/// Depth-first traversal over every node, with its depth below the root.
/// Uses an explicit stack to avoid recursion on deep trees.
pub(super) fn traverse<T, F>(tree: &RadixTree<T>, mut action: F)
where
    F: FnMut(&RadixTreeNode<T>, usize),
{
    let mut stack: Vec<(NodeId, usize)> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
    stack.push((NodeId::ROOT, 0));

    while let Some((id, depth)) = stack.pop() {
        let node = tree.node(id);
        action(node, depth);

        for edge in node.edges.iter().rev() {
            stack.push((edge.child, depth + 1));
        }
    }
}

/// Visits every route with the full token path leading to it, in edge order.
pub(super) fn traverse_routes<'t, T, F>(tree: &'t RadixTree<T>, mut action: F)
where
    F: FnMut(&[Token], &'t Route<T>),
{
    let mut path: Vec<Token> = Vec::new();
    // (node, length of the parent's path)
    let mut stack: Vec<(NodeId, usize)> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
    stack.push((NodeId::ROOT, 0));

    while let Some((id, parent_len)) = stack.pop() {
        let node = tree.node(id);
        path.truncate(parent_len);
        path.extend_from_slice(&node.segment);

        if let Some(route) = node.route.as_ref() {
            action(&path, route);
        }

        let len = path.len();
        for edge in node.edges.iter().rev() {
            stack.push((edge.child, len));
        }
    }
}

impl<T> RadixTree<T> {
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        traverse(self, |node, depth| {
            stats.nodes += 1;
            if node.is_terminal() {
                stats.routes += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);
            stats.max_segment_len = stats.max_segment_len.max(node.segment.len());
        });
        stats
    }

    /// Shapes of every registered route, in token order.
    pub fn shapes(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.route_count);
        traverse_routes(self, |tokens, _| out.push(Shape(tokens).to_string()));
        out
    }

    /// Route shapes paired with their payloads, in token order.
    pub fn routes(&self) -> Vec<(String, &T)> {
        let mut out = Vec::with_capacity(self.route_count);
        traverse_routes(self, |tokens, route| {
            out.push((Shape(tokens).to_string(), &route.payload))
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_nodes_routes_and_depth() {
        let mut tree = RadixTree::new();
        for (i, p) in ["/user/123", "/user/1234", "/user/12"].iter().enumerate() {
            tree.insert_pattern(p, i).expect("insert should succeed");
        }

        let stats = tree.stats();
        // root, "/user/12", "3", "4"
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.routes, 3);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.max_segment_len, "/user/12".len());
    }

    #[test]
    fn shapes_are_listed_in_token_order() {
        let mut tree = RadixTree::new();
        tree.insert_pattern("/b/*rest", ()).expect("insert should succeed");
        tree.insert_pattern("/b/:id", ()).expect("insert should succeed");
        tree.insert_pattern("/a", ()).expect("insert should succeed");
        tree.insert_pattern("/b/x", ()).expect("insert should succeed");

        assert_eq!(tree.shapes(), vec!["/a", "/b/x", "/b/:", "/b/*"]);
    }
}
