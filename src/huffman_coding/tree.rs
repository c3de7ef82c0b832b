use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::io::Read;

use log::debug;

use crate::error::{Error, Result};
use crate::tools::freq_count::freqs;

/// Handle to a node inside a tree's arena.
pub type NodeId = usize;

/// A node is either a terminal leaf holding a byte value, or an internal merge
/// point holding handles to exactly two children. No node has one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(u8),
}

/// One node of a frequency tree. For internal nodes the frequency is always the
/// sum of the two children's frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub frequency: u64,
    pub node_data: NodeData,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

/// A built frequency tree. All nodes live in one arena owned by the tree, so the
/// caller controls the lifetime and several trees can be live at once.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Build a tree by streaming a reader once and counting byte frequencies.
    pub fn from_reader<R: Read>(mut source: R) -> Result<Tree> {
        let mut buckets = vec![0_u64; 256];
        let mut buf = [0_u8; 512];
        loop {
            let received = source.read(&mut buf)?;
            if received == 0 {
                break;
            }
            buf[..received].iter().for_each(|&b| buckets[b as usize] += 1);
        }
        Self::from_freqs(&buckets)
    }

    /// Build a tree from an in-memory buffer.
    pub fn from_bytes(data: &[u8]) -> Result<Tree> {
        Self::from_freqs(&freqs(data))
    }

    /// Build a tree from a 256-bucket frequency count. Symbols with a zero count
    /// get no leaf. An all-zero count is an error - there is nothing to encode.
    pub fn from_freqs(buckets: &[u64]) -> Result<Tree> {
        // One leaf per symbol actually present, in ascending symbol order.
        let leaf_count = buckets.iter().filter(|&&f| f > 0).count();
        if leaf_count == 0 {
            return Err(Error::EmptyInput);
        }

        // Every merge adds one node, so a finished tree holds 2n-1 nodes.
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaf_count - 1);
        for (sym, &freq) in buckets.iter().enumerate() {
            if freq == 0 {
                continue;
            }
            nodes.push(Node {
                frequency: freq,
                node_data: NodeData::Leaf(sym as u8),
            });
        }

        // Keep the working set in a min-heap keyed by (frequency, handle). Equal
        // weights merge in creation order, which keeps the tree deterministic.
        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = (0..nodes.len())
            .map(|id| Reverse((nodes[id].frequency, id)))
            .collect();

        // ...then pare it down to a single root. The lightest node goes right,
        // the next lightest left.
        while heap.len() > 1 {
            let Reverse((right_freq, right)) = heap.pop().unwrap();
            let Reverse((left_freq, left)) = heap.pop().unwrap();
            let id = nodes.len();
            nodes.push(Node {
                frequency: left_freq + right_freq,
                node_data: NodeData::Kids(left, right),
            });
            heap.push(Reverse((left_freq + right_freq, id)));
        }

        let Reverse((_, root)) = heap.pop().unwrap();
        debug!(
            "Built frequency tree: {} leaves, {} nodes",
            leaf_count,
            nodes.len()
        );
        Ok(Tree { nodes, root })
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// How many distinct byte values the tree encodes.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    /// Recursively verify that every internal node weighs as much as its children.
    fn check_weights(tree: &Tree, id: NodeId) -> u64 {
        let node = tree.node(id);
        match node.node_data {
            NodeData::Leaf(_) => node.frequency,
            NodeData::Kids(left, right) => {
                let sum = check_weights(tree, left) + check_weights(tree, right);
                assert_eq!(node.frequency, sum);
                sum
            }
        }
    }

    /// Sum of leaf frequency times leaf depth - the total encoded bit length.
    fn weighted_depth(tree: &Tree, id: NodeId, depth: u64) -> u64 {
        let node = tree.node(id);
        match node.node_data {
            NodeData::Leaf(_) => node.frequency * depth,
            NodeData::Kids(left, right) => {
                weighted_depth(tree, left, depth + 1) + weighted_depth(tree, right, depth + 1)
            }
        }
    }

    #[test]
    fn tree_invariants_test() {
        let tree = Tree::from_bytes(b"abracadabra").unwrap();
        // 5 distinct symbols, so 5 leaves and 9 nodes in the arena.
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.node_count(), 9);
        assert_eq!(check_weights(&tree, tree.root_id()), 11);
        assert_eq!(tree.root().frequency, 11);
    }

    #[test]
    fn optimality_test() {
        // a:5 b:2 c:1 d:1 r:2 - the optimal prefix code costs 23 bits in total
        // (sum of all internal node weights: 2 + 4 + 6 + 11).
        let tree = Tree::from_bytes(b"abracadabra").unwrap();
        assert_eq!(weighted_depth(&tree, tree.root_id(), 0), 23);
    }

    #[test]
    fn single_symbol_test() {
        // A stream with one distinct symbol yields a childless root, which is a
        // valid degenerate tree.
        let tree = Tree::from_bytes(&[b'x'; 100]).unwrap();
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.node_count(), 1);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().frequency, 100);
    }

    #[test]
    fn empty_input_test() {
        assert!(matches!(Tree::from_bytes(b""), Err(Error::EmptyInput)));
    }

    #[test]
    fn from_reader_matches_from_bytes_test() {
        // More than one 512 byte read's worth of data.
        let data: Vec<u8> = (0..2000).map(|i| (i % 7) as u8).collect();
        let from_reader = Tree::from_reader(Cursor::new(&data)).unwrap();
        let from_bytes = Tree::from_bytes(&data).unwrap();
        assert_eq!(from_reader.leaf_count(), from_bytes.leaf_count());
        assert_eq!(from_reader.root().frequency, from_bytes.root().frequency);
    }

    #[test]
    fn deterministic_ties_test() {
        // All four symbols tie on frequency. Two builds must agree exactly.
        let one = Tree::from_bytes(b"aabbccdd").unwrap();
        let two = Tree::from_bytes(b"aabbccdd").unwrap();
        assert_eq!(one.code_table(), two.code_table());
    }
}
