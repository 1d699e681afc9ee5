use std::collections::VecDeque;

use log::{debug, trace};

use crate::tools::freq_count::Histogram;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(sym: u8, weight: u64) -> Node {
        Node {
            weight,
            node_data: NodeData::Leaf(sym),
        }
    }

    /// Create a parent node. Its weight is the sum of the children's weights.
    pub fn merge(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Left child for a 0 bit, right child for a 1 bit. Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some(if bit { &**right } else { &**left }),
            NodeData::Leaf(_) => None,
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }

    /// Length of the longest root to leaf path.
    pub fn depth(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.depth().max(right.depth()),
            NodeData::Leaf(_) => 0,
        }
    }
}

/// Nodes waiting to be merged, kept in ascending weight order.
///
/// A node is always inserted after every node already queued with the same weight,
/// so ties leave the queue in arrival order. Two independent builds over the same
/// histogram therefore merge in the same order and produce the same tree.
#[derive(Debug, Default)]
pub struct NodeQueue {
    nodes: VecDeque<Node>,
}

impl NodeQueue {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }

    /// Leaves for every byte that occurs, inserted in ascending byte order.
    pub fn from_freqs(freqs: &Histogram) -> Self {
        let mut queue = Self::new();
        freqs
            .iter()
            .enumerate()
            .filter(|(_, f)| **f > 0)
            .for_each(|(sym, &f)| queue.insert(Node::leaf(sym as u8, f)));
        queue
    }

    /// Sorted, tie-stable insertion.
    pub fn insert(&mut self, node: Node) {
        let idx = self.nodes.partition_point(|n| n.weight <= node.weight);
        self.nodes.insert(idx, node);
    }

    /// Removes the two lightest nodes, lightest first. None if fewer than two are queued.
    pub fn pop_pair(&mut self) -> Option<(Node, Node)> {
        if self.nodes.len() < 2 {
            return None;
        }
        let first = self.nodes.pop_front()?;
        let second = self.nodes.pop_front()?;
        Some((first, second))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Weights from front to back.
    pub fn weights(&self) -> Vec<u64> {
        self.nodes.iter().map(|n| n.weight).collect()
    }

    /// Takes the last remaining node. None unless exactly one node is queued.
    pub fn into_root(mut self) -> Option<Node> {
        if self.nodes.len() == 1 {
            self.nodes.pop_front()
        } else {
            None
        }
    }
}

/// Build the Huffman tree for a histogram. Returns None when no byte occurs.
///
/// The two lightest nodes are merged, the first popped becoming the left child, and
/// the parent goes back into the queue until a single root remains. A histogram with
/// one distinct byte yields a lone leaf.
pub fn build_tree(freqs: &Histogram) -> Option<Node> {
    let mut queue = NodeQueue::from_freqs(freqs);
    debug!("Building tree from {} symbols.", queue.len());

    while let Some((left, right)) = queue.pop_pair() {
        trace!("Merging weights {} and {}", left.weight, right.weight);
        queue.insert(Node::merge(left, right));
    }

    let root = queue.into_root()?;
    debug!(
        "Tree built: {} leaves, depth {}, weight {}.",
        root.leaf_count(),
        root.depth(),
        root.weight
    );
    Some(root)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::freqs;

    fn leaf_sym(node: &Node) -> u8 {
        match node.node_data {
            NodeData::Leaf(sym) => sym,
            NodeData::Kids(..) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn queue_order_test() {
        let mut q = NodeQueue::new();
        q.insert(Node::leaf(b'a', 5));
        q.insert(Node::leaf(b'b', 1));
        q.insert(Node::leaf(b'c', 3));
        assert_eq!(q.weights(), vec![1, 3, 5]);
    }

    #[test]
    fn queue_ties_keep_arrival_order_test() {
        let mut q = NodeQueue::new();
        q.insert(Node::leaf(b'x', 2));
        q.insert(Node::leaf(b'y', 1));
        q.insert(Node::leaf(b'z', 2));
        q.insert(Node::merge(Node::leaf(0, 1), Node::leaf(1, 1)));
        let (first, second) = q.pop_pair().unwrap();
        assert_eq!(leaf_sym(&first), b'y');
        assert_eq!(leaf_sym(&second), b'x');
        let (third, fourth) = q.pop_pair().unwrap();
        assert_eq!(leaf_sym(&third), b'z');
        assert!(!fourth.is_leaf());
        assert!(q.is_empty());
        assert!(q.pop_pair().is_none());
    }

    #[test]
    fn into_root_test() {
        assert!(NodeQueue::new().into_root().is_none());
        let mut q = NodeQueue::new();
        q.insert(Node::leaf(1, 1));
        q.insert(Node::leaf(2, 1));
        assert!(q.into_root().is_none());
    }

    #[test]
    fn empty_histogram_test() {
        assert!(build_tree(&freqs(&[])).is_none());
    }

    #[test]
    fn single_symbol_tree_test() {
        let root = build_tree(&freqs(&[0x41; 1000])).unwrap();
        assert_eq!(root, Node::leaf(0x41, 1000));
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn tie_break_shape_test() {
        // A:2, B:1, C:1 -> B and C merge first (B left), then A joins on the left.
        let root = build_tree(&freqs(&[0x41, 0x41, 0x42, 0x43])).unwrap();
        let expected = Node::merge(
            Node::leaf(0x41, 2),
            Node::merge(Node::leaf(0x42, 1), Node::leaf(0x43, 1)),
        );
        assert_eq!(root, expected);
        assert_eq!(root.weight, 4);
    }

    #[test]
    fn weights_sum_test() {
        let data = "abracadabra, the quick brown fox".as_bytes();
        let root = build_tree(&freqs(data)).unwrap();
        assert_eq!(root.weight, data.len() as u64);

        fn check(node: &Node) {
            if let NodeData::Kids(left, right) = &node.node_data {
                assert_eq!(node.weight, left.weight + right.weight);
                assert!(left.weight <= right.weight);
                check(left);
                check(right);
            }
        }
        check(&root);
    }

    #[test]
    fn full_alphabet_test() {
        let data: Vec<u8> = (0..=255_u8).collect();
        let root = build_tree(&freqs(&data)).unwrap();
        assert_eq!(root.leaf_count(), 256);
        // 256 equal weights make a perfectly balanced tree.
        assert_eq!(root.depth(), 8);
    }

    #[test]
    fn child_test() {
        let root = Node::merge(Node::leaf(1, 1), Node::leaf(2, 1));
        assert_eq!(root.child(false), Some(&Node::leaf(1, 1)));
        assert_eq!(root.child(true), Some(&Node::leaf(2, 1)));
        assert!(Node::leaf(1, 1).child(false).is_none());
    }
}
