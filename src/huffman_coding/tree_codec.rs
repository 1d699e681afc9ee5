//! Tree serialization.
//!
//! The tree is written pre-order with one marker byte per node: `1` followed by the
//! byte value for a leaf, `0` for an internal node followed by its left then right
//! subtree. Weights are not stored. The shape is implied by the marker sequence, so
//! the reader must consume exactly the bytes the writer produced.

use log::{error, trace};

use super::huffman::{Node, NodeData};
use crate::error::{HuffError, Result};

pub const INTERNAL_MARKER: u8 = 0;
pub const LEAF_MARKER: u8 = 1;

/// Deepest nesting a tree of 256 leaves can reach.
pub const MAX_DEPTH: usize = 255;

/// Serialize a tree.
pub fn serialize_tree(root: &Node) -> Vec<u8> {
    let mut out = Vec::with_capacity(root.leaf_count() * 3);
    write_tree(root, &mut out);
    trace!("Serialized tree into {} bytes.", out.len());
    out
}

fn write_tree(node: &Node, out: &mut Vec<u8>) {
    match &node.node_data {
        NodeData::Leaf(sym) => {
            out.push(LEAF_MARKER);
            out.push(*sym);
        }
        NodeData::Kids(left, right) => {
            out.push(INTERNAL_MARKER);
            write_tree(left, out);
            write_tree(right, out);
        }
    }
}

/// Rebuild a tree from its serialized form. Every byte of `data` must belong to the tree.
/// Rebuilt nodes carry a weight of 0.
pub fn deserialize_tree(data: &[u8]) -> Result<Node> {
    let mut reader = TreeReader { data, cursor: 0 };
    let root = reader.read_node(0)?;
    if reader.cursor != data.len() {
        error!(
            "Tree ended at byte {} of {} tree bytes.",
            reader.cursor,
            data.len()
        );
        return Err(HuffError::MalformedContainer(format!(
            "{} unused bytes after the tree",
            data.len() - reader.cursor
        )));
    }
    Ok(root)
}

struct TreeReader<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl TreeReader<'_> {
    fn byte(&mut self) -> Result<u8> {
        let byte = self.data.get(self.cursor).copied().ok_or_else(|| {
            error!("Tree data ended after {} bytes.", self.cursor);
            HuffError::MalformedContainer("truncated tree".to_string())
        })?;
        self.cursor += 1;
        Ok(byte)
    }

    fn read_node(&mut self, depth: usize) -> Result<Node> {
        if depth > MAX_DEPTH {
            error!("Tree nests deeper than {} levels.", MAX_DEPTH);
            return Err(HuffError::MalformedContainer(format!(
                "tree deeper than {} levels",
                MAX_DEPTH
            )));
        }
        match self.byte()? {
            LEAF_MARKER => Ok(Node::leaf(self.byte()?, 0)),
            INTERNAL_MARKER => {
                let left = self.read_node(depth + 1)?;
                let right = self.read_node(depth + 1)?;
                Ok(Node {
                    weight: 0,
                    node_data: NodeData::Kids(Box::new(left), Box::new(right)),
                })
            }
            marker => {
                error!("Bad tree marker {} at byte {}.", marker, self.cursor - 1);
                Err(HuffError::MalformedContainer(format!(
                    "invalid tree marker {}",
                    marker
                )))
            }
        }
    }
}
