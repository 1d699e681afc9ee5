//! The huffman_coding module builds the static Huffman tree for a buffer and everything
//! derived from it.
//!
//! - huffman: tree nodes, the weight ordered NodeQueue, and the greedy merge that builds
//!   the tree. Ties are broken by arrival order, so the tree (and every code) is fully
//!   determined by the input bytes.
//! - code_table: walks the tree to give each byte value present its bit code.
//! - tree_codec: writes the tree shape and leaf values into the container and reads
//!   them back for decoding.
//!
//! One tree is built for the whole input. There are no blocks or table selectors.
//!

pub mod code_table;
pub mod huffman;
pub mod tree_codec;
