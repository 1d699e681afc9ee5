//! The compression module holds the entry points of huffzip.
//!
//! Compression happens in the following steps:
//! - Frequency count: histogram of the 256 byte values.
//! - Tree build: greedy merge of the two lightest nodes until one root remains.
//! - Code table: root to leaf paths become the bit code of each byte.
//! - Packing: every input byte is replaced by its code, most significant bit first.
//! - Container: tree length, serialized tree, (padding count), packed payload.
//!
//! Decompression rebuilds the tree from the container and walks it one payload bit at
//! a time, emitting a byte at every leaf.
//!
//! Everything runs on whole in-memory buffers, single threaded. The *_files functions
//! wrap the core for the command line tool.
//!

pub mod compress;
pub mod container;
pub mod decompress;
