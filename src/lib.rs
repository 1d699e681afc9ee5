//! Static Huffman compression of byte buffers.
//!
//! Version 0.1.0
//!
//! One Huffman tree is built from the byte frequencies of the whole input. The tree is
//! serialized at the front of the output, followed by the input with every byte replaced
//! by its code. Equal frequencies are broken by arrival order, so the same input always
//! gives the same output.
//!
//! ```
//! let packed = huffzip::compress(b"abracadabra").unwrap();
//! assert_eq!(huffzip::decompress(&packed).unwrap(), b"abracadabra");
//! ```
//!
//! Basic usage of the command line tool to compress a file is as follows:
//!
//! `$> huffzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.huf.
//! The original file will be deleted unless -k is given.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, compress_with};
pub use compression::container::Format;
pub use compression::decompress::{decompress, decompress_with};
pub use error::{HuffError, Result};
