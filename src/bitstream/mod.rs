//! The bitstream module is the bit level I/O subsystem of huffzip.
//!
//! Huffman codes are variable length, so the payload of a container is a dense stream
//! of bits rather than bytes. BitPacker turns codes into bytes, most significant bit
//! first, and pads the final byte with zeros. BitReader hands those bits back one at a
//! time, stopping at a given bit count so padding is never mistaken for data.
//!
//! Both work on in-memory buffers. File and stdin/stdout handling lives in tools::file_io.
//!
pub mod bitpacker;
pub mod bitreader;
