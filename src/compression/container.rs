//! Container layout.
//!
//! ```text
//! Padded (default)
//!   offset 0    : u32 LE, N = serialized tree length
//!   offset 4    : N bytes of serialized tree
//!   offset 4+N  : u8, zero padding bits in the final payload byte (0..=7)
//!   offset 5+N  : packed payload
//!
//! Legacy
//!   offset 0    : u32 LE, N = serialized tree length
//!   offset 4    : N bytes of serialized tree
//!   offset 4+N  : packed payload
//! ```
//!
//! The legacy layout matches files written by the original tool byte for byte. It does
//! not record how many payload bits are real, so a decoder has to read the padding too.

use log::{error, trace};

use crate::error::{HuffError, Result};

/// Size of the tree length field.
pub const HEADER_LEN: usize = 4;

/// Which container layout to write or expect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Records the padding of the final payload byte, so the exact bit count is known.
    #[default]
    Padded,
    /// The original layout with no bit count.
    Legacy,
}

/// Borrowed view of the parts of a container.
#[derive(Debug, PartialEq, Eq)]
pub struct Container<'a> {
    pub tree_data: &'a [u8],
    pub payload: &'a [u8],
    /// Number of payload bits that carry data.
    pub bit_count: usize,
}

impl<'a> Container<'a> {
    /// Join tree and payload into one buffer. `padding` is the number of zero bits that
    /// fill out the final payload byte; the legacy layout drops it.
    pub fn assemble(tree_data: &[u8], payload: &[u8], padding: u8, format: Format) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + tree_data.len() + 1 + payload.len());
        out.extend_from_slice(&(tree_data.len() as u32).to_le_bytes());
        out.extend_from_slice(tree_data);
        if format == Format::Padded {
            out.push(padding);
        }
        out.extend_from_slice(payload);
        trace!(
            "Assembled {:?} container: {} tree bytes, {} payload bytes.",
            format,
            tree_data.len(),
            payload.len()
        );
        out
    }

    /// Split a container into its parts, checking the framing against the buffer size.
    pub fn disassemble(data: &'a [u8], format: Format) -> Result<Self> {
        if data.len() < HEADER_LEN {
            error!("Container is only {} bytes long.", data.len());
            return Err(HuffError::MalformedContainer(
                "missing tree length field".to_string(),
            ));
        }
        let (header, rest) = data.split_at(HEADER_LEN);
        let tree_len = u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;
        if tree_len > rest.len() {
            error!(
                "Tree length {} is larger than the {} bytes that follow.",
                tree_len,
                rest.len()
            );
            return Err(HuffError::MalformedContainer(format!(
                "tree length {} exceeds the {} remaining bytes",
                tree_len,
                rest.len()
            )));
        }
        let (tree_data, rest) = rest.split_at(tree_len);

        let (payload, bit_count) = match format {
            Format::Legacy => (rest, rest.len() * 8),
            Format::Padded => {
                let (&padding, payload) = rest.split_first().ok_or_else(|| {
                    error!("Container ends before the padding field.");
                    HuffError::MalformedContainer("missing padding field".to_string())
                })?;
                if padding > 7 || (payload.is_empty() && padding != 0) {
                    error!(
                        "Padding of {} bits is impossible for a {} byte payload.",
                        padding,
                        payload.len()
                    );
                    return Err(HuffError::MalformedContainer(format!(
                        "invalid padding {}",
                        padding
                    )));
                }
                (payload, payload.len() * 8 - padding as usize)
            }
        };

        Ok(Container {
            tree_data,
            payload,
            bit_count,
        })
    }
}
