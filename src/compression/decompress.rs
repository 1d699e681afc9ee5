use log::{debug, error, info, trace, warn};

use super::compress::compress_with;
use super::container::{Container, Format};
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::huffman_coding::huffman::{Node, NodeData};
use crate::huffman_coding::tree_codec::deserialize_tree;
use crate::tools::cli::{HzOpts, Output};
use crate::tools::file_io::{decompressed_name, read_input, remove_input, write_output};

/// Decompress a container in the default (padded) layout. An empty container gives an
/// empty output.
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    decompress_with(container, Format::default())
}

/// Decompress a container of the given layout.
pub fn decompress_with(container: &[u8], format: Format) -> Result<Vec<u8>> {
    if container.is_empty() {
        info!("Container is empty, nothing to decompress.");
        return Ok(Vec::new());
    }

    let parts = Container::disassemble(container, format)?;
    let root = deserialize_tree(parts.tree_data)?;
    debug!(
        "Rebuilt tree with {} leaves; {} payload bits to decode.",
        root.leaf_count(),
        parts.bit_count
    );

    let mut br = BitReader::new(parts.payload, parts.bit_count);
    // Only the padded layout knows where the data stops.
    decode_payload(&root, &mut br, format == Format::Padded)
}

/// Walk the tree with the bits from `br`, emitting a byte at every leaf and starting
/// over at the root.
///
/// A tree that is a single leaf emits it for every 0 bit. With `exact` set, the bits
/// must end on a code boundary; otherwise a trailing partial code (zero padding read as
/// data) is dropped.
pub fn decode_payload(root: &Node, br: &mut BitReader<'_>, exact: bool) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(br.bits_left() / 2);

    if let NodeData::Leaf(sym) = root.node_data {
        while let Some(bit) = br.bool_bit() {
            if bit {
                return Err(underflow(br));
            }
            result.push(sym);
        }
        return Ok(result);
    }

    let mut node = root;
    while let Some(bit) = br.bool_bit() {
        node = node.child(bit).ok_or_else(|| underflow(br))?;
        if let NodeData::Leaf(sym) = node.node_data {
            result.push(sym);
            node = root;
        }
    }

    if !std::ptr::eq(node, root) {
        if exact {
            error!(
                "Payload ends inside a code after {} decoded bytes.",
                result.len()
            );
            return Err(HuffError::MalformedContainer(
                "payload ends inside a code".to_string(),
            ));
        }
        trace!("Dropped a partial code from the final padding.");
    }
    Ok(result)
}

fn underflow(br: &BitReader<'_>) -> HuffError {
    let bit = br.position() - 1;
    error!("Bit {} {} descends past a leaf.", bit, br.loc());
    HuffError::TreeTraversalUnderflow { bit }
}

/// Decompress every file named in opts (or stdin when none are named).
pub fn decompress_files(opts: &HzOpts) -> Result<()> {
    if opts.files.is_empty() {
        let input = read_input(None)?;
        let output = decompress_with(&input, opts.format)?;
        return write_output(None, &output, opts);
    }

    for fname in &opts.files {
        info!("Decompressing {}", fname);
        let input = read_input(Some(fname))?;
        let output = decompress_with(&input, opts.format)?;
        info!("{}: {} -> {} bytes.", fname, input.len(), output.len());

        match opts.output {
            Output::Stdout => write_output(None, &output, opts)?,
            Output::File => {
                write_output(Some(&decompressed_name(fname)), &output, opts)?;
                remove_input(fname, opts)?;
            }
        }
    }
    Ok(())
}

/// Compress each input in memory, decompress the result, and compare. Nothing is written.
pub fn test_files(opts: &HzOpts) -> Result<()> {
    let names: Vec<Option<&str>> = if opts.files.is_empty() {
        vec![None]
    } else {
        opts.files.iter().map(|f| Some(f.as_str())).collect()
    };

    for name in names {
        let label = name.unwrap_or("(stdin)");
        let input = read_input(name)?;
        let packed = compress_with(&input, opts.format)?;
        let unpacked = decompress_with(&packed, opts.format)?;
        if unpacked != input {
            if opts.format == Format::Legacy {
                warn!("{}: the legacy layout cannot mark where the data ends.", label);
            }
            error!(
                "{}: {} bytes in, {} bytes back.",
                label,
                input.len(),
                unpacked.len()
            );
            return Err(HuffError::VerifyFailed(label.to_string()));
        }
        info!("{}: ok ({} -> {} bytes).", label, input.len(), packed.len());
    }
    Ok(())
}
