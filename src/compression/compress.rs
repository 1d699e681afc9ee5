use log::{debug, error, info, trace};

use super::container::{Container, Format};
use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::build_tree;
use crate::huffman_coding::tree_codec::serialize_tree;
use crate::tools::cli::{HzOpts, Output};
use crate::tools::freq_count::freqs;
use crate::tools::file_io::{compressed_name, read_input, remove_input, write_output};

/// Compress a buffer into a container in the default (padded) layout.
/// An empty input gives an empty output.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    compress_with(input, Format::default())
}

/// Compress a buffer into a container of the given layout.
pub fn compress_with(input: &[u8], format: Format) -> Result<Vec<u8>> {
    let freqs = freqs(input);
    // Nothing to compress. This is not an error.
    let root = match build_tree(&freqs) {
        Some(root) => root,
        None => {
            info!("Input is empty, nothing to compress.");
            return Ok(Vec::new());
        }
    };

    let table = CodeTable::from_tree(&root);
    for (sym, code) in table.entries() {
        trace!("{:#04x} x{}: {}", sym, freqs[sym as usize], code);
    }

    let tree_data = serialize_tree(&root);
    let packer = encode_payload(input, &table)?;
    debug!(
        "Packed {} bits into {} bytes ({} padding bits).",
        packer.bit_count(),
        packer.output.len(),
        packer.padding
    );

    Ok(Container::assemble(
        &tree_data,
        &packer.output,
        packer.padding,
        format,
    ))
}

/// Encode every input byte with its code. Returns the flushed BitPacker, which holds the
/// packed bytes, the real bit count and the padding added to the final byte.
pub fn encode_payload(input: &[u8], table: &CodeTable) -> Result<BitPacker> {
    let mut bp = BitPacker::new(input.len() / 2 + 1);
    for (idx, &sym) in input.iter().enumerate() {
        let code = table.get(sym).ok_or_else(|| {
            error!("No code for byte {:#04x} at input offset {}.", sym, idx);
            HuffError::UnknownSymbolInTable(sym)
        })?;
        bp.out_code(code);
    }
    bp.flush();
    Ok(bp)
}

/// Compress every file named in opts (or stdin when none are named).
pub fn compress_files(opts: &HzOpts) -> Result<()> {
    if opts.files.is_empty() {
        let input = read_input(None)?;
        let output = compress_with(&input, opts.format)?;
        return write_output(None, &output, opts);
    }

    for fname in &opts.files {
        info!("Compressing {}", fname);
        let input = read_input(Some(fname))?;
        let output = compress_with(&input, opts.format)?;
        report_ratio(fname, input.len(), output.len());

        match opts.output {
            Output::Stdout => write_output(None, &output, opts)?,
            Output::File => {
                write_output(Some(&compressed_name(fname)), &output, opts)?;
                remove_input(fname, opts)?;
            }
        }
    }
    Ok(())
}

fn report_ratio(fname: &str, before: usize, after: usize) {
    if before == 0 {
        info!("{}: empty input, empty output.", fname);
        return;
    }
    info!(
        "{}: {} -> {} bytes, {:.3}:1, {:.2} bits/byte, {:.2}% saved.",
        fname,
        before,
        after,
        before as f64 / after as f64,
        (after * 8) as f64 / before as f64,
        100.0 * (1.0 - after as f64 / before as f64)
    );
}
