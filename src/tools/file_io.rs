//! File, stdin and stdout handling for the command line tool. The compression core never
//! touches files; these helpers feed it whole buffers and store what it returns.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use log::{debug, error, info};

use super::cli::{HzOpts, Output};
use crate::error::{HuffError, Result};

/// Extension given to compressed files.
pub const EXTENSION: &str = ".huf";

/// Output name for compressing `fname`.
pub fn compressed_name(fname: &str) -> String {
    let mut name = fname.to_string();
    name.push_str(EXTENSION);
    name
}

/// Output name for decompressing `fname`: the extension is stripped when present,
/// otherwise ".out" is appended.
pub fn decompressed_name(fname: &str) -> String {
    match fname.strip_suffix(EXTENSION) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", fname),
    }
}

/// Read a whole file, or all of stdin for None.
pub fn read_input(fname: Option<&str>) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    match fname {
        Some(f) => {
            data = fs::read(f).map_err(|e| {
                error!("Cannot read from the file {}", f);
                HuffError::Io(e)
            })?;
        }
        None => {
            io::stdin().lock().read_to_end(&mut data)?;
        }
    }
    debug!("Read {} bytes.", data.len());
    Ok(data)
}

/// Write `data` to the named file, or to stdout for None. An existing file is only
/// replaced with force_overwrite set.
pub fn write_output(fname: Option<&str>, data: &[u8], opts: &HzOpts) -> Result<()> {
    match (fname, &opts.output) {
        (Some(f), Output::File) => {
            if Path::new(f).exists() && !opts.force_overwrite {
                error!("Output file {} already exists. Use --force to overwrite.", f);
                return Err(HuffError::OutputExists(f.to_string()));
            }
            fs::write(f, data).map_err(|e| {
                error!("Cannot write to the file {}", f);
                HuffError::Io(e)
            })?;
            info!("Wrote {} bytes to {}", data.len(), f);
        }
        _ => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Remove an input file once its output is safely written, unless asked to keep it.
pub fn remove_input(fname: &str, opts: &HzOpts) -> Result<()> {
    if opts.keep_input_files {
        return Ok(());
    }
    fs::remove_file(fname)?;
    debug!("Removed {}", fname);
    Ok(())
}
