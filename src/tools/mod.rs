//! The tools module provides the helpers around the huffzip compression core.
//!
//! The tools are:
//! - cli: Command line interface and the options it produces.
//! - file_io: Reading inputs and writing outputs (files or stdin/stdout).
//! - freq_count: Frequency count of the input bytes.
//!
pub mod cli;
pub mod file_io;
pub mod freq_count;
