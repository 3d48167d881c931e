//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::Parser;
use std::path::PathBuf;

/// Returns the parsed command line: the `Args` return value's `reference`
/// field is the path of the reference file, if one was given, and the `uniq`
/// and `whitelist` fields hold the switches of the same names.
#[must_use]
pub fn parsed() -> Args {
    Args::parse()
}

/// `Args` contains the parsed command line.
#[derive(Debug, Parser)]
#[command(
    name = "veto",
    version,
    about = "Reads stdin and prints to stdout only the lines the reference \
             file permits: by default a line found in the file is dropped; \
             with --whitelist only lines found in the file are kept"
)]
pub struct Args {
    /// File whose non-empty lines form the reference set
    pub reference: Option<PathBuf>,

    /// Print a line only the first time it occurs
    #[arg(short, long)]
    pub uniq: bool,

    /// The reference file is a whitelist instead of a blacklist
    #[arg(short, long)]
    pub whitelist: bool,
}
