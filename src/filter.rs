//! Houses the `run` function
//!

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bstr::io::BufReadExt;
use fxhash::FxHashSet;

use crate::set::LineSet;

/// The switches governing a filtering run.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Print a line only the first time it occurs.
    pub unique: bool,
    /// Invert the membership test: suppress the lines *absent* from the
    /// reference set, so only referenced lines pass through.
    pub whitelist: bool,
}

/// Reads `input` line by line and writes to `out` each line that `reference`
/// permits, in input order, each followed by a single `\n` whether or not the
/// input line had one.
///
/// A line is suppressed when it occurs in `reference`, or, with
/// `opts.whitelist`, when it does not. With `opts.unique`, a line that
/// already passed once is suppressed on every later occurrence. Lines may be
/// of any length; exactly one trailing `\n` is stripped before the membership
/// test, and `\r` is left alone. A read or write failure aborts the run, and
/// output already written stays written.
pub fn run(
    mut input: impl BufRead,
    reference: &LineSet,
    opts: Options,
    mut out: impl Write,
) -> Result<()> {
    // Input lines are transient per-iteration buffers, so the dedup set must
    // own its keys.
    let mut emitted = FxHashSet::<Vec<u8>>::default();

    input
        .for_byte_record(b'\n', |line| {
            let is_referenced = reference.contains(line);
            let suppress = if opts.whitelist { !is_referenced } else { is_referenced };
            if suppress {
                return Ok(true);
            }
            if opts.unique {
                if emitted.contains(line) {
                    return Ok(true);
                }
                emitted.insert(line.to_vec());
            }
            out.write_all(line)?;
            out.write_all(b"\n")?;
            Ok(true)
        })
        .context("Error filtering standard input")?;
    out.flush().context("Error writing to standard output")?;
    Ok(())
}
