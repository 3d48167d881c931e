//! `veto` copies standard input to standard output, dropping the lines its
//! reference file vetoes. By default the reference file is a blacklist: a line
//! that occurs in it is suppressed. With `--whitelist` the polarity flips and
//! only lines that occur in the file pass through. With `--uniq` each passing
//! line is printed only the first time it occurs.
//!
//! The `filter` module is the kernel of the application, the `set` module
//! builds the reference set it consults, the `args` module parses the command
//! line, and the `operands` module hides the file-reading details.
//!
//! Current Limitations:
//! * A "line" is zero or more non-newline bytes followed by a newline (or by
//!   the end of input). Carriage returns are ordinary line content, so a
//!   reference file with `\r\n` line endings matches only input lines that
//!   also carry the `\r`.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

pub mod args;
pub mod filter;
pub mod operands;
pub mod set;
