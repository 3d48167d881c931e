//! Provides the `reference_contents` function, which returns a `Vec<u8>`
//! containing the full contents of the reference file. The file is read into
//! memory in its entirety before filtering starts, so a file that can't be
//! read is fatal before any output is produced.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Returns the contents of the reference file at `path`, or an empty buffer
/// when no path was given on the command line (an empty buffer builds an
/// empty reference set).
pub fn reference_contents(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        None => Ok(Vec::new()),
        Some(path) => {
            fs::read(path).with_context(|| format!("Can't read file: {}", path.display()))
        }
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    #[test]
    fn no_path_yields_an_empty_buffer() {
        assert_eq!(reference_contents(None).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn a_missing_file_reports_its_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.child("absent.txt");
        let err = reference_contents(Some(path.path())).unwrap_err();
        assert!(format!("{err}").contains("Can't read file"));
    }
}
