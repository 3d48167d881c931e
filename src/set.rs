//! Provides the `LineSet` structure, intended to be initialized from the
//! contents of the reference file, and the `lines_of` iterator used to split
//! that file into lines.

use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use memchr::memchr;

type RefSet<'data> = IndexSet<&'data [u8], FxBuildHasher>;

/// A `LineSet` is a set of distinct non-empty lines, each line a key borrowed
/// from the buffer the set was built from.
/// * Empty lines contribute no entry, so a zero-length query is never a
///   member.
/// * The first occurrence of a line's content wins; later duplicates in the
///   same buffer are ignored.
/// * Membership is exact byte equality. No case folding, no trimming: a line
///   ending in `\r` is a different line from the same line without it.
pub struct LineSet<'data> {
    set: RefSet<'data>,
}

impl<'data> LineSet<'data> {
    /// Builds the set of the distinct non-empty lines of `buffer`.
    #[must_use]
    pub fn new(buffer: &'data [u8]) -> Self {
        let mut set = RefSet::default();
        for line in lines_of(buffer) {
            if !line.is_empty() {
                set.insert(line);
            }
        }
        LineSet { set }
    }

    /// True if `line` occurs verbatim as a non-empty line of the buffer the
    /// set was built from.
    #[must_use]
    pub fn contains(&self, line: &[u8]) -> bool {
        self.set.contains(line)
    }

    /// The number of distinct non-empty lines in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// True if the set has no members (the buffer was empty or held only
    /// empty lines).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Returns an iterator over the lines of `slice`. Each line is the run of
/// bytes up to, and excluding, the next `\n`; the end of the slice terminates
/// the final line even without a trailing delimiter. Consecutive delimiters
/// yield an empty line between them.
#[must_use]
pub fn lines_of(slice: &[u8]) -> LinesOf<'_> {
    LinesOf { slice }
}

/// The iterator returned by [`lines_of`].
pub struct LinesOf<'data> {
    slice: &'data [u8],
}

impl<'data> Iterator for LinesOf<'data> {
    type Item = &'data [u8];

    fn next(&mut self) -> Option<&'data [u8]> {
        if self.slice.is_empty() {
            return None;
        }
        match memchr(b'\n', self.slice) {
            Some(end) => {
                let (line, rest) = self.slice.split_at(end);
                self.slice = &rest[1..];
                Some(line)
            }
            None => {
                let line = self.slice;
                self.slice = &[];
                Some(line)
            }
        }
    }
}
