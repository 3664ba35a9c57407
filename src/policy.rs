//! Ordering policy: the three sort modes and their per-pass digit rules
//!
//! A `SortMode` fixes both the bucket mapping used by the engine and the
//! reference pairwise order used by verification. The two must agree: the
//! bucket index of a byte at some position is exactly its digit in the
//! reference comparison for that position.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::SortError;

/// Bucket array width for the two lexicographic modes: one sentinel bucket
/// for absent/non-letter digits plus 26 case-folded letters.
pub const LEXICOGRAPHIC_BUCKETS: usize = 27;

/// Bucket array width for last-letter mode: sentinel plus 26 uppercase plus
/// 26 lowercase, uppercase ordered before lowercase.
pub const LAST_LETTER_BUCKETS: usize = 53;

/// Comparison semantics for one sort invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Front-to-back, case-folded at the bucket level
    AscendingLexicographic,
    /// Exact reverse of `AscendingLexicographic`
    DescendingLexicographic,
    /// Back-to-front, case-sensitive, uppercase before lowercase
    LastLetterAscending,
}

impl SortMode {
    /// Number of buckets the engine allocates per pass under this mode
    pub fn bucket_count(self) -> usize {
        match self {
            SortMode::AscendingLexicographic | SortMode::DescendingLexicographic => {
                LEXICOGRAPHIC_BUCKETS
            }
            SortMode::LastLetterAscending => LAST_LETTER_BUCKETS,
        }
    }

    /// Whether the engine concatenates buckets in decreasing index order
    pub fn descending(self) -> bool {
        matches!(self, SortMode::DescendingLexicographic)
    }

    /// Bucket index for `record` in the pass covering position `pass`.
    ///
    /// Total over all byte content: a position past the end of the record
    /// and any non-letter byte both land in the sentinel bucket 0. For the
    /// lexicographic modes `pass` counts from the front of the record; for
    /// last-letter mode it counts from the end.
    pub fn bucket_index(self, record: &[u8], pass: usize) -> usize {
        match self {
            SortMode::AscendingLexicographic | SortMode::DescendingLexicographic => {
                folded_digit(record, pass) as usize
            }
            SortMode::LastLetterAscending => cased_digit_from_end(record, pass) as usize,
        }
    }

    /// Reference total order between two records under this mode.
    ///
    /// Compares the mapped digit sequences, not the raw bytes, so distinct
    /// bytes that share a bucket (e.g. two different punctuation characters)
    /// compare `Equal` here; the engine's stability resolves such ties by
    /// original relative order. Used by tests and `--check`, never by the
    /// sorting hot path.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let span = a.len().max(b.len());
        match self {
            SortMode::AscendingLexicographic => {
                compare_digits(span, |i| folded_digit(a, i), |i| folded_digit(b, i))
            }
            SortMode::DescendingLexicographic => {
                compare_digits(span, |i| folded_digit(b, i), |i| folded_digit(a, i))
            }
            SortMode::LastLetterAscending => compare_digits(
                span,
                |i| cased_digit_from_end(a, i),
                |i| cased_digit_from_end(b, i),
            ),
        }
    }

    /// Human-readable label used for default output file names
    pub fn label(self) -> &'static str {
        match self {
            SortMode::AscendingLexicographic => "Ascending",
            SortMode::DescendingLexicographic => "Descending",
            SortMode::LastLetterAscending => "LastLetter",
        }
    }
}

impl FromStr for SortMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" | "asc" => Ok(SortMode::AscendingLexicographic),
            "descending" | "desc" => Ok(SortMode::DescendingLexicographic),
            "last-letter" | "last_letter" => Ok(SortMode::LastLetterAscending),
            other => Err(SortError::invalid_mode(other)),
        }
    }
}

/// Case-folded digit at front offset `pos`: 0 for absent or non-letter,
/// 1..=26 for a letter of either case
fn folded_digit(record: &[u8], pos: usize) -> u8 {
    match record.get(pos) {
        Some(&byte) => {
            let folded = byte.to_ascii_lowercase();
            if folded.is_ascii_lowercase() {
                folded - b'a' + 1
            } else {
                0
            }
        }
        None => 0,
    }
}

/// Case-sensitive digit at end offset `pos` (0 = last byte): 0 for absent or
/// non-letter, 1..=26 uppercase, 27..=52 lowercase
fn cased_digit_from_end(record: &[u8], pos: usize) -> u8 {
    if pos >= record.len() {
        return 0;
    }
    let byte = record[record.len() - 1 - pos];
    if byte.is_ascii_uppercase() {
        byte - b'A' + 1
    } else if byte.is_ascii_lowercase() {
        byte - b'a' + 27
    } else {
        0
    }
}

fn compare_digits<F, G>(span: usize, first: F, second: G) -> Ordering
where
    F: Fn(usize) -> u8,
    G: Fn(usize) -> u8,
{
    for pos in 0..span {
        match first(pos).cmp(&second(pos)) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}
