//! Bucket (radix) sort engine for variable-length strings
//!
//! Most-significant-position-correct ordering built from repeated stable
//! bucket passes: positions are processed in decreasing index order, so the
//! final pass distributes on the leading digit and earlier passes survive as
//! tie-breaks through stability. Runs in O(max_len x n) time with O(n)
//! transient bucket storage per pass, beating any comparison sort for large
//! inputs over a bounded alphabet.

use crate::policy::SortMode;

/// Sort `records` under `mode`, returning a new sequence.
///
/// Total over any input: empty input (and input made solely of empty
/// strings) is returned unchanged. Record content is never modified, only
/// positions change, and records with equal digits in every pass keep their
/// original relative order.
pub fn sort(records: Vec<String>, mode: SortMode) -> Vec<String> {
    let max_len = records.iter().map(String::len).max().unwrap_or(0);
    if max_len == 0 {
        return records;
    }

    let mut working = records;
    for pass in (0..max_len).rev() {
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); mode.bucket_count()];

        // Stable distribution: arrival order is preserved within a bucket
        for record in working {
            let bucket = mode.bucket_index(record.as_bytes(), pass);
            buckets[bucket].push(record);
        }

        working = concatenate(buckets, mode.descending());
    }
    working
}

/// Rebuild the working sequence from one pass's buckets, reading them in
/// decreasing index order for descending output
fn concatenate(buckets: Vec<Vec<String>>, descending: bool) -> Vec<String> {
    let total = buckets.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);
    if descending {
        for bucket in buckets.into_iter().rev() {
            merged.extend(bucket);
        }
    } else {
        for bucket in buckets {
            merged.extend(bucket);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::HashMap;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn assert_adjacent_order(records: &[String], mode: SortMode) {
        for pair in records.windows(2) {
            assert_ne!(
                mode.compare(&pair[0], &pair[1]),
                Ordering::Greater,
                "{:?} should not precede {:?} under {:?}",
                pair[1],
                pair[0],
                mode
            );
        }
    }

    fn multiset(records: &[String]) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for record in records {
            *counts.entry(record.as_str()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_empty_input() {
        assert!(sort(Vec::new(), SortMode::AscendingLexicographic).is_empty());
    }

    #[test]
    fn test_all_empty_strings() {
        let input = strings(&["", "", ""]);
        assert_eq!(sort(input.clone(), SortMode::LastLetterAscending), input);
    }

    #[test]
    fn test_ascending_case_insensitive_merge() {
        // arrival order is the tie-break for case-folded equals: "banana"
        // arrives before "Banana" and must stay ahead of it
        let input = strings(&["banana", "Apple", "cherry", "apple", "Banana"]);
        let sorted = sort(input, SortMode::AscendingLexicographic);
        assert_eq!(
            sorted,
            strings(&["Apple", "apple", "banana", "Banana", "cherry"])
        );
    }

    #[test]
    fn test_descending_reverses_ascending() {
        let input = strings(&["pear", "fig", "quince", "date", "elderberry"]);
        let mut ascending = sort(input.clone(), SortMode::AscendingLexicographic);
        let descending = sort(input, SortMode::DescendingLexicographic);
        ascending.reverse();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn test_last_letter_uppercase_before_lowercase() {
        let input = strings(&["cat", "Cat", "bat"]);
        let sorted = sort(input, SortMode::LastLetterAscending);
        // last two letters tie; 'C' outranks both lowercase leads
        assert_eq!(sorted, strings(&["Cat", "bat", "cat"]));
    }

    #[test]
    fn test_last_letter_distinguishing_suffix() {
        let input = strings(&["spring", "sing", "string", "wing"]);
        let sorted = sort(input, SortMode::LastLetterAscending);
        assert_adjacent_order(&sorted, SortMode::LastLetterAscending);
        // shared "ing" suffix; the fourth byte from the end decides,
        // then "spring"/"string" split on the fifth
        assert_eq!(sorted, strings(&["spring", "string", "sing", "wing"]));
    }

    #[test]
    fn test_shorter_records_sort_before_extensions() {
        let input = strings(&["carton", "car", "cart"]);
        let sorted = sort(input, SortMode::AscendingLexicographic);
        assert_eq!(sorted, strings(&["car", "cart", "carton"]));
    }

    #[test]
    fn test_non_letter_bytes_share_sentinel_bucket() {
        let input = strings(&["zoo", "7up", "!bang", "apple"]);
        let sorted = sort(input.clone(), SortMode::AscendingLexicographic);
        // both non-letter leads map to the sentinel digit; "!bang" wins on
        // the second position ('b' < 'u')
        assert_eq!(sorted, strings(&["!bang", "7up", "apple", "zoo"]));
        assert_eq!(multiset(&sorted), multiset(&input));
    }

    #[test]
    fn test_multiset_preserved_in_every_mode() {
        let input = strings(&["b", "a", "b", "", "aa", "B", "zzz", "Zz"]);
        for mode in [
            SortMode::AscendingLexicographic,
            SortMode::DescendingLexicographic,
            SortMode::LastLetterAscending,
        ] {
            let sorted = sort(input.clone(), mode);
            assert_eq!(sorted.len(), input.len());
            assert_eq!(multiset(&sorted), multiset(&input));
            assert_adjacent_order(&sorted, mode);
        }
    }

    #[test]
    fn test_stability_of_identical_records() {
        // identical strings are indistinguishable, so stability is observed
        // through case-folded distinct records instead
        let input = strings(&["DOG", "dog", "Dog"]);
        for mode in [
            SortMode::AscendingLexicographic,
            SortMode::DescendingLexicographic,
        ] {
            let sorted = sort(input.clone(), mode);
            assert_eq!(sorted, input, "ties must keep arrival order under {mode:?}");
        }
    }

    #[test]
    fn test_idempotence() {
        let input = strings(&["mango", "Mango", "kiwi", "lime", "", "Lime"]);
        for mode in [
            SortMode::AscendingLexicographic,
            SortMode::DescendingLexicographic,
            SortMode::LastLetterAscending,
        ] {
            let once = sort(input.clone(), mode);
            let twice = sort(once.clone(), mode);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_agrees_with_stable_comparison_sort() {
        let input = strings(&[
            "pear", "PEAR", "apple", "Apple", "fig", "banana", "Fig", "figs", "ap", "BANANA",
            "cherry", "date", "DATES", "elder", "", "quinCe", "quince",
        ]);
        for mode in [
            SortMode::AscendingLexicographic,
            SortMode::DescendingLexicographic,
            SortMode::LastLetterAscending,
        ] {
            let mut expected = input.clone();
            expected.sort_by(|a, b| mode.compare(a, b));
            assert_eq!(sort(input.clone(), mode), expected, "mode {mode:?}");
        }
    }
}
