//! Ratcliff–Obershelp similarity ratio.
//!
//! Finds the longest common contiguous block of two character
//! sequences, recurses on the remainders either side of it, and
//! scores `2·M / (len(a) + len(b))` where `M` is the total
//! matched length. Comparison operates on characters, not bytes,
//! so multi-byte UTF-8 input is handled uniformly.
//!
//! A single comparison is O(len(a)·len(b)) in the worst case,
//! which is acceptable for the batch sizes deduplication sees
//! (tens to low hundreds of texts).

/// Similarity ratio in `[0, 1]` between two strings.
///
/// Inputs are case-folded and trimmed before comparison. The
/// ratio is symmetric, deterministic, and `1.0` for identical
/// inputs (including two empty strings).
///
/// # Example
///
/// ```
/// use textprep::core::dedup::similarity::similarity;
///
/// assert_eq!(similarity("same text", "same text"), 1.0);
/// assert_eq!(similarity("abcd", "wxyz"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.trim().to_lowercase().chars().collect();
    let b: Vec<char> = b.trim().to_lowercase().chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let matches = matching_total(&a, &b);
    2.0 * matches as f64 / (a.len() + b.len()) as f64
}

/// Sum of matched-block lengths across the recursive decomposition.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_common_block(a, b);
    if size == 0 {
        return 0;
    }

    size + matching_total(&a[..i], &b[..j]) + matching_total(&a[i + size..], &b[j + size..])
}

/// Longest common contiguous block as `(start_a, start_b, len)`.
///
/// Ties resolve to the earliest start in `a`, then in `b`, which
/// keeps the decomposition deterministic.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // lengths[j] = length of the common suffix ending at a[i], b[j]
    let mut lengths = vec![0usize; b.len()];

    for (i, &ca) in a.iter().enumerate() {
        let mut next = vec![0usize; b.len()];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = if j > 0 { lengths[j - 1] + 1 } else { 1 };
                next[j] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        lengths = next;
    }

    best
}
