//! Levenshtein edit distance.

/// Calculate Levenshtein edit distance between two strings.
///
/// Operates on `char`s. Uses the rolling two-row form of the
/// `(len(a)+1) x (len(b)+1)` cost table: `prev` holds row `i - 1` and `curr`
/// row `i`, so `prev[n]` after the last row is `table[m][n]`.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character insertions, deletions or substitutions needed
/// to transform `a` into `b`
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // table[0][j] = j
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        // table[i][0] = i
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
