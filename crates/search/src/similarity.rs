//! Normalized string similarity.

use crate::levenshtein_distance;

/// Similarity between two strings in `[0.0, 1.0]`.
///
/// - `0.0` if either string is empty
/// - `1.0` if the strings are equal
/// - otherwise `1 - distance / max(len)`, lengths counted in `char`s
///
/// Case-sensitive; normalize case before calling if needed.
///
/// # Example
/// ```
/// use servicesearch_search::similarity;
///
/// assert_eq!(similarity("Plumbing", "Plumbing"), 1.0);
/// assert_eq!(similarity("", "Plumbing"), 0.0);
/// assert!((similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
/// ```
pub fn similarity(source: &str, target: &str) -> f64 {
    if source.is_empty() || target.is_empty() {
        return 0.0;
    }
    if source == target {
        return 1.0;
    }

    let steps = levenshtein_distance(source, target);
    let longest = source.chars().count().max(target.chars().count());

    1.0 - steps as f64 / longest as f64
}

/// [`similarity`] for possibly absent values; `None` scores `0.0`.
pub fn similarity_opt(source: Option<&str>, target: Option<&str>) -> f64 {
    match (source, target) {
        (Some(source), Some(target)) => similarity(source, target),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(similarity("Plumbing", "Plumbing"), 1.0);
        assert_eq!(similarity("a", "a"), 1.0);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(similarity("", "Plumbing"), 0.0);
        assert_eq!(similarity("Plumbing", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_absent_values() {
        assert_eq!(similarity_opt(None, Some("Plumbing")), 0.0);
        assert_eq!(similarity_opt(Some("Plumbing"), None), 0.0);
        assert_eq!(similarity_opt(Some("abc"), Some("abc")), 1.0);
    }

    #[test]
    fn test_partial_match() {
        // "Plumbing" -> "plumb": one substitution, three deletions
        let score = similarity("Plumbing", "plumb");
        assert!((score - (1.0 - 4.0 / 8.0)).abs() < 1e-12);
    }

    #[test]
    fn test_completely_different() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(similarity("ELEC", "elec") < 1.0);
    }

    #[test]
    fn test_multibyte_lengths() {
        // One substitution over four chars, not five bytes
        assert!((similarity("Städ", "Stad") - 0.75).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_self_similarity_is_one(s in "\\PC{1,24}") {
            prop_assert_eq!(similarity(&s, &s), 1.0);
        }

        #[test]
        fn prop_empty_is_zero(s in "\\PC{0,24}") {
            prop_assert_eq!(similarity("", &s), 0.0);
            prop_assert_eq!(similarity(&s, ""), 0.0);
        }

        #[test]
        fn prop_symmetric(a in "[a-zA-Z ]{0,16}", b in "[a-zA-Z ]{0,16}") {
            prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
        }

        #[test]
        fn prop_bounded(a in "\\PC{1,16}", b in "\\PC{1,16}") {
            let score = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
