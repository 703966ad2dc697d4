// crates/somgeo-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Gaalkacyó` -> `Gaalkacyo`)
/// 2\) Normalize to lowercase
///
/// For plain ASCII input this is exactly `to_lowercase`.
///
/// ```rust
/// use somgeo_core::text::fold_key;
///
/// assert_eq!(fold_key("Beledweyne"), "beledweyne");
/// assert_eq!(fold_key("Muqdisho"), "muqdisho");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Substring test against an already folded needle.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_key(haystack).contains(folded_needle)
}

/// First `n` characters of `s`, upper-cased. Counts chars, not bytes.
pub fn upper_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_accents() {
        assert_eq!(fold_key("XAMAR"), "xamar");
        assert_eq!(fold_key("Gaalkacyó"), "gaalkacyo");
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(contains_folded("Banadir", ""));
        assert!(contains_folded("", ""));
    }

    #[test]
    fn upper_prefix_handles_short_and_multibyte() {
        assert_eq!(upper_prefix("Banadir", 3), "BAN");
        assert_eq!(upper_prefix("Ab", 3), "AB");
        assert_eq!(upper_prefix("Éxa", 2), "ÉX");
    }
}
