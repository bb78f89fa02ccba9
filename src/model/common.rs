/// Repository-assigned identifier shared by departments and employees.
pub type Id = i32;

/// Next identifier for a collection: one more than the current maximum, or 1 when empty.
///
/// Identifiers are derived from what is stored right now, not from a persistent counter,
/// so deleting the highest record makes its id available again.
pub fn next_id<I>(ids: I) -> Id
where
    I: IntoIterator<Item = Id>,
{
    ids.into_iter().max().unwrap_or(0) + 1
}

/// Case-insensitive name comparison used for uniqueness checks.
/// Compares by per-character Unicode lowercase mapping. This is not full case folding:
/// multi-character folds such as `ß`/`ss` are treated as different names.
pub fn names_match(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(Vec::new()), 1);
        assert_eq!(next_id(vec![1, 2, 3]), 4);
        assert_eq!(next_id(vec![5, 2]), 6);
    }

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("Music", "MUSIC"));
        assert!(names_match("Ärzte", "ärzte"));
        assert!(!names_match("Music", "Acting"));
    }

    #[test]
    fn test_names_match_does_not_fold_multi_character_forms() {
        assert!(names_match("STRASSE", "strasse"));
        assert!(!names_match("STRASSE", "straße"));
    }
}
