//! Null-safe predicate helpers for optional text fields.
//!
//! A missing value (`None`, empty, or whitespace-only where noted) never
//! raises; it always lands on the "missing" side of the condition.

/// Returns true if the value is absent, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Returns true if the value is absent or contains a character outside `0-9`.
///
/// An empty string contains no digits but also no offending character, so it
/// is treated as numeric.
pub fn has_non_digit(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.chars().any(|c| !c.is_ascii_digit()))
}

/// Returns true if the value's first character is `prefix`.
///
/// Absent and empty values start with nothing.
pub fn starts_with(value: Option<&str>, prefix: char) -> bool {
    value.and_then(|v| v.chars().next()) == Some(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_covers_missing_empty_and_whitespace() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("WA")));
    }

    #[test]
    fn non_digit_detection() {
        assert!(has_non_digit(None));
        assert!(has_non_digit(Some("WX1 8LU")));
        assert!(has_non_digit(Some("05-021")));
        assert!(!has_non_digit(Some("12209")));
        assert!(!has_non_digit(Some("")));
    }

    #[test]
    fn starts_with_is_guarded() {
        assert!(starts_with(Some("(171) 555-7788"), '('));
        assert!(!starts_with(Some("030-0074321"), '('));
        assert!(!starts_with(Some(""), '('));
        assert!(!starts_with(None, '('));
    }
}
