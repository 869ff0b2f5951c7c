use regex::Regex;
use std::sync::LazyLock;

/// Matches any string holding at least one non-whitespace character
/// - Valid: "Fruit", "  Dairy "
/// - Invalid: "", "   ", "\t\n"
pub static NOT_BLANK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_regex() {
        assert!(NOT_BLANK_REGEX.is_match("Fruit"));
        assert!(NOT_BLANK_REGEX.is_match("  Dairy "));
        assert!(!NOT_BLANK_REGEX.is_match(""));
        assert!(!NOT_BLANK_REGEX.is_match("   "));
        assert!(!NOT_BLANK_REGEX.is_match("\t\n"));
    }
}
