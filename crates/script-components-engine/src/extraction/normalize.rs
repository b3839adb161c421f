//! Canonical component text.

/// Prefix placed in front of every list item, bullet or ordered.
pub const LIST_ITEM_PREFIX: &str = "- ";

/// Normalize a list item's raw text to `"- " + trimmed text`.
pub fn list_item_content(raw: &str) -> String {
    format!("{LIST_ITEM_PREFIX}{}", raw.trim())
}

/// Count maximal runs of non-whitespace characters.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Rapid heating", "- Rapid heating")]
    #[case("   3D Hot Air\n", "- 3D Hot Air")]
    #[case("- already dashed", "- - already dashed")]
    #[case("\tTabbed", "- Tabbed")]
    fn test_list_item_content(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(list_item_content(raw), expected);
    }

    #[rstest]
    #[case("", 0)]
    #[case("   \n\t ", 0)]
    #[case("One", 1)]
    #[case("One two three four five", 5)]
    #[case("  leading and trailing  ", 3)]
    #[case("consecutive     spaces\n\nand\tnewlines", 4)]
    #[case("3D Hot Air", 3)]
    fn test_word_count(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(word_count(text), expected);
    }

    #[test]
    fn test_prefix_is_not_counted_when_counting_raw_text() {
        let raw = "One two three";
        assert_eq!(word_count(raw), 3);
        assert_eq!(word_count(&list_item_content(raw)), 4);
    }
}
