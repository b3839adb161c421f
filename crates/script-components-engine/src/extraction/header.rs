//! Header markers: paragraphs such as `[[INTRO]]` or `[[SECTION 2]]` that label a
//! part of a script for the voice-over tooling but are not production components.

use regex::Regex;
use std::sync::LazyLock;

/// Whole-string match for a bracketed header: `[[`, uppercase letters, digits,
/// whitespace, `-` or `_`, then `]]`.
pub static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\[([A-Z0-9\s\-_]+)\]\]$").expect("Invalid header marker regex")
});

/// Returns true when the trimmed text is nothing but a header marker.
///
/// Text that merely contains a marker (`"See [[INTRO]] above"`) is not a header.
pub fn is_header_marker(text: &str) -> bool {
    HEADER_PATTERN.is_match(text.trim())
}

/// Returns true when a paragraph with this text should be numbered as a component.
///
/// Used standalone by live editor decorations; extraction applies the same test.
///
/// ```
/// use script_components_engine::is_component_paragraph;
///
/// assert!(!is_component_paragraph("[[INTRO]]"));
/// assert!(is_component_paragraph("This is content"));
/// ```
pub fn is_component_paragraph(text: &str) -> bool {
    !is_header_marker(text)
}
