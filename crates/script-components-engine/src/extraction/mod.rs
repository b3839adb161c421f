//! # Component Extraction
//!
//! Turns a document tree into a flat, numbered list of production components.
//!
//! ## Rules
//!
//! Only the root's immediate children are classified:
//!
//! - **Empty nodes** (trimmed text is empty) are skipped
//! - **Paragraphs** become one component with their text verbatim, unless the
//!   whole trimmed text is a header marker such as `[[INTRO]]`
//! - **List containers** (bullet or ordered) are flattened in place: each
//!   non-empty item becomes `"- " + trimmed item text`
//! - **List items** at the root are treated like items inside a container
//! - **Anything else** is ignored
//!
//! Numbers start at 1 and only advance when a component is emitted, so skipped
//! nodes leave no gaps. The caller supplies the hash function, which sees each
//! component's final content exactly once.
//!
//! ```
//! use script_components_engine::{ContentNode, extract_components};
//!
//! let doc = ContentNode::doc(vec![
//!     ContentNode::paragraph("Introduction"),
//!     ContentNode::paragraph("[[FEATURES]]"),
//!     ContentNode::bullet_list(vec![
//!         ContentNode::list_item("Rapid heating"),
//!         ContentNode::list_item("3D Hot Air"),
//!     ]),
//! ]);
//!
//! let components = extract_components(&doc, |text| text.len().to_string());
//! assert_eq!(components.len(), 3);
//! assert_eq!(components[1].content, "- Rapid heating");
//! assert_eq!(components[2].number, 3);
//! ```

pub mod header;
pub mod normalize;

use serde::{Deserialize, Serialize};

use crate::node::{DocumentNode, NodeKind};

pub use header::{HEADER_PATTERN, is_component_paragraph, is_header_marker};
pub use normalize::{LIST_ITEM_PREFIX, list_item_content, word_count};

/// One numbered unit of production text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// 1-based position in emission order
    pub number: u32,
    /// Canonical text; list items carry the `"- "` prefix
    pub content: String,
    /// Words in the counted text (list items exclude the prefix)
    pub word_count: usize,
    /// Caller-supplied digest of `content`
    pub hash: String,
}

/// Extract numbered components from the immediate children of `root`.
///
/// Never fails and never mutates the tree. Calling it twice on the same tree
/// with the same hash function gives identical output.
pub fn extract_components<N, H>(root: N, hash: H) -> Vec<Component>
where
    N: DocumentNode,
    H: Fn(&str) -> String,
{
    let mut numberer = Numberer::new(hash);

    for child in root.children() {
        let text = child.text_content();
        if text.trim().is_empty() {
            continue;
        }

        match child.kind() {
            NodeKind::Paragraph => {
                if is_header_marker(&text) {
                    continue;
                }
                numberer.emit(text.to_string(), word_count(&text));
            }
            NodeKind::ListContainer { .. } => {
                for item in child.children() {
                    numberer.emit_list_item(&item.text_content());
                }
            }
            NodeKind::ListItem => numberer.emit_list_item(&text),
            NodeKind::Other => {}
        }
    }

    numberer.finish()
}

/// Stamps sequence numbers and hashes onto emitted content.
struct Numberer<H> {
    hash: H,
    counter: u32,
    components: Vec<Component>,
}

impl<H: Fn(&str) -> String> Numberer<H> {
    fn new(hash: H) -> Self {
        Self {
            hash,
            counter: 0,
            components: Vec::new(),
        }
    }

    fn emit(&mut self, content: String, word_count: usize) {
        self.counter += 1;
        let hash = (self.hash)(&content);
        self.components.push(Component {
            number: self.counter,
            content,
            word_count,
            hash,
        });
    }

    /// Empty items are skipped without consuming a number.
    fn emit_list_item(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.emit(list_item_content(raw), word_count(raw));
    }

    fn finish(self) -> Vec<Component> {
        self.components
    }
}
