//! Owned document tree in the ProseMirror/Tiptap JSON shape.
//!
//! ```json
//! {"type": "doc", "content": [
//!   {"type": "paragraph", "content": [{"type": "text", "text": "Hello"}]}
//! ]}
//! ```
//!
//! Only `type`, `text` and `content` are read; `attrs` and `marks` are ignored.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::DocumentError;
use crate::node::{self, DocumentNode};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentNode>,
}

impl ContentNode {
    /// A node of any type with the given children.
    pub fn node(node_type: &str, content: Vec<ContentNode>) -> Self {
        Self {
            node_type: node_type.to_string(),
            text: None,
            content,
        }
    }

    /// An inline text leaf.
    pub fn text(text: &str) -> Self {
        Self {
            node_type: node::TEXT.to_string(),
            text: Some(text.to_string()),
            content: Vec::new(),
        }
    }

    pub fn doc(content: Vec<ContentNode>) -> Self {
        Self::node(node::DOC, content)
    }

    /// A paragraph holding a single text leaf, or nothing when `text` is empty.
    pub fn paragraph(text: &str) -> Self {
        let content = if text.is_empty() {
            Vec::new()
        } else {
            vec![Self::text(text)]
        };
        Self::node(node::PARAGRAPH, content)
    }

    pub fn bullet_list(items: Vec<ContentNode>) -> Self {
        Self::node(node::BULLET_LIST, items)
    }

    pub fn ordered_list(items: Vec<ContentNode>) -> Self {
        Self::node(node::ORDERED_LIST, items)
    }

    /// A list item wrapping one paragraph, as the Tiptap schema requires.
    pub fn list_item(text: &str) -> Self {
        Self::node(node::LIST_ITEM, vec![Self::paragraph(text)])
    }

    /// Parse a ProseMirror JSON document.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Own text followed by all descendant text, borrowed when no joining is needed.
    pub fn text_content(&self) -> Cow<'_, str> {
        match (&self.text, self.content.as_slice()) {
            (Some(text), []) => Cow::Borrowed(text),
            (None, []) => Cow::Borrowed(""),
            (None, [only]) => only.text_content(),
            _ => {
                let mut out = String::new();
                self.collect_text(&mut out);
                Cow::Owned(out)
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.content {
            child.collect_text(out);
        }
    }
}

impl<'a> DocumentNode for &'a ContentNode {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn text_content(&self) -> Cow<'_, str> {
        ContentNode::text_content(self)
    }

    fn children(&self) -> Vec<Self> {
        self.content.iter().collect()
    }
}
