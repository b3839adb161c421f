//! # Document Node Capability
//!
//! The extraction core never sees a concrete editor tree. It works against
//! [`DocumentNode`], a minimal view with exactly three operations:
//!
//! - **type identification** (`node_type`), using ProseMirror/Tiptap schema names
//! - **aggregated text** (`text_content`), the text of all descendants
//! - **ordered child iteration** (`children`)
//!
//! Adapters implement the trait over whatever tree a caller has:
//! [`crate::tree::ContentNode`] for ProseMirror JSON documents and
//! [`crate::markdown::MarkdownNode`] for tree-sitter Markdown trees.

use std::borrow::Cow;

/// Type name of a document root.
pub const DOC: &str = "doc";
/// Type name of a paragraph leaf.
pub const PARAGRAPH: &str = "paragraph";
/// Type name of an unordered list container.
pub const BULLET_LIST: &str = "bullet_list";
/// Type name of an ordered list container.
pub const ORDERED_LIST: &str = "ordered_list";
/// Type name of a list item.
pub const LIST_ITEM: &str = "list_item";
/// Type name of an inline text leaf.
pub const TEXT: &str = "text";

// Tiptap serializes its StarterKit list nodes in camelCase.
const TIPTAP_BULLET_LIST: &str = "bulletList";
const TIPTAP_ORDERED_LIST: &str = "orderedList";
const TIPTAP_LIST_ITEM: &str = "listItem";

/// Read-only structural view of one node in a document tree.
///
/// Implementors are expected to be cheap handles (`&ContentNode`,
/// `MarkdownNode<'_>`), so `children` returns owned handles.
pub trait DocumentNode: Sized {
    /// The node's schema type name, e.g. `"paragraph"` or `"bullet_list"`.
    fn node_type(&self) -> &str;

    /// Text accumulated from every descendant of this node.
    fn text_content(&self) -> Cow<'_, str>;

    /// Immediate children in document order.
    fn children(&self) -> Vec<Self>;

    /// Classification of [`DocumentNode::node_type`].
    fn kind(&self) -> NodeKind {
        NodeKind::from_type_name(self.node_type())
    }
}

/// What the extraction core does with a node, decided from its type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A paragraph-like leaf; yields one component unless it is a header marker.
    Paragraph,
    /// A list grouping list items; never a component itself.
    ListContainer {
        /// Whether the source list was numbered. Items are normalized the same either way.
        ordered: bool,
    },
    /// A single list item; yields one dash-prefixed component.
    ListItem,
    /// Anything else (headings, code, quotes, rules...). Ignored.
    Other,
}

impl NodeKind {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            PARAGRAPH => NodeKind::Paragraph,
            BULLET_LIST | TIPTAP_BULLET_LIST => NodeKind::ListContainer { ordered: false },
            ORDERED_LIST | TIPTAP_ORDERED_LIST => NodeKind::ListContainer { ordered: true },
            LIST_ITEM | TIPTAP_LIST_ITEM => NodeKind::ListItem,
            _ => NodeKind::Other,
        }
    }
}
