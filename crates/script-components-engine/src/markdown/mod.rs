//! # Markdown Scripts
//!
//! Scripts written as Markdown files are parsed with tree-sitter-md and
//! presented to the extraction core through [`MarkdownNode`], which renames the
//! tree-sitter node kinds to the ProseMirror schema the core understands:
//!
//! | tree-sitter kind | node type |
//! |------------------|-----------|
//! | `document` | `doc` (sections flattened) |
//! | `paragraph` | `paragraph` |
//! | `list` | `bullet_list` / `ordered_list` |
//! | `list_item` | `list_item` |
//! | `atx_heading`, `setext_heading` | `heading` |
//! | `fenced_code_block`, `indented_code_block` | `code_block` |
//! | `block_quote` | `blockquote` |
//! | `thematic_break` | `horizontal_rule` |
//!
//! Text content is the raw inline source of the node's paragraphs, joined
//! with newlines. List markers and block continuations never appear in it.

pub mod script;

use std::borrow::Cow;
use xi_rope::Rope;

use crate::node::{self, DocumentNode};

pub use script::Script;

/// A tree-sitter Markdown node viewed as a [`DocumentNode`].
#[derive(Clone, Copy)]
pub struct MarkdownNode<'a> {
    node: tree_sitter::Node<'a>,
    buffer: &'a Rope,
}

impl<'a> MarkdownNode<'a> {
    pub(crate) fn new(node: tree_sitter::Node<'a>, buffer: &'a Rope) -> Self {
        Self { node, buffer }
    }

    /// The underlying tree-sitter node kind, e.g. `"list_item"`.
    pub fn ts_kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Byte range of this node in the script.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.node.byte_range()
    }

    fn wrap(&self, node: tree_sitter::Node<'a>) -> Self {
        Self::new(node, self.buffer)
    }

    fn slice(&self, range: std::ops::Range<usize>) -> Cow<'a, str> {
        let len = self.buffer.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.buffer.slice_to_cow(start..end)
    }

    fn is_ordered_list(&self) -> bool {
        let mut cursor = self.node.walk();
        let first_item = self
            .node
            .named_children(&mut cursor)
            .find(|child| child.kind() == "list_item");

        let Some(item) = first_item else {
            return false;
        };

        let mut item_cursor = item.walk();
        let marker = item
            .named_children(&mut item_cursor)
            .find(|child| child.kind().starts_with("list_marker"));

        matches!(
            marker.map(|m| m.kind()),
            Some("list_marker_dot" | "list_marker_parenthesis")
        )
    }

    /// Collect the block children of a document, descending through sections.
    fn collect_blocks(node: tree_sitter::Node<'a>, out: &mut Vec<tree_sitter::Node<'a>>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "section" {
                Self::collect_blocks(child, out);
            } else if !is_syntax_only(child.kind()) {
                out.push(child);
            }
        }
    }

    /// Collect the ranges of every `inline` node below `node`, in order.
    fn collect_inline_ranges(node: tree_sitter::Node<'a>, out: &mut Vec<std::ops::Range<usize>>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "inline" {
                out.push(child.byte_range());
            } else {
                Self::collect_inline_ranges(child, out);
            }
        }
    }
}

impl<'a> DocumentNode for MarkdownNode<'a> {
    fn node_type(&self) -> &str {
        match self.node.kind() {
            "document" => node::DOC,
            "paragraph" => node::PARAGRAPH,
            "list" if self.is_ordered_list() => node::ORDERED_LIST,
            "list" => node::BULLET_LIST,
            "list_item" => node::LIST_ITEM,
            "atx_heading" | "setext_heading" => "heading",
            "fenced_code_block" | "indented_code_block" => "code_block",
            "block_quote" => "blockquote",
            "thematic_break" => "horizontal_rule",
            other => other,
        }
    }

    fn text_content(&self) -> Cow<'_, str> {
        if self.node.kind() == "document" {
            return self.slice(0..self.buffer.len());
        }

        let mut ranges = Vec::new();
        Self::collect_inline_ranges(self.node, &mut ranges);

        match ranges.as_slice() {
            [] => match self.node.kind() {
                // An item with a marker but no paragraph is empty
                "list_item" | "list" => Cow::Borrowed(""),
                _ => self.slice(self.node.byte_range()),
            },
            [only] => self.slice(only.clone()),
            _ => {
                let parts: Vec<Cow<'_, str>> =
                    ranges.iter().map(|range| self.slice(range.clone())).collect();
                Cow::Owned(parts.join("\n"))
            }
        }
    }

    fn children(&self) -> Vec<Self> {
        let mut nodes = Vec::new();
        if self.node.kind() == "document" {
            Self::collect_blocks(self.node, &mut nodes);
        } else {
            let mut cursor = self.node.walk();
            nodes.extend(
                self.node
                    .named_children(&mut cursor)
                    .filter(|child| !is_syntax_only(child.kind())),
            );
        }
        nodes.into_iter().map(|child| self.wrap(child)).collect()
    }
}

impl std::fmt::Debug for MarkdownNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownNode")
            .field("kind", &self.node.kind())
            .field("byte_range", &self.node.byte_range())
            .finish()
    }
}

/// Kinds that carry Markdown syntax rather than content.
fn is_syntax_only(kind: &str) -> bool {
    kind.starts_with("list_marker")
        || kind.starts_with("task_list_marker")
        || kind == "block_continuation"
}
