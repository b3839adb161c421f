use tree_sitter::{InputEdit, Parser, Point, Tree};
use tree_sitter_md::LANGUAGE;
use xi_rope::{Rope, delta::Builder};

use crate::error::DocumentError;
use crate::extraction::{Component, extract_components};
use crate::markdown::MarkdownNode;

/// A Markdown script kept as an xi-rope buffer with an incrementally
/// maintained tree-sitter parse.
///
/// Editors can call [`Script::replace`] on every keystroke and re-run
/// [`Script::components`]; only the edited region is re-parsed.
///
/// ```
/// use script_components_engine::{Script, content_hash};
///
/// let mut script = Script::from_bytes(b"Hello world\n").unwrap();
/// assert_eq!(script.components(content_hash).len(), 1);
///
/// script.replace(12..12, "\n[[OUTRO]]\n\nGoodbye\n");
/// let components = script.components(content_hash);
/// assert_eq!(components[1].content, "Goodbye");
/// assert_eq!(components[1].number, 2);
/// ```
pub struct Script {
    buffer: Rope,
    /// Incremented on every edit
    version: u64,
    parser: Parser,
    tree: Option<Tree>,
}

impl Script {
    /// Parse a script from raw bytes, which must be UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(bytes)?;
        let buffer = Rope::from(text);

        let mut parser = Parser::new();
        parser.set_language(&LANGUAGE.into())?;

        let tree = parser.parse(text, None).ok_or(DocumentError::Parse)?;
        log::debug!("Parsed script of {} bytes", text.len());

        Ok(Self {
            buffer,
            version: 0,
            parser,
            tree: Some(tree),
        })
    }

    /// Replace `range` with `text` and re-parse incrementally.
    ///
    /// The range is clamped to the buffer and moved back onto char boundaries.
    pub fn replace(&mut self, range: std::ops::Range<usize>, text: &str) {
        let old_text = self.buffer.to_string();
        let (start, end) = clamp_to_char_boundaries(&old_text, range);

        let mut builder = Builder::new(self.buffer.len());
        builder.replace(start..end, Rope::from(text));
        let delta = builder.build();

        // The edit must be described against the old buffer
        let start_position = byte_to_point(&old_text, start);
        let edit = InputEdit {
            start_byte: start,
            old_end_byte: end,
            new_end_byte: start + text.len(),
            start_position,
            old_end_position: byte_to_point(&old_text, end),
            new_end_position: advance_point(start_position, text),
        };

        self.buffer = delta.apply(&self.buffer);
        let new_text = self.buffer.to_string();

        self.tree = match self.tree.take() {
            Some(mut old_tree) => {
                old_tree.edit(&edit);
                self.parser.parse(&new_text, Some(&old_tree))
            }
            None => self.parser.parse(&new_text, None),
        };
        if self.tree.is_none() {
            log::warn!("Re-parse failed after edit at {start}..{end}");
        }

        self.version += 1;
        log::debug!(
            "Applied edit {start}..{end} (+{} bytes), script version {}",
            text.len(),
            self.version
        );
    }

    /// The root node, or `None` if the last re-parse failed.
    pub fn root(&self) -> Option<MarkdownNode<'_>> {
        self.tree
            .as_ref()
            .map(|tree| MarkdownNode::new(tree.root_node(), &self.buffer))
    }

    /// Extract the script's components with the given hash function.
    pub fn components<H>(&self, hash: H) -> Vec<Component>
    where
        H: Fn(&str) -> String,
    {
        match self.root() {
            Some(root) => extract_components(root, hash),
            None => Vec::new(),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl std::str::FromStr for Script {
    type Err = DocumentError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(text.as_bytes())
    }
}

fn clamp_to_char_boundaries(text: &str, range: std::ops::Range<usize>) -> (usize, usize) {
    let mut start = range.start.min(text.len());
    let mut end = range.end.min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    (start, end.max(start))
}

/// Row and byte column of `byte_offset` in `text`.
fn byte_to_point(text: &str, byte_offset: usize) -> Point {
    let offset = byte_offset.min(text.len());
    let before = &text.as_bytes()[..offset];
    let row = before.iter().filter(|&&b| b == b'\n').count();
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|pos| pos + 1)
        .unwrap_or(0);
    Point {
        row,
        column: offset - line_start,
    }
}

/// Where a point ends up after `inserted` is typed at it.
fn advance_point(start: Point, inserted: &str) -> Point {
    match inserted.rfind('\n') {
        Some(last_newline) => Point {
            row: start.row + inserted.matches('\n').count(),
            column: inserted.len() - last_newline - 1,
        },
        None => Point {
            row: start.row,
            column: start.column + inserted.len(),
        },
    }
}
