pub mod changes;
pub mod error;
pub mod extraction;
pub mod hashing;
pub mod io;
pub mod markdown;
pub mod node;
pub mod tree;

// Re-export key types for easier usage
pub use changes::{ChangeSummary, ComponentChange, diff_components};
pub use error::DocumentError;
pub use extraction::{Component, extract_components, is_component_paragraph, is_header_marker};
pub use hashing::content_hash;
pub use markdown::{MarkdownNode, Script};
pub use node::{DocumentNode, NodeKind};
pub use tree::ContentNode;
