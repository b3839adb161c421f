/// Failures turning raw input into a document tree.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Script is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Failed to load markdown grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("Markdown parser produced no tree")]
    Parse,
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
