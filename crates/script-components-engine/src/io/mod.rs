use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DocumentError;
use crate::extraction::Component;
use crate::markdown::Script;
use crate::tree::ContentNode;
use crate::extract_components;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scripts directory: {0}")]
    InvalidScriptsDir(String),
    #[error("Unsupported script format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Failed to parse {path}: {source}")]
    Document {
        path: PathBuf,
        source: DocumentError,
    },
}

/// How a script file is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    /// Markdown text (`.md`, `.markdown`)
    Markdown,
    /// ProseMirror/Tiptap document JSON (`.json`)
    Json,
}

impl ScriptFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "markdown" => Some(ScriptFormat::Markdown),
            "json" => Some(ScriptFormat::Json),
            _ => None,
        }
    }
}

/// Read a script file and return its content
pub fn read_script(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a script and extract its components, choosing the parser by extension
pub fn load_components<H>(path: &Path, hash: H) -> Result<Vec<Component>, IoError>
where
    H: Fn(&str) -> String,
{
    let format =
        ScriptFormat::from_path(path).ok_or_else(|| IoError::UnsupportedFormat(path.to_path_buf()))?;
    let content = read_script(path)?;
    let document_error = |source| IoError::Document {
        path: path.to_path_buf(),
        source,
    };

    let components = match format {
        ScriptFormat::Markdown => {
            let script = Script::from_bytes(content.as_bytes()).map_err(document_error)?;
            script.components(hash)
        }
        ScriptFormat::Json => {
            let doc = ContentNode::from_json(&content).map_err(document_error)?;
            extract_components(&doc, hash)
        }
    };

    log::debug!(
        "Loaded {} components from {}",
        components.len(),
        path.display()
    );
    Ok(components)
}

/// Scan for script files in a directory, recursively and sorted
pub fn scan_scripts(scripts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !scripts_root.is_dir() {
        return Err(IoError::InvalidScriptsDir(format!(
            "{} is not a directory",
            scripts_root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(scripts_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if ScriptFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }

    Ok(())
}
