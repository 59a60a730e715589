use crate::parsing::ParsedDoc;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file and return its content
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and parse a markdown file
pub fn load_document(path: &Path) -> Result<ParsedDoc, IoError> {
    let content = read_document(path)?;
    Ok(ParsedDoc::from_markdown(&content))
}

/// Where an image url points, as far as a renderer is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// `http…` url, fetched by the renderer.
    Remote(String),
    /// Existing local file.
    Local(PathBuf),
    /// Local path that doesn't exist; renderers show their fallback image.
    Missing(PathBuf),
}

/// Resolve an image url from a document in `document_dir`.
///
/// Relative paths are resolved against the document's directory, not the
/// process working directory.
pub fn resolve_image(url: &str, document_dir: &Path) -> ImageSource {
    let url = url.trim();
    if url.starts_with("http") {
        return ImageSource::Remote(url.to_string());
    }

    let path = if Path::new(url).is_absolute() {
        PathBuf::from(url)
    } else {
        RelativePath::new(url).to_logical_path(document_dir)
    };

    if path.is_file() {
        ImageSource::Local(path)
    } else {
        ImageSource::Missing(path)
    }
}
