//! Loading the book file: the document plus its template in one JSON value.

use crate::error::PipelineError;
use folio_style::Template;
use folio_types::Document;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// The saved book as the editor writes it. Keys this crate does not use
/// (`characters`, `github`, `metadata`, ...) are ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookFile {
    #[serde(flatten)]
    pub document: Document,
    #[serde(default)]
    pub template: Template,
}

impl BookFile {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read book from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }
}
