//! The book document model handed to the layout engine.
//!
//! These values are owned by the caller; layout only ever borrows them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Document {
    /// Whether the document gets a title page (title or author present).
    pub fn has_title_page(&self) -> bool {
        !self.title.is_empty() || !self.author.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Raw text; every newline separates two paragraphs.
    #[serde(default)]
    pub content: String,
}

impl Scene {
    /// Non-blank, trimmed paragraphs in order.
    ///
    /// A single newline is a paragraph boundary; there is no soft line break.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
