//! Font capabilities the layout engine depends on.
//!
//! Layout never touches font files directly. It asks a [`FontMetrics`]
//! implementation for advance widths, and implementations that work from real
//! font data obtain it through a [`FontProvider`].

use folio_style::{FontStyle, FontWeight};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("Font not found: {0}")]
    NotFound(String),

    #[error("Failed to load font '{family}': {message}")]
    LoadFailed { family: String, message: String },

    #[error("Invalid font data for '{0}'")]
    InvalidData(String),
}

/// Shared font file bytes.
pub type SharedFontData = Arc<Vec<u8>>;

/// Everything needed to measure a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }

    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }

    pub fn query(&self) -> FontQuery {
        FontQuery {
            family: self.family.clone(),
            bold: self.is_bold(),
            italic: self.is_italic(),
        }
    }
}

/// A face lookup: family plus the two style axes the engine distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontQuery {
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

impl FontQuery {
    fn key(&self) -> (String, bool, bool) {
        (self.family.to_lowercase(), self.bold, self.italic)
    }
}

/// Measures text. Called synchronously for every word the engine places, so
/// implementations should cache whatever they parse.
pub trait FontMetrics: Send + Sync + Debug {
    /// Advance width of `text` in points.
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f32, FontError>;

    fn space_width(&self, font: &FontSpec) -> Result<f32, FontError> {
        self.measure_width(" ", font)
    }
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f32, FontError> {
        (**self).measure_width(text, font)
    }
}

/// A source of font file data.
pub trait FontProvider: Send + Sync + Debug {
    fn load(&self, query: &FontQuery) -> Result<SharedFontData, FontError>;

    fn has_family(&self, family: &str) -> bool;

    /// Human-readable name, for logging.
    fn name(&self) -> &'static str;
}

/// Font data registered up front. A missing bold or italic face falls back
/// to the regular face of the same family.
#[derive(Debug, Default)]
pub struct InMemoryFontProvider {
    faces: RwLock<HashMap<(String, bool, bool), SharedFontData>>,
}

impl InMemoryFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, query: FontQuery, data: Vec<u8>) -> Result<(), FontError> {
        let mut faces = self.faces.write().map_err(|_| FontError::LoadFailed {
            family: query.family.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        faces.insert(query.key(), Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.faces.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FontProvider for InMemoryFontProvider {
    fn load(&self, query: &FontQuery) -> Result<SharedFontData, FontError> {
        let faces = self.faces.read().map_err(|_| FontError::LoadFailed {
            family: query.family.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        let (family, bold, italic) = query.key();
        faces
            .get(&(family.clone(), bold, italic))
            .or_else(|| faces.get(&(family, false, false)))
            .cloned()
            .ok_or_else(|| FontError::NotFound(query.family.clone()))
    }

    fn has_family(&self, family: &str) -> bool {
        let family = family.to_lowercase();
        self.faces
            .read()
            .map(|f| f.keys().any(|(name, _, _)| *name == family))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryFontProvider"
    }
}
