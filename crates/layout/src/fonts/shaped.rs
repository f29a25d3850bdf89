//! Metrics from real font files, shaped with rustybuzz.

use folio_traits::{FontError, FontMetrics, FontProvider, FontQuery, FontSpec, SharedFontData};
use rustybuzz::{Feature, UnicodeBuffer};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use ttf_parser::Tag;

#[derive(Debug, Clone)]
struct LoadedFace {
    data: SharedFontData,
    index: u32,
}

fn shaping_features() -> &'static [Feature] {
    static FEATURES: OnceLock<Vec<Feature>> = OnceLock::new();
    FEATURES.get_or_init(|| {
        vec![
            Feature::new(Tag::from_bytes(b"liga"), 1, ..),
            Feature::new(Tag::from_bytes(b"kern"), 1, ..),
        ]
    })
}

/// Resolves families through an injected [`FontProvider`] first and, with the
/// `system-fonts` feature, through a fontdb database second. Loaded faces
/// are cached per instance; nothing is shared between instances.
#[derive(Debug, Default)]
pub struct ShapedFontMetrics {
    provider: Option<Arc<dyn FontProvider>>,
    #[cfg(feature = "system-fonts")]
    db: Option<fontdb::Database>,
    faces: RwLock<HashMap<FontQuery, LoadedFace>>,
}

impl ShapedFontMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_provider(provider: Arc<dyn FontProvider>) -> Self {
        Self {
            provider: Some(provider),
            ..Self::default()
        }
    }

    /// Falls back to fonts installed on the system.
    #[cfg(feature = "system-fonts")]
    pub fn with_system_fonts(mut self) -> Self {
        let db = self.db.get_or_insert_with(fontdb::Database::new);
        db.load_system_fonts();
        log::debug!("Loaded {} system font faces", db.len());
        self
    }

    fn resolve(&self, query: &FontQuery) -> Result<LoadedFace, FontError> {
        if let Ok(faces) = self.faces.read()
            && let Some(face) = faces.get(query)
        {
            return Ok(face.clone());
        }

        let face = self.load(query)?;
        if let Ok(mut faces) = self.faces.write() {
            faces.insert(query.clone(), face.clone());
        }
        Ok(face)
    }

    fn load(&self, query: &FontQuery) -> Result<LoadedFace, FontError> {
        if let Some(provider) = &self.provider {
            match provider.load(query) {
                Ok(data) => {
                    log::debug!("Font '{}' loaded from {}", query.family, provider.name());
                    return Ok(LoadedFace { data, index: 0 });
                }
                Err(e) => log::debug!("{} could not load '{}': {}", provider.name(), query.family, e),
            }
        }

        #[cfg(feature = "system-fonts")]
        if let Some(face) = self.load_from_db(query) {
            return Ok(face);
        }

        Err(FontError::NotFound(query.family.clone()))
    }

    #[cfg(feature = "system-fonts")]
    fn load_from_db(&self, query: &FontQuery) -> Option<LoadedFace> {
        let db = self.db.as_ref()?;
        let families = [fontdb::Family::Name(&query.family)];
        let id = db.query(&fontdb::Query {
            families: &families,
            weight: if query.bold {
                fontdb::Weight::BOLD
            } else {
                fontdb::Weight::NORMAL
            },
            stretch: fontdb::Stretch::Normal,
            style: if query.italic {
                fontdb::Style::Italic
            } else {
                fontdb::Style::Normal
            },
        })?;
        db.with_face_data(id, |data, index| LoadedFace {
            data: Arc::new(data.to_vec()),
            index,
        })
    }
}

impl FontMetrics for ShapedFontMetrics {
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f32, FontError> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let loaded = self.resolve(&font.query())?;
        let face = rustybuzz::Face::from_slice(&loaded.data, loaded.index)
            .ok_or_else(|| FontError::InvalidData(font.family.clone()))?;

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let glyphs = rustybuzz::shape(&face, shaping_features(), buffer);

        let advance: i32 = glyphs.glyph_positions().iter().map(|p| p.x_advance).sum();
        Ok(advance as f32 * font.size / face.units_per_em() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::InMemoryFontProvider;

    #[test]
    fn unknown_family_is_not_found() {
        let metrics = ShapedFontMetrics::from_provider(Arc::new(InMemoryFontProvider::new()));
        let err = metrics.measure_width("x", &FontSpec::new("Nowhere Sans", 12.0));
        assert_eq!(err, Err(FontError::NotFound("Nowhere Sans".to_string())));
    }

    #[test]
    fn garbage_font_data_is_rejected() {
        let provider = InMemoryFontProvider::new();
        provider
            .add(
                FontQuery {
                    family: "Broken".into(),
                    bold: false,
                    italic: false,
                },
                vec![0u8; 16],
            )
            .unwrap();
        let metrics = ShapedFontMetrics::from_provider(Arc::new(provider));
        let err = metrics.measure_width("x", &FontSpec::new("Broken", 12.0));
        assert_eq!(err, Err(FontError::InvalidData("Broken".to_string())));
    }

    #[test]
    fn empty_text_needs_no_font() {
        let metrics = ShapedFontMetrics::new();
        assert_eq!(metrics.measure_width("", &FontSpec::new("Any", 12.0)), Ok(0.0));
    }
}
