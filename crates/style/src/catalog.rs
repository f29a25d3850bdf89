//! The catalog of book fonts offered by the template settings.
//!
//! Each entry knows the core PDF family it falls back to (the PDF backend only
//! references the 14 standard fonts) and the CSS stack used for HTML output.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontCategory {
    Serif,
    SansSerif,
    Monospace,
}

/// The three standard PDF font families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseFamily {
    #[default]
    Times,
    Helvetica,
    Courier,
}

impl BaseFamily {
    pub fn name(&self) -> &'static str {
        match self {
            BaseFamily::Times => "Times",
            BaseFamily::Helvetica => "Helvetica",
            BaseFamily::Courier => "Courier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogFont {
    pub key: &'static str,
    pub name: &'static str,
    pub category: FontCategory,
    pub fallback: BaseFamily,
    pub web_font: &'static str,
}

const fn serif(key: &'static str, name: &'static str, web_font: &'static str) -> CatalogFont {
    CatalogFont {
        key,
        name,
        category: FontCategory::Serif,
        fallback: BaseFamily::Times,
        web_font,
    }
}

pub static BOOK_FONTS: &[CatalogFont] = &[
    serif("palatino", "Palatino Linotype", "Palatino, \"Palatino Linotype\", \"Book Antiqua\", serif"),
    serif("garamond", "EB Garamond", "\"EB Garamond\", Garamond, \"Times New Roman\", serif"),
    serif("cormorant-garamond", "Cormorant Garamond", "\"Cormorant Garamond\", Garamond, \"Times New Roman\", serif"),
    serif("caslon", "Adobe Caslon Pro", "Caslon, \"Adobe Caslon Pro\", serif"),
    serif("baskerville", "Libre Baskerville", "\"Libre Baskerville\", Baskerville, \"Times New Roman\", serif"),
    serif("minion", "Minion Pro", "Minion, \"Minion Pro\", serif"),
    serif("sabon", "Sabon", "Sabon, serif"),
    serif("bembo", "Bembo", "Bembo, serif"),
    serif("georgia", "Georgia", "Georgia, serif"),
    serif("times", "Times New Roman", "\"Times New Roman\", Times, serif"),
    serif("crimson", "Crimson Text", "\"Crimson Text\", \"Times New Roman\", serif"),
    serif("source-serif", "Source Serif 4", "\"Source Serif Pro\", \"Times New Roman\", serif"),
    CatalogFont {
        key: "gill-sans",
        name: "Gill Sans",
        category: FontCategory::SansSerif,
        fallback: BaseFamily::Helvetica,
        web_font: "\"Gill Sans\", \"Gill Sans MT\", sans-serif",
    },
    CatalogFont {
        key: "helvetica",
        name: "Helvetica",
        category: FontCategory::SansSerif,
        fallback: BaseFamily::Helvetica,
        web_font: "Helvetica, Arial, sans-serif",
    },
    CatalogFont {
        key: "courier",
        name: "Courier New",
        category: FontCategory::Monospace,
        fallback: BaseFamily::Courier,
        web_font: "\"Courier New\", Courier, monospace",
    },
];

/// Names older documents used before the catalog existed.
static LEGACY_NAMES: &[(&str, BaseFamily)] = &[
    ("Times New Roman", BaseFamily::Times),
    ("Georgia", BaseFamily::Times),
    ("Garamond", BaseFamily::Times),
    ("Palatino Linotype", BaseFamily::Times),
    ("Book Antiqua", BaseFamily::Times),
    ("Minion Pro", BaseFamily::Times),
    ("Adobe Caslon Pro", BaseFamily::Times),
    ("Crimson Text", BaseFamily::Times),
    ("Baskerville", BaseFamily::Times),
    ("Sabon", BaseFamily::Times),
    ("Bembo", BaseFamily::Times),
    ("Arial", BaseFamily::Helvetica),
    ("Helvetica", BaseFamily::Helvetica),
    ("Calibri", BaseFamily::Helvetica),
    ("Gill Sans", BaseFamily::Helvetica),
    ("Courier New", BaseFamily::Courier),
    ("Monaco", BaseFamily::Courier),
    ("Consolas", BaseFamily::Courier),
];

fn catalog_key(family: &str) -> String {
    family
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Finds a catalog entry by display name or by derived key.
pub fn lookup(family: &str) -> Option<&'static CatalogFont> {
    let key = catalog_key(family);
    BOOK_FONTS
        .iter()
        .find(|font| font.name == family || font.key == key)
}

/// The standard PDF family used to draw and measure `family`.
pub fn base_family(family: &str) -> BaseFamily {
    if let Some(font) = lookup(family) {
        return font.fallback;
    }
    LEGACY_NAMES
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, base)| *base)
        .unwrap_or_default()
}

/// CSS `font-family` value for `family`.
pub fn css_font_stack(family: &str) -> String {
    if let Some(font) = lookup(family) {
        return font.web_font.to_string();
    }
    let generic = if family.contains("serif") || ["Times New Roman", "Georgia", "Garamond"].contains(&family) {
        "serif"
    } else if family.contains("sans") || ["Arial", "Helvetica"].contains(&family) {
        "sans-serif"
    } else if ["Courier", "Monaco"].contains(&family) {
        "monospace"
    } else {
        "serif"
    };
    format!("\"{}\", {}", family, generic)
}
