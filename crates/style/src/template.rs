//! The book template: the raw, loosely-typed settings stored alongside a book
//! and the normalized [`ResolvedTemplate`] that layout code works from.
//!
//! Every field of [`Template`] is optional. Older books store margins under
//! `inside`/`outside` only, some store `left`/`right`, and enum-like settings
//! are free strings. All of that is settled once in [`Template::resolve`].

use crate::dimension::PageSize;
use crate::font::FontWeight;
use crate::parsers::length_to_points;
use crate::text::TextAlign;
use folio_types::{POINTS_PER_INCH, Size};
use log::warn;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to parse template JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A length in points, written in a template either as a bare number of
/// inches or as a string with a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f32);

impl Length {
    pub fn inches(value: f32) -> Self {
        Length(value * POINTS_PER_INCH)
    }

    pub fn points(&self) -> f32 {
        self.0
    }
}

/// Reads an optional margin. A value that is not a usable length is logged
/// and treated as missing, so the margin falls back to its default.
fn lenient_length<'de, D>(deserializer: D) -> Result<Option<Length>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LengthDef {
        Num(f32),
        Str(String),
        Other(serde_json::Value),
    }

    let length = match Option::<LengthDef>::deserialize(deserializer)? {
        None => None,
        Some(LengthDef::Num(n)) if n.is_finite() && n >= 0.0 => Some(Length::inches(n)),
        Some(LengthDef::Num(n)) => {
            warn!("Ignoring margin {}; using the default", n);
            None
        }
        Some(LengthDef::Str(s)) => match length_to_points(&s) {
            Ok(points) => Some(Length(points)),
            Err(e) => {
                warn!("Ignoring margin '{}' ({}); using the default", s, e);
                None
            }
        },
        Some(LengthDef::Other(value)) => {
            warn!("Ignoring margin {}; using the default", value);
            None
        }
    };
    Ok(length)
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMarginsSpec {
    #[serde(deserialize_with = "lenient_length")]
    pub top: Option<Length>,
    #[serde(deserialize_with = "lenient_length")]
    pub bottom: Option<Length>,
    #[serde(deserialize_with = "lenient_length")]
    pub inside: Option<Length>,
    #[serde(deserialize_with = "lenient_length")]
    pub outside: Option<Length>,
    #[serde(deserialize_with = "lenient_length")]
    pub left: Option<Length>,
    #[serde(deserialize_with = "lenient_length")]
    pub right: Option<Length>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChapterHeaderSpec {
    pub style: Option<String>,
    pub format: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<String>,
    pub alignment: Option<String>,
    pub page_break: Option<bool>,
    pub spacing: Option<f32>,
    pub line_breaks_before: Option<u32>,
    pub start_on_right_page: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RunningHeadersSpec {
    pub enabled: Option<bool>,
    pub alignment: Option<String>,
    pub skip_chapter_pages: Option<bool>,
}

/// Template settings exactly as a book file stores them.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub line_height: Option<f32>,
    pub paragraph_style: Option<String>,
    pub page_size: Option<String>,
    pub text_align: Option<String>,
    pub page_margins: Option<PageMarginsSpec>,
    pub mirror_margins: Option<bool>,
    pub chapter_header: Option<ChapterHeaderSpec>,
    pub running_headers: Option<RunningHeadersSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphStyle {
    #[default]
    Indented,
    Separated,
}

/// Margins in points. `inside`/`outside` are used when margins are mirrored,
/// `left`/`right` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    pub top: f32,
    pub bottom: f32,
    pub inside: f32,
    pub outside: f32,
    pub left: f32,
    pub right: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChapterHeaderStyle {
    #[default]
    Numbered,
    Titled,
    Both,
    /// A format string with `{number}` and `{title}` placeholders.
    Custom(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterHeaderConfig {
    pub style: ChapterHeaderStyle,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub alignment: TextAlign,
    pub page_break: bool,
    pub spacing: f32,
    pub line_breaks_before: u32,
    pub start_on_right_page: bool,
}

impl ChapterHeaderConfig {
    /// The header text for the 1-based chapter `number`.
    pub fn heading_text(&self, number: usize, title: &str) -> String {
        match &self.style {
            ChapterHeaderStyle::Numbered => format!("Chapter {}", number),
            ChapterHeaderStyle::Titled => title.to_string(),
            ChapterHeaderStyle::Both => format!("Chapter {}: {}", number, title),
            ChapterHeaderStyle::Custom(format) => format
                .replacen("{number}", &number.to_string(), 1)
                .replacen("{title}", title, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunningHeaderAlignment {
    /// Flush to the outer edge: left on even pages, right on odd pages.
    #[default]
    Outside,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningHeadersConfig {
    pub enabled: bool,
    pub alignment: RunningHeaderAlignment,
    pub skip_chapter_pages: bool,
}

/// A fully defaulted template. Layout and rendering only ever see this.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTemplate {
    pub font_family: String,
    pub font_size: f32,
    pub line_height: f32,
    pub paragraph_style: ParagraphStyle,
    pub page_size: PageSize,
    pub text_align: TextAlign,
    pub margins: PageMargins,
    pub mirror_margins: bool,
    pub chapter_header: ChapterHeaderConfig,
    pub running_headers: RunningHeadersConfig,
}

impl ResolvedTemplate {
    /// Distance between consecutive body baselines.
    pub fn line_advance(&self) -> f32 {
        self.font_size * self.line_height
    }

    pub fn page_dimensions(&self) -> Size {
        self.page_size.dimensions_pt()
    }
}

impl Default for ResolvedTemplate {
    fn default() -> Self {
        Template::default().resolve()
    }
}

const DEFAULT_FONT_FAMILY: &str = "Times New Roman";
const DEFAULT_FONT_SIZE: f32 = 12.0;
const DEFAULT_LINE_HEIGHT: f32 = 1.6;
const DEFAULT_HEADER_FORMAT: &str = "Chapter {number}";

fn positive_or(value: Option<f32>, default: f32, property: &str) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            warn!("Ignoring {} = {}; using {}", property, v, default);
            default
        }
        None => default,
    }
}

fn length_or(value: Option<Length>, default_in: f32) -> f32 {
    value
        .map(|l| l.points())
        .unwrap_or(default_in * POINTS_PER_INCH)
}

impl Template {
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies every default and legacy fallback. Unknown values are logged
    /// and replaced; resolution never fails.
    pub fn resolve(&self) -> ResolvedTemplate {
        let page_size = match self.page_size.as_deref() {
            None => PageSize::default(),
            Some(key) => PageSize::from_key(key).unwrap_or_else(|| {
                warn!("Unknown page size '{}'; using letter", key);
                PageSize::Letter
            }),
        };

        let paragraph_style = match self.paragraph_style.as_deref() {
            None | Some("indented") => ParagraphStyle::Indented,
            Some("separated") => ParagraphStyle::Separated,
            Some(other) => {
                warn!("Unknown paragraph style '{}'; using indented", other);
                ParagraphStyle::Indented
            }
        };

        // Body text is either justified or flush left.
        let text_align = match self.text_align.as_deref() {
            None => TextAlign::Justify,
            Some(value) => match TextAlign::parse(value) {
                Some(TextAlign::Justify) => TextAlign::Justify,
                Some(_) => TextAlign::Left,
                None => {
                    warn!("Unknown text alignment '{}'; using left", value);
                    TextAlign::Left
                }
            },
        };

        let font_family = self
            .font_family
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_string();

        ResolvedTemplate {
            font_family,
            font_size: positive_or(self.font_size, DEFAULT_FONT_SIZE, "fontSize"),
            line_height: positive_or(self.line_height, DEFAULT_LINE_HEIGHT, "lineHeight"),
            paragraph_style,
            page_size,
            text_align,
            margins: resolve_margins(self.page_margins.as_ref()),
            mirror_margins: self.mirror_margins.unwrap_or(false),
            chapter_header: resolve_chapter_header(self.chapter_header.as_ref()),
            running_headers: resolve_running_headers(self.running_headers.as_ref()),
        }
    }
}

fn resolve_margins(spec: Option<&PageMarginsSpec>) -> PageMargins {
    let spec = spec.cloned().unwrap_or_default();
    let inside = length_or(spec.inside, 1.25);
    let outside = length_or(spec.outside, 1.0);
    PageMargins {
        top: length_or(spec.top, 1.0),
        bottom: length_or(spec.bottom, 1.0),
        inside,
        outside,
        left: spec.left.map(|l| l.points()).unwrap_or(inside),
        right: spec.right.map(|l| l.points()).unwrap_or(outside),
    }
}

fn resolve_chapter_header(spec: Option<&ChapterHeaderSpec>) -> ChapterHeaderConfig {
    let spec = spec.cloned().unwrap_or_default();

    let style = match spec.style.as_deref() {
        None | Some("numbered") => ChapterHeaderStyle::Numbered,
        Some("titled") => ChapterHeaderStyle::Titled,
        Some("both") => ChapterHeaderStyle::Both,
        Some("custom") => ChapterHeaderStyle::Custom(
            spec.format
                .clone()
                .unwrap_or_else(|| DEFAULT_HEADER_FORMAT.to_string()),
        ),
        Some(other) => {
            warn!("Unknown chapter header style '{}'; using numbered", other);
            ChapterHeaderStyle::Numbered
        }
    };

    let font_weight = match spec.font_weight.as_deref() {
        None => FontWeight::Bold,
        Some(value) => FontWeight::parse(value).unwrap_or_else(|e| {
            warn!("{}; using bold", e);
            FontWeight::Bold
        }),
    };

    let alignment = match spec.alignment.as_deref() {
        None => TextAlign::Center,
        Some(value) => TextAlign::parse(value).unwrap_or_else(|| {
            warn!("Unknown chapter header alignment '{}'; using center", value);
            TextAlign::Center
        }),
    };

    ChapterHeaderConfig {
        style,
        font_size: positive_or(spec.font_size, 18.0, "chapterHeader.fontSize"),
        font_weight,
        alignment,
        page_break: spec.page_break.unwrap_or(true),
        spacing: spec.spacing.filter(|s| s.is_finite()).unwrap_or(2.0),
        line_breaks_before: spec.line_breaks_before.unwrap_or(3),
        start_on_right_page: spec.start_on_right_page.unwrap_or(false),
    }
}

fn resolve_running_headers(spec: Option<&RunningHeadersSpec>) -> RunningHeadersConfig {
    let spec = spec.cloned().unwrap_or_default();
    let alignment = match spec.alignment.as_deref() {
        None | Some("outside") => RunningHeaderAlignment::Outside,
        Some("center") => RunningHeaderAlignment::Center,
        Some(other) => {
            warn!("Unknown running header alignment '{}'; using outside", other);
            RunningHeaderAlignment::Outside
        }
    };
    RunningHeadersConfig {
        enabled: spec.enabled.unwrap_or(false),
        alignment,
        skip_chapter_pages: spec.skip_chapter_pages.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_template_resolves_to_book_defaults() {
        let t = ResolvedTemplate::default();
        assert_eq!(t.font_family, "Times New Roman");
        assert_eq!(t.font_size, 12.0);
        assert_eq!(t.line_height, 1.6);
        assert_eq!(t.paragraph_style, ParagraphStyle::Indented);
        assert_eq!(t.page_size, PageSize::Letter);
        assert_eq!(t.text_align, TextAlign::Justify);
        assert_eq!(t.margins.top, 72.0);
        assert_eq!(t.margins.inside, 90.0);
        assert_eq!(t.margins.left, 90.0);
        assert_eq!(t.margins.right, 72.0);
        assert!(!t.mirror_margins);
        assert_eq!(t.chapter_header.style, ChapterHeaderStyle::Numbered);
        assert_eq!(t.chapter_header.font_size, 18.0);
        assert_eq!(t.chapter_header.font_weight, FontWeight::Bold);
        assert_eq!(t.chapter_header.alignment, TextAlign::Center);
        assert!(t.chapter_header.page_break);
        assert_eq!(t.chapter_header.line_breaks_before, 3);
        assert!(!t.running_headers.enabled);
        assert!(t.running_headers.skip_chapter_pages);
        assert!((t.line_advance() - 19.2).abs() < 1e-4);
    }

    #[test]
    fn parses_book_file_template() {
        let json = r#"{
            "fontFamily": "EB Garamond",
            "fontSize": 11,
            "lineHeight": 1.5,
            "paragraphStyle": "separated",
            "pageSize": "trade",
            "textAlign": "left",
            "pageMargins": { "top": 0.75, "bottom": "54pt", "inside": 1, "outside": "0.5in" },
            "mirrorMargins": true,
            "chapterHeader": { "style": "custom", "format": "Part {number}: {title}", "fontWeight": "normal", "alignment": "left" },
            "runningHeaders": { "enabled": true, "alignment": "center", "skipChapterPages": false }
        }"#;
        let t = Template::from_json(json).unwrap().resolve();
        assert_eq!(t.font_family, "EB Garamond");
        assert_eq!(t.paragraph_style, ParagraphStyle::Separated);
        assert_eq!(t.page_size, PageSize::Trade);
        assert_eq!(t.text_align, TextAlign::Left);
        assert_eq!(t.margins.top, 54.0);
        assert_eq!(t.margins.bottom, 54.0);
        assert_eq!(t.margins.inside, 72.0);
        assert_eq!(t.margins.outside, 36.0);
        assert!(t.mirror_margins);
        assert_eq!(t.chapter_header.heading_text(3, "Storm"), "Part 3: Storm");
        assert_eq!(t.chapter_header.font_weight, FontWeight::Regular);
        assert_eq!(t.running_headers.alignment, RunningHeaderAlignment::Center);
        assert!(!t.running_headers.skip_chapter_pages);
    }

    #[test]
    fn unknown_values_fall_back() {
        let json = r#"{ "pageSize": "tabloid", "chapterHeader": { "style": "roman" }, "fontSize": -4 }"#;
        let t = Template::from_json(json).unwrap().resolve();
        assert_eq!(t.page_size, PageSize::Letter);
        assert_eq!(t.chapter_header.style, ChapterHeaderStyle::Numbered);
        assert_eq!(t.font_size, 12.0);
    }

    #[test]
    fn uniform_margins_fall_back_to_inside_outside() {
        let json = r#"{ "pageMargins": { "inside": 2, "outside": 0.5, "left": 0 } }"#;
        let t = Template::from_json(json).unwrap().resolve();
        assert_eq!(t.margins.left, 0.0);
        assert_eq!(t.margins.right, 36.0);
    }

    #[test]
    fn heading_text_by_style() {
        let mut header = ResolvedTemplate::default().chapter_header;
        assert_eq!(header.heading_text(1, "Intro"), "Chapter 1");
        header.style = ChapterHeaderStyle::Titled;
        assert_eq!(header.heading_text(1, "Intro"), "Intro");
        header.style = ChapterHeaderStyle::Both;
        assert_eq!(header.heading_text(2, "Intro"), "Chapter 2: Intro");
        header.style = ChapterHeaderStyle::Custom("{number} / {number}".into());
        assert_eq!(header.heading_text(4, ""), "4 / {number}");
    }

    #[test]
    fn unusable_margins_fall_back_to_defaults() {
        let json = r#"{ "pageMargins": { "top": "wide", "bottom": -1, "inside": true, "outside": "0.5in" } }"#;
        let t = Template::from_json(json).unwrap().resolve();
        assert_eq!(t.margins.top, 72.0);
        assert_eq!(t.margins.bottom, 72.0);
        assert_eq!(t.margins.inside, 90.0);
        assert_eq!(t.margins.outside, 36.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Template::from_json(r#"{ "pageMargins": "#);
        assert!(matches!(err, Err(TemplateError::Json(_))));
    }
}
