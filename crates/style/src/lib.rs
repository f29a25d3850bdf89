pub mod catalog;
pub mod dimension;
pub mod font;
pub mod parsers;
pub mod template;
pub mod text;

pub use catalog::{BaseFamily, CatalogFont, FontCategory};
pub use dimension::PageSize;
pub use font::{FontStyle, FontWeight};
pub use parsers::StyleParseError;
pub use template::{
    ChapterHeaderConfig, ChapterHeaderSpec, ChapterHeaderStyle, Length, PageMargins,
    PageMarginsSpec, ParagraphStyle, ResolvedTemplate, RunningHeaderAlignment,
    RunningHeadersConfig, RunningHeadersSpec, Template, TemplateError,
};
pub use text::TextAlign;
