use folio_traits::FontError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("Font metrics failed: {0}")]
    Font(#[from] FontError),
    #[error("Layout was cancelled")]
    Cancelled,
}

pub mod cancel;
pub mod config;
pub mod cursor;
pub mod elements;
pub mod engine;
pub mod fonts;
pub mod headers;
pub mod markup;
pub mod output;
pub mod page;
pub mod text;

pub use self::cancel::{CancelToken, NeverCancel};
pub use self::config::ExportOptions;
pub use self::cursor::Cursor;
pub use self::elements::{DrawInstruction, PositionedText};
pub use self::engine::PaginationEngine;
pub use self::fonts::{ShapedFontMetrics, StandardFontMetrics};
pub use self::headers::HeaderFooterPass;
pub use self::markup::{MarkupRun, RunKind};
pub use self::output::{FinishedLayout, LayoutPage, PageClassification, Pagination};
pub use self::page::{margins_for_page, page_dimensions};
pub use self::text::{Line, LineSegment};

use folio_style::ResolvedTemplate;
use folio_traits::FontMetrics;
use folio_types::Document;

/// Runs both passes: pagination, then running headers and page numbers.
pub fn layout_document<C: CancelToken + ?Sized>(
    document: &Document,
    template: &ResolvedTemplate,
    metrics: &dyn FontMetrics,
    options: ExportOptions,
    cancel: &C,
) -> Result<FinishedLayout, LayoutError> {
    let pagination =
        PaginationEngine::new(template, metrics, options).paginate_with_cancel(document, cancel)?;
    HeaderFooterPass::new(template, metrics).apply(pagination, document)
}

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod text_test;
