//! folio: print layout for long-form fiction.
//!
//! A [`BookFile`] carries the manuscript and its template. An [`Exporter`]
//! paginates the manuscript and renders it as PDF (via `folio-render-lopdf`)
//! or as a print-styled HTML document (via `folio-render-html`).

pub mod config;
pub mod error;
pub mod exporter;

pub use config::BookFile;
pub use error::PipelineError;
pub use exporter::{Exporter, ExporterBuilder, OutputFormat};

pub use folio_layout::{
    CancelToken, DrawInstruction, ExportOptions, FinishedLayout, LayoutPage, NeverCancel,
    PageClassification, PositionedText, ShapedFontMetrics, StandardFontMetrics,
};
pub use folio_style::{ResolvedTemplate, Template};
pub use folio_traits::{FontMetrics, FontSpec};
pub use folio_types::{Chapter, Document, Scene};
