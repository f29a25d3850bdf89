//! The export pipeline: layout once, then hand the result to a backend.

use crate::error::PipelineError;
use folio_layout::{
    CancelToken, ExportOptions, FinishedLayout, NeverCancel, StandardFontMetrics, layout_document,
};
use folio_render_html::render_html;
use folio_render_lopdf::render_pdf;
use folio_style::ResolvedTemplate;
use folio_traits::FontMetrics;
use folio_types::Document;
use log::info;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Output backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pdf,
    Html,
}

impl OutputFormat {
    /// Infers the format from a file extension (`.pdf`, `.html`, `.htm`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(OutputFormat::Pdf),
            "html" | "htm" => Some(OutputFormat::Html),
            _ => None,
        }
    }
}

/// A builder for creating an [`Exporter`].
#[derive(Default)]
pub struct ExporterBuilder {
    template: Option<ResolvedTemplate>,
    options: ExportOptions,
    metrics: Option<Arc<dyn FontMetrics>>,
}

impl ExporterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_template(mut self, template: ResolvedTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Metrics for [`Exporter::layout`], for callers that draw the layout
    /// with their own backend and fonts. PDF export ignores them: the PDF
    /// backend draws the standard fonts and always measures with those.
    pub fn with_metrics(mut self, metrics: Arc<dyn FontMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(self) -> Exporter {
        Exporter {
            template: self.template.unwrap_or_default(),
            options: self.options,
            metrics: self.metrics,
        }
    }
}

/// Turns documents into finished artifacts. Holds no per-export state, so
/// one exporter can serve any number of documents, concurrently or not.
pub struct Exporter {
    template: ResolvedTemplate,
    options: ExportOptions,
    metrics: Option<Arc<dyn FontMetrics>>,
}

impl Exporter {
    pub fn builder() -> ExporterBuilder {
        ExporterBuilder::new()
    }

    pub fn template(&self) -> &ResolvedTemplate {
        &self.template
    }

    pub fn layout(&self, document: &Document) -> Result<FinishedLayout, PipelineError> {
        self.layout_with_cancel(document, &NeverCancel)
    }

    pub fn layout_with_cancel<C: CancelToken + ?Sized>(
        &self,
        document: &Document,
        cancel: &C,
    ) -> Result<FinishedLayout, PipelineError> {
        match &self.metrics {
            Some(metrics) => self.layout_measured(document, metrics.as_ref(), cancel),
            None => self.layout_measured(document, &StandardFontMetrics, cancel),
        }
    }

    fn layout_measured<C: CancelToken + ?Sized>(
        &self,
        document: &Document,
        metrics: &dyn FontMetrics,
        cancel: &C,
    ) -> Result<FinishedLayout, PipelineError> {
        Ok(layout_document(document, &self.template, metrics, self.options, cancel)?)
    }

    pub fn export_pdf(&self, document: &Document) -> Result<Vec<u8>, PipelineError> {
        self.export_pdf_with_cancel(document, &NeverCancel)
    }

    pub fn export_pdf_with_cancel<C: CancelToken + ?Sized>(
        &self,
        document: &Document,
        cancel: &C,
    ) -> Result<Vec<u8>, PipelineError> {
        let layout = self.layout_measured(document, &StandardFontMetrics, cancel)?;
        let bytes = render_pdf(&layout, &document.title, &document.author)?;
        info!(
            "Exported '{}' to PDF: {} pages, {} bytes",
            document.title,
            layout.page_count(),
            bytes.len()
        );
        Ok(bytes)
    }

    pub fn export_html(&self, document: &Document) -> Result<String, PipelineError> {
        Ok(render_html(document, &self.template, self.options)?)
    }

    pub fn export(&self, document: &Document, format: OutputFormat) -> Result<Vec<u8>, PipelineError> {
        match format {
            OutputFormat::Pdf => self.export_pdf(document),
            OutputFormat::Html => Ok(self.export_html(document)?.into_bytes()),
        }
    }

    /// Renders fully in memory, writes to a temporary file next to `path`
    /// and renames it into place. On any error `path` is left untouched.
    pub fn export_to_file<P: AsRef<Path>>(
        &self,
        document: &Document,
        path: P,
        format: OutputFormat,
    ) -> Result<(), PipelineError> {
        let path = path.as_ref();
        let bytes = self.export(document, format)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| PipelineError::Io(e.error))?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}
