pub mod fixtures;
pub mod pdf_assertions;

use folio::{BookFile, ExportOptions, Exporter, PipelineError};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single 1-based page.
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

fn load_book(book: &Value) -> Result<BookFile, Box<dyn std::error::Error>> {
    Ok(BookFile::from_json(&serde_json::to_string(book)?)?)
}

fn exporter_for(book: &BookFile, options: ExportOptions) -> Exporter {
    Exporter::builder()
        .with_template(book.template.resolve())
        .with_options(options)
        .build()
}

/// Generate a PDF from a book JSON value with default export options
pub fn generate_pdf(book: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with_options(book, ExportOptions::default())
}

pub fn generate_pdf_with_options(
    book: &Value,
    options: ExportOptions,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let book = load_book(book)?;
    let bytes = exporter_for(&book, options).export_pdf(&book.document)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Generate the HTML export of a book JSON value
#[allow(dead_code)]
pub fn generate_html(book: &Value, options: ExportOptions) -> Result<String, Box<dyn std::error::Error>> {
    let book = load_book(book)?;
    Ok(exporter_for(&book, options).export_html(&book.document)?)
}

/// Run only the layout pass, for tests that look at coordinates
#[allow(dead_code)]
pub fn layout(book: &Value) -> Result<folio::FinishedLayout, PipelineError> {
    let book = BookFile::from_json(&book.to_string())?;
    exporter_for(&book, ExportOptions::default()).layout(&book.document)
}
