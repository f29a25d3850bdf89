use folio_layout::LayoutError;
use folio_render_core::RenderError;
use thiserror::Error;

/// Everything that can make an export fail.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Book file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
