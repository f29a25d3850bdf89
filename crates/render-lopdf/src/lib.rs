//! PDF backend using lopdf.
//!
//! Pages reference only the standard Type1 fonts, so no font data is
//! embedded. The whole document is assembled in memory and written in one go.

mod content;
mod renderer;

pub use content::render_texts_to_content;
pub use renderer::{LopdfRenderer, render_pdf};
