//! [`FontMetrics`](folio_traits::FontMetrics) implementations.
//!
//! [`StandardFontMetrics`] matches what the PDF backend draws and is the
//! default. [`ShapedFontMetrics`] measures real font files.

mod shaped;
mod standard;

pub use shaped::ShapedFontMetrics;
pub use standard::{StandardFontMetrics, win_ansi_byte};
