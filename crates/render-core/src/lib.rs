//! Core rendering abstractions for folio's output backends.
//!
//! This crate provides:
//! - `DocumentRenderer` for backends that draw a finished page layout
//! - `RenderError` for rendering operations
//! - Shared helpers for standard font names, text encoding and coordinates

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
