pub mod document;
pub mod geometry;

pub use document::{Chapter, Document, Scene};
pub use geometry::{Margins, Size, POINTS_PER_INCH};
