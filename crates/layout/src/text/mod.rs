pub mod wrapper;

pub use wrapper::{Line, LineSegment, font_for_run, layout_paragraph, split_to_width};
