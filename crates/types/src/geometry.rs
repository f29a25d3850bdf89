/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Builds a size from inch measurements.
    pub fn from_inches(width: f32, height: f32) -> Self {
        Self {
            width: width * POINTS_PER_INCH,
            height: height * POINTS_PER_INCH,
        }
    }
}

/// Resolved page margins for one concrete page, in points.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Width left for content on a page of `page_width`.
    pub fn content_width(&self, page_width: f32) -> f32 {
        (page_width - self.left - self.right).max(0.0)
    }

    /// The y coordinate (top-origin) below which content must not flow.
    pub fn bottom_limit(&self, page_height: f32) -> f32 {
        page_height - self.bottom
    }
}
