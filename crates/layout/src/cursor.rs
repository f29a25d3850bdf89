use folio_types::Margins;

/// Where the next piece of content goes. Owned by one pagination run and
/// passed explicitly to every placement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// 1-based page number.
    pub page: usize,
    /// Baseline of the next line, from the top of the page.
    pub y: f32,
    pub margins: Margins,
    pub is_first_line_of_paragraph: bool,
}

impl Cursor {
    pub fn at_page_top(page: usize, margins: Margins) -> Self {
        Self {
            page,
            y: margins.top,
            margins,
            is_first_line_of_paragraph: false,
        }
    }

    /// Whether `height` more points fit above the bottom margin.
    pub fn fits(&self, height: f32, page_height: f32) -> bool {
        self.y + height <= self.margins.bottom_limit(page_height)
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }
}
