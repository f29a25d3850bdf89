//! Output types from the layout engine.
//!
//! Pagination produces a [`Pagination`]: pages with their content layer plus
//! the page classification. The classification is only readable by the
//! header/footer pass, which turns a `Pagination` into a [`FinishedLayout`].

use crate::elements::{DrawInstruction, PositionedText};
use folio_types::{Margins, Size};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPage {
    /// 1-based page number.
    pub number: usize,
    pub size: Size,
    pub margins: Margins,
    /// Body text placed by pagination.
    pub content: Vec<PositionedText>,
    /// Running header and page number.
    pub chrome: Vec<PositionedText>,
}

impl LayoutPage {
    pub fn new(number: usize, size: Size, margins: Margins) -> Self {
        Self {
            number,
            size,
            margins,
            content: Vec::new(),
            chrome: Vec::new(),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &PositionedText> {
        self.content.iter().chain(self.chrome.iter())
    }
}

/// Page numbers that open a chapter and pages deliberately left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageClassification {
    chapter_opening_pages: BTreeSet<usize>,
    blank_pages: BTreeSet<usize>,
}

impl PageClassification {
    pub fn is_chapter_opening(&self, page: usize) -> bool {
        self.chapter_opening_pages.contains(&page)
    }

    pub fn is_blank(&self, page: usize) -> bool {
        self.blank_pages.contains(&page)
    }

    pub fn chapter_opening_pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.chapter_opening_pages.iter().copied()
    }

    pub fn blank_pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.blank_pages.iter().copied()
    }

    pub(crate) fn mark_chapter_opening(&mut self, page: usize) {
        self.chapter_opening_pages.insert(page);
    }

    pub(crate) fn mark_blank(&mut self, page: usize) {
        self.blank_pages.insert(page);
    }

    pub(crate) fn retain_blank(&mut self, keep: impl FnMut(&usize) -> bool) {
        self.blank_pages.retain(keep);
    }
}

/// The result of the pagination pass.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub(crate) pages: Vec<LayoutPage>,
    pub(crate) classification: PageClassification,
    pub(crate) has_title_page: bool,
}

impl Pagination {
    pub fn pages(&self) -> &[LayoutPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn has_title_page(&self) -> bool {
        self.has_title_page
    }
}

/// Pages with both layers filled in, ready for a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedLayout {
    pages: Vec<LayoutPage>,
    classification: PageClassification,
}

impl FinishedLayout {
    pub(crate) fn new(pages: Vec<LayoutPage>, classification: PageClassification) -> Self {
        Self {
            pages,
            classification,
        }
    }

    pub fn pages(&self) -> &[LayoutPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn classification(&self) -> &PageClassification {
        &self.classification
    }

    /// Flattens the pages into the ordered stream a backend draws from:
    /// each page's `NewPage`, its content, then its chrome.
    pub fn draw_instructions(&self) -> Vec<DrawInstruction> {
        let mut instructions = Vec::new();
        for page in &self.pages {
            instructions.push(DrawInstruction::NewPage {
                number: page.number,
                width: page.size.width,
                height: page.size.height,
            });
            instructions.extend(page.texts().cloned().map(DrawInstruction::Text));
        }
        instructions
    }

    /// All text of the content layer in page order, one entry per drawn run.
    pub fn content_text(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.content.iter().map(|t| t.text.as_str()))
            .collect()
    }
}
