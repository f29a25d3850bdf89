//! The second pass: running headers and page numbers.
//!
//! Runs only once pagination has finished, because whether a page opens a
//! chapter or was left blank is settled at the very end of pagination.

use crate::LayoutError;
use crate::elements::PositionedText;
use crate::output::{FinishedLayout, LayoutPage, PageClassification, Pagination};
use crate::page::is_left_hand;
use folio_style::{ResolvedTemplate, RunningHeaderAlignment};
use folio_traits::{FontMetrics, FontSpec};
use folio_types::Document;

const PAGE_NUMBER_OFFSET: f32 = 18.0;

pub fn running_header_font_size(body_size: f32) -> f32 {
    (body_size * 0.75).clamp(8.0, 12.0)
}

pub fn page_number_font_size(body_size: f32) -> f32 {
    (body_size * 0.7).clamp(8.0, 11.0)
}

pub struct HeaderFooterPass<'a> {
    template: &'a ResolvedTemplate,
    metrics: &'a dyn FontMetrics,
}

impl<'a> HeaderFooterPass<'a> {
    pub fn new(template: &'a ResolvedTemplate, metrics: &'a dyn FontMetrics) -> Self {
        Self { template, metrics }
    }

    pub fn apply(&self, pagination: Pagination, document: &Document) -> Result<FinishedLayout, LayoutError> {
        let Pagination {
            mut pages,
            classification,
            has_title_page,
        } = pagination;

        for page in pages.iter_mut() {
            let is_title_page = has_title_page && page.number == 1;
            if self.shows_running_header(page.number, is_title_page, &classification) {
                let text = if is_left_hand(page.number) {
                    &document.author
                } else {
                    &document.title
                };
                if !text.is_empty() {
                    self.stamp_running_header(page, text)?;
                }
            }
            if !is_title_page {
                self.stamp_page_number(page)?;
            }
        }

        Ok(FinishedLayout::new(pages, classification))
    }

    fn shows_running_header(&self, page: usize, is_title_page: bool, classification: &PageClassification) -> bool {
        let config = &self.template.running_headers;
        config.enabled
            && !is_title_page
            && !(config.skip_chapter_pages && classification.is_chapter_opening(page))
            && !classification.is_blank(page)
    }

    fn chrome_font(&self, size: f32) -> FontSpec {
        FontSpec::new(self.template.font_family.clone(), size)
    }

    fn stamp_running_header(&self, page: &mut LayoutPage, text: &str) -> Result<(), LayoutError> {
        let font = self.chrome_font(running_header_font_size(self.template.font_size));
        let width = self.metrics.measure_width(text, &font)?;
        let content_width = page.margins.content_width(page.size.width);

        let x = match self.template.running_headers.alignment {
            RunningHeaderAlignment::Center => page.margins.left + (content_width - width) / 2.0,
            RunningHeaderAlignment::Outside if is_left_hand(page.number) => page.margins.left,
            RunningHeaderAlignment::Outside => page.margins.left + content_width - width,
        };
        page.chrome.push(PositionedText {
            x,
            y: page.margins.top / 2.0,
            text: text.to_string(),
            font,
            width,
        });
        Ok(())
    }

    fn stamp_page_number(&self, page: &mut LayoutPage) -> Result<(), LayoutError> {
        let font = self.chrome_font(page_number_font_size(self.template.font_size));
        let text = page.number.to_string();
        let width = self.metrics.measure_width(&text, &font)?;
        let content_width = page.margins.content_width(page.size.width);

        page.chrome.push(PositionedText {
            x: page.margins.left + (content_width - width) / 2.0,
            y: page.size.height - page.margins.bottom + PAGE_NUMBER_OFFSET,
            text,
            font,
            width,
        });
        Ok(())
    }
}
