//! The pagination pass: walks chapters, scenes and paragraphs and places them
//! onto pages, recording which pages open chapters and which are left blank.

use crate::LayoutError;
use crate::cancel::{CancelToken, NeverCancel};
use crate::config::ExportOptions;
use crate::cursor::Cursor;
use crate::elements::PositionedText;
use crate::markup;
use crate::output::{LayoutPage, PageClassification, Pagination};
use crate::page::{is_left_hand, margins_for_page};
use crate::text::{font_for_run, layout_paragraph, split_to_width};
use folio_style::{ParagraphStyle, ResolvedTemplate};
use folio_traits::{FontMetrics, FontSpec};
use folio_types::{Chapter, Document, Scene, Size};
use log::debug;

const TITLE_FONT_SIZE: f32 = 24.0;
const AUTHOR_FONT_SIZE: f32 = 18.0;
const TITLE_OFFSET_ABOVE_CENTER: f32 = 100.0;
const AUTHOR_GAP: f32 = 48.0;
const SCENE_BREAK: &str = "* * *";

/// First-line indent for a paragraph in a column of `usable_width`.
pub fn paragraph_indent(usable_width: f32) -> f32 {
    (usable_width * 0.03).clamp(24.0, 48.0)
}

/// Pages placed so far plus what the header pass will need to know about them.
#[derive(Debug, Default)]
struct Flow {
    pages: Vec<LayoutPage>,
    classification: PageClassification,
    paragraphs_placed: usize,
}

impl Flow {
    fn current_is_empty(&self) -> bool {
        self.pages.last().is_none_or(|p| !p.has_content())
    }

    fn push(&mut self, text: PositionedText) {
        if let Some(page) = self.pages.last_mut() {
            page.content.push(text);
        }
    }
}

pub struct PaginationEngine<'a> {
    template: &'a ResolvedTemplate,
    metrics: &'a dyn FontMetrics,
    options: ExportOptions,
    page_size: Size,
    body_font: FontSpec,
}

impl<'a> PaginationEngine<'a> {
    pub fn new(
        template: &'a ResolvedTemplate,
        metrics: &'a dyn FontMetrics,
        options: ExportOptions,
    ) -> Self {
        Self {
            template,
            metrics,
            options,
            page_size: template.page_dimensions(),
            body_font: FontSpec::new(template.font_family.clone(), template.font_size),
        }
    }

    pub fn paginate(&self, document: &Document) -> Result<Pagination, LayoutError> {
        self.paginate_with_cancel(document, &NeverCancel)
    }

    pub fn paginate_with_cancel<C: CancelToken + ?Sized>(
        &self,
        document: &Document,
        cancel: &C,
    ) -> Result<Pagination, LayoutError> {
        let mut flow = Flow::default();
        let mut cursor = self.open_page(&mut flow);
        let has_title_page = document.has_title_page();

        if has_title_page {
            self.place_title_page(document, &mut cursor, &mut flow)?;
            cursor = self.open_page(&mut flow);
            if self.template.chapter_header.page_break {
                // Stays blank unless the first chapter header lands here.
                flow.classification.mark_blank(cursor.page);
            }
        }

        for (index, chapter) in document.chapters.iter().enumerate() {
            if cancel.is_cancelled() {
                debug!("Pagination cancelled before chapter {}", index + 1);
                return Err(LayoutError::Cancelled);
            }
            self.place_chapter_header(index, chapter, has_title_page, &mut cursor, &mut flow)?;

            for (scene_index, scene) in chapter.scenes.iter().enumerate() {
                self.place_scene(scene, &mut cursor, &mut flow)?;
                if self.options.include_scene_breaks && scene_index + 1 < chapter.scenes.len() {
                    self.place_scene_break(&mut cursor, &mut flow)?;
                }
            }
        }

        Ok(self.finish(flow, has_title_page))
    }

    fn line_height(&self) -> f32 {
        self.template.line_advance()
    }

    fn content_width(&self, cursor: &Cursor) -> f32 {
        cursor.margins.content_width(self.page_size.width)
    }

    /// Appends a page and returns a cursor at its top.
    fn open_page(&self, flow: &mut Flow) -> Cursor {
        let number = flow.pages.len() + 1;
        let margins = margins_for_page(self.template, number);
        debug!(
            "Page {}: left margin {:.1}pt, right margin {:.1}pt",
            number, margins.left, margins.right
        );
        flow.pages.push(LayoutPage::new(number, self.page_size, margins));
        Cursor::at_page_top(number, margins)
    }

    /// Moves to the top of a fresh page. On a page that holds nothing yet
    /// this only rewinds the cursor.
    fn break_page(&self, cursor: &mut Cursor, flow: &mut Flow) {
        if flow.current_is_empty() {
            cursor.y = cursor.margins.top;
            return;
        }
        *cursor = self.open_page(flow);
    }

    fn ensure_room(&self, height: f32, cursor: &mut Cursor, flow: &mut Flow) {
        if !cursor.fits(height, self.page_size.height) {
            self.break_page(cursor, flow);
        }
    }

    fn place(&self, flow: &mut Flow, x: f32, y: f32, text: &str, font: &FontSpec) -> Result<f32, LayoutError> {
        let width = self.metrics.measure_width(text, font)?;
        if !text.is_empty() {
            flow.push(PositionedText {
                x,
                y,
                text: text.to_string(),
                font: font.clone(),
                width,
            });
        }
        Ok(width)
    }

    fn place_centered(&self, flow: &mut Flow, y: f32, text: &str, font: &FontSpec) -> Result<(), LayoutError> {
        let width = self.metrics.measure_width(text, font)?;
        let x = (self.page_size.width - width) / 2.0;
        self.place(flow, x, y, text, font)?;
        Ok(())
    }

    fn place_title_page(&self, document: &Document, cursor: &mut Cursor, flow: &mut Flow) -> Result<(), LayoutError> {
        cursor.y = self.page_size.height / 2.0 - TITLE_OFFSET_ABOVE_CENTER;

        if !document.title.is_empty() {
            let font = self.body_font.clone().with_size(TITLE_FONT_SIZE).bold();
            self.place_centered(flow, cursor.y, &document.title, &font)?;
            cursor.advance(AUTHOR_GAP);
        }
        if !document.author.is_empty() {
            let font = self.body_font.clone().with_size(AUTHOR_FONT_SIZE);
            self.place_centered(flow, cursor.y, &format!("by {}", document.author), &font)?;
        }
        Ok(())
    }

    fn place_chapter_header(
        &self,
        index: usize,
        chapter: &Chapter,
        has_title_page: bool,
        cursor: &mut Cursor,
        flow: &mut Flow,
    ) -> Result<(), LayoutError> {
        let header = &self.template.chapter_header;
        let room = header.font_size * 2.0;

        let wants_break =
            header.page_break && (index > 0 || !has_title_page || header.start_on_right_page);
        if wants_break {
            self.break_page(cursor, flow);
            if header.start_on_right_page && is_left_hand(cursor.page) {
                debug!(
                    "Page {} left blank so chapter {} opens on a right-hand page",
                    cursor.page,
                    index + 1
                );
                flow.classification.mark_blank(cursor.page);
                *cursor = self.open_page(flow);
            }
        }

        if header.page_break {
            for _ in 0..header.line_breaks_before {
                cursor.advance(self.line_height());
                if !cursor.fits(room, self.page_size.height) {
                    self.break_page(cursor, flow);
                    break;
                }
            }
        }
        self.ensure_room(room, cursor, flow);

        let font = self
            .body_font
            .clone()
            .with_size(header.font_size)
            .with_weight(header.font_weight);
        let width = self.content_width(cursor);
        let text = header.heading_text(index + 1, &chapter.title);
        flow.classification.mark_chapter_opening(cursor.page);
        debug!("Chapter {} opens on page {}", index + 1, cursor.page);

        for line in split_to_width(&text, &font, width, self.metrics)? {
            let line_width = self.metrics.measure_width(&line, &font)?;
            let x = cursor.margins.left + header.alignment.offset(width, line_width);
            self.place(flow, x, cursor.y, &line, &font)?;
            cursor.advance(header.font_size * 1.2);
        }
        cursor.advance(header.font_size * (header.spacing - 1.2));
        Ok(())
    }

    fn place_scene(&self, scene: &Scene, cursor: &mut Cursor, flow: &mut Flow) -> Result<(), LayoutError> {
        let line_height = self.line_height();

        if self.options.include_scene_titles && !scene.title.trim().is_empty() {
            self.ensure_room(line_height * 2.0, cursor, flow);
            let font = self
                .body_font
                .clone()
                .with_size(self.template.font_size + 2.0)
                .bold();
            for line in split_to_width(scene.title.trim(), &font, self.content_width(cursor), self.metrics)? {
                self.place(flow, cursor.margins.left, cursor.y, &line, &font)?;
                cursor.advance(line_height * 1.2);
            }
            cursor.advance(line_height * 0.5);
        }

        for paragraph in scene.paragraphs() {
            self.place_paragraph(paragraph, cursor, flow)?;
        }
        Ok(())
    }

    fn place_paragraph(&self, paragraph: &str, cursor: &mut Cursor, flow: &mut Flow) -> Result<(), LayoutError> {
        let line_height = self.line_height();
        let width = self.content_width(cursor);
        let indent = match self.template.paragraph_style {
            ParagraphStyle::Indented if flow.paragraphs_placed > 0 => paragraph_indent(width),
            _ => 0.0,
        };

        let runs = markup::parse(paragraph);
        let lines = layout_paragraph(
            &runs,
            self.metrics,
            &self.body_font,
            width,
            self.template.text_align,
            indent,
        )?;

        cursor.is_first_line_of_paragraph = true;
        for line in &lines {
            let advance = line_height * line.scale;
            self.ensure_room(advance, cursor, flow);
            for segment in &line.segments {
                flow.push(PositionedText {
                    x: cursor.margins.left + segment.x,
                    y: cursor.y,
                    text: segment.text.clone(),
                    font: font_for_run(segment.kind, &self.body_font),
                    width: segment.width,
                });
            }
            cursor.advance(advance);
            cursor.is_first_line_of_paragraph = false;
            if line.is_heading && line.ends_block {
                cursor.advance(line_height * 0.5);
            }
        }

        if self.template.paragraph_style == ParagraphStyle::Separated {
            cursor.advance(line_height);
        }
        flow.paragraphs_placed += 1;
        Ok(())
    }

    fn place_scene_break(&self, cursor: &mut Cursor, flow: &mut Flow) -> Result<(), LayoutError> {
        let line_height = self.line_height();
        cursor.advance(line_height);
        self.ensure_room(line_height, cursor, flow);
        self.place_centered(flow, cursor.y, SCENE_BREAK, &self.body_font)?;
        cursor.advance(line_height * 1.5);
        Ok(())
    }

    /// Settles the classification: a page that received content is not
    /// blank, and a trailing page nothing was placed on is dropped.
    fn finish(&self, mut flow: Flow, has_title_page: bool) -> Pagination {
        if flow.pages.len() > 1
            && let Some(last) = flow.pages.last()
            && !last.has_content()
            && !flow.classification.is_chapter_opening(last.number)
        {
            flow.pages.pop();
        }

        let page_count = flow.pages.len();
        let pages = &flow.pages;
        flow.classification.retain_blank(|&n| {
            n <= page_count && pages.get(n - 1).is_some_and(|p| !p.has_content())
        });

        debug!(
            "Paginated {} pages ({} blank)",
            page_count,
            flow.classification.blank_pages().count()
        );
        Pagination {
            pages: flow.pages,
            classification: flow.classification,
            has_title_page,
        }
    }
}
