use crate::error::RenderError;
use folio_layout::{DrawInstruction, FinishedLayout, PositionedText};
use lopdf::ObjectId;
use std::io::{Seek, Write};

/// A trait for page-drawing backends, abstracting the PDF-writing primitives.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    fn render_page_content(
        &mut self,
        texts: &[PositionedText],
        page_height: f32,
    ) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;

    /// Consumes the layout's draw-instruction stream, writing one page object
    /// per `NewPage`. Returns the page ids in order.
    fn render_layout(&mut self, layout: &FinishedLayout) -> Result<Vec<ObjectId>, RenderError> {
        let mut page_ids = Vec::with_capacity(layout.page_count());
        let mut open: Option<(f32, f32)> = None;
        let mut texts = Vec::new();

        for instruction in layout.draw_instructions() {
            match instruction {
                DrawInstruction::NewPage { width, height, .. } => {
                    if let Some((w, h)) = open.replace((width, height)) {
                        page_ids.push(flush_page::<W, Self>(self, &texts, w, h)?);
                        texts.clear();
                    }
                }
                DrawInstruction::Text(text) => texts.push(text),
            }
        }
        if let Some((w, h)) = open {
            page_ids.push(flush_page::<W, Self>(self, &texts, w, h)?);
        }
        Ok(page_ids)
    }
}

fn flush_page<W, R>(
    renderer: &mut R,
    texts: &[PositionedText],
    page_width: f32,
    page_height: f32,
) -> Result<ObjectId, RenderError>
where
    W: Write + Seek + Send,
    R: DocumentRenderer<W> + ?Sized,
{
    let content_id = renderer.render_page_content(texts, page_height)?;
    renderer.write_page_object(vec![content_id], page_width, page_height)
}
