//! Page content streams: one text object per positioned run.

use folio_layout::PositionedText;
use folio_render_core::RenderError;
use folio_render_core::utils::{flip_y, standard_font_name, to_win_ansi};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::BTreeMap;

/// Builds the content stream for one page. `font_map` maps standard font
/// names to the resource names registered on the page.
pub fn render_texts_to_content(
    texts: &[PositionedText],
    font_map: &BTreeMap<&'static str, String>,
    page_height: f32,
) -> Result<Content, RenderError> {
    let mut page_ctx = PageContext::new(page_height, font_map);
    for text in texts {
        page_ctx.draw_text(text)?;
    }
    Ok(page_ctx.finish())
}

struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    font_map: &'a BTreeMap<&'static str, String>,
}

#[derive(Default)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
}

impl<'a> PageContext<'a> {
    fn new(page_height: f32, font_map: &'a BTreeMap<&'static str, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            font_map,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, text: &PositionedText) -> Result<(), RenderError> {
        let standard_name = standard_font_name(&text.font);
        let resource = self
            .font_map
            .get(standard_name)
            .ok_or_else(|| RenderError::Other(format!("Font {} was not registered", standard_name)))?
            .clone();

        // Text state survives ET, so Tf is only needed when it changes.
        if self.state.font_name != resource || self.state.font_size != text.font.size {
            self.push("Tf", vec![Object::Name(resource.as_bytes().to_vec()), text.font.size.into()]);
            self.state.font_name = resource;
            self.state.font_size = text.font.size;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &PositionedText) -> Result<(), RenderError> {
        if text.text.trim().is_empty() {
            return Ok(());
        }
        self.push("BT", vec![]);
        self.set_font(text)?;
        let pdf_y = flip_y(text.y, self.page_height);
        self.push("Td", vec![text.x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }
}
