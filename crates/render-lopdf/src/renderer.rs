use crate::content::render_texts_to_content;
use folio_layout::{FinishedLayout, PositionedText};
use folio_render_core::utils::{standard_font_name, to_win_ansi};
use folio_render_core::{DocumentRenderer, RenderError};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Seek, Write};

/// A buffering PDF renderer. It builds the document's object graph in memory
/// and writes it to the output only in [`DocumentRenderer::finish`].
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<W>,
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    font_map: BTreeMap<&'static str, String>,
    title: String,
    author: String,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    /// A renderer that registers every standard font `layout` draws with.
    pub fn for_layout(layout: &FinishedLayout) -> Self {
        let used: BTreeSet<&'static str> = layout
            .pages()
            .iter()
            .flat_map(|page| page.texts())
            .map(|text| standard_font_name(&text.font))
            .collect();
        Self::new(used)
    }

    pub fn new(fonts: impl IntoIterator<Item = &'static str>) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        let font_map = fonts
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name, format!("F{}", i + 1)))
            .collect();

        Self {
            writer: None,
            document,
            pages_id,
            resources_id,
            font_map,
            title: String::new(),
            author: String::new(),
        }
    }

    /// Title and author for the document information dictionary.
    pub fn with_metadata(mut self, title: &str, author: &str) -> Self {
        self.title = title.to_string();
        self.author = author.to_string();
        self
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut info = dictionary! {
            "Producer" => Object::string_literal("folio"),
        };
        if !self.title.is_empty() {
            info.set("Title", Object::String(to_win_ansi(&self.title), StringFormat::Literal));
        }
        if !self.author.is_empty() {
            info.set("Author", Object::String(to_win_ansi(&self.author), StringFormat::Literal));
        }
        info
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        let mut font_dict = Dictionary::new();
        for (base_font, internal_name) in &self.font_map {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *base_font,
                "Encoding" => "WinAnsiEncoding",
            };
            let font_id = self.document.add_object(single_font_dict);
            font_dict.set(internal_name.as_bytes(), font_id);
        }
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(dictionary! { "Font" => font_dict }));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);
        let info_id = self.document.add_object(self.info_dictionary());
        self.document.trailer.set("Info", info_id);

        self.writer = Some(writer);
        Ok(())
    }

    fn render_page_content(
        &mut self,
        texts: &[PositionedText],
        page_height: f32,
    ) -> Result<ObjectId, RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }
        let content = render_texts_to_content(texts, &self.font_map, page_height)?;
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.document.add_object(stream))
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => self.resources_id,
        };
        Ok(self.document.add_object(page_dict))
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut writer = renderer.writer.take().ok_or_else(|| {
            RenderError::Other("Document was never started with begin_document".into())
        })?;

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
            "Count" => page_ids.len() as i64,
        };
        renderer
            .document
            .objects
            .insert(renderer.pages_id, Object::Dictionary(pages_dict));

        renderer.document.save_to(&mut writer)?;
        writer.flush()?;
        Ok(writer)
    }
}

/// Renders a finished layout to PDF bytes.
pub fn render_pdf(layout: &FinishedLayout, title: &str, author: &str) -> Result<Vec<u8>, RenderError> {
    let mut renderer: Box<LopdfRenderer<Cursor<Vec<u8>>>> =
        Box::new(LopdfRenderer::for_layout(layout).with_metadata(title, author));
    renderer.begin_document(Cursor::new(Vec::new()))?;
    let page_ids = renderer.render_layout(layout)?;
    log::debug!("Wrote {} PDF pages", page_ids.len());
    Ok(renderer.finish(page_ids)?.into_inner())
}
