//! HTML backend: a single self-contained HTML document with the template
//! mirrored as CSS. Pagination is left to the browser's print engine.

mod css;

pub use css::stylesheet;

use folio_layout::markup::{self, RunKind};
use folio_layout::ExportOptions;
use folio_render_core::RenderError;
use folio_style::{ParagraphStyle, ResolvedTemplate};
use folio_types::{Chapter, Document};
use quick_xml::escape::escape;
use std::fmt::{self, Write};

/// Renders `document` to an HTML string.
pub fn render_html(
    document: &Document,
    template: &ResolvedTemplate,
    options: ExportOptions,
) -> Result<String, RenderError> {
    let mut writer = HtmlWriter {
        out: String::new(),
        template,
        options,
        paragraphs_written: 0,
    };
    writer.write_document(document)?;
    log::info!(
        "Rendered {} chapters to {} bytes of HTML",
        document.chapters.len(),
        writer.out.len()
    );
    Ok(writer.out)
}

struct HtmlWriter<'a> {
    out: String,
    template: &'a ResolvedTemplate,
    options: ExportOptions,
    paragraphs_written: usize,
}

impl HtmlWriter<'_> {
    fn write_document(&mut self, document: &Document) -> fmt::Result {
        let title = if document.title.is_empty() { "Book" } else { document.title.as_str() };
        writeln!(self.out, "<!DOCTYPE html>")?;
        writeln!(self.out, "<html>")?;
        writeln!(self.out, "<head>")?;
        writeln!(self.out, "<meta charset=\"UTF-8\">")?;
        writeln!(self.out, "<title>{}</title>", escape(title))?;
        writeln!(self.out, "<style>\n{}</style>", stylesheet(self.template)?)?;
        writeln!(self.out, "</head>")?;
        writeln!(self.out, "<body>")?;

        if document.has_title_page() {
            self.out.push_str("<div class=\"title-page\">");
            if !document.title.is_empty() {
                write!(self.out, "<div class=\"title\">{}</div>", escape(&document.title))?;
            }
            if !document.author.is_empty() {
                write!(self.out, "<div class=\"author\">by {}</div>", escape(&document.author))?;
            }
            self.out.push_str("</div>\n");
        }

        for (index, chapter) in document.chapters.iter().enumerate() {
            self.write_chapter(index, chapter)?;
        }

        writeln!(self.out, "</body>")?;
        write!(self.out, "</html>")
    }

    fn write_chapter(&mut self, index: usize, chapter: &Chapter) -> fmt::Result {
        let header = self.template.chapter_header.heading_text(index + 1, &chapter.title);
        writeln!(self.out, "<h1 class=\"chapter-header\">{}</h1>", escape(&header))?;

        for (scene_index, scene) in chapter.scenes.iter().enumerate() {
            let scene_title = scene.title.trim();
            if self.options.include_scene_titles && !scene_title.is_empty() {
                writeln!(self.out, "<h2 class=\"scene-title\">{}</h2>", escape(scene_title))?;
            }
            for paragraph in scene.paragraphs() {
                self.write_paragraph(paragraph)?;
            }
            if self.options.include_scene_breaks && scene_index + 1 < chapter.scenes.len() {
                writeln!(self.out, "<div class=\"scene-break\">* * *</div>")?;
            }
        }
        Ok(())
    }

    /// Inline runs go inside a `<p>`; heading runs become `<h1>`..`<h3>`.
    fn write_paragraph(&mut self, paragraph: &str) -> fmt::Result {
        let first = self.paragraphs_written == 0;
        self.paragraphs_written += 1;
        let class = if first && self.template.paragraph_style == ParagraphStyle::Indented {
            " class=\"first-paragraph\""
        } else {
            ""
        };

        let mut open = false;
        for run in markup::parse(paragraph) {
            let text = escape(run.text.as_str());
            if let Some(level) = run.kind.heading_level() {
                if open {
                    self.out.push_str("</p>");
                    open = false;
                }
                write!(self.out, "<h{0}>{1}</h{0}>", level, text)?;
                continue;
            }
            if !open {
                write!(self.out, "<p{}>", class)?;
                open = true;
            }
            match run.kind {
                RunKind::Bold => write!(self.out, "<strong>{}</strong>", text)?,
                RunKind::Italic => write!(self.out, "<em>{}</em>", text)?,
                _ => self.out.push_str(&text),
            }
        }
        if open {
            self.out.push_str("</p>");
        }
        self.out.push('\n');
        Ok(())
    }
}
