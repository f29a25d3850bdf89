use crate::{ExportOptions, FinishedLayout, NeverCancel, StandardFontMetrics, layout_document};
use folio_style::{ResolvedTemplate, Template};
use folio_types::{Chapter, Document, Scene};

pub fn scene(content: &str) -> Scene {
    Scene {
        content: content.to_string(),
        ..Default::default()
    }
}

pub fn titled_scene(title: &str, content: &str) -> Scene {
    Scene {
        title: title.to_string(),
        content: content.to_string(),
        ..Default::default()
    }
}

pub fn chapter(title: &str, scenes: Vec<Scene>) -> Chapter {
    Chapter {
        id: title.to_lowercase(),
        title: title.to_string(),
        scenes,
    }
}

pub fn document(title: &str, author: &str, chapters: Vec<Chapter>) -> Document {
    Document {
        title: title.to_string(),
        author: author.to_string(),
        chapters,
    }
}

pub fn template(json: &str) -> ResolvedTemplate {
    Template::from_json(json)
        .expect("test template must parse")
        .resolve()
}

pub fn layout(document: &Document, template: &ResolvedTemplate) -> FinishedLayout {
    layout_with(document, template, ExportOptions::default())
}

pub fn layout_with(
    document: &Document,
    template: &ResolvedTemplate,
    options: ExportOptions,
) -> FinishedLayout {
    let _ = env_logger::builder().is_test(true).try_init();
    layout_document(document, template, &StandardFontMetrics, options, &NeverCancel)
        .expect("layout with standard metrics cannot fail")
}

/// Space-separated words of `count` distinct tokens.
pub fn numbered_words(prefix: &str, count: usize) -> String {
    (0..count)
        .map(|i| format!("{}{}", prefix, i))
        .collect::<Vec<_>>()
        .join(" ")
}
