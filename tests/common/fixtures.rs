#![allow(dead_code)]

use serde_json::{Value, json};

/// A scene with the given title and content
pub fn scene(title: &str, content: &str) -> Value {
    json!({ "id": title.to_lowercase(), "title": title, "content": content })
}

/// A chapter holding the given scenes
pub fn chapter(title: &str, scenes: Vec<Value>) -> Value {
    json!({ "id": title.to_lowercase(), "title": title, "scenes": scenes })
}

/// A book with a title page and default template
pub fn book(chapters: Vec<Value>) -> Value {
    json!({ "title": "The Long Road", "author": "Ada Lane", "chapters": chapters })
}

/// A book with the given template settings
pub fn book_with_template(chapters: Vec<Value>, template: Value) -> Value {
    let mut book = book(chapters);
    book["template"] = template;
    book
}

/// A book with neither title nor author, so no title page
pub fn untitled_book(chapters: Vec<Value>) -> Value {
    json!({ "title": "", "author": "", "chapters": chapters })
}

/// One single-scene chapter per title
pub fn simple_chapters(titles: &[&str]) -> Vec<Value> {
    titles
        .iter()
        .map(|title| chapter(title, vec![scene("", &format!("{} begins here.", title))]))
        .collect()
}

/// Enough numbered paragraphs to fill several pages
pub fn long_content(paragraphs: usize) -> String {
    (1..=paragraphs)
        .map(|i| {
            format!(
                "Paragraph {} walks on through the valley while the light fades over the hills \
                and the river keeps its slow patient course toward the distant sea.",
                i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
