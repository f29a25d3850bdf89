#![cfg(test)]

use crate::StandardFontMetrics;
use crate::markup::{self, RunKind};
use crate::text::{layout_paragraph, split_to_width};
use folio_style::TextAlign;
use folio_traits::{FontMetrics, FontSpec};

// Courier: every glyph is 0.6 em, so at 10pt each character is 6pt wide.
fn courier() -> FontSpec {
    FontSpec::new("Courier New", 10.0)
}

fn lines_for(text: &str, width: f32, align: TextAlign, indent: f32) -> Vec<crate::text::Line> {
    let runs = markup::parse(text);
    layout_paragraph(&runs, &StandardFontMetrics, &courier(), width, align, indent).unwrap()
}

#[test]
fn justified_line_fills_usable_width() {
    let lines = lines_for("The quick brown fox", 100.0, TextAlign::Justify, 0.0);
    assert_eq!(lines.len(), 2);

    let first = &lines[0];
    assert!(first.is_justified);
    let words: Vec<_> = first.segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(words, vec!["The", "quick", "brown"]);
    // 18 + 30 + 30 of words, 22 spread over two gaps.
    assert_eq!(first.segments[1].x, 29.0);
    assert_eq!(first.segments[2].x, 70.0);
    let total: f32 = first.segments.iter().map(|s| s.width).sum::<f32>() + 2.0 * 11.0;
    assert!((total - 100.0).abs() < 1e-4);
    assert!((first.extent() - 100.0).abs() < 1e-4);

    let last = &lines[1];
    assert!(last.is_last_line_of_paragraph);
    assert!(!last.is_justified);
    assert_eq!(last.text(), "fox");
}

#[test]
fn left_aligned_lines_use_single_spaces() {
    let lines = lines_for("The quick brown fox", 100.0, TextAlign::Left, 0.0);
    assert_eq!(lines[0].segments.len(), 1);
    assert_eq!(lines[0].segments[0].text, "The quick brown");
    assert_eq!(lines[0].segments[0].width, 90.0);
    assert!(!lines[0].is_justified);
}

#[test]
fn single_line_paragraph_is_never_stretched() {
    let lines = lines_for("Hello world.", 400.0, TextAlign::Justify, 0.0);
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].is_justified);
    assert_eq!(lines[0].extent(), 72.0);
}

#[test]
fn indent_shifts_and_shortens_first_line_only() {
    // 24pt indent leaves 86pt on the first line: "The quick" (54) fits,
    // "The quick brown" (90) does not.
    let lines = lines_for("The quick brown fox jumps", 110.0, TextAlign::Left, 24.0);
    assert_eq!(lines[0].segments[0].x, 24.0);
    assert_eq!(lines[0].text(), "The quick");
    assert_eq!(lines[1].segments[0].x, 0.0);
    assert_eq!(lines[1].text(), "brown fox jumps");
}

#[test]
fn justified_first_line_fills_from_the_indent() {
    let lines = lines_for("aa bb cc dd ee ff gg", 60.0, TextAlign::Justify, 24.0);
    let first = &lines[0];
    assert!(first.is_justified);
    assert_eq!(first.segments[0].x, 24.0);
    assert!((first.extent() - 60.0).abs() < 1e-4);
}

#[test]
fn glued_fragments_stay_in_one_word() {
    let lines = lines_for("**bold**, then on", 400.0, TextAlign::Left, 0.0);
    let segments = &lines[0].segments;
    assert_eq!(segments[0].kind, RunKind::Bold);
    assert_eq!(segments[0].text, "bold");
    assert_eq!(segments[1].kind, RunKind::Normal);
    assert_eq!(segments[1].text, ", then on");
    assert_eq!(segments[1].x, 24.0);
}

#[test]
fn headings_get_their_own_scaled_lines() {
    let lines = lines_for("## Part Two", 400.0, TextAlign::Justify, 24.0);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_heading);
    assert_eq!(lines[0].scale, 1.5);
    assert_eq!(lines[0].segments[0].x, 0.0);
    // 8 characters at 15pt Courier.
    assert_eq!(lines[0].segments[0].width, 72.0);
}

#[test]
fn overlong_word_takes_a_line_of_its_own() {
    let lines = lines_for("a incomprehensibilities b", 60.0, TextAlign::Justify, 0.0);
    let texts: Vec<_> = lines.iter().map(|l| l.text()).collect();
    assert_eq!(texts, vec!["a", "incomprehensibilities", "b"]);
}

#[test]
fn every_word_is_placed_once() {
    let text = "one two **three four** five *six* seven eight nine ten";
    let lines = lines_for(text, 70.0, TextAlign::Justify, 24.0);
    let placed: Vec<String> = lines
        .iter()
        .flat_map(|l| l.segments.iter())
        .flat_map(|s| s.text.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();
    assert_eq!(
        placed,
        vec!["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"]
    );
}

#[test]
fn split_to_width_wraps_greedily() {
    let metrics = StandardFontMetrics;
    let font = courier();
    assert_eq!(
        split_to_width("Chapter 12: The Long Road Home", &font, 100.0, &metrics).unwrap(),
        vec!["Chapter 12: The", "Long Road Home"]
    );
    assert_eq!(split_to_width("", &font, 100.0, &metrics).unwrap(), vec![String::new()]);
    assert_eq!(metrics.measure_width("Long Road Home", &font).unwrap(), 84.0);
}
