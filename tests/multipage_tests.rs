mod common;

use common::fixtures::*;
use common::{TestResult, generate_pdf, layout};
use serde_json::json;

#[test]
fn test_long_chapter_overflows_onto_more_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let book = book(vec![chapter("Journey", vec![scene("", &long_content(120))])]);
    let pdf = generate_pdf(&book)?;

    assert_pdf_min_pages!(pdf, 5);
    assert_pdf_contains_text!(pdf, "Paragraph");
    assert!(pdf.page_text(2).contains("Chapter 1"));
    Ok(())
}

#[test]
fn test_each_chapter_starts_a_new_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&book(simple_chapters(&["One", "Two", "Three"])))?;
    assert_pdf_page_count!(pdf, 4);
    assert!(pdf.page_text(2).contains("Chapter 1"));
    assert!(pdf.page_text(3).contains("Chapter 2"));
    assert!(pdf.page_text(4).contains("Chapter 3"));
    Ok(())
}

#[test]
fn test_chapters_without_page_break_share_a_page() -> TestResult {
    let book = book_with_template(
        simple_chapters(&["One", "Two"]),
        json!({ "chapterHeader": { "pageBreak": false } }),
    );
    let pdf = generate_pdf(&book)?;
    assert_pdf_page_count!(pdf, 2);
    assert!(pdf.page_text(2).contains("Chapter 2"));
    Ok(())
}

#[test]
fn test_start_on_right_page_inserts_blank_pages() -> TestResult {
    let book = book_with_template(
        simple_chapters(&["One", "Two"]),
        json!({ "chapterHeader": { "startOnRightPage": true } }),
    );
    let finished = layout(&book)?;

    let openings: Vec<_> = finished.classification().chapter_opening_pages().collect();
    assert_eq!(openings, vec![3, 5]);
    assert!(openings.iter().all(|page| page % 2 == 1));
    let blanks: Vec<_> = finished.classification().blank_pages().collect();
    assert_eq!(blanks, vec![2, 4]);
    Ok(())
}

#[test]
fn test_pages_are_numbered_except_the_title_page() -> TestResult {
    let book = book(vec![chapter("Journey", vec![scene("", &long_content(60))])]);
    let finished = layout(&book)?;
    assert!(finished.page_count() >= 3);

    assert!(finished.pages()[0].chrome.is_empty());
    for page in &finished.pages()[1..] {
        let number = page.number.to_string();
        assert!(
            page.chrome.iter().any(|t| t.text == number),
            "page {} should carry its number",
            page.number
        );
    }
    Ok(())
}

#[test]
fn test_running_headers_on_continuation_pages() -> TestResult {
    let book = book_with_template(
        vec![chapter("Journey", vec![scene("", &long_content(60))])],
        json!({ "runningHeaders": { "enabled": true } }),
    );
    let finished = layout(&book)?;
    let pages = finished.pages();

    // The chapter's opening page skips the header by default.
    assert_eq!(pages[1].chrome.len(), 1);
    assert!(pages[2].chrome.iter().any(|t| t.text == "The Long Road"));
    assert!(pages[3].chrome.iter().any(|t| t.text == "Ada Lane"));
    Ok(())
}

#[test]
fn test_no_content_is_lost_across_pages() -> TestResult {
    let book = book(vec![chapter("Journey", vec![scene("", &long_content(80))])]);
    let finished = layout(&book)?;

    let numbers: Vec<usize> = finished
        .content_text()
        .into_iter()
        .filter_map(|word| word.parse().ok())
        .collect();
    // "Chapter 1" is one run; the numbers left are the paragraph numbers.
    assert_eq!(numbers, (1..=80).collect::<Vec<_>>());
    Ok(())
}
