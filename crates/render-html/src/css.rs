//! The stylesheet embedded in every HTML export, derived from the template.

use folio_style::catalog::css_font_stack;
use folio_style::{ParagraphStyle, ResolvedTemplate, TextAlign};
use std::fmt::{self, Write};

fn inches(points: f32) -> String {
    format!("{}in", trim_float(points / 72.0))
}

fn trim_float(value: f32) -> String {
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn pt(value: f32) -> String {
    format!("{}pt", trim_float(value))
}

/// CSS for `template`.
pub fn stylesheet(template: &ResolvedTemplate) -> Result<String, fmt::Error> {
    let mut css = String::new();
    let fs = template.font_size;
    let (page_w, page_h) = template.page_size.dimensions_in();
    let m = &template.margins;

    writeln!(
        css,
        "@page {{ size: {}in {}in; margin-top: {}; margin-bottom: {}; }}",
        trim_float(page_w),
        trim_float(page_h),
        inches(m.top),
        inches(m.bottom)
    )?;
    if template.mirror_margins {
        writeln!(css, "@page :right {{ margin-left: {}; margin-right: {}; }}", inches(m.inside), inches(m.outside))?;
        writeln!(css, "@page :left {{ margin-left: {}; margin-right: {}; }}", inches(m.outside), inches(m.inside))?;
    } else {
        writeln!(css, "@page {{ margin-left: {}; margin-right: {}; }}", inches(m.left), inches(m.right))?;
    }

    writeln!(
        css,
        "body {{ font-family: {}; font-size: {}; line-height: {}; margin: 0; background: white; }}",
        css_font_stack(&template.font_family),
        pt(fs),
        trim_float(template.line_height),
    )?;
    // Print margins come from @page alone; padding only frames the page on screen.
    writeln!(
        css,
        "@media screen {{ body {{ max-width: {}in; margin: 0 auto; padding: {} {} {} {}; }} }}",
        trim_float(page_w),
        inches(m.top),
        inches(m.right),
        inches(m.bottom),
        inches(m.left),
    )?;

    writeln!(css, ".title-page {{ text-align: center; margin-bottom: 2in; }}")?;
    writeln!(css, ".title {{ font-size: {}; font-weight: bold; margin-bottom: 0.5in; }}", pt(fs * 2.0))?;
    writeln!(css, ".author {{ font-size: {}; margin-bottom: 2in; }}", pt(fs * 1.2))?;

    let header = &template.chapter_header;
    let page_break = match (header.page_break, header.start_on_right_page) {
        (false, _) => String::new(),
        (true, false) => " break-before: page; page-break-before: always;".to_string(),
        (true, true) => " break-before: right; page-break-before: right;".to_string(),
    };
    writeln!(
        css,
        ".chapter-header {{ font-size: {}; font-weight: {}; text-align: {}; margin: 2em 0 1em 0;{} }}",
        pt(header.font_size),
        header.font_weight.css_value(),
        header.alignment.css_value(),
        page_break,
    )?;

    writeln!(css, ".scene-title {{ font-size: {}; font-weight: bold; margin: 2em 0 1em 0; }}", pt(fs + 2.0))?;
    writeln!(css, ".scene-break {{ text-align: center; margin: 2em 0; }}")?;

    let paragraph = match template.paragraph_style {
        ParagraphStyle::Indented => "text-indent: 3%; margin: 0;",
        ParagraphStyle::Separated => "margin: 1em 0; text-indent: 0;",
    };
    let align = match template.text_align {
        TextAlign::Justify => "justify",
        _ => "left",
    };
    writeln!(css, "p {{ {} text-align: {}; }}", paragraph, align)?;
    writeln!(css, ".first-paragraph {{ text-indent: 0 !important; }}")?;
    writeln!(css, "strong {{ font-weight: bold; }}")?;
    writeln!(css, "em {{ font-style: italic; }}")?;
    writeln!(css, "h1, h2, h3 {{ font-weight: bold; margin: 1.5em 0 0.5em 0; }}")?;
    for (level, scale) in [(1, 1.8), (2, 1.5), (3, 1.3)] {
        writeln!(css, "h{} {{ font-size: {}; }}", level, pt(fs * scale))?;
    }
    Ok(css)
}
