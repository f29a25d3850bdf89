use folio_style::BaseFamily;
use folio_style::catalog::base_family;
use folio_layout::fonts::win_ansi_byte;
use folio_traits::FontSpec;

/// PostScript name of the standard PDF font a template family falls back to.
pub fn standard_font_name(font: &FontSpec) -> &'static str {
    let (bold, italic) = (font.is_bold(), font.is_italic());
    match (base_family(&font.family), bold, italic) {
        (BaseFamily::Times, false, false) => "Times-Roman",
        (BaseFamily::Times, true, false) => "Times-Bold",
        (BaseFamily::Times, false, true) => "Times-Italic",
        (BaseFamily::Times, true, true) => "Times-BoldItalic",
        (BaseFamily::Helvetica, false, false) => "Helvetica",
        (BaseFamily::Helvetica, true, false) => "Helvetica-Bold",
        (BaseFamily::Helvetica, false, true) => "Helvetica-Oblique",
        (BaseFamily::Helvetica, true, true) => "Helvetica-BoldOblique",
        (BaseFamily::Courier, false, false) => "Courier",
        (BaseFamily::Courier, true, false) => "Courier-Bold",
        (BaseFamily::Courier, false, true) => "Courier-Oblique",
        (BaseFamily::Courier, true, true) => "Courier-BoldOblique",
    }
}

/// Encodes text for a WinAnsiEncoding simple font, byte for byte as
/// [`StandardFontMetrics`](folio_layout::StandardFontMetrics) measures it.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

/// Convert a top-down layout Y coordinate to PDF's bottom-up space.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
