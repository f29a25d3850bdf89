//! Advance widths of the standard PDF fonts, from the Adobe core-font AFM
//! files, for every byte of WinAnsiEncoding.
//!
//! Text is measured exactly as the PDF backend encodes it: through
//! [`win_ansi_byte`], so a character drawn as `?` is measured as `?`.

use folio_style::{BaseFamily, catalog};
use folio_traits::{FontError, FontMetrics, FontSpec};

/// Measures text as the PDF backend draws it: in Times, Helvetica or Courier,
/// picked from the font catalog. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl StandardFontMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Width of `ch` in 1/1000 em.
    pub fn char_units(base: BaseFamily, bold: bool, italic: bool, ch: char) -> u16 {
        let (table, high) = match (base, bold, italic) {
            (BaseFamily::Courier, _, _) => return COURIER_WIDTH,
            (BaseFamily::Helvetica, false, _) => (&HELVETICA, &HELVETICA_HIGH),
            (BaseFamily::Helvetica, true, _) => (&HELVETICA_BOLD, &HELVETICA_BOLD_HIGH),
            (BaseFamily::Times, false, false) => (&TIMES_ROMAN, &TIMES_ROMAN_HIGH),
            (BaseFamily::Times, true, false) => (&TIMES_BOLD, &TIMES_BOLD_HIGH),
            (BaseFamily::Times, false, true) => (&TIMES_ITALIC, &TIMES_ITALIC_HIGH),
            (BaseFamily::Times, true, true) => (&TIMES_BOLD_ITALIC, &TIMES_BOLD_ITALIC_HIGH),
        };
        match win_ansi_byte(ch) {
            b @ 0x20..=0x7E => table[(b - 0x20) as usize],
            b @ 0x80..=0xFF => high[(b - 0x80) as usize],
            _ => table[0],
        }
    }
}

/// The WinAnsiEncoding byte the PDF backend draws for `ch`.
///
/// Typographic punctuation and the other 0x80..0x9F glyphs map to their
/// slots, Latin-1 maps to itself, control characters become a space and
/// anything else becomes `?`.
pub fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        c if c.is_ascii_control() => b' ',
        c if c.is_ascii() || ('\u{A0}'..='\u{FF}').contains(&c) => c as u8,
        _ => b'?',
    }
}

impl FontMetrics for StandardFontMetrics {
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f32, FontError> {
        let base = catalog::base_family(&font.family);
        let (bold, italic) = (font.is_bold(), font.is_italic());
        let units: u32 = text
            .chars()
            .map(|ch| Self::char_units(base, bold, italic, ch) as u32)
            .sum();
        Ok(units as f32 * font.size / 1000.0)
    }
}

const COURIER_WIDTH: u16 = 600;

const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

const TIMES_BOLD_ITALIC: [u16; 95] = [
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
    333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
    500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
];

// Bytes 0x80..=0xFF. The five slots WinAnsiEncoding leaves undefined
// (0x81, 0x8D, 0x8F, 0x90, 0x9D) carry the bullet width and are never drawn.

const HELVETICA_HIGH: [u16; 128] = [
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

const HELVETICA_BOLD_HIGH: [u16; 128] = [
    556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

const TIMES_ROMAN_HIGH: [u16; 128] = [
    500, 350, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889, 350, 611, 350,
    350, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722, 350, 444, 722,
    250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
    400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
    722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
    444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
];

const TIMES_BOLD_HIGH: [u16; 128] = [
    500, 350, 333, 500, 500, 1000, 500, 500, 333, 1000, 556, 333, 1000, 350, 667, 350,
    350, 333, 333, 500, 500, 350, 500, 1000, 333, 1000, 389, 333, 722, 350, 444, 722,
    250, 333, 500, 500, 500, 500, 220, 500, 333, 747, 300, 500, 570, 333, 747, 333,
    400, 570, 300, 300, 333, 556, 540, 250, 333, 300, 330, 500, 750, 750, 750, 500,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 389, 389, 389, 389,
    722, 722, 778, 778, 778, 778, 778, 570, 778, 722, 722, 722, 722, 722, 611, 556,
    500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 500, 556, 500,
];

const TIMES_ITALIC_HIGH: [u16; 128] = [
    500, 350, 333, 500, 556, 889, 500, 500, 333, 1000, 500, 333, 944, 350, 556, 350,
    350, 333, 333, 556, 556, 350, 500, 889, 333, 980, 389, 333, 667, 350, 389, 556,
    250, 389, 500, 500, 500, 500, 275, 500, 333, 760, 276, 500, 675, 333, 760, 333,
    400, 675, 300, 300, 333, 500, 523, 250, 333, 300, 310, 500, 750, 750, 750, 500,
    611, 611, 611, 611, 611, 611, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    722, 667, 722, 722, 722, 722, 722, 675, 722, 722, 722, 722, 722, 556, 611, 500,
    500, 500, 500, 500, 500, 500, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    500, 500, 500, 500, 500, 500, 500, 675, 500, 500, 500, 500, 500, 444, 500, 444,
];

const TIMES_BOLD_ITALIC_HIGH: [u16; 128] = [
    500, 350, 333, 500, 500, 1000, 500, 500, 333, 1000, 556, 333, 944, 350, 611, 350,
    350, 333, 333, 500, 500, 350, 500, 1000, 333, 1000, 389, 333, 722, 350, 389, 611,
    250, 389, 500, 500, 500, 500, 220, 500, 333, 747, 266, 500, 606, 333, 747, 333,
    400, 570, 300, 300, 333, 576, 500, 250, 333, 300, 300, 500, 750, 750, 750, 500,
    667, 667, 667, 667, 667, 667, 944, 667, 667, 667, 667, 667, 389, 389, 389, 389,
    722, 722, 722, 722, 722, 722, 722, 570, 722, 722, 722, 722, 722, 611, 611, 500,
    500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 444, 500, 444,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_is_monospaced() {
        let metrics = StandardFontMetrics::new();
        let font = FontSpec::new("Courier New", 10.0);
        assert_eq!(metrics.measure_width("abc", &font).unwrap(), 18.0);
        assert_eq!(metrics.measure_width("W i", &font.clone().bold()).unwrap(), 18.0);
    }

    #[test]
    fn times_widths_by_style() {
        let metrics = StandardFontMetrics::new();
        let font = FontSpec::new("Times New Roman", 12.0);
        // H 722 + i 278 = 1000 units.
        assert!((metrics.measure_width("Hi", &font).unwrap() - 12.0).abs() < 1e-4);
        assert!((metrics.space_width(&font).unwrap() - 3.0).abs() < 1e-4);
        // H 778 + i 278 in Times-Bold.
        let bold = metrics.measure_width("Hi", &font.clone().bold()).unwrap();
        assert!((bold - 12.672).abs() < 1e-3);
    }

    #[test]
    fn helvetica_oblique_shares_upright_widths() {
        let metrics = StandardFontMetrics::new();
        let font = FontSpec::new("Arial", 10.0);
        assert_eq!(
            metrics.measure_width("quick", &font).unwrap(),
            metrics.measure_width("quick", &font.clone().italic()).unwrap()
        );
    }

    #[test]
    fn typographic_punctuation_uses_its_own_width() {
        let metrics = StandardFontMetrics::new();
        let font = FontSpec::new("Times New Roman", 12.0);
        let width = |s: &str| metrics.measure_width(s, &font).unwrap();
        // emdash 1000, quoteright 333, quotedblleft 444.
        assert!((width("\u{2014}") - 12.0).abs() < 1e-4);
        assert!((width("\u{2019}") - 3.996).abs() < 1e-4);
        assert!((width("\u{201C}") - 5.328).abs() < 1e-4);
        assert!((width("\u{2026}") - 12.0).abs() < 1e-4);
    }

    #[test]
    fn latin1_accents_use_their_own_width() {
        // eacute 444 in Times-Roman, Eacute 667 in Helvetica.
        assert_eq!(StandardFontMetrics::char_units(BaseFamily::Times, false, false, '\u{e9}'), 444);
        assert_eq!(StandardFontMetrics::char_units(BaseFamily::Helvetica, false, false, '\u{c9}'), 667);
        assert_eq!(StandardFontMetrics::char_units(BaseFamily::Times, true, true, '\u{df}'), 500);
    }

    #[test]
    fn unencodable_characters_measure_as_question_mark() {
        for ch in ['\u{3b1}', '\u{4e2d}'] {
            assert_eq!(win_ansi_byte(ch), b'?');
            assert_eq!(
                StandardFontMetrics::char_units(BaseFamily::Times, false, false, ch),
                StandardFontMetrics::char_units(BaseFamily::Times, false, false, '?')
            );
        }
    }

    #[test]
    fn encoding_matches_win_ansi_slots() {
        assert_eq!(win_ansi_byte('A'), b'A');
        assert_eq!(win_ansi_byte('\u{e9}'), 0xE9);
        assert_eq!(win_ansi_byte('\u{2014}'), 0x97);
        assert_eq!(win_ansi_byte('\u{0153}'), 0x9C);
        assert_eq!(win_ansi_byte('\t'), b' ');
    }
}
