use folio_traits::FontSpec;

/// A run of text at an absolute position. `y` is the baseline, measured
/// down from the top edge of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedText {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: FontSpec,
    pub width: f32,
}

/// What a backend draws, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    NewPage { number: usize, width: f32, height: f32 },
    Text(PositionedText),
}
