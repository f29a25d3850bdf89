//! Greedy line breaking and justification for one paragraph.

use crate::markup::{MarkupRun, RunKind};
use folio_style::TextAlign;
use folio_traits::{FontError, FontMetrics, FontSpec};

/// The font a run of `kind` is drawn in, derived from the body font.
pub fn font_for_run(kind: RunKind, base: &FontSpec) -> FontSpec {
    let mut font = base.clone().with_size(base.size * kind.scale());
    if kind.is_bold() {
        font = font.bold();
    }
    if kind.is_italic() {
        font = font.italic();
    }
    font
}

/// A piece of text placed on a line. `x` is relative to the left edge of the
/// content area.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub kind: RunKind,
    pub text: String,
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub segments: Vec<LineSegment>,
    /// Font size multiplier; the line advances `line height * scale`.
    pub scale: f32,
    pub is_heading: bool,
    /// Last line of a heading or of a run of inline text.
    pub ends_block: bool,
    pub is_last_line_of_paragraph: bool,
    pub is_justified: bool,
}

impl Line {
    /// Right edge of the last segment.
    pub fn extent(&self) -> f32 {
        self.segments.last().map_or(0.0, |s| s.x + s.width)
    }

    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
struct Fragment {
    kind: RunKind,
    text: String,
    width: f32,
}

/// Fragments not separated by whitespace, e.g. `**bold**,` is a bold
/// fragment followed by a normal one.
#[derive(Debug, Clone, Default)]
struct Word {
    fragments: Vec<Fragment>,
    width: f32,
}

impl Word {
    fn push_char(&mut self, kind: RunKind, ch: char) {
        match self.fragments.last_mut() {
            Some(last) if last.kind == kind => last.text.push(ch),
            _ => self.fragments.push(Fragment {
                kind,
                text: ch.to_string(),
                width: 0.0,
            }),
        }
    }

    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[derive(Debug)]
enum Block {
    Inline(Vec<Word>),
    Heading(RunKind, Vec<Word>),
}

fn tokenize(runs: &[MarkupRun]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut words: Vec<Word> = Vec::new();
    let mut current = Word::default();

    for run in runs {
        if run.kind.is_heading() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            if !words.is_empty() {
                blocks.push(Block::Inline(std::mem::take(&mut words)));
            }
            let heading_words: Vec<Word> = run
                .text
                .split_whitespace()
                .map(|w| Word {
                    fragments: vec![Fragment {
                        kind: run.kind,
                        text: w.to_string(),
                        width: 0.0,
                    }],
                    width: 0.0,
                })
                .collect();
            if !heading_words.is_empty() {
                blocks.push(Block::Heading(run.kind, heading_words));
            }
            continue;
        }

        for ch in run.text.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            } else {
                current.push_char(run.kind, ch);
            }
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    if !words.is_empty() {
        blocks.push(Block::Inline(words));
    }
    blocks
}

fn measure_words(
    words: &mut [Word],
    metrics: &dyn FontMetrics,
    base: &FontSpec,
) -> Result<(), FontError> {
    for word in words.iter_mut() {
        let mut total = 0.0;
        for fragment in word.fragments.iter_mut() {
            fragment.width = metrics.measure_width(&fragment.text, &font_for_run(fragment.kind, base))?;
            total += fragment.width;
        }
        word.width = total;
    }
    Ok(())
}

/// Greedy fill: a word joins the line while the line plus one space plus
/// the word still fits. A word wider than the line gets a line of its own.
fn break_into_lines(words: Vec<Word>, first_width: f32, rest_width: f32, space: f32) -> Vec<Vec<Word>> {
    let mut lines: Vec<Vec<Word>> = Vec::new();
    let mut current: Vec<Word> = Vec::new();
    let mut current_width = 0.0;

    for word in words {
        let available = if lines.is_empty() { first_width } else { rest_width };
        if !current.is_empty() && current_width + space + word.width > available {
            lines.push(std::mem::take(&mut current));
            current_width = word.width;
        } else if current.is_empty() {
            current_width = word.width;
        } else {
            current_width += space + word.width;
        }
        current.push(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn place_line(words: &[Word], start_x: f32, available: f32, space: f32, justify: bool) -> (Vec<LineSegment>, bool) {
    let stretched = justify && words.len() >= 2;
    let gap = if stretched {
        let natural: f32 = words.iter().map(|w| w.width).sum();
        (available - natural) / (words.len() - 1) as f32
    } else {
        space
    };

    let mut segments: Vec<LineSegment> = Vec::new();
    let mut x = start_x;
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            x += gap;
        }
        for (fragment_index, fragment) in word.fragments.iter().enumerate() {
            let joins_previous = !stretched && fragment_index == 0 && index > 0;
            match segments.last_mut() {
                Some(last) if joins_previous && last.kind == fragment.kind => {
                    last.text.push(' ');
                    last.text.push_str(&fragment.text);
                    last.width = x + fragment.width - last.x;
                }
                _ => segments.push(LineSegment {
                    kind: fragment.kind,
                    text: fragment.text.clone(),
                    x,
                    width: fragment.width,
                }),
            }
            x += fragment.width;
        }
    }
    (segments, stretched)
}

/// Lays out one paragraph.
///
/// `first_line_indent` shortens and shifts the paragraph's first line when
/// that line is body text. Every line except the last line of a block is
/// stretched to `usable_width` when `align` is [`TextAlign::Justify`].
pub fn layout_paragraph(
    runs: &[MarkupRun],
    metrics: &dyn FontMetrics,
    base: &FontSpec,
    usable_width: f32,
    align: TextAlign,
    first_line_indent: f32,
) -> Result<Vec<Line>, FontError> {
    let justify = align == TextAlign::Justify;
    let mut lines = Vec::new();

    for block in tokenize(runs) {
        let (kind, mut words) = match block {
            Block::Inline(words) => (RunKind::Normal, words),
            Block::Heading(kind, words) => (kind, words),
        };
        measure_words(&mut words, metrics, base)?;
        let space = metrics.space_width(&font_for_run(kind, base))?;
        let indent = if lines.is_empty() && !kind.is_heading() {
            first_line_indent
        } else {
            0.0
        };

        let grouped = break_into_lines(words, usable_width - indent, usable_width, space);
        let count = grouped.len();
        for (index, line_words) in grouped.iter().enumerate() {
            let start_x = if index == 0 { indent } else { 0.0 };
            let ends_block = index + 1 == count;
            let (segments, stretched) = place_line(
                line_words,
                start_x,
                usable_width - start_x,
                space,
                justify && !ends_block,
            );
            lines.push(Line {
                segments,
                scale: kind.scale(),
                is_heading: kind.is_heading(),
                ends_block,
                is_last_line_of_paragraph: false,
                is_justified: stretched,
            });
        }
    }

    if let Some(last) = lines.last_mut() {
        last.is_last_line_of_paragraph = true;
    }
    Ok(lines)
}

/// Greedy split of plain text into lines no wider than `width`, joining
/// words with single spaces. Always returns at least one line.
pub fn split_to_width(
    text: &str,
    font: &FontSpec,
    width: f32,
    metrics: &dyn FontMetrics,
) -> Result<Vec<String>, FontError> {
    let space = metrics.space_width(font)?;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = metrics.measure_width(word, font)?;
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space + word_width > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}
