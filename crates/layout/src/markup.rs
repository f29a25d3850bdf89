//! Inline markup recognized in scene text: `# heading` lines (levels 1-3),
//! `**bold**` and `*italic*`.
//!
//! Matches are collected as candidate spans, sorted by start offset and
//! accepted first-come; a candidate overlapping an accepted span is dropped
//! whole. Candidates are collected headings first, then bold, then italic, so
//! among equal starts the stable sort keeps that precedence.

use nom::bytes::complete::{take_while_m_n, take_while1};
use nom::combinator::rest;
use nom::{IResult, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    Normal,
    Bold,
    Italic,
    Heading1,
    Heading2,
    Heading3,
}

impl RunKind {
    fn heading(level: usize) -> Self {
        match level {
            1 => RunKind::Heading1,
            2 => RunKind::Heading2,
            _ => RunKind::Heading3,
        }
    }

    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self {
            RunKind::Heading1 => Some(1),
            RunKind::Heading2 => Some(2),
            RunKind::Heading3 => Some(3),
            _ => None,
        }
    }

    /// Size multiplier over the body font size.
    pub fn scale(&self) -> f32 {
        match self {
            RunKind::Heading1 => 1.8,
            RunKind::Heading2 => 1.5,
            RunKind::Heading3 => 1.3,
            _ => 1.0,
        }
    }

    pub fn is_bold(&self) -> bool {
        !matches!(self, RunKind::Normal | RunKind::Italic)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, RunKind::Italic)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupRun {
    pub kind: RunKind,
    pub text: String,
}

impl MarkupRun {
    pub fn new(kind: RunKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct Candidate<'a> {
    kind: RunKind,
    start: usize,
    end: usize,
    text: &'a str,
}

impl Candidate<'_> {
    fn overlaps(&self, other: &Candidate<'_>) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// `#`, `##` or `###`, whitespace, then the heading text.
fn heading_line(line: &str) -> IResult<&str, (usize, &str)> {
    let (input, (hashes, _, text)) = (
        take_while_m_n(1, 3, |c| c == '#'),
        take_while1(char::is_whitespace),
        rest,
    )
        .parse(line)?;
    Ok((input, (hashes.len(), text)))
}

fn heading_candidates(text: &str) -> Vec<Candidate<'_>> {
    let mut found = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        if let Ok((_, (level, heading))) = heading_line(line) {
            found.push(Candidate {
                kind: RunKind::heading(level),
                start: offset,
                end: offset + line.len(),
                text: heading.trim(),
            });
        }
        offset += line.len() + 1;
    }
    found
}

/// `**...**` with the shortest body that stays on one line.
fn bold_candidates(text: &str) -> Vec<Candidate<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(rel) = text[pos..].find("**") {
        let start = pos + rel;
        let body_start = start + 2;
        let line_end = text[body_start..]
            .find('\n')
            .map_or(text.len(), |n| body_start + n);
        match text[body_start..line_end].find("**") {
            Some(close) => {
                let body_end = body_start + close;
                found.push(Candidate {
                    kind: RunKind::Bold,
                    start,
                    end: body_end + 2,
                    text: &text[body_start..body_end],
                });
                pos = body_end + 2;
            }
            None => pos = start + 1,
        }
    }
    found
}

/// A lone `*`, a non-empty body free of `*` and newlines, and a lone `*`.
fn italic_candidates(text: &str) -> Vec<Candidate<'_>> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(rel) = text[pos..].find('*') {
        let start = pos + rel;
        pos = start + 1;
        if start > 0 && bytes[start - 1] == b'*' {
            continue;
        }
        let body_start = start + 1;
        let Some(close_rel) = text[body_start..].find(['*', '\n']) else {
            break;
        };
        let close = body_start + close_rel;
        if close == body_start || bytes[close] != b'*' {
            continue;
        }
        if bytes.get(close + 1) == Some(&b'*') {
            continue;
        }
        found.push(Candidate {
            kind: RunKind::Italic,
            start,
            end: close + 1,
            text: &text[body_start..close],
        });
        pos = close + 1;
    }
    found
}

/// Splits paragraph text into typed runs. Never fails: unmatched markers are
/// left in the text as literals.
pub fn parse(text: &str) -> Vec<MarkupRun> {
    let mut candidates = heading_candidates(text);
    candidates.extend(bold_candidates(text));
    candidates.extend(italic_candidates(text));
    candidates.sort_by_key(|c| c.start);

    let mut accepted: Vec<Candidate<'_>> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !accepted.iter().any(|a| a.overlaps(&candidate)) {
            accepted.push(candidate);
        }
    }

    let mut runs = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut cursor = 0;
    for span in &accepted {
        if cursor < span.start {
            runs.push(MarkupRun::new(RunKind::Normal, &text[cursor..span.start]));
        }
        runs.push(MarkupRun::new(span.kind, span.text));
        cursor = span.end;
    }
    if cursor < text.len() {
        runs.push(MarkupRun::new(RunKind::Normal, &text[cursor..]));
    }
    if runs.is_empty() {
        runs.push(MarkupRun::new(RunKind::Normal, text));
    }
    runs
}
