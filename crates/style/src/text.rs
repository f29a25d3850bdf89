use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    #[serde(alias = "justified")]
    Justify,
}

impl TextAlign {
    /// Accepts both the CSS spelling and the template spelling (`justified`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(TextAlign::Left),
            "right" => Some(TextAlign::Right),
            "center" | "centre" => Some(TextAlign::Center),
            "justify" | "justified" => Some(TextAlign::Justify),
            _ => None,
        }
    }

    pub fn css_value(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
            TextAlign::Justify => "justify",
        }
    }

    /// Horizontal offset of an item of `item_width` inside `available` width.
    ///
    /// Justified items are placed like left-aligned ones; stretching happens
    /// in the line breaker.
    pub fn offset(&self, available: f32, item_width: f32) -> f32 {
        let free = (available - item_width).max(0.0);
        match self {
            TextAlign::Left | TextAlign::Justify => 0.0,
            TextAlign::Center => free / 2.0,
            TextAlign::Right => free,
        }
    }
}
