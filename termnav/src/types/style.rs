use super::{Color, Rgb};

/// The pair of style tokens every painted cell carries: the fill (cell
/// background) and the content (glyph colour).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub content: Color,
}

impl Style {
    pub const fn new(fill: Color, content: Color) -> Self {
        Self { fill, content }
    }

    /// A style whose glyphs are invisible against the fill, for blank bars.
    pub const fn solid(color: Color) -> Self {
        Self {
            fill: color,
            content: color,
        }
    }

    pub fn fill_rgb(&self) -> Rgb {
        self.fill.to_rgb()
    }

    pub fn content_rgb(&self) -> Rgb {
        self.content.to_rgb()
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(super::console::BLACK, super::console::WHITE)
    }
}
