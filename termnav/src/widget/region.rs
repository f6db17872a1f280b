use super::Paintable;
use crate::layout::Rect;
use crate::surface::Surface;
use crate::text::fit;
use crate::types::{HorizontalAlignment, Style};

/// A filled rectangle, e.g. a separator bar or a window background.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    rect: Rect,
    style: Style,
}

impl Region {
    pub fn new(rect: Rect, style: Style) -> Self {
        Self { rect, style }
    }
}

impl Paintable for Region {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn style(&self) -> Style {
        self.style
    }

    fn paint(&self, surface: &mut dyn Surface) {
        self.clear(surface);
    }
}

/// Single line of text padded to the label's width.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    rect: Rect,
    style: Style,
    text: String,
    align: HorizontalAlignment,
}

impl Label {
    pub fn new(rect: Rect, style: Style, text: impl Into<String>) -> Self {
        Self {
            rect: rect.first_row(),
            style,
            text: text.into(),
            align: HorizontalAlignment::Left,
        }
    }

    pub fn align(mut self, align: HorizontalAlignment) -> Self {
        self.align = align;
        self
    }

    pub fn centered(self) -> Self {
        self.align(HorizontalAlignment::Center)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>, surface: &mut dyn Surface) {
        self.text = text.into();
        self.paint(surface);
    }
}

impl Paintable for Label {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn style(&self) -> Style {
        self.style
    }

    fn paint(&self, surface: &mut dyn Surface) {
        if self.rect.is_empty() {
            return;
        }
        let line = fit(&self.text, self.rect.width as usize, self.align);
        surface.paint(self.rect.x, self.rect.y, &line, &self.style);
    }
}
