use super::Paintable;
use crate::layout::Rect;
use crate::surface::Surface;
use crate::text::{fit, wrap_words};
use crate::types::{HorizontalAlignment, Style};

/// Read-only block of lines. Writing past the last row scrolls the content
/// up by one row.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    rect: Rect,
    style: Style,
    lines: Vec<String>,
    next_empty: Option<usize>,
}

impl TextBox {
    pub fn new(rect: Rect, style: Style) -> Self {
        Self {
            rect,
            style,
            lines: vec![String::new(); rect.height as usize],
            next_empty: (rect.height > 0).then_some(0),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn remaining_free_lines(&self) -> usize {
        match self.next_empty {
            Some(row) => self.lines.len() - row,
            None => 0,
        }
    }

    pub fn write_line(&mut self, text: impl Into<String>, surface: &mut dyn Surface) {
        let text = text.into();
        match self.next_empty {
            Some(row) => {
                self.lines[row] = text;
                self.paint_line(row, surface);
                let next = row + 1;
                self.next_empty = (next < self.lines.len()).then_some(next);
            }
            None => {
                if self.lines.is_empty() {
                    return;
                }
                self.lines.remove(0);
                self.lines.push(text);
                self.paint(surface);
            }
        }
    }

    /// Extend the most recently written row.
    pub fn append_last_line(&mut self, text: &str, surface: &mut dyn Surface) {
        let last = match self.next_empty {
            Some(0) => 0,
            Some(row) => row - 1,
            None => match self.lines.len().checked_sub(1) {
                Some(last) => last,
                None => return,
            },
        };
        self.lines[last].push_str(text);
        if self.next_empty == Some(0) {
            self.next_empty = (self.lines.len() > 1).then_some(1);
        }
        self.paint_line(last, surface);
    }

    /// Word-wrap `text` to the box width and write as many rows as still
    /// fit without scrolling. Returns the number of rows written.
    pub fn write_wrapped(&mut self, text: &str, surface: &mut dyn Surface) -> usize {
        let mut written = 0;
        for line in wrap_words(text, self.rect.width as usize) {
            if self.remaining_free_lines() == 0 {
                break;
            }
            self.write_line(line, surface);
            written += 1;
        }
        written
    }

    pub fn clear_content(&mut self, surface: &mut dyn Surface) {
        for line in &mut self.lines {
            line.clear();
        }
        self.next_empty = (!self.lines.is_empty()).then_some(0);
        self.paint(surface);
    }

    fn paint_line(&self, row: usize, surface: &mut dyn Surface) {
        if self.rect.width == 0 {
            return;
        }
        let text = fit(&self.lines[row], self.rect.width as usize, HorizontalAlignment::Left);
        surface.paint(self.rect.x, self.rect.y + row as u16, &text, &self.style);
    }
}

impl Paintable for TextBox {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn style(&self) -> Style {
        self.style
    }

    fn paint(&self, surface: &mut dyn Surface) {
        for row in 0..self.lines.len() {
            self.paint_line(row, surface);
        }
    }
}
