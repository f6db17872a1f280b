use std::io;

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::types::Style;

/// The drawing primitives widgets need from a terminal.
pub trait Surface {
    /// Write `text` starting at (left, top). Text past the right edge is cut.
    fn paint(&mut self, left: u16, top: u16, text: &str, style: &Style);

    /// Fill `rect` with blanks in `style`.
    fn clear(&mut self, rect: Rect, style: &Style);

    /// Show the text cursor at a position, or hide it.
    fn set_cursor(&mut self, position: Option<(u16, u16)>);

    /// Push pending changes to the device.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A call received by a [`BufferSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCall {
    Paint {
        left: u16,
        top: u16,
        text: String,
        style: Style,
    },
    Clear {
        rect: Rect,
        style: Style,
    },
}

/// In-memory surface: paints into a cell buffer and records every call.
#[derive(Debug, Clone)]
pub struct BufferSurface {
    buffer: Buffer,
    calls: Vec<PaintCall>,
    cursor: Option<(u16, u16)>,
    flushes: usize,
}

impl BufferSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            calls: Vec::new(),
            cursor: None,
            flushes: 0,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn calls(&self) -> &[PaintCall] {
        &self.calls
    }

    /// Forget recorded calls; the buffer keeps its content.
    pub fn take_calls(&mut self) -> Vec<PaintCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn row(&self, y: u16) -> String {
        self.buffer.row_text(y)
    }

    /// Text of row `y` between columns `left` and `left + width`.
    pub fn text_at(&self, left: u16, y: u16, width: u16) -> String {
        self.row(y)
            .chars()
            .skip(left as usize)
            .take(width as usize)
            .collect()
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Surface for BufferSurface {
    fn paint(&mut self, left: u16, top: u16, text: &str, style: &Style) {
        self.buffer.paint(left, top, text, style);
        self.calls.push(PaintCall::Paint {
            left,
            top,
            text: text.to_string(),
            style: *style,
        });
    }

    fn clear(&mut self, rect: Rect, style: &Style) {
        self.buffer.fill(rect, style);
        self.calls.push(PaintCall::Clear { rect, style: *style });
    }

    fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_paints() {
        let mut surface = BufferSurface::new(10, 2);
        surface.clear(Rect::new(0, 0, 10, 2), &Style::default());
        surface.paint(3, 1, "map", &Style::default());
        assert_eq!(surface.row(1), "   map    ");
        assert_eq!(surface.text_at(3, 1, 3), "map");
        assert_eq!(surface.calls().len(), 2);
        assert!(matches!(surface.calls()[1], PaintCall::Paint { left: 3, top: 1, .. }));
    }
}
