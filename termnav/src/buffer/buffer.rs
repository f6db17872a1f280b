use super::Cell;
use crate::layout::Rect;
use crate::text::char_width;
use crate::types::Style;

/// A grid of cells the size of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write `text` starting at (x, y). Wide characters take two cells, the
    /// second one marked as a continuation. Anything past the right edge of
    /// the buffer is dropped.
    pub fn paint(&mut self, x: u16, y: u16, text: &str, style: &Style) {
        let mut col = x as usize;
        for ch in text.chars() {
            let width = char_width(ch);
            if width == 0 {
                continue;
            }
            if col + width > self.width as usize {
                break;
            }
            self.set(col as u16, y, Cell::styled(ch, style));
            if width == 2 {
                let mut continuation = Cell::styled(' ', style);
                continuation.wide_continuation = true;
                self.set(col as u16 + 1, y, continuation);
            }
            col += width;
        }
    }

    /// Fill `rect` with blank cells in `style`.
    pub fn fill(&mut self, rect: Rect, style: &Style) {
        let blank = Cell::styled(' ', style);
        for y in rect.y..rect.y.saturating_add(rect.height) {
            for x in rect.x..rect.x.saturating_add(rect.width) {
                self.set(x, y, blank);
            }
        }
    }

    /// Characters of one row, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_clips_at_edge() {
        let mut buf = Buffer::new(4, 1);
        buf.paint(2, 0, "abc", &Style::default());
        assert_eq!(buf.row_text(0), "  ab");
    }

    #[test]
    fn test_paint_wide_char() {
        let mut buf = Buffer::new(4, 1);
        buf.paint(0, 0, "日x", &Style::default());
        assert!(buf.get(1, 0).is_some_and(|c| c.wide_continuation));
        assert_eq!(buf.row_text(0), "日x ");
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let old = Buffer::new(3, 2);
        let mut new = old.clone();
        new.paint(1, 1, "z", &Style::default());
        let changed: Vec<_> = new.diff(&old).map(|(x, y, c)| (x, y, c.char)).collect();
        assert_eq!(changed, vec![(1, 1, 'z')]);
    }
}
