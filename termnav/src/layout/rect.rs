/// A screen rectangle in cells.
///
/// `right()` and `bottom()` are inclusive: they name the last column and row
/// the rectangle covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn top(&self) -> u16 {
        self.y
    }

    pub const fn right(&self) -> u16 {
        (self.x + self.width).saturating_sub(1)
    }

    pub const fn bottom(&self) -> u16 {
        (self.y + self.height).saturating_sub(1)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        !self.is_empty() && x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Drop `rows` rows from the top, e.g. to make room for a header.
    pub fn below(self, rows: u16) -> Self {
        let rows = rows.min(self.height);
        Self {
            y: self.y + rows,
            height: self.height - rows,
            ..self
        }
    }

    /// Drop `columns` columns from the right edge.
    pub fn narrowed(self, columns: u16) -> Self {
        Self {
            width: self.width.saturating_sub(columns),
            ..self
        }
    }

    /// The first row only.
    pub fn first_row(self) -> Self {
        Self {
            height: self.height.min(1),
            ..self
        }
    }

    /// The single-column strip along the right edge.
    pub fn right_column(self) -> Self {
        Self {
            x: self.right(),
            width: self.width.min(1),
            ..self
        }
    }

    /// Split into `count` equally wide columns, left to right. Remainder
    /// columns are left unused.
    pub fn split_columns(self, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let width = self.width / count as u16;
        (0..count as u16)
            .map(|i| Rect::new(self.x + i * width, self.y, width, self.height))
            .collect()
    }
}
