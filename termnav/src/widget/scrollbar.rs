use super::Paintable;
use crate::layout::Rect;
use crate::surface::Surface;
use crate::types::Style;

/// Position and size of the thumb, in rows from the top of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbGeometry {
    pub top: u16,
    pub height: u16,
}

impl ThumbGeometry {
    /// Thumb for a bar of `height` rows over content that can scroll
    /// `max_scroll` rows, currently scrolled by `scroll`. `None` when there
    /// is nothing to scroll.
    ///
    /// Away from the two extremes the thumb keeps at least one track cell
    /// visible on either side, so the bar shows there is more content.
    pub fn compute(height: u16, max_scroll: usize, scroll: usize) -> Option<Self> {
        if max_scroll == 0 || height == 0 {
            return None;
        }
        let h = height as usize;
        let scroll = scroll.min(max_scroll);

        let thumb = (h * h / (h + max_scroll)).clamp(1, h);
        let travel = h - thumb;

        let mut top = (scroll * (travel + 1) / max_scroll).min(travel);
        if scroll > 0 {
            top = top.max(1);
        }
        if scroll < max_scroll && top + thumb >= h {
            top = top.saturating_sub(1);
        }
        let top = top.min(travel);

        Some(Self {
            top: top as u16,
            height: thumb as u16,
        })
    }

    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// Vertical bar along the right edge of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Scrollbar {
    rect: Rect,
    track: Style,
    thumb: Style,
    background: Style,
    force_show: bool,
    max_scroll: usize,
    scroll: usize,
}

impl Scrollbar {
    pub fn new(rect: Rect, track: Style, thumb: Style, background: Style) -> Self {
        Self {
            rect,
            track,
            thumb,
            background,
            force_show: false,
            max_scroll: 0,
            scroll: 0,
        }
    }

    /// Draw an empty track even when the content fits.
    pub fn force_show(mut self, force: bool) -> Self {
        self.force_show = force;
        self
    }

    pub fn is_forced(&self) -> bool {
        self.force_show
    }

    pub fn set_force_show(&mut self, force: bool) {
        self.force_show = force;
    }

    pub fn update(&mut self, scroll: usize, max_scroll: usize) {
        self.scroll = scroll;
        self.max_scroll = max_scroll;
    }

    pub fn geometry(&self) -> Option<ThumbGeometry> {
        ThumbGeometry::compute(self.rect.height, self.max_scroll, self.scroll)
    }

    pub fn is_shown(&self) -> bool {
        self.max_scroll > 0 || self.force_show
    }
}

impl Paintable for Scrollbar {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn style(&self) -> Style {
        self.background
    }

    fn paint(&self, surface: &mut dyn Surface) {
        if self.rect.is_empty() {
            return;
        }
        if !self.is_shown() {
            self.clear(surface);
            return;
        }

        match self.geometry() {
            None => surface.clear(self.rect, &self.track),
            Some(thumb) => {
                let below = thumb.top + thumb.height;
                let x = self.rect.x;
                let segments = [
                    (0, thumb.top, &self.track),
                    (thumb.top, thumb.height, &self.thumb),
                    (below, self.rect.height - below, &self.track),
                ];
                for (offset, rows, style) in segments {
                    if rows > 0 {
                        surface.clear(Rect::new(x, self.rect.y + offset, 1, rows), style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(height: u16, max_scroll: usize, scroll: usize) -> (u16, u16) {
        let g = ThumbGeometry::compute(height, max_scroll, scroll).expect("scrollable");
        (g.top, g.height)
    }

    #[test]
    fn test_no_thumb_without_overflow() {
        assert_eq!(ThumbGeometry::compute(10, 0, 0), None);
    }

    #[test]
    fn test_thumb_height() {
        // 10 rows over 20 items: 10 / 20 * 10
        assert_eq!(thumb(10, 10, 0).1, 5);
        assert_eq!(thumb(3, 100, 0).1, 1);
    }

    #[test]
    fn test_extremes_touch_edges() {
        assert_eq!(thumb(10, 10, 0).0, 0);
        assert_eq!(thumb(10, 10, 10).0, 5);
    }

    #[test]
    fn test_gap_kept_between_extremes() {
        // One row in: thumb leaves the top edge
        assert_eq!(thumb(10, 10, 1).0, 1);
        // One row short of the end: thumb stays off the bottom edge
        let (top, height) = thumb(10, 10, 9);
        assert!(top + height < 10);
        assert_eq!(thumb(3, 100, 99).0, 1);
    }

    #[test]
    fn test_thumb_stays_inside_bar() {
        for height in 1..12u16 {
            for max in 1..30usize {
                for scroll in 0..=max {
                    let (top, h) = thumb(height, max, scroll);
                    assert!(top + h <= height, "h={height} max={max} scroll={scroll}");
                }
            }
        }
    }
}
