//! Offset arithmetic shared by lists and editors.

/// Largest valid offset for `content` items shown `extent` at a time.
pub fn max_scroll(content: usize, extent: usize) -> usize {
    content.saturating_sub(extent)
}

/// Apply `delta` to `scroll`, keeping the result in `[0, max_scroll]`.
pub fn clamp_scroll(scroll: usize, delta: isize, content: usize, extent: usize) -> usize {
    let max = max_scroll(content, extent) as isize;
    (scroll as isize + delta).clamp(0, max.max(0)) as usize
}

/// Move `scroll` so `cursor` is inside `[scroll, scroll + extent)`.
///
/// Slack at the far end is taken back first: once scrolled, the window is
/// pulled back as far as the content allows. Returns true if the offset
/// changed.
pub fn follow(scroll: &mut usize, cursor: usize, content: usize, extent: usize) -> bool {
    let before = *scroll;
    if extent == 0 {
        return false;
    }

    if *scroll > 0 && content.saturating_sub(*scroll) < extent {
        *scroll = content.saturating_sub(extent);
    }

    if cursor >= *scroll + extent {
        *scroll = cursor + 1 - extent;
    } else if cursor < *scroll {
        *scroll = cursor;
    }

    *scroll != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        assert_eq!(clamp_scroll(0, -3, 10, 4), 0);
        assert_eq!(clamp_scroll(2, 100, 10, 4), 6);
        assert_eq!(clamp_scroll(0, 5, 3, 4), 0);
        assert_eq!(clamp_scroll(1, 2, 10, 4), 3);
    }

    #[test]
    fn test_follow_forward_and_back() {
        let mut scroll = 0;
        assert!(follow(&mut scroll, 12, 13, 10));
        assert_eq!(scroll, 3);
        assert!(follow(&mut scroll, 1, 13, 10));
        assert_eq!(scroll, 1);
        assert!(!follow(&mut scroll, 5, 13, 10));
    }

    #[test]
    fn test_follow_reclaims_slack() {
        // Text shrank from 20 to 12 while scrolled to 10
        let mut scroll = 10;
        assert!(follow(&mut scroll, 11, 12, 8));
        assert_eq!(scroll, 4);
    }
}
