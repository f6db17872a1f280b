//! The layout every window shares.
//!
//! ```text
//! row 0        title
//! rows 1..     two-column menu
//!              separator
//!              selection prompt
//!              separator
//!              log (4 rows)
//!              (blank)
//! last row     controls
//! ```

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use termnav::{
    ColumnView, Label, Paintable, Rect, Region, SelectionPrompt, Style, Surface, TextBox, Theme,
};

use crate::error::AppError;

const TITLE_HEIGHT: u16 = 1;
const MENU_PROMPT_SEPARATOR_HEIGHT: u16 = 1;
const PROMPT_HEIGHT: u16 = 1;
const PROMPT_LOG_SEPARATOR_HEIGHT: u16 = 1;
const LOG_HEIGHT: u16 = 4;
const LOG_CONTROLS_DISTANCE: u16 = 1;
const CONTROLS_HEIGHT: u16 = 1;

const BOTTOM_HEIGHT: u16 = MENU_PROMPT_SEPARATOR_HEIGHT
    + PROMPT_HEIGHT
    + PROMPT_LOG_SEPARATOR_HEIGHT
    + LOG_HEIGHT
    + LOG_CONTROLS_DISTANCE
    + CONTROLS_HEIGHT;

const MENU_COLUMNS: usize = 2;

pub const CONTROLS: &str =
    "Arrow Keys/PgUp/PgDown: Navigate    Enter/Space: Confirm    Escape: Back/Cancel    1-9: Switch Window";
pub const CONTROLS_SHORT: &str =
    "Arrow Keys: Navigate   Enter: Confirm   Escape: Back/Cancel   1-9: Switch Window";

/// A text box shared between a window and the selection listeners that
/// write into it.
#[derive(Clone)]
pub struct Pane(Rc<RefCell<TextBox>>);

impl Pane {
    pub fn new(text_box: TextBox) -> Self {
        Self(Rc::new(RefCell::new(text_box)))
    }

    /// Do not hold on to the guard across a call that can notify a
    /// listener writing to the same pane.
    pub fn get(&self) -> RefMut<'_, TextBox> {
        self.0.borrow_mut()
    }
}

impl Paintable for Pane {
    fn rect(&self) -> Rect {
        self.0.borrow().rect()
    }

    fn style(&self) -> Style {
        self.0.borrow().style()
    }

    fn paint(&self, surface: &mut dyn Surface) {
        self.0.borrow().paint(surface);
    }
}

/// Title, menu, prompt row, log and controls of a standard window.
pub struct Chrome {
    area: Rect,
    style: Style,
    title: Label,
    pub menu: ColumnView,
    separators: [Region; 2],
    pub prompt: SelectionPrompt,
    pub log: Pane,
    controls: Label,
}

impl Chrome {
    pub fn new(title: &str, title_style: Style, size: (u16, u16), theme: &Theme) -> Self {
        let (width, height) = size;
        let row = |y: u16, rows: u16| Rect::new(0, y, width, rows);

        let controls_top = height.saturating_sub(CONTROLS_HEIGHT);
        let log_top = controls_top.saturating_sub(LOG_CONTROLS_DISTANCE + LOG_HEIGHT);
        let lower_separator_top = log_top.saturating_sub(PROMPT_LOG_SEPARATOR_HEIGHT);
        let prompt_top = lower_separator_top.saturating_sub(PROMPT_HEIGHT);
        let upper_separator_top = prompt_top.saturating_sub(MENU_PROMPT_SEPARATOR_HEIGHT);
        let menu_height = height.saturating_sub(TITLE_HEIGHT + BOTTOM_HEIGHT);
        let controls = if usize::from(width) < CONTROLS.len() {
            CONTROLS_SHORT
        } else {
            CONTROLS
        };

        Self {
            area: Rect::from_size(width, height),
            style: theme.content,
            title: Label::new(row(0, TITLE_HEIGHT), title_style, title).centered(),
            menu: ColumnView::new(row(TITLE_HEIGHT, menu_height), MENU_COLUMNS, theme),
            separators: [
                Region::new(row(upper_separator_top, MENU_PROMPT_SEPARATOR_HEIGHT), theme.separator),
                Region::new(row(lower_separator_top, PROMPT_LOG_SEPARATOR_HEIGHT), theme.separator),
            ],
            prompt: SelectionPrompt::new(row(prompt_top, PROMPT_HEIGHT), theme),
            log: Pane::new(TextBox::new(row(log_top, LOG_HEIGHT), theme.content)),
            controls: Label::new(row(controls_top, CONTROLS_HEIGHT), theme.controls, controls),
        }
    }

    pub fn title(&self) -> &str {
        self.title.text()
    }

    /// Put a failure reported by the library into the log.
    pub fn report(&self, message: String, surface: &mut dyn Surface) {
        let error = AppError::Collaborator(message);
        log::warn!("{}", error);
        self.log.get().write_line(error.to_string(), surface);
    }
}

impl Paintable for Chrome {
    fn rect(&self) -> Rect {
        self.area
    }

    fn style(&self) -> Style {
        self.style
    }

    fn paint(&self, surface: &mut dyn Surface) {
        self.clear(surface);
        self.title.paint(surface);
        self.menu.paint(surface);
        for separator in &self.separators {
            separator.paint(surface);
        }
        self.prompt.paint(surface);
        self.log.paint(surface);
        self.controls.paint(surface);
    }
}

#[cfg(test)]
mod tests {
    use termnav::BufferSurface;

    use super::*;

    fn chrome() -> Chrome {
        Chrome::new("Map Installer", Theme::default().major_header, (120, 24), &Theme::default())
    }

    #[test]
    fn test_bottom_aligned_layout() {
        let chrome = chrome();
        assert_eq!(chrome.controls.rect().y, 23);
        assert_eq!(chrome.log.rect(), Rect::new(0, 18, 120, 4));
        assert_eq!(chrome.separators[1].rect().y, 17);
        assert_eq!(chrome.prompt.rect().y, 16);
        assert_eq!(chrome.separators[0].rect().y, 15);
        assert_eq!(chrome.menu.rect(), Rect::new(0, 1, 120, 14));
    }

    #[test]
    fn test_paint_title_and_controls() {
        let chrome = chrome();
        let mut surface = BufferSurface::new(120, 24);
        chrome.paint(&mut surface);
        assert_eq!(surface.row(0).trim(), "Map Installer");
        assert_eq!(surface.row(23).trim_end(), CONTROLS);
        assert_eq!(chrome.title(), "Map Installer");
    }

    #[test]
    fn test_report_writes_to_log() {
        let chrome = chrome();
        let mut surface = BufferSurface::new(120, 24);
        chrome.report("disk full".to_string(), &mut surface);
        assert_eq!(chrome.log.get().lines()[0], "ERROR: disk full");
        assert!(surface.row(18).starts_with("ERROR: disk full"));
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let chrome = Chrome::new("T", Style::default(), (10, 3), &Theme::default());
        assert_eq!(chrome.menu.rect().height, 0);
        assert_eq!(chrome.controls.rect().y, 2);
    }

    #[test]
    fn test_short_controls_on_narrow_terminal() {
        let chrome = Chrome::new("T", Style::default(), (80, 24), &Theme::default());
        let mut surface = BufferSurface::new(80, 24);
        chrome.paint(&mut surface);
        assert_eq!(surface.row(23), CONTROLS_SHORT);
    }
}
