use super::console::*;
use super::Style;

/// Named style tokens shared by every widget.
///
/// Widgets copy the tokens they need when they are constructed; nothing reads
/// the theme afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub content: Style,
    pub disabled: Style,
    pub selected: Style,
    pub selected_disabled: Style,
    pub highlighted: Style,
    pub preview: Style,
    pub text_input: Style,
    pub scrollbar_track: Style,
    pub scrollbar_thumb: Style,
    pub major_header: Style,
    pub minor_header: Style,
    pub separator: Style,
    pub controls: Style,
    pub error: Style,
    pub checked: Style,
    pub unchecked: Style,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            content: Style::new(BLACK, WHITE),
            disabled: Style::new(BLACK, DARK_GRAY),
            selected: Style::new(DARK_GRAY, WHITE),
            selected_disabled: Style::new(WHITE, DARK_GRAY),
            highlighted: Style::new(BLACK, WHITE),
            preview: Style::new(DARK_GRAY, GRAY),
            text_input: Style::new(DARK_GRAY, WHITE),
            scrollbar_track: Style::solid(DARK_GRAY),
            scrollbar_thumb: Style::solid(WHITE),
            major_header: Style::new(CYAN, BLACK),
            minor_header: Style::new(GRAY, BLACK),
            separator: Style::new(GRAY, BLACK),
            controls: Style::new(BLACK, WHITE),
            error: Style::new(BLACK, RED),
            checked: Style::new(DARK_GREEN, WHITE),
            unchecked: Style::new(DARK_RED, WHITE),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
