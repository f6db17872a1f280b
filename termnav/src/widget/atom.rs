use crate::surface::Surface;
use crate::text::{display_width, fit};
use crate::types::{HorizontalAlignment, SelectionState, Style, Theme};

const CHECK_MARK: &str = "x";
const NO_CHECK_MARK: &str = " ";

/// What an atom renders between its selection markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
    Text,
    CheckBox { checked: bool },
}

/// Style tokens an atom switches between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomStyles {
    pub normal: Style,
    pub disabled: Style,
    pub selected: Style,
    pub selected_disabled: Style,
    pub highlighted: Style,
    pub checked: Style,
    pub unchecked: Style,
}

impl AtomStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            normal: theme.content,
            disabled: theme.disabled,
            selected: theme.selected,
            selected_disabled: theme.selected_disabled,
            highlighted: theme.highlighted,
            checked: theme.checked,
            unchecked: theme.unchecked,
        }
    }
}

impl Default for AtomStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// A single-line selectable entry carrying an arbitrary payload.
///
/// `top` is signed: a list shifts atoms above its viewport to negative rows
/// while scrolling, and only paints the visible ones.
#[derive(Debug, Clone)]
pub struct Atom<T = ()> {
    left: u16,
    top: i32,
    width: u16,
    value: String,
    payload: T,
    kind: AtomKind,
    state: SelectionState,
    enabled: bool,
    visible: bool,
    styles: AtomStyles,
}

impl<T> Atom<T> {
    /// A text atom just wide enough for `value` and its markers.
    pub fn new(value: impl Into<String>, payload: T) -> Self {
        let value = value.into();
        let width = (display_width(&value) + 2).min(u16::MAX as usize) as u16;
        Self {
            left: 0,
            top: 0,
            width,
            value,
            payload,
            kind: AtomKind::Text,
            state: SelectionState::None,
            enabled: true,
            visible: true,
            styles: AtomStyles::default(),
        }
    }

    pub fn check_box(value: impl Into<String>, checked: bool, payload: T) -> Self {
        let mut atom = Self::new(value, payload);
        atom.width = atom.width.saturating_add(4);
        atom.kind = AtomKind::CheckBox { checked };
        atom
    }

    pub fn at(mut self, left: u16, top: i32) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn with_styles(mut self, styles: AtomStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub fn kind(&self) -> AtomKind {
        self.kind
    }

    /// `None` for text atoms.
    pub fn is_checked(&self) -> Option<bool> {
        match self.kind {
            AtomKind::Text => None,
            AtomKind::CheckBox { checked } => Some(checked),
        }
    }

    pub fn set_checked(&mut self, value: bool) {
        if let AtomKind::CheckBox { checked } = &mut self.kind {
            *checked = value;
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn set_state(&mut self, state: SelectionState) {
        self.state = state;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn left(&self) -> u16 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn set_top(&mut self, top: i32) {
        self.top = top;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn select(&mut self, surface: &mut dyn Surface) {
        self.state = SelectionState::Selected;
        self.paint(surface);
    }

    pub fn highlight(&mut self, surface: &mut dyn Surface) {
        self.state = SelectionState::Highlighted;
        self.paint(surface);
    }

    pub fn deselect(&mut self, surface: &mut dyn Surface) {
        self.state = SelectionState::None;
        self.paint(surface);
    }

    /// Current style token, from selection state and enabled flag.
    pub fn style(&self) -> Style {
        let s = &self.styles;
        match (self.state, self.enabled) {
            (SelectionState::None, true) => s.normal,
            (SelectionState::None, false) => s.disabled,
            (SelectionState::Selected, true) => s.selected,
            (SelectionState::Selected, false) => s.selected_disabled,
            (SelectionState::Highlighted, true) => s.highlighted,
            (SelectionState::Highlighted, false) => s.selected_disabled,
        }
    }

    fn markers(&self) -> (&'static str, &'static str) {
        match self.state {
            SelectionState::None => (" ", " "),
            SelectionState::Selected | SelectionState::Highlighted => ("[", "]"),
        }
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        if !self.visible || self.top < 0 || self.width < 2 {
            return;
        }
        let top = self.top.min(u16::MAX as i32) as u16;
        let style = self.style();
        let (open, close) = self.markers();
        let inner = self.width as usize - 2;

        match self.kind {
            AtomKind::Text => {
                let line = format!("{open}{}{close}", fit(&self.value, inner, HorizontalAlignment::Left));
                surface.paint(self.left, top, &line, &style);
            }
            AtomKind::CheckBox { checked } => {
                let (mark, mark_style) = if checked {
                    (CHECK_MARK, self.styles.checked)
                } else {
                    (NO_CHECK_MARK, self.styles.unchecked)
                };
                let label = fit(&format!("] {}", self.value), inner.saturating_sub(2), HorizontalAlignment::Left);
                surface.paint(self.left, top, &format!("{open}["), &style);
                surface.paint(self.left + 2, top, mark, &mark_style);
                surface.paint(self.left + 3, top, &format!("{label}{close}"), &style);
            }
        }
    }
}
