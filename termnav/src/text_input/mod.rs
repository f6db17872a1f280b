mod line;
mod multiline;

pub use line::LineEditor;
pub use multiline::{Caret, MultiLineEditor};

use crate::error::Result;
use crate::event::Key;
use crate::keymap::Command;
use crate::layout::Rect;
use crate::surface::Surface;
use crate::text::{fit, span_text, wrap_spans};
use crate::types::{HorizontalAlignment, Style, Theme};
use crate::ui::Ui;
use crate::widget::Paintable;

/// Result of handling an editing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// Text was modified.
    Changed,
    /// Handled, text unchanged (cursor movement, delete at an edge).
    Handled,
    /// Not an editing command.
    Ignored,
}

/// How a text prompt starts and which ways out it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    /// Confirm is accepted on an empty buffer.
    pub allow_empty: bool,
    /// Cancel is accepted at all.
    pub can_cancel: bool,
    /// Start from the widget's current text instead of an empty buffer.
    pub pre_write_current_text: bool,
    /// Start from this text. Wins over `pre_write_current_text` when not empty.
    pub pre_written_text: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            allow_empty: true,
            can_cancel: false,
            pre_write_current_text: false,
            pre_written_text: String::new(),
        }
    }
}

impl PromptOptions {
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn can_cancel(mut self, can_cancel: bool) -> Self {
        self.can_cancel = can_cancel;
        self
    }

    pub fn pre_write_current_text(mut self, pre_write: bool) -> Self {
        self.pre_write_current_text = pre_write;
        self
    }

    pub fn pre_written_text(mut self, text: impl Into<String>) -> Self {
        self.pre_written_text = text.into();
        self
    }

    fn initial_text(&self, current: &str) -> String {
        if !self.pre_written_text.is_empty() {
            self.pre_written_text.clone()
        } else if self.pre_write_current_text {
            current.to_string()
        } else {
            String::new()
        }
    }
}

/// Editable text field. The text only changes when a prompt is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    rect: Rect,
    style: Style,
    preview_style: Style,
    text: String,
    preview: String,
    default_options: PromptOptions,
}

impl TextInput {
    pub fn new(rect: Rect, theme: &Theme) -> Self {
        Self {
            rect,
            style: theme.text_input,
            preview_style: theme.preview,
            text: String::new(),
            preview: String::new(),
            default_options: PromptOptions::default(),
        }
    }

    /// Placeholder shown while the text is empty.
    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = preview.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_default_options(mut self, options: PromptOptions) -> Self {
        self.default_options = options;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn prompt_text(&mut self, ui: &mut Ui<'_>) -> Result<bool> {
        let options = self.default_options.clone();
        self.prompt_text_with(ui, &options)
    }

    /// Edit on a single line. Returns true if confirmed; on cancel the text
    /// is left as it was.
    pub fn prompt_text_with(&mut self, ui: &mut Ui<'_>, options: &PromptOptions) -> Result<bool> {
        log::debug!("text prompt at {:?}", self.rect);
        let result = self.edit_line(ui, options);
        ui.surface.set_cursor(None);
        self.paint(ui.surface);
        result
    }

    pub fn prompt_text_multiline(&mut self, ui: &mut Ui<'_>) -> Result<bool> {
        let options = self.default_options.clone();
        self.prompt_text_multiline_with(ui, &options)
    }

    /// Edit word-wrapped over the whole rectangle. Shift+Enter inserts a
    /// line break.
    pub fn prompt_text_multiline_with(&mut self, ui: &mut Ui<'_>, options: &PromptOptions) -> Result<bool> {
        log::debug!("multi-line text prompt at {:?}", self.rect);
        let result = self.edit_multiline(ui, options);
        ui.surface.set_cursor(None);
        self.paint(ui.surface);
        result
    }

    fn edit_line(&mut self, ui: &mut Ui<'_>, options: &PromptOptions) -> Result<bool> {
        let mut editor = LineEditor::new(options.initial_text(&self.text), self.rect.width as usize);

        loop {
            self.paint_line_editor(&editor, ui.surface);
            let x = self.rect.x + editor.cursor_column() as u16;
            ui.surface.set_cursor(Some((x, self.rect.y)));

            let press = ui.next_key()?;
            match ui.keymaps.text.lookup(&press) {
                Some(Command::Confirm) => {
                    if !editor.is_empty() || options.allow_empty {
                        self.text = editor.into_text();
                        return Ok(true);
                    }
                }
                Some(Command::Cancel) => {
                    if options.can_cancel {
                        return Ok(false);
                    }
                }
                Some(command) => {
                    editor.apply(command);
                }
                None => {
                    if let Some(c) = press.printable() {
                        editor.insert(c);
                    }
                }
            }
        }
    }

    fn edit_multiline(&mut self, ui: &mut Ui<'_>, options: &PromptOptions) -> Result<bool> {
        let mut editor = MultiLineEditor::new(
            options.initial_text(&self.text),
            self.rect.width as usize,
            self.rect.height as usize,
        );

        loop {
            self.paint_multiline_editor(&editor, ui.surface);
            let (x, y) = editor.caret_cell();
            ui.surface.set_cursor(Some((self.rect.x + x as u16, self.rect.y + y as u16)));

            let press = ui.next_key()?;
            if press.key == Key::Enter && press.modifiers.shift {
                editor.insert_newline();
                continue;
            }

            match ui.keymaps.text.lookup(&press) {
                Some(Command::Confirm) => {
                    if !editor.is_empty() || options.allow_empty {
                        self.text = editor.into_text();
                        return Ok(true);
                    }
                }
                Some(Command::Cancel) => {
                    if options.can_cancel {
                        return Ok(false);
                    }
                }
                Some(command) => {
                    editor.apply(command);
                }
                None => {
                    if let Some(c) = press.printable() {
                        editor.insert(c);
                    }
                }
            }
        }
    }

    fn paint_line_editor(&self, editor: &LineEditor, surface: &mut dyn Surface) {
        if editor.is_empty() {
            self.paint_preview(surface);
        } else {
            surface.paint(self.rect.x, self.rect.y, &editor.visible_text(), &self.style);
        }
    }

    fn paint_multiline_editor(&self, editor: &MultiLineEditor, surface: &mut dyn Surface) {
        if editor.is_empty() {
            self.paint_preview(surface);
            return;
        }
        let rows = editor.visible_lines().map(|(_, text)| text);
        self.paint_rows(rows, &self.style, surface);
    }

    fn paint_preview(&self, surface: &mut dyn Surface) {
        let rows = self.preview.split('\n').take(self.rect.height as usize).map(str::to_string);
        self.paint_rows(rows, &self.preview_style, surface);
    }

    /// Paint `rows` from the top, then blank the rows below them.
    fn paint_rows(&self, rows: impl Iterator<Item = String>, style: &Style, surface: &mut dyn Surface) {
        let width = self.rect.width as usize;
        let mut painted: u16 = 0;
        for (row, text) in rows.take(self.rect.height as usize).enumerate() {
            let line = fit(&text, width, HorizontalAlignment::Left);
            surface.paint(self.rect.x, self.rect.y + row as u16, &line, style);
            painted += 1;
        }
        if painted < self.rect.height {
            surface.clear(self.rect.below(painted), &self.style);
        }
    }
}

impl Paintable for TextInput {
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
        if self.text.is_empty() {
            self.paint_preview(surface);
        } else if self.rect.height == 1 {
            let text: String = self.text.chars().filter(|c| *c != '\n').collect();
            self.paint_rows(std::iter::once(text), &self.style, surface);
        } else {
            let rows = wrap_spans(&self.text, self.rect.width as usize)
                .into_iter()
                .map(|span| span_text(&self.text, &span));
            self.paint_rows(rows, &self.style, surface);
        }
    }
}
