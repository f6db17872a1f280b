use super::EditResult;
use crate::keymap::Command;
use crate::scroll;
use crate::text::char_to_byte_index;

/// Single-line editing state: text, character-indexed cursor and the
/// horizontal scroll that keeps the cursor inside `width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEditor {
    text: String,
    cursor: usize,
    scroll: usize,
    width: usize,
}

impl LineEditor {
    /// Start editing `text` with the cursor after its last character.
    pub fn new(text: impl Into<String>, width: usize) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        let mut editor = Self {
            text,
            cursor,
            scroll: 0,
            width: width.max(1),
        };
        editor.follow_cursor();
        editor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) -> EditResult {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
        self.follow_cursor();
        EditResult::Changed
    }

    /// Backspace.
    pub fn delete_previous(&mut self) -> EditResult {
        if self.cursor == 0 {
            return EditResult::Handled;
        }
        self.cursor -= 1;
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        self.follow_cursor();
        EditResult::Changed
    }

    /// Delete the character under the cursor.
    pub fn delete_current(&mut self) -> EditResult {
        if self.cursor >= self.char_count() {
            return EditResult::Handled;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        self.follow_cursor();
        EditResult::Changed
    }

    pub fn move_left(&mut self) -> EditResult {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor();
        EditResult::Handled
    }

    pub fn move_right(&mut self) -> EditResult {
        self.cursor = (self.cursor + 1).min(self.char_count());
        self.follow_cursor();
        EditResult::Handled
    }

    pub fn move_to_start(&mut self) -> EditResult {
        self.cursor = 0;
        self.follow_cursor();
        EditResult::Handled
    }

    pub fn move_to_end(&mut self) -> EditResult {
        self.cursor = self.char_count();
        self.follow_cursor();
        EditResult::Handled
    }

    /// Run an editing command. Commands that mean nothing on one line are
    /// ignored.
    pub fn apply(&mut self, command: Command) -> EditResult {
        match command {
            Command::NavigateLeft => self.move_left(),
            Command::NavigateRight => self.move_right(),
            Command::GoToStart => self.move_to_start(),
            Command::GoToEnd => self.move_to_end(),
            Command::DeletePreviousCharacter => self.delete_previous(),
            Command::DeleteCurrentCharacter => self.delete_current(),
            _ => EditResult::Ignored,
        }
    }

    /// The caret needs one cell past the last character.
    fn follow_cursor(&mut self) -> bool {
        let content = self.char_count() + 1;
        scroll::follow(&mut self.scroll, self.cursor, content, self.width)
    }

    /// The slice of text inside the viewport, padded to `width`.
    pub fn visible_text(&self) -> String {
        let mut visible: String = self.text.chars().skip(self.scroll).take(self.width).collect();
        let shown = visible.chars().count();
        visible.extend(std::iter::repeat(' ').take(self.width - shown));
        visible
    }

    /// Cursor column relative to the viewport.
    pub fn cursor_column(&self) -> usize {
        self.cursor - self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backspace_at_end() {
        let mut editor = LineEditor::new("abc", 10);
        assert_eq!(editor.cursor(), 3);
        assert_eq!(editor.apply(Command::DeletePreviousCharacter), EditResult::Changed);
        assert_eq!(editor.text(), "ab");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_delete_current_removes_one_char() {
        let mut editor = LineEditor::new("abcd", 10);
        editor.move_to_start();
        editor.move_right();
        editor.delete_current();
        assert_eq!(editor.text(), "acd");
        assert_eq!(editor.cursor(), 1);
        editor.move_to_end();
        assert_eq!(editor.delete_current(), EditResult::Handled);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut editor = LineEditor::new("ac", 10);
        editor.move_left();
        editor.insert('b');
        assert_eq!(editor.text(), "abc");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_multibyte_text() {
        let mut editor = LineEditor::new("héllo", 10);
        editor.move_to_start();
        editor.move_right();
        editor.delete_current();
        assert_eq!(editor.text(), "hllo");
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let mut editor = LineEditor::new("", 4);
        for c in "abcdef".chars() {
            editor.insert(c);
        }
        // Cursor at 6 needs columns 3..=6 in view
        assert_eq!(editor.scroll(), 3);
        assert_eq!(editor.visible_text(), "def ");
        assert_eq!(editor.cursor_column(), 3);

        editor.move_to_start();
        assert_eq!(editor.scroll(), 0);
        assert_eq!(editor.visible_text(), "abcd");
    }

    #[test]
    fn test_slack_is_reclaimed_after_delete() {
        let mut editor = LineEditor::new("abcdefgh", 4);
        assert_eq!(editor.scroll(), 5);
        editor.move_to_start();
        editor.move_to_end();
        for _ in 0..4 {
            editor.delete_previous();
        }
        assert_eq!(editor.text(), "abcd");
        assert_eq!(editor.scroll(), 1);
        assert_eq!(editor.visible_text(), "bcd ");
    }

    #[test]
    fn test_vertical_commands_are_ignored() {
        let mut editor = LineEditor::new("x", 4);
        assert_eq!(editor.apply(Command::NavigateUp), EditResult::Ignored);
    }
}
