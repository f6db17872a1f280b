use super::EditResult;
use crate::keymap::Command;
use crate::scroll;
use crate::text::{char_to_byte_index, span_text, wrap_spans, LineSpan};

/// Caret position: the absolute character offset into the unwrapped text and
/// the (row, column) it falls on in the wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    pub offset: usize,
    pub row: usize,
    pub column: usize,
}

/// Word-wrapped editing state.
///
/// The text is the single source of truth. `lines` is derived from it by
/// [`wrap_spans`], and the caret's row and column are derived from its
/// offset by `reconcile`, which is the only place that writes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLineEditor {
    text: String,
    char_count: usize,
    width: usize,
    height: usize,
    lines: Vec<LineSpan>,
    caret: Caret,
    scroll: usize,
}

impl MultiLineEditor {
    /// Start editing `text` with the caret after its last character.
    pub fn new(text: impl Into<String>, width: usize, height: usize) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        let mut editor = Self {
            text,
            char_count,
            width: width.max(1),
            height: height.max(1),
            lines: Vec::new(),
            caret: Caret {
                offset: char_count,
                ..Caret::default()
            },
            scroll: 0,
        };
        editor.rewrap();
        editor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn lines(&self) -> &[LineSpan] {
        &self.lines
    }

    pub fn line_text(&self, row: usize) -> Option<String> {
        self.lines.get(row).map(|span| span_text(&self.text, span))
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Place the caret at an absolute offset, clamped to the text.
    pub fn set_offset(&mut self, offset: usize) {
        self.caret.offset = offset.min(self.char_count);
        self.reconcile();
    }

    /// Derive the caret's row and column from its offset.
    fn reconcile(&mut self) {
        let offset = self.caret.offset;
        let row = self
            .lines
            .partition_point(|line| line.start <= offset)
            .saturating_sub(1);
        let start = self.lines.get(row).map_or(0, |line| line.start);
        self.caret.row = row;
        self.caret.column = offset - start;
        scroll::follow(&mut self.scroll, row, self.lines.len(), self.height);
    }

    /// Re-wrap after a structural edit, then reconcile.
    fn rewrap(&mut self) {
        self.lines = wrap_spans(&self.text, self.width);
        self.reconcile();
    }

    pub fn insert(&mut self, c: char) -> EditResult {
        let byte_pos = char_to_byte_index(&self.text, self.caret.offset);
        self.text.insert(byte_pos, c);
        self.char_count += 1;
        self.caret.offset += 1;
        self.rewrap();
        EditResult::Changed
    }

    pub fn insert_newline(&mut self) -> EditResult {
        self.insert('\n')
    }

    pub fn delete_previous(&mut self) -> EditResult {
        if self.caret.offset == 0 {
            return EditResult::Handled;
        }
        self.caret.offset -= 1;
        self.remove_at_caret();
        EditResult::Changed
    }

    pub fn delete_current(&mut self) -> EditResult {
        if self.caret.offset >= self.char_count {
            return EditResult::Handled;
        }
        self.remove_at_caret();
        EditResult::Changed
    }

    fn remove_at_caret(&mut self) {
        let byte_pos = char_to_byte_index(&self.text, self.caret.offset);
        self.text.remove(byte_pos);
        self.char_count -= 1;
        self.rewrap();
    }

    pub fn move_left(&mut self) -> EditResult {
        self.set_offset(self.caret.offset.saturating_sub(1));
        EditResult::Handled
    }

    pub fn move_right(&mut self) -> EditResult {
        self.set_offset(self.caret.offset + 1);
        EditResult::Handled
    }

    pub fn move_up(&mut self) -> EditResult {
        if let Some(row) = self.caret.row.checked_sub(1) {
            self.move_to_row(row);
        }
        EditResult::Handled
    }

    pub fn move_down(&mut self) -> EditResult {
        let row = self.caret.row + 1;
        if row < self.lines.len() {
            self.move_to_row(row);
        }
        EditResult::Handled
    }

    /// Same column on another row, clamped to where the caret may rest.
    fn move_to_row(&mut self, row: usize) {
        let line = self.lines[row];
        let column = self.caret.column.min(line.caret_limit());
        self.set_offset(line.start + column);
    }

    pub fn move_to_line_start(&mut self) -> EditResult {
        let line = self.current_line();
        self.set_offset(line.start);
        EditResult::Handled
    }

    pub fn move_to_line_end(&mut self) -> EditResult {
        let line = self.current_line();
        self.set_offset(line.start + line.caret_limit());
        EditResult::Handled
    }

    fn current_line(&self) -> LineSpan {
        self.lines.get(self.caret.row).copied().unwrap_or(LineSpan {
            start: 0,
            len: 0,
            continued: false,
        })
    }

    pub fn apply(&mut self, command: Command) -> EditResult {
        match command {
            Command::NavigateLeft => self.move_left(),
            Command::NavigateRight => self.move_right(),
            Command::NavigateUp => self.move_up(),
            Command::NavigateDown => self.move_down(),
            Command::GoToStart => self.move_to_line_start(),
            Command::GoToEnd => self.move_to_line_end(),
            Command::DeletePreviousCharacter => self.delete_previous(),
            Command::DeleteCurrentCharacter => self.delete_current(),
            _ => EditResult::Ignored,
        }
    }

    /// Rows inside the viewport as (row index, text).
    pub fn visible_lines(&self) -> impl Iterator<Item = (usize, String)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(self.height)
            .map(|(row, span)| (row, span_text(&self.text, span)))
    }

    /// Caret cell relative to the viewport. The column stays on the last
    /// cell when the caret rests after a full-width line.
    pub fn caret_cell(&self) -> (usize, usize) {
        let x = self.caret.column.min(self.width - 1);
        let y = self.caret.row.saturating_sub(self.scroll);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unwrap_offset(editor: &MultiLineEditor) -> usize {
        let caret = editor.caret();
        editor.lines()[caret.row].start + caret.column
    }

    #[test]
    fn test_offset_resolves_to_wrapped_row() {
        let mut editor = MultiLineEditor::new("hello world", 5, 3);
        assert_eq!(editor.line_text(0).as_deref(), Some("hello"));
        assert_eq!(editor.line_text(1).as_deref(), Some("world"));
        editor.set_offset(6);
        assert_eq!((editor.caret().row, editor.caret().column), (1, 0));
        editor.set_offset(5);
        assert_eq!((editor.caret().row, editor.caret().column), (0, 5));
    }

    #[test]
    fn test_starts_at_end() {
        let editor = MultiLineEditor::new("one two three", 7, 3);
        let caret = editor.caret();
        assert_eq!(caret.offset, 13);
        assert_eq!((caret.row, caret.column), (1, 5));
    }

    #[test]
    fn test_insert_wraps_to_next_line() {
        let mut editor = MultiLineEditor::new("hello", 5, 3);
        editor.insert(' ');
        editor.insert('w');
        assert_eq!(editor.lines().len(), 2);
        assert_eq!((editor.caret().row, editor.caret().column), (1, 1));
        assert_eq!(unwrap_offset(&editor), editor.caret().offset);
    }

    #[test]
    fn test_newline_starts_row() {
        let mut editor = MultiLineEditor::new("ab", 10, 3);
        editor.set_offset(1);
        editor.insert_newline();
        assert_eq!(editor.text(), "a\nb");
        assert_eq!((editor.caret().row, editor.caret().column), (1, 0));
        editor.delete_previous();
        assert_eq!(editor.text(), "ab");
        assert_eq!((editor.caret().row, editor.caret().column), (0, 1));
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut editor = MultiLineEditor::new("abcdefg hi", 8, 3);
        editor.set_offset(6);
        editor.move_down();
        // "hi" allows columns 0..=2
        assert_eq!((editor.caret().row, editor.caret().column), (1, 2));
        editor.move_up();
        assert_eq!((editor.caret().row, editor.caret().column), (0, 2));
    }

    #[test]
    fn test_hard_split_line_end() {
        let mut editor = MultiLineEditor::new("abcdefgh", 3, 4);
        editor.set_offset(7);
        editor.move_up();
        assert_eq!((editor.caret().row, editor.caret().column), (1, 1));
        // Continued lines stop one short of their length
        editor.move_to_line_end();
        assert_eq!((editor.caret().row, editor.caret().column), (1, 2));
        assert_eq!(editor.caret().offset, 5);
    }

    #[test]
    fn test_reconcile_holds_after_edits() {
        let mut editor = MultiLineEditor::new("the quick brown fox jumps over", 6, 3);
        for offset in [0, 3, 9, 17, 29] {
            editor.set_offset(offset);
            editor.insert('x');
            assert_eq!(unwrap_offset(&editor), editor.caret().offset);
            editor.delete_previous();
            editor.delete_current();
            assert_eq!(unwrap_offset(&editor), editor.caret().offset);
            let caret = editor.caret();
            assert!(caret.row < editor.lines().len());
            assert!(caret.column <= editor.lines()[caret.row].len);
        }
    }

    #[test]
    fn test_scroll_follows_caret_row() {
        let mut editor = MultiLineEditor::new("a b c d e", 1, 2);
        assert_eq!(editor.lines().len(), 5);
        assert_eq!(editor.scroll(), 3);
        assert_eq!(editor.caret_cell(), (0, 1));
        editor.set_offset(0);
        assert_eq!(editor.scroll(), 0);
        let rows: Vec<_> = editor.visible_lines().map(|(_, text)| text).collect();
        assert_eq!(rows, vec!["a", "b"]);
    }
}
