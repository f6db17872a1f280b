use termnav::text_input::{LineEditor, MultiLineEditor};
use termnav::{
    BufferSurface, Command, Key, KeyPress, Keymaps, Modifiers, Paintable, PromptOptions, Rect,
    ScriptedInput, TextInput, Theme, Ui,
};

fn typed(text: &str) -> Vec<KeyPress> {
    text.chars().map(|c| KeyPress::plain(Key::Char(c))).collect()
}

fn single_line(width: u16) -> TextInput {
    TextInput::new(Rect::new(1, 2, width, 1), &Theme::default())
}

/// Run `prompt` against a scripted key sequence on a fresh surface.
fn run<F>(keys: Vec<KeyPress>, prompt: F) -> (termnav::Result<bool>, BufferSurface)
where
    F: FnOnce(&mut Ui<'_>) -> termnav::Result<bool>,
{
    let mut surface = BufferSurface::new(40, 10);
    let keymaps = Keymaps::default();
    let mut input = ScriptedInput::new(keys);
    let result = {
        let mut ui = Ui::new(&mut surface, &mut input, &keymaps);
        prompt(&mut ui)
    };
    (result, surface)
}

// ============================================================================
// Editing Engine Tests
// ============================================================================

#[test]
fn test_backspace_at_end_of_line() {
    let mut editor = LineEditor::new("abc", 20);
    editor.apply(Command::DeletePreviousCharacter);
    assert_eq!(editor.text(), "ab");
    assert_eq!(editor.cursor(), 2);
}

#[test]
fn test_multiline_offset_to_row_and_column() {
    let mut editor = MultiLineEditor::new("hello world", 5, 4);
    assert_eq!(editor.line_text(0).as_deref(), Some("hello"));
    assert_eq!(editor.line_text(1).as_deref(), Some("world"));
    editor.set_offset(6);
    let caret = editor.caret();
    assert_eq!((caret.row, caret.column), (1, 0));
}

#[test]
fn test_space_runs_do_not_open_blank_lines() {
    for spaces in 2..=3 {
        let text = format!("hello{}world", " ".repeat(spaces));
        let mut editor = MultiLineEditor::new(text.as_str(), 5, 4);
        assert_eq!(editor.lines().len(), 2, "{spaces} spaces");
        assert_eq!(editor.line_text(1).as_deref(), Some("world"));

        // The extra spaces belong to the first row
        editor.set_offset(6);
        assert_eq!((editor.caret().row, editor.caret().column), (0, 6));
        editor.set_offset(5 + spaces);
        assert_eq!((editor.caret().row, editor.caret().column), (1, 0));
    }

    let input = TextInput::new(Rect::new(0, 0, 5, 3), &Theme::default()).with_text("hello  world");
    let mut surface = BufferSurface::new(10, 4);
    input.paint(&mut surface);
    assert_eq!(surface.text_at(0, 0, 5), "hello");
    assert_eq!(surface.text_at(0, 1, 5), "world");
    assert_eq!(surface.text_at(0, 2, 5), "     ");
}

#[test]
fn test_reconcile_after_arbitrary_edits() {
    let base = "a long line of words that wraps several times over";
    for width in [3, 5, 8, 13] {
        for offset in (0..=base.len()).step_by(3) {
            let mut editor = MultiLineEditor::new(base, width, 3);
            editor.set_offset(offset);
            for c in "xy z".chars() {
                editor.insert(c);
            }
            editor.apply(Command::DeletePreviousCharacter);
            editor.apply(Command::DeleteCurrentCharacter);

            let caret = editor.caret();
            let line = editor.lines()[caret.row];
            assert!(caret.column <= line.len, "width {width} offset {offset}");
            assert_eq!(line.start + caret.column, caret.offset, "width {width} offset {offset}");
        }
    }
}

#[test]
fn test_vertical_moves_keep_caret_consistent() {
    let mut editor = MultiLineEditor::new("abcdefghij klm nopqrstu v", 4, 3);
    editor.set_offset(0);
    let moves = [
        Command::NavigateDown,
        Command::NavigateDown,
        Command::GoToEnd,
        Command::NavigateDown,
        Command::NavigateRight,
        Command::NavigateUp,
        Command::GoToStart,
        Command::NavigateDown,
        Command::NavigateDown,
        Command::NavigateDown,
        Command::NavigateDown,
    ];
    for command in moves {
        editor.apply(command);
        let caret = editor.caret();
        assert_eq!(editor.lines()[caret.row].start + caret.column, caret.offset);
        let (_, y) = editor.caret_cell();
        assert!(y < 3);
    }
}

// ============================================================================
// Single-Line Prompt Tests
// ============================================================================

#[test]
fn test_confirm_commits_text() {
    let mut input = single_line(10);
    let mut keys = typed("Lab");
    keys.push(Key::Enter.into());

    let (result, surface) = run(keys, |ui| input.prompt_text(ui));
    assert!(result.unwrap());
    assert_eq!(input.text(), "Lab");
    assert_eq!(surface.text_at(1, 2, 10), "Lab       ");
    assert_eq!(surface.cursor(), None);
}

#[test]
fn test_cancel_keeps_previous_text() {
    let mut input = single_line(10).with_text("old");
    let options = PromptOptions::default().can_cancel(true).pre_write_current_text(true);
    let mut keys = typed("er");
    keys.push(Key::Escape.into());

    let (result, _) = run(keys, |ui| input.prompt_text_with(ui, &options));
    assert!(!result.unwrap());
    assert_eq!(input.text(), "old");
}

#[test]
fn test_cancel_ignored_unless_allowed() {
    let mut input = single_line(10);
    let mut keys = typed("a");
    keys.push(Key::Escape.into());
    keys.push(Key::Enter.into());

    let (result, _) = run(keys, |ui| input.prompt_text(ui));
    assert!(result.unwrap());
    assert_eq!(input.text(), "a");
}

#[test]
fn test_empty_confirm_needs_allow_empty() {
    let mut input = single_line(10);
    let options = PromptOptions::default().allow_empty(false);
    let mut keys = vec![KeyPress::from(Key::Enter)];
    keys.extend(typed("x"));
    keys.push(Key::Enter.into());

    let (result, _) = run(keys, |ui| input.prompt_text_with(ui, &options));
    assert!(result.unwrap());
    assert_eq!(input.text(), "x");
}

#[test]
fn test_pre_written_text_and_editing_keys() {
    let mut input = single_line(10);
    let options = PromptOptions::default().pre_written_text("map_one");
    let keys = vec![
        KeyPress::from(Key::Home),
        Key::Delete.into(),
        Key::Char('M').into(),
        Key::End.into(),
        Key::Backspace.into(),
        Key::Char('1').into(),
        Key::Enter.into(),
    ];

    let (result, _) = run(keys, |ui| input.prompt_text_with(ui, &options));
    assert!(result.unwrap());
    assert_eq!(input.text(), "Map_on1");
}

#[test]
fn test_ctrl_chars_are_not_typed() {
    let mut input = single_line(10);
    let keys = vec![
        KeyPress::new(Key::Char('c'), Modifiers::ctrl()),
        Key::Char('d').into(),
        Key::Enter.into(),
    ];

    let (result, _) = run(keys, |ui| input.prompt_text(ui));
    assert!(result.unwrap());
    assert_eq!(input.text(), "d");
}

#[test]
fn test_preview_shown_while_empty() {
    let mut input = single_line(12).with_preview("Map name");
    let (result, surface) = run(Vec::new(), |ui| input.prompt_text(ui));
    // Script ran dry while the preview was on screen
    assert!(result.is_err());
    assert_eq!(surface.text_at(1, 2, 12), "Map name    ");
    assert_eq!(surface.cursor(), None);
}

#[test]
fn test_long_text_scrolls_horizontally() {
    let mut input = single_line(5);
    let mut keys = typed("abcdefgh");
    keys.push(Key::Enter.into());

    let (result, surface) = run(keys, |ui| input.prompt_text(ui));
    assert!(result.unwrap());
    assert_eq!(input.text(), "abcdefgh");
    // After the prompt the field shows the start of the text
    assert_eq!(surface.text_at(1, 2, 5), "abcde");
}

// ============================================================================
// Multi-Line Prompt Tests
// ============================================================================

#[test]
fn test_shift_enter_inserts_newline() {
    let mut input = TextInput::new(Rect::new(0, 0, 10, 3), &Theme::default());
    let mut keys = typed("one");
    keys.push(KeyPress::shifted(Key::Enter));
    keys.extend(typed("two"));
    keys.push(Key::Enter.into());

    let (result, surface) = run(keys, |ui| input.prompt_text_multiline(ui));
    assert!(result.unwrap());
    assert_eq!(input.text(), "one\ntwo");
    assert_eq!(surface.text_at(0, 0, 10), "one       ");
    assert_eq!(surface.text_at(0, 1, 10), "two       ");
}

#[test]
fn test_multiline_rewraps_after_insert() {
    let mut input = TextInput::new(Rect::new(0, 0, 5, 2), &Theme::default());
    let mut keys = typed("ab cd ef");
    keys.push(Key::Up.into());
    keys.push(Key::Home.into());
    keys.push(Key::Char('x').into());
    keys.push(Key::Enter.into());

    let (result, surface) = run(keys, |ui| input.prompt_text_multiline(ui));
    assert!(result.unwrap());
    assert_eq!(input.text(), "xab cd ef");
    // "cd" no longer fits after "xab" and moves down
    assert_eq!(surface.text_at(0, 0, 5), "xab  ");
    assert_eq!(surface.text_at(0, 1, 5), "cd ef");
}

#[test]
fn test_multiline_cancel_reverts() {
    let mut input = TextInput::new(Rect::new(0, 0, 8, 3), &Theme::default()).with_text("keep me");
    let options = PromptOptions::default().can_cancel(true).pre_write_current_text(true);
    let mut keys = vec![KeyPress::from(Key::Backspace); 4];
    keys.push(Key::Escape.into());

    let (result, surface) = run(keys, |ui| input.prompt_text_multiline_with(ui, &options));
    assert!(!result.unwrap());
    assert_eq!(input.text(), "keep me");
    assert_eq!(surface.text_at(0, 0, 8), "keep me ");
}
