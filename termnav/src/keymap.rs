use std::collections::HashMap;

use crate::event::{Key, KeyPress};

/// Device-independent input token produced by a [`Keymap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Confirm,
    Cancel,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    PageUp,
    PageDown,
    GoToStart,
    GoToEnd,
    DeleteCurrentCharacter,
    DeletePreviousCharacter,
    /// Jump to the window with this registry index.
    ShowWindow(u8),
}

impl Command {
    /// Parse a command name such as `"navigate-up"` or `"show-window-3"`.
    /// Window numbers are 1-based in names and 0-based in the token.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase().replace('_', "-");
        let command = match name.as_str() {
            "confirm" => Command::Confirm,
            "cancel" => Command::Cancel,
            "navigate-up" | "up" => Command::NavigateUp,
            "navigate-down" | "down" => Command::NavigateDown,
            "navigate-left" | "left" => Command::NavigateLeft,
            "navigate-right" | "right" => Command::NavigateRight,
            "page-up" => Command::PageUp,
            "page-down" => Command::PageDown,
            "go-to-start" | "start" => Command::GoToStart,
            "go-to-end" | "end" => Command::GoToEnd,
            "delete-current-character" | "delete" => Command::DeleteCurrentCharacter,
            "delete-previous-character" | "backspace" => Command::DeletePreviousCharacter,
            other => {
                let n = other.strip_prefix("show-window-")?.parse::<u8>().ok()?;
                Command::ShowWindow(n.checked_sub(1)?)
            }
        };
        Some(command)
    }

    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            Command::NavigateUp
                | Command::NavigateDown
                | Command::NavigateLeft
                | Command::NavigateRight
                | Command::PageUp
                | Command::PageDown
        )
    }
}

/// A key to command table. Modifiers are not part of the lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keymap {
    bindings: HashMap<Key, Command>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table used while focus moves between widgets.
    pub fn navigation() -> Self {
        let mut map = Self::new()
            .with(Key::Up, Command::NavigateUp)
            .with(Key::Down, Command::NavigateDown)
            .with(Key::Left, Command::NavigateLeft)
            .with(Key::Right, Command::NavigateRight)
            .with(Key::PageUp, Command::PageUp)
            .with(Key::PageDown, Command::PageDown)
            .with(Key::Enter, Command::Confirm)
            .with(Key::Char(' '), Command::Confirm)
            .with(Key::Escape, Command::Cancel);
        for n in 1..=9u8 {
            let digit = char::from(b'0' + n);
            map.bind(Key::Char(digit), Command::ShowWindow(n - 1));
        }
        map
    }

    /// Table used while a text field owns the keyboard.
    pub fn text() -> Self {
        Self::new()
            .with(Key::Enter, Command::Confirm)
            .with(Key::Escape, Command::Cancel)
            .with(Key::Up, Command::NavigateUp)
            .with(Key::Down, Command::NavigateDown)
            .with(Key::Left, Command::NavigateLeft)
            .with(Key::Right, Command::NavigateRight)
            .with(Key::Home, Command::GoToStart)
            .with(Key::End, Command::GoToEnd)
            .with(Key::Backspace, Command::DeletePreviousCharacter)
            .with(Key::Delete, Command::DeleteCurrentCharacter)
    }

    pub fn with(mut self, key: Key, command: Command) -> Self {
        self.bind(key, command);
        self
    }

    /// Bind `key`, replacing any previous binding.
    pub fn bind(&mut self, key: Key, command: Command) -> Option<Command> {
        self.bindings.insert(key, command)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Command> {
        self.bindings.remove(&key)
    }

    pub fn lookup(&self, press: &KeyPress) -> Option<Command> {
        self.bindings.get(&press.key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The two tables every blocking loop chooses from.
#[derive(Debug, Clone, PartialEq)]
pub struct Keymaps {
    pub navigation: Keymap,
    pub text: Keymap,
}

impl Default for Keymaps {
    fn default() -> Self {
        Self {
            navigation: Keymap::navigation(),
            text: Keymap::text(),
        }
    }
}
