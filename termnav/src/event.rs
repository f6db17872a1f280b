use std::collections::VecDeque;
use std::io;

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

impl Key {
    /// Parse a key name as written in a key-binding table: `"up"`,
    /// `"pagedown"`, `"enter"`, `"f5"`, or a single character.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c));
        }

        let lower = name.to_ascii_lowercase();
        let key = match lower.as_str() {
            "enter" | "return" => Key::Enter,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "tab" => Key::Tab,
            "backtab" => Key::BackTab,
            "escape" | "esc" => Key::Escape,
            "space" => Key::Char(' '),
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" | "pgup" => Key::PageUp,
            "pagedown" | "pgdown" => Key::PageDown,
            "insert" | "ins" => Key::Insert,
            other => {
                let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
                if !(1..=24).contains(&n) {
                    return None;
                }
                Key::F(n)
            }
        };
        Some(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// One key read from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::new())
    }

    pub fn shifted(key: Key) -> Self {
        Self::new(key, Modifiers::shift())
    }

    /// The character this press would type into a text field, if any.
    pub fn printable(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt && !c.is_control() => {
                Some(c)
            }
            _ => None,
        }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// The blocking key read every prompt loop suspends on.
pub trait InputSource {
    fn read_key(&mut self) -> io::Result<KeyPress>;
}

/// Input source replaying a fixed list of key presses. Reading past the end
/// fails with [`io::ErrorKind::UnexpectedEof`] instead of blocking.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    keys: VecDeque<KeyPress>,
}

impl ScriptedInput {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyPress>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, key: impl Into<KeyPress>) {
        self.keys.push_back(key.into());
    }

    /// Queue one plain key press per character of `text`.
    pub fn type_text(&mut self, text: &str) {
        self.keys.extend(text.chars().map(|c| KeyPress::plain(Key::Char(c))));
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_key(&mut self) -> io::Result<KeyPress> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }
}

// Conversion from crossterm types
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = ();

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => return Err(()),
        };
        Ok(key)
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl KeyPress {
    /// Convert a crossterm key event. Releases, repeats and keys without a
    /// counterpart in [`Key`] yield `None`.
    pub fn from_crossterm(event: crossterm::event::KeyEvent) -> Option<Self> {
        if event.kind != crossterm::event::KeyEventKind::Press {
            return None;
        }
        let key = Key::try_from(event.code).ok()?;
        Some(Self::new(key, event.modifiers.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("PageUp"), Some(Key::PageUp));
        assert_eq!(Key::from_name("f5"), Some(Key::F(5)));
        assert_eq!(Key::from_name("q"), Some(Key::Char('q')));
        assert_eq!(Key::from_name("space"), Some(Key::Char(' ')));
        assert_eq!(Key::from_name("f0"), None);
        assert_eq!(Key::from_name("hyper"), None);
    }

    #[test]
    fn test_printable_ignores_ctrl() {
        assert_eq!(KeyPress::plain(Key::Char('a')).printable(), Some('a'));
        assert_eq!(KeyPress::shifted(Key::Char('A')).printable(), Some('A'));
        assert_eq!(KeyPress::new(Key::Char('c'), Modifiers::ctrl()).printable(), None);
        assert_eq!(KeyPress::plain(Key::Enter).printable(), None);
    }

    #[test]
    fn test_scripted_input_runs_dry() {
        let mut input = ScriptedInput::new([Key::Up]);
        assert_eq!(input.read_key().ok(), Some(KeyPress::plain(Key::Up)));
        let err = input.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_crossterm_release_is_dropped() {
        use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
        let mut event = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(
            KeyPress::from_crossterm(event),
            Some(KeyPress::shifted(Key::Enter))
        );
        event.kind = KeyEventKind::Release;
        assert_eq!(KeyPress::from_crossterm(event), None);
    }
}
