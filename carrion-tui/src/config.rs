//! Optional `config.toml`: log level and key-binding overrides.
//!
//! ```toml
//! log_level = "info"
//!
//! [keys.navigation]
//! j = "navigate-down"
//! k = "navigate-up"
//! f5 = "show-window-1"
//!
//! [keys.text]
//! tab = "go-to-end"
//! ```
//!
//! A binding to `"none"` removes the default binding for that key.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::LevelFilter;
use serde::Deserialize;
use termnav::{Command, Key, Keymap, Keymaps};

use crate::error::{AppError, Result};
use crate::paths;

/// Config file structure. Every field is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct FileConfig {
    pub log_level: Option<String>,
    pub keys: FileKeys,
}

/// The `[keys.navigation]` and `[keys.text]` tables.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct FileKeys {
    pub navigation: HashMap<String, String>,
    pub text: HashMap<String, String>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    pub keymaps: Keymaps,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_level(),
            keymaps: Keymaps::default(),
        }
    }
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

impl AppConfig {
    /// Load from the platform config directory. A missing file (or no home
    /// directory at all) means defaults.
    pub fn load() -> Result<Self> {
        match paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents)?;
        Self::from_file_config(file)
    }

    fn from_file_config(file: FileConfig) -> Result<Self> {
        let log_level = match file.log_level {
            Some(level) => level
                .parse::<LevelFilter>()
                .map_err(|_| AppError::InvalidLogLevel(level))?,
            None => default_level(),
        };

        let mut keymaps = Keymaps::default();
        apply_bindings(&mut keymaps.navigation, &file.keys.navigation)?;
        apply_bindings(&mut keymaps.text, &file.keys.text)?;

        Ok(Self { log_level, keymaps })
    }
}

fn apply_bindings(keymap: &mut Keymap, bindings: &HashMap<String, String>) -> Result<()> {
    for (key_name, command_name) in bindings {
        let key = Key::from_name(key_name).ok_or_else(|| AppError::UnknownKey(key_name.clone()))?;
        if command_name.eq_ignore_ascii_case("none") {
            keymap.unbind(key);
            continue;
        }
        let command = Command::from_name(command_name)
            .ok_or_else(|| AppError::UnknownCommand(command_name.clone()))?;
        keymap.bind(key, command);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use termnav::KeyPress;

    use super::*;

    fn lookup(keymap: &Keymap, key: Key) -> Option<Command> {
        keymap.lookup(&KeyPress::plain(key))
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("carrion-config-that-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_log_level() {
        let config = AppConfig::from_toml(r#"log_level = "warn""#).unwrap();
        assert_eq!(config.log_level, LevelFilter::Warn);

        let err = AppConfig::from_toml(r#"log_level = "loud""#).unwrap_err();
        assert!(matches!(err, AppError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_bindings_extend_and_override() {
        let config = AppConfig::from_toml(
            r#"
            [keys.navigation]
            j = "navigate-down"
            enter = "cancel"
            f2 = "show-window-2"

            [keys.text]
            tab = "go-to-end"
            "#,
        )
        .unwrap();

        let nav = &config.keymaps.navigation;
        assert_eq!(lookup(nav, Key::Char('j')), Some(Command::NavigateDown));
        assert_eq!(lookup(nav, Key::Enter), Some(Command::Cancel));
        assert_eq!(lookup(nav, Key::F(2)), Some(Command::ShowWindow(1)));
        // Untouched defaults survive
        assert_eq!(lookup(nav, Key::Up), Some(Command::NavigateUp));

        assert_eq!(lookup(&config.keymaps.text, Key::Tab), Some(Command::GoToEnd));
        assert_eq!(lookup(&config.keymaps.text, Key::Char('j')), None);
    }

    #[test]
    fn test_none_unbinds() {
        let config = AppConfig::from_toml(
            r#"
            [keys.navigation]
            space = "none"
            "#,
        )
        .unwrap();
        assert_eq!(lookup(&config.keymaps.navigation, Key::Char(' ')), None);
        assert_eq!(lookup(&config.keymaps.navigation, Key::Enter), Some(Command::Confirm));
    }

    #[test]
    fn test_unknown_names_are_errors() {
        let err = AppConfig::from_toml("[keys.navigation]\nhyper = \"confirm\"").unwrap_err();
        assert!(matches!(err, AppError::UnknownKey(name) if name == "hyper"));

        let err = AppConfig::from_toml("[keys.text]\nx = \"explode\"").unwrap_err();
        assert!(matches!(err, AppError::UnknownCommand(name) if name == "explode"));

        let err = AppConfig::from_toml("[keys.text]\nx = \"show-window-0\"").unwrap_err();
        assert!(matches!(err, AppError::UnknownCommand(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml("log_level = ").unwrap_err();
        assert!(matches!(err, AppError::Toml(_)));
    }
}
