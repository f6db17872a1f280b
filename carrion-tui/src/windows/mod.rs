//! Screens of the console and the controller switching between them.

mod backups;
mod chrome;
mod editor;
mod info;
mod installer;
mod navigation;
mod saves;

pub use backups::BackupsWindow;
pub use chrome::{Chrome, Pane};
pub use editor::EditorWindow;
pub use installer::InstallerWindow;
pub use navigation::NavigationWindow;
pub use saves::SaveManagerWindow;

use termnav::{
    Command, InputSource, Keymaps, Navigable, Paintable, Rect, Selection, Surface, Theme, Ui,
};

use crate::error::Result;
use crate::library::MapLibrary;

/// Registry index of the navigation window. Cancel anywhere else leads
/// here; `ShowWindow(n)` leads to index `n + 1`.
pub const NAVIGATION: usize = 0;

/// What the controller does once a window's loop returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current window.
    Stay,
    Goto(usize),
    Quit,
}

impl Transition {
    /// Registry index a window shortcut points at.
    pub fn for_shortcut(window: u8) -> Self {
        Transition::Goto(usize::from(window) + 1)
    }
}

/// A full-screen window built on the standard [`Chrome`].
pub trait Window {
    fn chrome(&self) -> &Chrome;
    fn chrome_mut(&mut self) -> &mut Chrome;

    fn title(&self) -> &str {
        self.chrome().title()
    }

    /// Reload content from the library before the window is shown.
    fn refresh(&mut self, library: &dyn MapLibrary, surface: &mut dyn Surface);

    /// Handle Confirm on a valid menu selection.
    fn selected(
        &mut self,
        selection: &Selection,
        ui: &mut Ui<'_>,
        library: &mut dyn MapLibrary,
    ) -> Result<Transition>;

    fn cancelled(&self) -> Transition {
        Transition::Goto(NAVIGATION)
    }

    /// Paint the window and run its menu until something leads away.
    fn show(&mut self, ui: &mut Ui<'_>, library: &mut dyn MapLibrary) -> Result<Transition> {
        self.refresh(&*library, ui.surface);
        let chrome = self.chrome_mut();
        chrome.menu.navigate_to_default(ui.surface);
        chrome.paint(ui.surface);

        loop {
            let selection = self.chrome_mut().menu.prompt_selection(ui)?;
            let transition = match selection.command {
                Command::Confirm => self.selected(&selection, ui, library)?,
                Command::Cancel => self.cancelled(),
                Command::ShowWindow(window) => Transition::for_shortcut(window),
                _ => Transition::Stay,
            };
            if transition != Transition::Stay {
                return Ok(transition);
            }
        }
    }
}

/// Owns every window and runs whichever one is current.
pub struct Controller {
    area: Rect,
    theme: Theme,
    keymaps: Keymaps,
    windows: Vec<Box<dyn Window>>,
    current: usize,
}

impl Controller {
    pub fn new(size: (u16, u16), theme: Theme, keymaps: Keymaps) -> Self {
        let installer = InstallerWindow::new(size, &theme);
        let editor = EditorWindow::new(size, &theme);
        let backups = BackupsWindow::new(size, &theme);
        let saves = SaveManagerWindow::new(size, &theme);
        let titles =
            [installer.title(), editor.title(), backups.title(), saves.title()].map(str::to_string);
        let navigation = NavigationWindow::new(&titles, size, &theme);

        Self {
            area: Rect::from_size(size.0, size.1),
            theme,
            keymaps,
            windows: vec![
                Box::new(navigation),
                Box::new(installer),
                Box::new(editor),
                Box::new(backups),
                Box::new(saves),
            ],
            current: NAVIGATION,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Show windows until one asks to quit.
    pub fn run(
        &mut self,
        surface: &mut dyn Surface,
        input: &mut dyn InputSource,
        library: &mut dyn MapLibrary,
    ) -> Result<()> {
        let mut ui = Ui::new(surface, input, &self.keymaps);
        loop {
            let current = self.current();
            let window = &mut self.windows[current];
            log::info!("showing window {} ({})", current, window.title());
            ui.surface.clear(self.area, &self.theme.content);

            match window.show(&mut ui, library)? {
                Transition::Stay => {}
                Transition::Goto(next) if next < self.windows.len() => self.current = next,
                Transition::Goto(next) => log::debug!("no window {}, staying", next),
                Transition::Quit => {
                    log::info!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use termnav::{BufferSurface, Key, KeyPress, Keymaps, ScriptedInput, Ui};

    use super::{Transition, Window};
    use crate::error::Result;
    use crate::library::{Backup, MapLibrary, MapRecord, MemoryLibrary};

    pub const SIZE: (u16, u16) = (100, 30);

    pub fn surface() -> BufferSurface {
        BufferSurface::new(SIZE.0, SIZE.1)
    }

    /// Script of plain key presses.
    pub fn script(keys: &[Key]) -> ScriptedInput {
        ScriptedInput::new(keys.iter().copied().map(KeyPress::plain))
    }

    /// Show `window` once against a scripted keyboard.
    pub fn show(
        window: &mut dyn Window,
        input: &mut ScriptedInput,
        surface: &mut BufferSurface,
        library: &mut dyn MapLibrary,
    ) -> Result<Transition> {
        let keymaps = Keymaps::default();
        let mut ui = Ui::new(surface, input, &keymaps);
        window.show(&mut ui, library)
    }

    /// Whether any row of the screen contains `text`.
    pub fn screen_contains(surface: &BufferSurface, text: &str) -> bool {
        (0..SIZE.1).any(|y| surface.row(y).contains(text))
    }

    const READ_ONLY: &str = "library is read-only";

    /// Library refusing every change.
    pub struct ReadOnly(pub MemoryLibrary);

    impl MapLibrary for ReadOnly {
        fn installed(&self) -> Vec<MapRecord> {
            self.0.installed()
        }

        fn available(&self) -> Vec<MapRecord> {
            self.0.available()
        }

        fn install(&mut self, _name: &str) -> std::result::Result<(), String> {
            Err(READ_ONLY.to_string())
        }

        fn uninstall(&mut self, _name: &str) -> std::result::Result<(), String> {
            Err(READ_ONLY.to_string())
        }

        fn update(&mut self, _name: &str, _record: MapRecord) -> std::result::Result<(), String> {
            Err(READ_ONLY.to_string())
        }

        fn backups(&self) -> Vec<Backup> {
            self.0.backups()
        }

        fn restore_backup(&mut self, _name: &str) -> std::result::Result<(), String> {
            Err(READ_ONLY.to_string())
        }

        fn current_save(&self) -> String {
            self.0.current_save()
        }

        fn save_backups(&self) -> Vec<String> {
            self.0.save_backups()
        }

        fn back_up_current_save(&mut self) -> std::result::Result<String, String> {
            Err(READ_ONLY.to_string())
        }

        fn swap_save(&mut self, _name: &str) -> std::result::Result<(), String> {
            Err(READ_ONLY.to_string())
        }

        fn auto_backups(&self) -> bool {
            self.0.auto_backups()
        }

        fn set_auto_backups(&mut self, _enabled: bool) -> std::result::Result<(), String> {
            Err(READ_ONLY.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use termnav::{Key, Keymaps, Theme};

    use super::testing::{screen_contains, script, surface, SIZE};
    use super::*;
    use crate::error::AppError;
    use crate::library::{MapRecord, MemoryLibrary};

    fn controller() -> Controller {
        Controller::new(SIZE, Theme::default(), Keymaps::default())
    }

    fn library() -> MemoryLibrary {
        MemoryLibrary::new(vec![], vec![MapRecord::new("Harbor")], vec![])
    }

    #[test]
    fn test_registry() {
        let controller = controller();
        assert_eq!(controller.window_count(), 5);
        assert_eq!(controller.current(), NAVIGATION);
        assert_eq!(Transition::for_shortcut(0), Transition::Goto(1));
    }

    #[test]
    fn test_escape_on_navigation_quits() {
        let mut controller = controller();
        let mut input = script(&[Key::Escape]);
        let mut surface = surface();
        controller.run(&mut surface, &mut input, &mut library()).unwrap();
        assert_eq!(input.remaining(), 0);
        assert!(screen_contains(&surface, "Navigation Window"));
    }

    #[test]
    fn test_open_window_and_back() {
        let mut controller = controller();
        // Open the first window, go back, quit
        let mut input = script(&[Key::Enter, Key::Escape, Key::Escape]);
        let mut surface = surface();
        controller.run(&mut surface, &mut input, &mut library()).unwrap();
        assert_eq!(input.remaining(), 0);
        assert_eq!(controller.current(), NAVIGATION);
    }

    #[test]
    fn test_digits_switch_between_windows() {
        let mut controller = controller();
        let mut input = script(&[Key::Char('3'), Key::Char('2')]);
        let mut surface = surface();
        let err = controller.run(&mut surface, &mut input, &mut library()).unwrap_err();

        // The script ran dry inside the map editor
        assert!(matches!(err, AppError::Ui(termnav::Error::Io(_))));
        assert_eq!(controller.current(), 2);
        assert!(screen_contains(&surface, "Map Editor"));
    }

    #[test]
    fn test_save_manager_shortcut() {
        let mut controller = controller();
        let mut input = script(&[Key::Char('4'), Key::Escape, Key::Escape]);
        let mut surface = surface();
        controller.run(&mut surface, &mut input, &mut library()).unwrap();

        assert_eq!(input.remaining(), 0);
        assert!(screen_contains(&surface, "4  Save File Manager"));
    }

    #[test]
    fn test_unknown_shortcut_stays() {
        let mut controller = controller();
        let mut input = script(&[Key::Char('9'), Key::Escape]);
        let mut surface = surface();
        controller.run(&mut surface, &mut input, &mut library()).unwrap();
        assert_eq!(controller.current(), NAVIGATION);
    }
}
