use termnav::{console, Selection, Style, Surface, Theme, Ui};

use super::{Chrome, Pane, Transition, Window};
use crate::error::Result;
use crate::library::MapLibrary;

const TITLE: &str = "Navigation Window";
const TITLE_STYLE: Style = Style::new(console::DARK_BLUE, console::WHITE);
const LIST_HEADER: &str = "Windows";

const HELP: [&str; 3] = [
    "Pick a window and press Enter to open it.",
    "From any window, 1-9 jump straight to a window and Escape comes back here.",
    "Press Escape here to quit.",
];

/// Lists the other windows. Cancel here quits the program.
pub struct NavigationWindow {
    chrome: Chrome,
    help: Pane,
}

impl NavigationWindow {
    /// `titles[i]` is the window at registry index `i + 1`.
    pub fn new(titles: &[String], size: (u16, u16), theme: &Theme) -> Self {
        let mut chrome = Chrome::new(TITLE, TITLE_STYLE, size, theme);

        let mut list = chrome.menu.create_list::<usize>(0, Some(LIST_HEADER), false);
        for (index, title) in titles.iter().enumerate() {
            list.push(format!("{}  {}", index + 1, title), index + 1);
        }
        chrome.menu.set_navigable(0, list);

        let help = Pane::new(chrome.menu.create_text_box(1, None));
        chrome.menu.set_display(1, help.clone());

        Self { chrome, help }
    }
}

impl Window for NavigationWindow {
    fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }

    fn refresh(&mut self, _library: &dyn MapLibrary, surface: &mut dyn Surface) {
        let mut help = self.help.get();
        help.clear_content(surface);
        for line in HELP {
            help.write_wrapped(line, surface);
        }
    }

    fn selected(
        &mut self,
        selection: &Selection,
        _ui: &mut Ui<'_>,
        _library: &mut dyn MapLibrary,
    ) -> Result<Transition> {
        let target = selection
            .column
            .zip(selection.row)
            .and_then(|(column, row)| self.chrome.menu.list::<usize>(column)?.item(row))
            .map(|item| *item.payload());
        Ok(target.map_or(Transition::Stay, Transition::Goto))
    }

    fn cancelled(&self) -> Transition {
        Transition::Quit
    }
}

#[cfg(test)]
mod tests {
    use termnav::Key;

    use super::*;
    use crate::library::MemoryLibrary;
    use crate::windows::testing::{screen_contains, script, show, surface, SIZE};

    fn window() -> NavigationWindow {
        let titles = ["Map Installer", "Map Editor", "Backups"].map(str::to_string);
        NavigationWindow::new(&titles, SIZE, &Theme::default())
    }

    #[test]
    fn test_lists_windows_with_shortcut_numbers() {
        let mut window = window();
        let mut surface = surface();
        let mut input = script(&[Key::Escape]);
        show(&mut window, &mut input, &mut surface, &mut MemoryLibrary::default()).unwrap();

        assert!(screen_contains(&surface, "[1  Map Installer"));
        assert!(screen_contains(&surface, " 3  Backups"));
        assert!(screen_contains(&surface, "press Enter to open it"));
    }

    #[test]
    fn test_confirm_opens_selected_window() {
        let mut window = window();
        let mut surface = surface();
        let mut input = script(&[Key::Down, Key::Down, Key::Enter]);
        let transition =
            show(&mut window, &mut input, &mut surface, &mut MemoryLibrary::default()).unwrap();
        assert_eq!(transition, Transition::Goto(3));
    }

    #[test]
    fn test_cancel_quits() {
        let mut window = window();
        let mut surface = surface();
        let mut input = script(&[Key::Escape]);
        let transition =
            show(&mut window, &mut input, &mut surface, &mut MemoryLibrary::default()).unwrap();
        assert_eq!(transition, Transition::Quit);
    }

    #[test]
    fn test_shortcut_from_navigation() {
        let mut window = window();
        let mut surface = surface();
        let mut input = script(&[Key::Char('2')]);
        let transition =
            show(&mut window, &mut input, &mut surface, &mut MemoryLibrary::default()).unwrap();
        assert_eq!(transition, Transition::Goto(2));
    }
}
