use termnav::{
    console, Command, List, Navigable, Paintable, Selection, SelectOptions, Style, Surface, TextBox,
    Theme, Ui,
};

use super::{Chrome, Pane, Transition, Window};
use crate::error::Result;
use crate::library::MapLibrary;

const TITLE: &str = "Save File Manager";
const TITLE_STYLE: Style = Style::new(console::DARK_YELLOW, console::WHITE);

const COMMANDS: usize = 0;
const DETAILS: usize = 1;

const LOAD_BACKUP: &str = "Load Backup";
const BACKING_UP: &str = "Backing up current save files...";
const NO_BACKUPS: &str = "No backups of save files available.";
const ENABLED_AUTO_BACKUPS: &str = "Enabled Auto-backup & -loading of save files.";
const DISABLED_AUTO_BACKUPS: &str = "Disabled Auto-backup & -loading of save files.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveCommand {
    BackUpCurrentSave,
    ViewBackups,
    ToggleAutoBackups,
}

impl SaveCommand {
    const ALL: [SaveCommand; 3] = [
        SaveCommand::BackUpCurrentSave,
        SaveCommand::ViewBackups,
        SaveCommand::ToggleAutoBackups,
    ];

    fn label(self) -> &'static str {
        match self {
            SaveCommand::BackUpCurrentSave => "Backup current save",
            SaveCommand::ViewBackups => "View backups...",
            SaveCommand::ToggleAutoBackups => "Toggle Auto-Backups",
        }
    }
}

fn write_summary(pane: &mut TextBox, library: &dyn MapLibrary, surface: &mut dyn Surface) {
    let status = if library.auto_backups() { "Enabled" } else { "Disabled" };
    pane.clear_content(surface);
    pane.write_line("Current saved map:", surface);
    pane.write_line(library.current_save(), surface);
    pane.write_line("", surface);
    pane.write_line("Number of backups:", surface);
    pane.write_line(library.save_backups().len().to_string(), surface);
    pane.write_line("", surface);
    pane.write_line("Auto-backup & -load saves:", surface);
    pane.write_line(status, surface);
}

/// Backs up the game's save files per map and swaps them back in.
pub struct SaveManagerWindow {
    chrome: Chrome,
    summary: Pane,
    /// Shown over the summary while backups are browsed.
    backups: List<String>,
}

impl SaveManagerWindow {
    pub fn new(size: (u16, u16), theme: &Theme) -> Self {
        let mut chrome = Chrome::new(TITLE, TITLE_STYLE, size, theme);

        let mut commands: List<SaveCommand> = chrome.menu.create_list(COMMANDS, None, true);
        for command in SaveCommand::ALL {
            commands.push(command.label(), command);
        }
        chrome.menu.set_navigable(COMMANDS, commands);

        let summary = Pane::new(chrome.menu.create_text_box(DETAILS, None));
        chrome.menu.set_display(DETAILS, summary.clone());
        let backups = List::new(summary.rect(), theme).force_scrollbar(true);

        Self {
            chrome,
            summary,
            backups,
        }
    }

    fn back_up_current_save(&mut self, library: &mut dyn MapLibrary, surface: &mut dyn Surface) {
        self.chrome.log.get().write_line(BACKING_UP, surface);
        match library.back_up_current_save() {
            Ok(name) => {
                write_summary(&mut self.summary.get(), &*library, surface);
                self.chrome
                    .log
                    .get()
                    .write_line(format!("Backed up map \"{}\"", name), surface);
            }
            Err(message) => self.chrome.report(message, surface),
        }
    }

    fn toggle_auto_backups(&mut self, library: &mut dyn MapLibrary, surface: &mut dyn Surface) {
        let enabled = !library.auto_backups();
        if let Err(message) = library.set_auto_backups(enabled) {
            self.chrome.report(message, surface);
            return;
        }
        log::info!("auto backups {}", if enabled { "on" } else { "off" });
        let message = if enabled { ENABLED_AUTO_BACKUPS } else { DISABLED_AUTO_BACKUPS };
        self.chrome.log.get().write_line(message, surface);
        write_summary(&mut self.summary.get(), &*library, surface);
    }

    /// Browse the backups over the summary pane until one is loaded or the
    /// list is cancelled.
    fn view_backups(&mut self, ui: &mut Ui<'_>, library: &mut dyn MapLibrary) -> Result<()> {
        let names = library.save_backups();
        if names.is_empty() {
            self.chrome.log.get().write_line(NO_BACKUPS, ui.surface);
            return Ok(());
        }

        self.backups
            .set_entries(names.into_iter().map(|name| (name.clone(), name)), ui.surface);
        self.backups.navigate_to_default(ui.surface);

        loop {
            let selection = self.backups.prompt_input(ui)?;
            match selection.command {
                Command::Confirm => {}
                Command::Cancel => break,
                _ => continue,
            }
            let Some(name) = self.backups.selected_payload().cloned() else {
                continue;
            };

            self.backups.highlight_current(ui.surface);
            let choice = self
                .chrome
                .prompt
                .prompt_selection(ui, &[LOAD_BACKUP], &SelectOptions::cancellable())?;
            if choice != Some(0) {
                self.backups.select_current(ui.surface);
                continue;
            }

            match library.swap_save(&name) {
                Ok(()) => self
                    .chrome
                    .log
                    .get()
                    .write_line(format!("Loaded backup \"{}\".", name), ui.surface),
                Err(message) => self.chrome.report(message, ui.surface),
            }
            break;
        }

        self.backups.deselect(ui.surface);
        self.backups.clear(ui.surface);
        write_summary(&mut self.summary.get(), &*library, ui.surface);
        Ok(())
    }
}

impl Window for SaveManagerWindow {
    fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }

    fn refresh(&mut self, library: &dyn MapLibrary, surface: &mut dyn Surface) {
        write_summary(&mut self.summary.get(), library, surface);
        self.chrome.log.get().clear_content(surface);
    }

    fn selected(
        &mut self,
        selection: &Selection,
        ui: &mut Ui<'_>,
        library: &mut dyn MapLibrary,
    ) -> Result<Transition> {
        let Some(command) = self
            .chrome
            .menu
            .list::<SaveCommand>(COMMANDS)
            .and_then(|list| list.item(selection.row?))
            .map(|item| *item.payload())
        else {
            return Ok(Transition::Stay);
        };
        self.chrome.log.get().clear_content(ui.surface);

        match command {
            SaveCommand::BackUpCurrentSave => self.back_up_current_save(library, ui.surface),
            SaveCommand::ViewBackups => {
                self.chrome.menu.highlight_current::<SaveCommand>(ui.surface);
                self.view_backups(ui, library)?;
                if let Some(list) = self.chrome.menu.list_mut::<SaveCommand>(COMMANDS) {
                    list.select_current(ui.surface);
                }
            }
            SaveCommand::ToggleAutoBackups => self.toggle_auto_backups(library, ui.surface),
        }
        Ok(Transition::Stay)
    }
}

#[cfg(test)]
mod tests {
    use termnav::{BufferSurface, Key, SelectionState};

    use super::*;
    use crate::library::{MemoryLibrary, MAIN_GAME};
    use crate::windows::testing::{screen_contains, script, show, surface, ReadOnly, SIZE};

    fn window() -> SaveManagerWindow {
        SaveManagerWindow::new(SIZE, &Theme::default())
    }

    fn library() -> MemoryLibrary {
        MemoryLibrary::default().with_saves(Some("Harbor"), &[MAIN_GAME, "Sewers"])
    }

    fn run(window: &mut SaveManagerWindow, keys: &[Key], library: &mut dyn MapLibrary) -> BufferSurface {
        let mut surface = surface();
        let mut input = script(keys);
        let transition = show(window, &mut input, &mut surface, library).unwrap();
        assert_eq!(transition, Transition::Goto(0));
        assert_eq!(input.remaining(), 0);
        surface
    }

    fn log_lines(window: &SaveManagerWindow) -> Vec<String> {
        window.chrome.log.get().lines().to_vec()
    }

    #[test]
    fn test_summary_and_commands() {
        let mut window = window();
        let surface = run(&mut window, &[Key::Escape], &mut library());

        assert_eq!(
            window.summary.get().lines()[..8],
            [
                "Current saved map:",
                "Harbor",
                "",
                "Number of backups:",
                "2",
                "",
                "Auto-backup & -load saves:",
                "Enabled",
            ]
        );
        assert!(screen_contains(&surface, "[Backup current save"));
        assert!(screen_contains(&surface, " Toggle Auto-Backups"));
    }

    #[test]
    fn test_back_up_current_save() {
        let mut window = window();
        let mut library = library();
        run(&mut window, &[Key::Enter, Key::Escape], &mut library);

        assert_eq!(library.save_backups(), [MAIN_GAME, "Sewers", "Harbor"]);
        assert_eq!(log_lines(&window)[..2], [BACKING_UP, "Backed up map \"Harbor\""]);
        assert_eq!(window.summary.get().lines()[4], "3");
    }

    #[test]
    fn test_toggle_auto_backups() {
        let mut window = window();
        let mut library = library();
        run(&mut window, &[Key::Down, Key::Down, Key::Enter, Key::Escape], &mut library);

        assert!(!library.auto_backups());
        assert_eq!(log_lines(&window)[0], DISABLED_AUTO_BACKUPS);
        assert_eq!(window.summary.get().lines()[7], "Disabled");
    }

    #[test]
    fn test_load_backup_swaps_saves() {
        let mut window = window();
        let mut library = library();
        // View backups, second backup, confirm, "Load Backup"
        let keys = [Key::Down, Key::Enter, Key::Down, Key::Enter, Key::Enter, Key::Escape];
        run(&mut window, &keys, &mut library);

        assert_eq!(library.current_save(), "Sewers");
        assert_eq!(library.save_backups(), [MAIN_GAME, "Sewers", "Harbor"]);
        assert_eq!(log_lines(&window)[0], "Loaded backup \"Sewers\".");
        assert_eq!(window.summary.get().lines()[1], "Sewers");
        assert!(window.backups.selected_index().is_none());
    }

    #[test]
    fn test_cancel_load_returns_to_backup_list() {
        let mut window = window();
        let mut library = library();
        // Cancel the prompt, leave the backup list, leave the window
        let keys = [Key::Down, Key::Enter, Key::Enter, Key::Escape, Key::Escape, Key::Escape];
        run(&mut window, &keys, &mut library);

        assert_eq!(library.current_save(), "Harbor");
        assert!(log_lines(&window).iter().all(String::is_empty));
        assert_eq!(window.summary.get().lines()[1], "Harbor");
    }

    #[test]
    fn test_commands_selection_restored_after_browsing() {
        let mut window = window();
        let mut surface = surface();
        let mut input = script(&[Key::Down, Key::Enter, Key::Escape]);
        let err = show(&mut window, &mut input, &mut surface, &mut library()).unwrap_err();

        // The script ran dry back in the command list
        assert!(matches!(err, crate::error::AppError::Ui(termnav::Error::Io(_))));
        let commands = window.chrome.menu.list::<SaveCommand>(COMMANDS).unwrap();
        assert_eq!(commands.selected_index(), Some(1));
        assert_eq!(commands.items()[1].state(), SelectionState::Selected);
    }

    #[test]
    fn test_no_backups_to_view() {
        let mut window = window();
        let mut library = MemoryLibrary::default();
        run(&mut window, &[Key::Down, Key::Enter, Key::Escape], &mut library);

        assert_eq!(log_lines(&window)[0], NO_BACKUPS);
        assert_eq!(window.summary.get().lines()[1], MAIN_GAME);
    }

    #[test]
    fn test_failed_backup_is_reported() {
        let mut window = window();
        let mut library = ReadOnly(library());
        run(&mut window, &[Key::Enter, Key::Escape], &mut library);

        assert_eq!(log_lines(&window)[..2], [BACKING_UP, "ERROR: library is read-only"]);
        assert_eq!(library.0.save_backups().len(), 2);
    }
}
