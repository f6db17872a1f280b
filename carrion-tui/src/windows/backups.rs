use std::cell::Cell;
use std::rc::Rc;

use termnav::{console, List, Navigable, Selection, SelectOptions, Style, Surface, TextBox, Theme, Ui};

use super::{Chrome, Pane, Transition, Window};
use crate::error::Result;
use crate::library::{Backup, BackupKind, MapLibrary};

const TITLE: &str = "Backups";
const TITLE_STYLE: Style = Style::new(console::DARK_YELLOW, console::BLACK);

const BACKUPS: usize = 0;
const DETAILS: usize = 1;

const LOAD_BACKUP: &str = "Load Backup";

/// Backed up (levels, scripts).
type Counts = Rc<Cell<(usize, usize)>>;

fn write_details(pane: &mut TextBox, counts: (usize, usize), backup: Option<&Backup>, surface: &mut dyn Surface) {
    pane.clear_content(surface);
    pane.write_line(format!("Number of backed up levels: {}", counts.0), surface);
    pane.write_line(format!("Number of backed up scripts: {}", counts.1), surface);

    if let Some(backup) = backup {
        pane.write_line("", surface);
        pane.write_line(format!("Name: {}", backup.name), surface);
        pane.write_line(format!("Type: {}", backup.kind.label()), surface);
        pane.write_line(format!("Map: {}", backup.map.as_deref().unwrap_or("-")), surface);
    }
}

/// Files that installations replaced, and a way to put them back.
pub struct BackupsWindow {
    chrome: Chrome,
    details: Pane,
    counts: Counts,
}

impl BackupsWindow {
    pub fn new(size: (u16, u16), theme: &Theme) -> Self {
        let mut chrome = Chrome::new(TITLE, TITLE_STYLE, size, theme);
        let counts: Counts = Rc::new(Cell::new((0, 0)));

        let mut backups: List<Backup> = chrome.menu.create_list(BACKUPS, Some("Backups"), true);
        let details = Pane::new(chrome.menu.create_text_box(DETAILS, Some("Details")));
        {
            let pane = details.clone();
            let counts = Rc::clone(&counts);
            backups.on_selection_changed(move |event, surface| {
                write_details(&mut pane.get(), counts.get(), Some(event.item.payload()), surface);
            });
        }
        chrome.menu.set_navigable(BACKUPS, backups);
        chrome.menu.set_display(DETAILS, details.clone());

        Self { chrome, details, counts }
    }

    /// Refill the list and show the totals. Selection is reset.
    fn reload(&mut self, library: &dyn MapLibrary, surface: &mut dyn Surface) {
        let backups = library.backups();
        let levels = backups.iter().filter(|backup| backup.kind == BackupKind::Level).count();
        self.counts.set((levels, backups.len() - levels));
        write_details(&mut self.details.get(), self.counts.get(), None, surface);

        if let Some(list) = self.chrome.menu.list_mut::<Backup>(BACKUPS) {
            list.set_entries(
                backups.into_iter().map(|backup| (backup.name.clone(), backup)),
                surface,
            );
        }
    }

    fn restore_selection(&mut self, row: usize, surface: &mut dyn Surface) {
        let menu = &mut self.chrome.menu;
        let has_backups = menu.list::<Backup>(BACKUPS).is_some_and(|list| !list.is_empty());
        if has_backups {
            if let Some(list) = menu.list_mut::<Backup>(BACKUPS) {
                list.select(row, surface);
            }
        } else {
            log::debug!("no backups left, moving focus");
            menu.navigate_to_default(surface);
        }
    }
}

impl Window for BackupsWindow {
    fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }

    fn refresh(&mut self, library: &dyn MapLibrary, surface: &mut dyn Surface) {
        self.reload(library, surface);
        self.chrome.log.get().clear_content(surface);
    }

    fn selected(
        &mut self,
        selection: &Selection,
        ui: &mut Ui<'_>,
        library: &mut dyn MapLibrary,
    ) -> Result<Transition> {
        let Some(row) = selection.row else {
            return Ok(Transition::Stay);
        };
        let Some(backup) = self
            .chrome
            .menu
            .list::<Backup>(BACKUPS)
            .and_then(|list| list.selected_payload())
            .cloned()
        else {
            return Ok(Transition::Stay);
        };

        self.chrome.menu.highlight_current::<Backup>(ui.surface);
        self.chrome.log.get().clear_content(ui.surface);

        let choice = self
            .chrome
            .prompt
            .prompt_selection(ui, &[LOAD_BACKUP], &SelectOptions::cancellable())?;
        if choice == Some(0) {
            match library.restore_backup(&backup.name) {
                Ok(()) => {
                    self.chrome
                        .log
                        .get()
                        .write_line(format!("Loaded backup \"{}\".", backup.name), ui.surface);
                    self.reload(&*library, ui.surface);
                }
                Err(message) => self.chrome.report(message, ui.surface),
            }
        }

        self.restore_selection(row, ui.surface);
        Ok(Transition::Stay)
    }
}
