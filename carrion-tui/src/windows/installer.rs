use std::cell::Cell;
use std::rc::Rc;

use termnav::{console, ColumnView, List, Navigable, Selection, Style, Surface, Theme, Ui};

use super::info::{actions_for, write_issues, write_short_info};
use super::{Chrome, Transition, Window};
use crate::error::Result;
use crate::library::{MapLibrary, MapRecord};

const TITLE: &str = "Map Installer";
const TITLE_STYLE: Style = Style::new(console::DARK_GREEN, console::WHITE);

const INSTALLED: usize = 0;
const AVAILABLE: usize = 1;

const INSTALL: &str = "Install";
const UNINSTALL: &str = "Uninstall";
const REINSTALL: &str = "Reinstall";

/// Installed maps on the left, installable maps on the right. Moving over a
/// map summarises it in the log.
pub struct InstallerWindow {
    chrome: Chrome,
    /// Set while the window itself restores a selection, so the log keeps
    /// the outcome of the last action.
    quiet: Rc<Cell<bool>>,
}

impl InstallerWindow {
    pub fn new(size: (u16, u16), theme: &Theme) -> Self {
        let mut chrome = Chrome::new(TITLE, TITLE_STYLE, size, theme);
        let quiet = Rc::new(Cell::new(false));

        for (column, header) in [(INSTALLED, "Installed Maps"), (AVAILABLE, "Available Custom Maps")] {
            let mut list: List<MapRecord> = chrome.menu.create_list(column, Some(header), true);
            let log = chrome.log.clone();
            let quiet = Rc::clone(&quiet);
            list.on_selection_changed(move |event, surface| {
                if !quiet.get() {
                    write_short_info(&mut log.get(), event.item.payload(), surface);
                }
            });
            chrome.menu.set_navigable(column, list);
        }

        Self { chrome, quiet }
    }

    fn reload(&mut self, library: &dyn MapLibrary, surface: &mut dyn Surface) {
        set_maps(&mut self.chrome.menu, INSTALLED, library.installed(), surface);
        set_maps(&mut self.chrome.menu, AVAILABLE, library.available(), surface);
    }

    /// Select `row` of `column` again (clamped), or move to the default
    /// spot when that list is now empty. The log is left alone.
    fn restore_selection(&mut self, column: usize, row: usize, surface: &mut dyn Surface) {
        self.quiet.set(true);
        let menu = &mut self.chrome.menu;
        let has_maps = menu.list::<MapRecord>(column).is_some_and(|list| !list.is_empty());
        if has_maps {
            if let Some(list) = menu.list_mut::<MapRecord>(column) {
                list.select(row, surface);
            }
        } else {
            log::debug!("installer column {} is empty, moving focus", column);
            menu.navigate_to_default(surface);
        }
        self.quiet.set(false);
    }

    fn offer_uninstall(
        &mut self,
        map: &MapRecord,
        ui: &mut Ui<'_>,
        library: &mut dyn MapLibrary,
    ) -> Result<()> {
        let (labels, options) = actions_for(UNINSTALL, map);
        match self.chrome.prompt.prompt_selection(ui, &labels, &options)? {
            Some(0) => {
                self.uninstall(map, library, ui.surface);
            }
            Some(_) => write_issues(&mut self.chrome.log.get(), map, ui.surface),
            None => {}
        }
        Ok(())
    }

    fn offer_install(
        &mut self,
        map: &MapRecord,
        ui: &mut Ui<'_>,
        library: &mut dyn MapLibrary,
    ) -> Result<()> {
        let reinstall = library.is_installed(&map.name);
        if reinstall {
            self.chrome.log.get().write_line(
                format!("Map \"{}\" is already installed. Reinstall?", map.name),
                ui.surface,
            );
        }

        let action = if reinstall { REINSTALL } else { INSTALL };
        let (labels, options) = actions_for(action, map);
        match self.chrome.prompt.prompt_selection(ui, &labels, &options)? {
            Some(0) => {
                if !reinstall || self.uninstall(map, library, ui.surface) {
                    self.install(map, library, ui.surface);
                }
            }
            Some(_) => write_issues(&mut self.chrome.log.get(), map, ui.surface),
            None => write_short_info(&mut self.chrome.log.get(), map, ui.surface),
        }
        Ok(())
    }

    fn install(&mut self, map: &MapRecord, library: &mut dyn MapLibrary, surface: &mut dyn Surface) -> bool {
        self.chrome
            .log
            .get()
            .write_line(format!("Installing map {}...", map.name), surface);
        match library.install(&map.name) {
            Ok(()) => {
                self.chrome.log.get().append_last_line(" installed!", surface);
                self.reload(&*library, surface);
                true
            }
            Err(message) => {
                self.chrome.report(message, surface);
                false
            }
        }
    }

    fn uninstall(&mut self, map: &MapRecord, library: &mut dyn MapLibrary, surface: &mut dyn Surface) -> bool {
        self.chrome
            .log
            .get()
            .write_line(format!("Uninstalling map {}...", map.name), surface);
        match library.uninstall(&map.name) {
            Ok(()) => {
                self.chrome.log.get().append_last_line(" uninstalled!", surface);
                self.reload(&*library, surface);
                true
            }
            Err(message) => {
                self.chrome.report(message, surface);
                false
            }
        }
    }
}

fn set_maps(menu: &mut ColumnView, column: usize, maps: Vec<MapRecord>, surface: &mut dyn Surface) {
    if let Some(list) = menu.list_mut::<MapRecord>(column) {
        list.set_entries(maps.into_iter().map(|map| (map.name.clone(), map)), surface);
    }
}

impl Window for InstallerWindow {
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
        let (Some(column), Some(row)) = (selection.column, selection.row) else {
            return Ok(Transition::Stay);
        };
        let Some(map) = self
            .chrome
            .menu
            .list::<MapRecord>(column)
            .and_then(|list| list.selected_payload())
            .cloned()
        else {
            return Ok(Transition::Stay);
        };

        self.chrome.menu.highlight_current::<MapRecord>(ui.surface);
        self.chrome.log.get().clear_content(ui.surface);

        if column == INSTALLED {
            self.offer_uninstall(&map, ui, library)?;
        } else {
            self.offer_install(&map, ui, library)?;
        }

        self.restore_selection(column, row, ui.surface);
        Ok(Transition::Stay)
    }
}
