use termnav::text::display_width;
use termnav::{
    console, Command, List, Navigable, Paintable, PromptOptions, Rect, Selection, Style, Surface,
    TextInput, Theme, Ui,
};

use super::info::{
    actions_for, author_line, startup_level_line, version_line, write_issues, write_long_info,
    AUTHOR, DESCRIPTION, IS_WIP, MAP_NAME, STARTUP_LEVEL, VERSION,
};
use super::{Chrome, Pane, Transition, Window};
use crate::error::Result;
use crate::library::{MapLibrary, MapRecord};

const TITLE: &str = "Map Editor";
const TITLE_STYLE: Style = Style::new(console::DARK_MAGENTA, console::WHITE);

const MAPS: usize = 0;
const DETAILS: usize = 1;

const EDIT_MAP_INFO: &str = "Edit Map Info";

const LONG_DESCRIPTION_HINTS: [&str; 2] = [
    "Press Shift + Enter to go to the next line.",
    "Enter saves the description, Escape leaves it unchanged.",
];

/// Editable metadata, one row of the info list each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Version,
    Author,
    StartupLevel,
    Wip,
    ShortDescription,
    LongDescription,
}

impl Field {
    const ALL: [Field; 7] = [
        Field::Name,
        Field::Version,
        Field::Author,
        Field::StartupLevel,
        Field::Wip,
        Field::ShortDescription,
        Field::LongDescription,
    ];

    /// Single-line fields edited in place, next to their label.
    const INLINE: [(Field, &'static str); 5] = [
        (Field::Name, MAP_NAME),
        (Field::Version, VERSION),
        (Field::Author, AUTHOR),
        (Field::StartupLevel, STARTUP_LEVEL),
        (Field::ShortDescription, DESCRIPTION),
    ];

    fn row(self) -> u16 {
        self as u16
    }

    /// Text shown in the info list.
    fn line(self, map: &MapRecord) -> String {
        match self {
            Field::Name => format!("{}{}", MAP_NAME, map.name),
            Field::Version => version_line(map),
            Field::Author => author_line(map),
            Field::StartupLevel => startup_level_line(map),
            Field::Wip => format!("{}{}", IS_WIP, map.is_wip),
            Field::ShortDescription => {
                format!("{}{}", DESCRIPTION, map.short_description.as_deref().unwrap_or_default())
            }
            Field::LongDescription => DESCRIPTION.to_string(),
        }
    }

    /// Text an editor for this field starts from.
    fn text(self, map: &MapRecord) -> String {
        let value = match self {
            Field::Name => return map.name.clone(),
            Field::Wip => return map.is_wip.to_string(),
            Field::Version => &map.version,
            Field::Author => &map.author,
            Field::StartupLevel => &map.startup_level,
            Field::ShortDescription => &map.short_description,
            Field::LongDescription => &map.long_description,
        };
        value.clone().unwrap_or_default()
    }

    fn store(self, map: &mut MapRecord, text: String) {
        match self {
            Field::Name => map.name = text,
            Field::Wip => map.is_wip = !map.is_wip,
            Field::Version => map.version = Some(text),
            Field::Author => map.author = Some(text),
            Field::StartupLevel => map.startup_level = Some(text),
            Field::ShortDescription => map.short_description = Some(text),
            Field::LongDescription => map.long_description = Some(text),
        }
    }
}

/// Installed maps on the left, details of the selected one on the right.
/// Confirm on a map opens its metadata for editing.
pub struct EditorWindow {
    chrome: Chrome,
    details: Pane,
    fields: List<Field>,
    inputs: Vec<(Field, TextInput)>,
    long_description: TextInput,
}

impl EditorWindow {
    pub fn new(size: (u16, u16), theme: &Theme) -> Self {
        let mut chrome = Chrome::new(TITLE, TITLE_STYLE, size, theme);

        let mut maps: List<MapRecord> = chrome.menu.create_list(MAPS, Some("Installed Maps"), true);
        let details = Pane::new(chrome.menu.create_text_box(DETAILS, Some("Details")));
        let pane = details.clone();
        maps.on_selection_changed(move |event, surface| {
            write_long_info(&mut pane.get(), event.item.payload(), surface);
        });
        chrome.menu.set_navigable(MAPS, maps);
        chrome.menu.set_display(DETAILS, details.clone());

        let area = details.rect();
        let inline_options = PromptOptions::default()
            .can_cancel(true)
            .pre_write_current_text(true);

        let inputs = Field::INLINE
            .iter()
            .map(|&(field, label)| {
                // One column for the selection marker before the label and
                // two after the input for the closing marker and scrollbar
                let offset = display_width(label) as u16 + 1;
                let rect = Rect::new(
                    area.x + offset,
                    area.y + field.row(),
                    area.width.saturating_sub(offset + 2),
                    1,
                );
                let options = inline_options.clone().allow_empty(field != Field::Name);
                (field, TextInput::new(rect, theme).with_default_options(options))
            })
            .collect();

        let long_top = Field::LongDescription.row() + 1;
        let long_description = TextInput::new(
            Rect::new(
                area.x,
                area.y + long_top,
                area.width.saturating_sub(1),
                area.height.saturating_sub(long_top).max(1),
            ),
            theme,
        )
        .with_default_options(inline_options);

        Self {
            chrome,
            details,
            fields: List::new(area, theme),
            inputs,
            long_description,
        }
    }

    fn reload(&mut self, library: &dyn MapLibrary, surface: &mut dyn Surface) {
        if let Some(list) = self.chrome.menu.list_mut::<MapRecord>(MAPS) {
            let maps = library.installed();
            list.set_entries(maps.into_iter().map(|map| (map.name.clone(), map)), surface);
        }
    }

    /// Run the info list over the details pane until Cancel. Every
    /// confirmed edit goes straight to the library.
    fn edit_map_info(&mut self, map: MapRecord, ui: &mut Ui<'_>, library: &mut dyn MapLibrary) -> Result<()> {
        let mut record = map;
        let mut changed = false;

        self.fields
            .set_entries(Field::ALL.map(|field| (field.line(&record), field)), ui.surface);
        self.fields.navigate_to_default(ui.surface);

        loop {
            let selection = self.fields.prompt_input(ui)?;
            match selection.command {
                Command::Confirm => {}
                Command::Cancel => break,
                _ => continue,
            }
            let Some(row) = selection.row else { continue };
            let Some(field) = self.fields.item(row).map(|item| *item.payload()) else {
                continue;
            };

            self.fields.highlight_current(ui.surface);
            if let Some(edited) = self.edit_field(field, &record, ui)? {
                match library.update(&record.name, edited.clone()) {
                    Ok(()) => {
                        log::debug!("updated {:?} of map {}", field, edited.name);
                        record = edited;
                        changed = true;
                    }
                    Err(message) => self.chrome.report(message, ui.surface),
                }
            }

            if let Some(item) = self.fields.item_mut(row) {
                item.set_value(field.line(&record));
            }
            self.fields.paint(ui.surface);
            self.fields.select_current(ui.surface);
        }

        self.fields.clear(ui.surface);
        if changed {
            self.reload(&*library, ui.surface);
        }
        Ok(())
    }

    /// Prompt for a new value. `None` when the edit was cancelled.
    fn edit_field(&mut self, field: Field, record: &MapRecord, ui: &mut Ui<'_>) -> Result<Option<MapRecord>> {
        let mut edited = record.clone();
        match field {
            Field::Wip => field.store(&mut edited, String::new()),
            Field::LongDescription => {
                {
                    let mut log = self.chrome.log.get();
                    log.clear_content(ui.surface);
                    for hint in LONG_DESCRIPTION_HINTS {
                        log.write_line(hint, ui.surface);
                    }
                }
                self.long_description.set_text(field.text(record));
                let confirmed = self.long_description.prompt_text_multiline(ui)?;
                self.chrome.log.get().clear_content(ui.surface);
                if !confirmed {
                    return Ok(None);
                }
                field.store(&mut edited, self.long_description.text().to_string());
            }
            _ => {
                let Some((_, input)) = self.inputs.iter_mut().find(|(f, _)| *f == field) else {
                    return Ok(None);
                };
                input.set_text(field.text(record));
                if !input.prompt_text(ui)? {
                    return Ok(None);
                }
                field.store(&mut edited, input.text().to_string());
            }
        }
        Ok(Some(edited))
    }
}

impl Window for EditorWindow {
    fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }

    fn refresh(&mut self, library: &dyn MapLibrary, surface: &mut dyn Surface) {
        self.reload(library, surface);
        self.details.get().clear_content(surface);
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
        let Some(map) = self
            .chrome
            .menu
            .list::<MapRecord>(MAPS)
            .and_then(|list| list.selected_payload())
            .cloned()
        else {
            return Ok(Transition::Stay);
        };

        self.chrome.menu.highlight_current::<MapRecord>(ui.surface);
        self.chrome.log.get().clear_content(ui.surface);

        let (labels, options) = actions_for(EDIT_MAP_INFO, &map);
        match self.chrome.prompt.prompt_selection(ui, &labels, &options)? {
            Some(0) => self.edit_map_info(map, ui, library)?,
            Some(_) => write_issues(&mut self.chrome.log.get(), &map, ui.surface),
            None => {}
        }

        if let Some(list) = self.chrome.menu.list_mut::<MapRecord>(MAPS) {
            list.select(row, ui.surface);
        }
        self.chrome.menu.paint_column(DETAILS, ui.surface);
        Ok(Transition::Stay)
    }
}

#[cfg(test)]
mod tests {
    use termnav::Key;

    use super::*;
    use crate::library::MemoryLibrary;
    use crate::windows::testing::{screen_contains, script, show, surface, SIZE};

    fn window() -> EditorWindow {
        EditorWindow::new(SIZE, &Theme::default())
    }

    fn library() -> MemoryLibrary {
        let sewers = MapRecord::new("Sewers")
            .with_version("1.0")
            .with_descriptions("Drains", "Long way down");
        MemoryLibrary::new(vec![sewers.clone()], vec![sewers], vec![])
    }

    /// Open the map's info list: confirm the map, confirm "Edit Map Info".
    const OPEN_INFO: [Key; 2] = [Key::Enter, Key::Enter];
    /// Leave the info list, then the window.
    const LEAVE: [Key; 2] = [Key::Escape, Key::Escape];

    fn run(window: &mut EditorWindow, edit: &[Key], library: &mut MemoryLibrary) {
        let keys: Vec<Key> = OPEN_INFO.iter().chain(edit).chain(&LEAVE).copied().collect();
        let mut surface = surface();
        let mut input = script(&keys);
        let transition = show(window, &mut input, &mut surface, library).unwrap();
        assert_eq!(transition, Transition::Goto(0));
        assert_eq!(input.remaining(), 0);
    }

    fn installed(library: &MemoryLibrary) -> MapRecord {
        library.installed().remove(0)
    }

    #[test]
    fn test_field_lines() {
        let map = MapRecord::new("Sewers").with_version("1.0");
        let lines: Vec<String> = Field::ALL.iter().map(|field| field.line(&map)).collect();
        assert_eq!(
            lines,
            [
                "Map: Sewers",
                "Version: 1.0",
                "Author: Unknown",
                "Startup Level: -not set-",
                "Work in progress: false",
                "Description: ",
                "Description: ",
            ]
        );
    }

    #[test]
    fn test_inline_inputs_sit_after_their_labels() {
        let window = window();
        let area = window.details.rect();
        let (_, version) = &window.inputs[1];
        assert_eq!(version.rect().x, area.x + 1 + "Version: ".len() as u16);
        assert_eq!(version.rect().y, area.y + 1);
        assert_eq!(window.long_description.rect().y, area.y + 7);
    }

    #[test]
    fn test_details_follow_selection() {
        let mut window = window();
        let mut surface = surface();
        let mut input = script(&[Key::Escape]);
        show(&mut window, &mut input, &mut surface, &mut library()).unwrap();

        assert_eq!(window.details.get().lines()[0], "Map: Sewers");
        assert!(screen_contains(&surface, "Long way down"));
    }

    #[test]
    fn test_rename_map() {
        let mut window = window();
        let mut library = library();
        // Name row, append "X", confirm
        run(&mut window, &[Key::Enter, Key::Char('X'), Key::Enter], &mut library);

        assert_eq!(installed(&library).name, "SewersX");
        assert_eq!(window.details.get().lines()[0], "Map: SewersX");
    }

    #[test]
    fn test_cancelled_edit_leaves_record() {
        let mut window = window();
        let mut library = library();
        run(&mut window, &[Key::Enter, Key::Char('X'), Key::Escape], &mut library);
        assert_eq!(installed(&library), library.available()[0]);
    }

    #[test]
    fn test_empty_name_is_not_accepted() {
        let mut window = window();
        let mut library = library();
        let mut edit = vec![Key::Enter];
        edit.extend([Key::Backspace; 6]);
        // Confirm is ignored on the empty buffer, so cancel
        edit.extend([Key::Enter, Key::Escape]);
        run(&mut window, &edit, &mut library);
        assert_eq!(installed(&library).name, "Sewers");
    }

    #[test]
    fn test_clear_version() {
        let mut window = window();
        let mut library = library();
        let edit = [Key::Down, Key::Enter, Key::Backspace, Key::Backspace, Key::Backspace, Key::Enter];
        run(&mut window, &edit, &mut library);
        assert_eq!(installed(&library).version.as_deref(), Some(""));
    }

    #[test]
    fn test_toggle_wip() {
        let mut window = window();
        let mut library = library();
        let edit = [Key::Down, Key::Down, Key::Down, Key::Down, Key::Enter];
        run(&mut window, &edit, &mut library);
        assert!(installed(&library).is_wip);
    }

    #[test]
    fn test_long_description_multiline() {
        let mut window = window();
        let mut library = library();
        let mut edit = vec![Key::Down; 6];
        edit.extend([Key::Enter, Key::End, Key::Char('!'), Key::Enter]);
        run(&mut window, &edit, &mut library);

        assert_eq!(installed(&library).long_description.as_deref(), Some("Long way down!"));
        // The hints are gone once the editor closes
        assert!(window.chrome.log.get().lines().iter().all(String::is_empty));
    }

    #[test]
    fn test_rename_collision_is_reported() {
        let mut window = window();
        let mut library = MemoryLibrary::new(
            vec![MapRecord::new("A"), MapRecord::new("B")],
            vec![],
            vec![],
        );
        run(
            &mut window,
            &[Key::Enter, Key::Backspace, Key::Char('B'), Key::Enter],
            &mut library,
        );

        assert_eq!(installed(&library).name, "A");
        assert_eq!(window.chrome.log.get().lines()[0], "ERROR: A map named B is already installed");
    }

    #[test]
    fn test_invalid_map_shows_issues() {
        let mut window = window();
        let mut library =
            MemoryLibrary::new(vec![MapRecord::new("Tower").with_issue("no levels")], vec![], vec![]);
        let mut surface = surface();
        let mut input = script(&[Key::Enter, Key::Enter, Key::Escape]);
        show(&mut window, &mut input, &mut surface, &mut library).unwrap();
        assert_eq!(window.chrome.log.get().lines()[0], "[!] no levels");
    }
}
