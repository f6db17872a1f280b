use crate::error::Result;
use crate::keymap::Command;
use crate::surface::Surface;
use crate::ui::Ui;
use crate::widget::Paintable;

/// What a prompt loop stopped on: the command that ended it and where the
/// focus was at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub command: Command,
    pub column: Option<usize>,
    pub row: Option<usize>,
}

/// A widget that can hold keyboard focus and move it in four directions.
///
/// Moves are silent no-ops when there is nowhere to go; the `can_navigate_*`
/// guards let a container decide whether to handle a direction itself.
pub trait Navigable: Paintable {
    /// Whether the widget has anything focus could land on.
    fn can_navigate(&self) -> bool;

    fn can_navigate_up(&self) -> bool;
    fn can_navigate_down(&self) -> bool;
    fn can_navigate_left(&self) -> bool;
    fn can_navigate_right(&self) -> bool;

    fn is_active(&self) -> bool;
    fn current_row(&self) -> Option<usize>;
    fn current_column(&self) -> Option<usize>;

    fn deactivate(&mut self, surface: &mut dyn Surface);

    fn navigate_up(&mut self, surface: &mut dyn Surface);
    fn navigate_down(&mut self, surface: &mut dyn Surface);
    fn navigate_left(&mut self, surface: &mut dyn Surface);
    fn navigate_right(&mut self, surface: &mut dyn Surface);
    fn page_up(&mut self, surface: &mut dyn Surface);
    fn page_down(&mut self, surface: &mut dyn Surface);

    fn navigate_to_default(&mut self, surface: &mut dyn Surface);

    // Entry points used when focus arrives from a neighbouring widget
    fn navigate_to_first_row(&mut self, column: usize, surface: &mut dyn Surface);
    fn navigate_to_last_row(&mut self, column: usize, surface: &mut dyn Surface);
    fn navigate_to_first_column(&mut self, row: usize, surface: &mut dyn Surface);
    fn navigate_to_last_column(&mut self, row: usize, surface: &mut dyn Surface);

    /// Block on input, moving focus for directional commands the widget can
    /// honour, until any other command arrives.
    fn prompt_input(&mut self, ui: &mut Ui<'_>) -> Result<Selection> {
        if !self.is_active() {
            self.navigate_to_default(ui.surface);
        }

        loop {
            let press = ui.next_key()?;
            let Some(command) = ui.keymaps.navigation.lookup(&press) else {
                log::trace!("ignoring unmapped key {:?}", press.key);
                continue;
            };

            match command {
                Command::NavigateUp => {
                    if self.can_navigate_up() {
                        self.navigate_up(ui.surface);
                    }
                }
                Command::NavigateDown => {
                    if self.can_navigate_down() {
                        self.navigate_down(ui.surface);
                    }
                }
                Command::NavigateLeft => {
                    if self.can_navigate_left() {
                        self.navigate_left(ui.surface);
                    }
                }
                Command::NavigateRight => {
                    if self.can_navigate_right() {
                        self.navigate_right(ui.surface);
                    }
                }
                Command::PageUp => {
                    if self.can_navigate_up() {
                        self.page_up(ui.surface);
                    }
                }
                Command::PageDown => {
                    if self.can_navigate_down() {
                        self.page_down(ui.surface);
                    }
                }
                command => {
                    return Ok(Selection {
                        command,
                        column: self.current_column(),
                        row: self.current_row(),
                    });
                }
            }
        }
    }
}
