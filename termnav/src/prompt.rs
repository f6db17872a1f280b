use crate::error::{Error, Result};
use crate::keymap::Command;
use crate::layout::Rect;
use crate::surface::Surface;
use crate::types::{SelectionState, Style, Theme};
use crate::ui::Ui;
use crate::widget::{Atom, AtomStyles, Paintable};

/// Label of the pseudo-choice appended when cancelling is allowed.
pub const CANCEL_LABEL: &str = "Cancel";

/// Behaviour of one [`SelectionPrompt::prompt_selection`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    /// Offer a trailing "Cancel" choice and accept the Cancel command.
    pub allow_cancel: bool,
    /// Initially selected choice. Defaults to the first enabled one.
    pub index: Option<usize>,
    /// Choices that can be moved over but not confirmed.
    pub disabled: Vec<usize>,
}

impl SelectOptions {
    pub fn cancellable() -> Self {
        Self {
            allow_cancel: true,
            ..Default::default()
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_disabled(mut self, disabled: impl IntoIterator<Item = usize>) -> Self {
        self.disabled.extend(disabled);
        self
    }
}

/// One-shot horizontal choice bar. Holds no state between prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPrompt {
    rect: Rect,
    style: Style,
    atom_styles: AtomStyles,
}

impl SelectionPrompt {
    pub fn new(rect: Rect, theme: &Theme) -> Self {
        Self {
            rect: rect.first_row(),
            style: theme.content,
            atom_styles: AtomStyles::from_theme(theme),
        }
    }

    /// Show `labels` left to right and block until one is confirmed.
    ///
    /// Returns the confirmed index, or `None` when cancelled. With
    /// `allow_cancel`, a trailing "Cancel" choice is added unless `labels`
    /// already ends with one; confirming it counts as cancelling. The
    /// prompt's row is blank again when this returns.
    pub fn prompt_selection<S: AsRef<str>>(
        &self,
        ui: &mut Ui<'_>,
        labels: &[S],
        options: &SelectOptions,
    ) -> Result<Option<usize>> {
        let result = self.run(ui, labels, options);
        self.clear(ui.surface);
        result
    }

    fn run<S: AsRef<str>>(&self, ui: &mut Ui<'_>, labels: &[S], options: &SelectOptions) -> Result<Option<usize>> {
        self.clear(ui.surface);
        let mut choices = self.layout(labels, options);
        let cancel_index = options.allow_cancel.then(|| choices.len() - 1);

        let mut selected = match options.index {
            Some(index) if index < choices.len() => index,
            Some(index) => {
                return Err(Error::ChoiceOutOfRange {
                    index,
                    len: choices.len(),
                })
            }
            None => choices
                .iter()
                .position(Atom::is_enabled)
                .ok_or(Error::NoEligibleChoice)?,
        };
        choices[selected].set_state(SelectionState::Selected);
        log::debug!("selection prompt with {} choices, starting at {}", choices.len(), selected);

        loop {
            for choice in &choices {
                choice.paint(ui.surface);
            }

            let press = ui.next_key()?;
            let Some(command) = ui.keymaps.navigation.lookup(&press) else {
                continue;
            };

            match command {
                Command::NavigateLeft if selected > 0 => {
                    choices[selected].deselect(ui.surface);
                    selected -= 1;
                    choices[selected].select(ui.surface);
                }
                Command::NavigateRight if selected + 1 < choices.len() => {
                    choices[selected].deselect(ui.surface);
                    selected += 1;
                    choices[selected].select(ui.surface);
                }
                Command::Confirm if choices[selected].is_enabled() => {
                    if cancel_index == Some(selected) {
                        return Ok(None);
                    }
                    return Ok(Some(selected));
                }
                Command::Cancel if options.allow_cancel => return Ok(None),
                _ => {}
            }
        }
    }

    fn layout<S: AsRef<str>>(&self, labels: &[S], options: &SelectOptions) -> Vec<Atom> {
        let mut labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        if options.allow_cancel && labels.last() != Some(&CANCEL_LABEL) {
            labels.push(CANCEL_LABEL);
        }

        let mut left = self.rect.x;
        labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                let mut atom = Atom::new(label, ())
                    .at(left, self.rect.y as i32)
                    .with_styles(self.atom_styles);
                atom.set_enabled(!options.disabled.contains(&index));
                left = left.saturating_add(atom.width());
                atom
            })
            .collect()
    }
}

impl Paintable for SelectionPrompt {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn style(&self) -> Style {
        self.style
    }

    fn paint(&self, surface: &mut dyn Surface) {
        self.clear(surface);
    }
}
