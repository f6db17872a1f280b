use super::{Label, List, Paintable, TextBox};
use crate::error::Result;
use crate::focus::{Navigable, Selection};
use crate::keymap::Command;
use crate::layout::Rect;
use crate::surface::Surface;
use crate::types::{Style, Theme};
use crate::ui::Ui;

/// Content of one column.
pub enum Slot {
    Empty,
    Navigable(Box<dyn Navigable>),
    Display(Box<dyn Paintable>),
}

impl Slot {
    fn navigable(&self) -> Option<&dyn Navigable> {
        match self {
            Slot::Navigable(widget) => Some(&**widget),
            _ => None,
        }
    }

    fn navigable_mut(&mut self) -> Option<&mut dyn Navigable> {
        match self {
            Slot::Navigable(widget) => Some(&mut **widget),
            _ => None,
        }
    }

    fn paint(&self, surface: &mut dyn Surface) {
        match self {
            Slot::Empty => {}
            Slot::Navigable(widget) => widget.paint(surface),
            Slot::Display(widget) => widget.paint(surface),
        }
    }
}

/// Side-by-side columns of equal width, each with an optional header row.
/// Left and right move focus between columns that have something to
/// select; every other direction goes to the focused column's widget.
pub struct ColumnView {
    rect: Rect,
    theme: Theme,
    columns: Vec<Rect>,
    headers: Vec<Option<Label>>,
    slots: Vec<Slot>,
    current: Option<usize>,
}

impl ColumnView {
    pub fn new(rect: Rect, count: usize, theme: &Theme) -> Self {
        let columns = rect.split_columns(count);
        Self {
            rect,
            theme: theme.clone(),
            headers: vec![None; columns.len()],
            slots: (0..columns.len()).map(|_| Slot::Empty).collect(),
            columns,
            current: None,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Area left for the column's widget once its header is placed.
    pub fn body_rect(&self, column: usize) -> Option<Rect> {
        let rect = *self.columns.get(column)?;
        Some(match self.headers[column] {
            Some(_) => rect.below(1),
            None => rect,
        })
    }

    pub fn set_header(&mut self, column: usize, header: Option<&str>) {
        let Some(rect) = self.columns.get(column).copied() else {
            return;
        };
        self.headers[column] = header.map(|text| {
            Label::new(rect.first_row(), self.theme.minor_header, text).centered()
        });
    }

    /// Build a list filling `column` below its header. Put it in place with
    /// [`ColumnView::set_navigable`] once configured.
    pub fn create_list<T: 'static>(&mut self, column: usize, header: Option<&str>, force_scrollbar: bool) -> List<T> {
        self.set_header(column, header);
        let rect = self.body_rect(column).unwrap_or_default();
        List::new(rect, &self.theme).force_scrollbar(force_scrollbar)
    }

    pub fn create_text_box(&mut self, column: usize, header: Option<&str>) -> TextBox {
        self.set_header(column, header);
        let rect = self.body_rect(column).unwrap_or_default();
        TextBox::new(rect, self.theme.content)
    }

    pub fn set_navigable<N: Navigable + 'static>(&mut self, column: usize, widget: N) {
        self.set_slot(column, Slot::Navigable(Box::new(widget)));
    }

    pub fn set_display<P: Paintable + 'static>(&mut self, column: usize, widget: P) {
        self.set_slot(column, Slot::Display(Box::new(widget)));
    }

    pub fn clear_slot(&mut self, column: usize) {
        self.set_slot(column, Slot::Empty);
    }

    fn set_slot(&mut self, column: usize, slot: Slot) {
        if let Some(existing) = self.slots.get_mut(column) {
            *existing = slot;
            if self.current == Some(column) {
                self.current = None;
            }
        }
    }

    pub fn navigable(&self, column: usize) -> Option<&dyn Navigable> {
        self.slots.get(column)?.navigable()
    }

    pub fn navigable_mut(&mut self, column: usize) -> Option<&mut dyn Navigable> {
        self.slots.get_mut(column)?.navigable_mut()
    }

    pub fn list<T: 'static>(&self, column: usize) -> Option<&List<T>> {
        self.navigable(column)?.as_any().downcast_ref()
    }

    pub fn list_mut<T: 'static>(&mut self, column: usize) -> Option<&mut List<T>> {
        self.navigable_mut(column)?.as_any_mut().downcast_mut()
    }

    pub fn text_box(&self, column: usize) -> Option<&TextBox> {
        match self.slots.get(column)? {
            Slot::Display(widget) => (**widget).as_any().downcast_ref(),
            _ => None,
        }
    }

    pub fn text_box_mut(&mut self, column: usize) -> Option<&mut TextBox> {
        match self.slots.get_mut(column)? {
            Slot::Display(widget) => (**widget).as_any_mut().downcast_mut(),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Whether focus sits on a column whose widget has a selection.
    pub fn selection_valid(&self) -> bool {
        self.current
            .and_then(|column| self.navigable(column))
            .is_some_and(|widget| widget.is_active())
    }

    fn eligible(&self, column: usize) -> bool {
        self.navigable(column).is_some_and(|widget| widget.can_navigate())
    }

    fn active_child(&self) -> Option<&dyn Navigable> {
        self.navigable(self.current?)
    }

    fn active_child_mut(&mut self) -> Option<&mut dyn Navigable> {
        let column = self.current?;
        self.navigable_mut(column)
    }

    fn eligible_left(&self) -> Option<usize> {
        let current = self.current?;
        (0..current).rev().find(|&column| self.eligible(column))
    }

    fn eligible_right(&self) -> Option<usize> {
        let start = self.current.map_or(0, |current| current + 1);
        (start..self.columns.len()).find(|&column| self.eligible(column))
    }

    fn leave_current(&mut self, surface: &mut dyn Surface) {
        if let Some(child) = self.active_child_mut() {
            child.deactivate(surface);
        }
        self.current = None;
    }

    /// Move focus to `column`, landing through `enter`.
    fn focus_column<F>(&mut self, column: usize, surface: &mut dyn Surface, enter: F)
    where
        F: FnOnce(&mut dyn Navigable, &mut dyn Surface),
    {
        log::debug!("column focus {:?} -> {}", self.current, column);
        self.leave_current(surface);
        if let Some(child) = self.navigable_mut(column) {
            enter(child, surface);
            self.current = Some(column);
        }
    }

    pub fn paint_column(&self, column: usize, surface: &mut dyn Surface) {
        if let Some(rect) = self.columns.get(column) {
            surface.clear(*rect, &self.theme.content);
        }
        if let Some(Some(header)) = self.headers.get(column) {
            header.paint(surface);
        }
        if let Some(slot) = self.slots.get(column) {
            slot.paint(surface);
        }
    }

    /// Show the focused list's selection as highlighted while a nested
    /// prompt has the keyboard.
    pub fn highlight_current<T: 'static>(&mut self, surface: &mut dyn Surface) {
        if let Some(list) = self.current.and_then(|column| self.list_mut::<T>(column)) {
            list.highlight_current(surface);
        }
    }

    /// Loop until a command other than Confirm arrives, or Confirm arrives
    /// with a valid selection.
    pub fn prompt_selection(&mut self, ui: &mut Ui<'_>) -> Result<Selection> {
        loop {
            let selection = self.prompt_input(ui)?;
            if selection.command != Command::Confirm || self.selection_valid() {
                return Ok(selection);
            }
            log::trace!("confirm ignored: no valid selection");
        }
    }
}

impl Paintable for ColumnView {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn style(&self) -> Style {
        self.theme.content
    }

    fn paint(&self, surface: &mut dyn Surface) {
        self.clear(surface);
        for column in 0..self.columns.len() {
            self.paint_column(column, surface);
        }
    }
}

impl Navigable for ColumnView {
    fn can_navigate(&self) -> bool {
        (0..self.columns.len()).any(|column| self.eligible(column))
    }

    fn can_navigate_up(&self) -> bool {
        self.active_child().is_some_and(|child| child.can_navigate_up())
    }

    fn can_navigate_down(&self) -> bool {
        self.active_child().is_some_and(|child| child.can_navigate_down())
    }

    fn can_navigate_left(&self) -> bool {
        self.eligible_left().is_some()
            || self.active_child().is_some_and(|child| child.can_navigate_left())
    }

    fn can_navigate_right(&self) -> bool {
        self.eligible_right().is_some()
            || self.active_child().is_some_and(|child| child.can_navigate_right())
    }

    fn is_active(&self) -> bool {
        self.selection_valid()
    }

    fn current_row(&self) -> Option<usize> {
        self.active_child()?.current_row()
    }

    fn current_column(&self) -> Option<usize> {
        self.current
    }

    fn deactivate(&mut self, surface: &mut dyn Surface) {
        self.leave_current(surface);
    }

    fn navigate_up(&mut self, surface: &mut dyn Surface) {
        if let Some(child) = self.active_child_mut() {
            child.navigate_up(surface);
        }
    }

    fn navigate_down(&mut self, surface: &mut dyn Surface) {
        if let Some(child) = self.active_child_mut() {
            child.navigate_down(surface);
        }
    }

    fn navigate_left(&mut self, surface: &mut dyn Surface) {
        let row = self.current_row().unwrap_or(0);
        match self.eligible_left() {
            Some(column) => {
                self.focus_column(column, surface, |child, surface| {
                    child.navigate_to_last_column(row, surface)
                });
            }
            None => {
                if let Some(child) = self.active_child_mut() {
                    if child.can_navigate_left() {
                        child.navigate_left(surface);
                    }
                }
            }
        }
    }

    fn navigate_right(&mut self, surface: &mut dyn Surface) {
        let row = self.current_row().unwrap_or(0);
        match self.eligible_right() {
            Some(column) => {
                self.focus_column(column, surface, |child, surface| {
                    child.navigate_to_first_column(row, surface)
                });
            }
            None => {
                if let Some(child) = self.active_child_mut() {
                    if child.can_navigate_right() {
                        child.navigate_right(surface);
                    }
                }
            }
        }
    }

    fn page_up(&mut self, surface: &mut dyn Surface) {
        if let Some(child) = self.active_child_mut() {
            child.page_up(surface);
        }
    }

    fn page_down(&mut self, surface: &mut dyn Surface) {
        if let Some(child) = self.active_child_mut() {
            child.page_down(surface);
        }
    }

    fn navigate_to_default(&mut self, surface: &mut dyn Surface) {
        self.leave_current(surface);
        if let Some(column) = (0..self.columns.len()).find(|&column| self.eligible(column)) {
            self.focus_column(column, surface, |child, surface| child.navigate_to_default(surface));
        }
    }

    fn navigate_to_first_row(&mut self, column: usize, surface: &mut dyn Surface) {
        if self.eligible(column) {
            self.focus_column(column, surface, |child, surface| child.navigate_to_first_row(0, surface));
        } else {
            self.navigate_to_default(surface);
        }
    }

    fn navigate_to_last_row(&mut self, column: usize, surface: &mut dyn Surface) {
        if self.eligible(column) {
            self.focus_column(column, surface, |child, surface| child.navigate_to_last_row(0, surface));
        } else {
            self.navigate_to_default(surface);
        }
    }

    fn navigate_to_first_column(&mut self, row: usize, surface: &mut dyn Surface) {
        if let Some(column) = (0..self.columns.len()).find(|&column| self.eligible(column)) {
            self.focus_column(column, surface, |child, surface| {
                child.navigate_to_first_column(row, surface)
            });
        }
    }

    fn navigate_to_last_column(&mut self, row: usize, surface: &mut dyn Surface) {
        if let Some(column) = (0..self.columns.len()).rev().find(|&column| self.eligible(column)) {
            self.focus_column(column, surface, |child, surface| {
                child.navigate_to_last_column(row, surface)
            });
        }
    }
}
