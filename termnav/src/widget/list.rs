use super::{Atom, AtomStyles, Paintable, Scrollbar};
use crate::focus::Navigable;
use crate::layout::Rect;
use crate::scroll::{clamp_scroll, max_scroll};
use crate::surface::Surface;
use crate::types::{SelectionState, Style, Theme};

/// Delivered to listeners whenever the selected index changes.
pub struct SelectionChanged<'a, T> {
    pub previous_index: Option<usize>,
    pub previous: Option<&'a Atom<T>>,
    pub index: usize,
    pub item: &'a Atom<T>,
}

/// Callback run synchronously from [`List::select`]. It may paint, e.g. to
/// refresh a detail pane.
pub type Listener<T> = Box<dyn FnMut(&SelectionChanged<'_, T>, &mut dyn Surface)>;

/// Vertical, scrollable, single-selection list of atoms. The rightmost
/// column of the list is its scrollbar.
pub struct List<T = ()> {
    rect: Rect,
    style: Style,
    atom_styles: AtomStyles,
    items: Vec<Atom<T>>,
    selected: Option<usize>,
    scroll: usize,
    scrollbar: Scrollbar,
    listeners: Vec<Listener<T>>,
}

impl<T: 'static> List<T> {
    pub fn new(rect: Rect, theme: &Theme) -> Self {
        let scrollbar = Scrollbar::new(
            rect.right_column(),
            theme.scrollbar_track,
            theme.scrollbar_thumb,
            theme.content,
        );
        Self {
            rect,
            style: theme.content,
            atom_styles: AtomStyles::from_theme(theme),
            items: Vec::new(),
            selected: None,
            scroll: 0,
            scrollbar,
            listeners: Vec::new(),
        }
    }

    pub fn force_scrollbar(mut self, force: bool) -> Self {
        self.scrollbar.set_force_show(force);
        self
    }

    pub fn on_selection_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&SelectionChanged<'_, T>, &mut dyn Surface) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn height(&self) -> usize {
        self.rect.height as usize
    }

    fn item_width(&self) -> u16 {
        self.rect.width.saturating_sub(1)
    }

    pub fn items(&self) -> &[Atom<T>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Atom<T>> {
        self.items.get(index)
    }

    /// Mutable access to one atom. Call [`List::repaint_item`] after
    /// changing something visible.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut Atom<T>> {
        self.items.get_mut(index)
    }

    pub fn repaint_item(&self, index: usize, surface: &mut dyn Surface) {
        if let Some(item) = self.items.get(index) {
            item.paint(surface);
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Atom<T>> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn selected_payload(&self) -> Option<&T> {
        self.selected_item().map(Atom::payload)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn scrollbar(&self) -> &Scrollbar {
        &self.scrollbar
    }

    /// Append an atom below the last one. Not painted until the next
    /// [`Paintable::paint`].
    pub fn push_atom(&mut self, atom: Atom<T>) {
        let index = self.items.len();
        let atom = self.place(atom, index);
        self.items.push(atom);
        self.refresh_scrollbar();
    }

    pub fn push(&mut self, value: impl Into<String>, payload: T) {
        self.push_atom(Atom::new(value, payload));
    }

    pub fn push_check_box(&mut self, value: impl Into<String>, checked: bool, payload: T) {
        self.push_atom(Atom::check_box(value, checked, payload));
    }

    /// Replace the content. Selection is cleared and the view scrolled back
    /// to the top.
    pub fn set_items(&mut self, atoms: Vec<Atom<T>>, surface: &mut dyn Surface) {
        self.selected = None;
        self.scroll = 0;
        self.items = atoms
            .into_iter()
            .enumerate()
            .map(|(index, atom)| self.place(atom, index))
            .collect();
        self.refresh_scrollbar();
        self.clear(surface);
        self.paint(surface);
    }

    pub fn set_entries<I, S>(&mut self, entries: I, surface: &mut dyn Surface)
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let atoms = entries
            .into_iter()
            .map(|(value, payload)| Atom::new(value, payload))
            .collect();
        self.set_items(atoms, surface);
    }

    fn place(&self, mut atom: Atom<T>, index: usize) -> Atom<T> {
        let top = self.rect.y as i32 + index as i32 - self.scroll as i32;
        atom = atom
            .at(self.rect.x, top)
            .with_width(self.item_width())
            .with_styles(self.atom_styles);
        // Only `select` hands out selection
        atom.set_state(SelectionState::None);
        atom.set_visible(self.row_visible(top));
        atom
    }

    fn row_visible(&self, top: i32) -> bool {
        top >= self.rect.y as i32 && top < self.rect.y as i32 + self.rect.height as i32
    }

    fn refresh_scrollbar(&mut self) {
        let max = max_scroll(self.items.len(), self.height());
        self.scrollbar.update(self.scroll, max);
    }

    /// Select `index`, clamped to the list. Listeners hear about it only if
    /// the index changed. The view then scrolls to show the selection.
    pub fn select(&mut self, index: usize, surface: &mut dyn Surface) {
        if self.items.is_empty() {
            return;
        }
        let index = index.min(self.items.len() - 1);
        let previous = self.selected;

        if previous == Some(index) {
            self.items[index].select(surface);
        } else {
            if let Some(item) = previous.and_then(|p| self.items.get_mut(p)) {
                item.deselect(surface);
            }
            self.selected = Some(index);
            self.items[index].select(surface);
            log::trace!("list selection {:?} -> {}", previous, index);
            self.notify(previous, index, surface);
        }

        self.scroll_to_selected(surface);
    }

    fn notify(&mut self, previous_index: Option<usize>, index: usize, surface: &mut dyn Surface) {
        let event = SelectionChanged {
            previous_index,
            previous: previous_index.and_then(|p| self.items.get(p)),
            index,
            item: &self.items[index],
        };
        for listener in self.listeners.iter_mut() {
            listener(&event, surface);
        }
    }

    /// Move by `offset` rows from the current selection, clamped.
    fn navigate(&mut self, offset: isize, surface: &mut dyn Surface) {
        let Some(current) = self.selected else {
            self.navigate_to_default(surface);
            return;
        };
        let target = current.saturating_add_signed(offset).min(self.items.len().saturating_sub(1));
        if target != current {
            self.select(target, surface);
        }
    }

    /// Scroll by the smallest amount that brings the selection into view.
    pub fn scroll_to_selected(&mut self, surface: &mut dyn Surface) {
        let Some(selected) = self.selected else {
            return;
        };
        let height = self.height();
        if selected < self.scroll {
            self.scroll(-((self.scroll - selected) as isize), surface);
        } else if selected + 1 > self.scroll + height {
            self.scroll((selected + 1 - (self.scroll + height)) as isize, surface);
        }
    }

    /// Shift the view by `delta` rows, clamped to the scrollable range.
    pub fn scroll(&mut self, delta: isize, surface: &mut dyn Surface) {
        let target = clamp_scroll(self.scroll, delta, self.items.len(), self.height());
        let applied = target as i32 - self.scroll as i32;
        if applied == 0 {
            return;
        }
        self.scroll = target;

        for index in 0..self.items.len() {
            let top = self.items[index].top() - applied;
            let visible = self.row_visible(top);
            let item = &mut self.items[index];
            item.set_top(top);
            item.set_visible(visible);
        }
        self.refresh_scrollbar();
        self.paint(surface);
    }

    /// Show the selection as highlighted while another widget has the keys.
    pub fn highlight_current(&mut self, surface: &mut dyn Surface) {
        if let Some(item) = self.selected.and_then(|i| self.items.get_mut(i)) {
            item.highlight(surface);
        }
    }

    /// Turn a highlighted selection back into a selected one, silently.
    pub fn select_current(&mut self, surface: &mut dyn Surface) {
        if let Some(index) = self.selected {
            self.select(index, surface);
        }
    }

    pub fn deselect(&mut self, surface: &mut dyn Surface) {
        if let Some(item) = self.selected.and_then(|i| self.items.get_mut(i)) {
            item.deselect(surface);
        }
        self.selected = None;
    }
}

impl<T: 'static> Paintable for List<T> {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn style(&self) -> Style {
        self.style
    }

    fn paint(&self, surface: &mut dyn Surface) {
        let shown = self.items.iter().filter(|item| item.is_visible()).count();
        if shown < self.height() {
            let rows = self.rect.narrowed(1).below(shown as u16);
            surface.clear(rows, &self.style);
        }
        for item in self.items.iter().filter(|item| item.is_visible()) {
            item.paint(surface);
        }
        self.scrollbar.paint(surface);
    }
}

impl<T: 'static> Navigable for List<T> {
    fn can_navigate(&self) -> bool {
        !self.items.is_empty()
    }

    fn can_navigate_up(&self) -> bool {
        self.can_navigate()
    }

    fn can_navigate_down(&self) -> bool {
        self.can_navigate()
    }

    fn can_navigate_left(&self) -> bool {
        false
    }

    fn can_navigate_right(&self) -> bool {
        false
    }

    fn is_active(&self) -> bool {
        self.selected.is_some_and(|i| i < self.items.len())
    }

    fn current_row(&self) -> Option<usize> {
        self.selected
    }

    fn current_column(&self) -> Option<usize> {
        Some(0)
    }

    fn deactivate(&mut self, surface: &mut dyn Surface) {
        self.deselect(surface);
    }

    fn navigate_up(&mut self, surface: &mut dyn Surface) {
        self.navigate(-1, surface);
    }

    fn navigate_down(&mut self, surface: &mut dyn Surface) {
        self.navigate(1, surface);
    }

    fn navigate_left(&mut self, _surface: &mut dyn Surface) {}

    fn navigate_right(&mut self, _surface: &mut dyn Surface) {}

    fn page_up(&mut self, surface: &mut dyn Surface) {
        self.navigate(-(self.height() as isize), surface);
    }

    fn page_down(&mut self, surface: &mut dyn Surface) {
        self.navigate(self.height() as isize, surface);
    }

    fn navigate_to_default(&mut self, surface: &mut dyn Surface) {
        self.select(0, surface);
    }

    fn navigate_to_first_row(&mut self, _column: usize, surface: &mut dyn Surface) {
        self.select(0, surface);
    }

    fn navigate_to_last_row(&mut self, _column: usize, surface: &mut dyn Surface) {
        let last = self.items.len().saturating_sub(1);
        self.select(last, surface);
    }

    fn navigate_to_first_column(&mut self, row: usize, surface: &mut dyn Surface) {
        self.select(row, surface);
    }

    fn navigate_to_last_column(&mut self, row: usize, surface: &mut dyn Surface) {
        self.select(row, surface);
    }
}
