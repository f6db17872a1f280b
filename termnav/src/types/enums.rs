/// Horizontal placement of text inside a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Visual state of a selectable atom.
///
/// `Highlighted` marks the atom focus will return to while a nested prompt
/// owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    None,
    Selected,
    Highlighted,
}
