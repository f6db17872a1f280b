pub mod buffer;
pub mod error;
pub mod event;
pub mod focus;
pub mod keymap;
pub mod layout;
pub mod prompt;
pub mod scroll;
pub mod surface;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;
pub mod ui;
pub mod widget;

pub use buffer::{Buffer, Cell};
pub use error::{Error, Result};
pub use event::{InputSource, Key, KeyPress, Modifiers, ScriptedInput};
pub use focus::{Navigable, Selection};
pub use keymap::{Command, Keymap, Keymaps};
pub use layout::Rect;
pub use prompt::{SelectOptions, SelectionPrompt, CANCEL_LABEL};
pub use surface::{BufferSurface, PaintCall, Surface};
pub use terminal::Terminal;
pub use text::fixed_width;
pub use text_input::{EditResult, PromptOptions, TextInput};
pub use types::*;
pub use ui::Ui;
pub use widget::{
    Atom, AtomKind, ColumnView, Label, List, Paintable, Region, Scrollbar, SelectionChanged,
    Slot, TextBox,
};
