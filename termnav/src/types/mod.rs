mod color;
mod enums;
mod style;
mod theme;

pub use color::{console, Color, Rgb};
pub use enums::{HorizontalAlignment, SelectionState};
pub use style::Style;
pub use theme::Theme;
