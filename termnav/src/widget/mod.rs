use std::any::Any;

use crate::layout::Rect;
use crate::surface::Surface;
use crate::types::Style;

mod atom;
mod columns;
mod list;
mod region;
mod scrollbar;
mod text_box;

pub use atom::{Atom, AtomKind, AtomStyles};
pub use columns::{ColumnView, Slot};
pub use list::{Listener, List, SelectionChanged};
pub use region::{Label, Region};
pub use scrollbar::{Scrollbar, ThumbGeometry};
pub use text_box::TextBox;

/// Upcast to `Any` so boxed widgets can be handed back as concrete types.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A widget occupying a fixed rectangle of the screen.
pub trait Paintable: AsAny {
    fn rect(&self) -> Rect;

    /// Style used to blank the widget's rectangle.
    fn style(&self) -> Style;

    fn paint(&self, surface: &mut dyn Surface);

    fn clear(&self, surface: &mut dyn Surface) {
        surface.clear(self.rect(), &self.style());
    }
}
