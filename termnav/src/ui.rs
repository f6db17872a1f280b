use crate::error::Result;
use crate::event::{InputSource, KeyPress};
use crate::keymap::Keymaps;
use crate::surface::Surface;

/// Everything a blocking prompt loop needs: where to paint, where keys come
/// from and how keys map to commands.
///
/// The fields are public so a widget can borrow the surface mutably while
/// the context itself is borrowed.
pub struct Ui<'a> {
    pub surface: &'a mut dyn Surface,
    pub input: &'a mut dyn InputSource,
    pub keymaps: &'a Keymaps,
}

impl<'a> Ui<'a> {
    pub fn new(
        surface: &'a mut dyn Surface,
        input: &'a mut dyn InputSource,
        keymaps: &'a Keymaps,
    ) -> Self {
        Self {
            surface,
            input,
            keymaps,
        }
    }

    /// Flush pending paint calls, then block until the next key arrives.
    pub fn next_key(&mut self) -> Result<KeyPress> {
        self.surface.flush()?;
        Ok(self.input.read_key()?)
    }

    /// Reborrow for a nested loop.
    pub fn reborrow(&mut self) -> Ui<'_> {
        Ui {
            surface: &mut *self.surface,
            input: &mut *self.input,
            keymaps: self.keymaps,
        }
    }
}
