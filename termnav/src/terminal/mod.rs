use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::event::{InputSource, KeyPress};
use crate::keymap::Keymaps;
use crate::layout::Rect;
use crate::surface::Surface;
use crate::text::char_width;
use crate::types::{Rgb, Style};
use crate::ui::Ui;

/// Back buffer plus the frame last written to stdout. Flushing writes only
/// the cells that differ.
pub struct Screen {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    cursor: Option<(u16, u16)>,
    shown_cursor: Option<(u16, u16)>,
}

impl Screen {
    fn new(width: u16, height: u16) -> Self {
        Self {
            stdout: io::stdout(),
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            cursor: None,
            shown_cursor: None,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(rgb(last_fg)),
            SetBackgroundColor(rgb(last_bg))
        )?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // The wide character before it already covers this cell
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                queue!(self.stdout, SetForegroundColor(rgb(cell.fg)))?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                queue!(self.stdout, SetBackgroundColor(rgb(cell.bg)))?;
                last_bg = cell.bg;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.previous_buffer = self.current_buffer.clone();

        if self.cursor != self.shown_cursor {
            match self.cursor {
                Some((x, y)) => queue!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?,
                None => queue!(self.stdout, cursor::Hide)?,
            }
            self.shown_cursor = self.cursor;
        } else if let Some((x, y)) = self.cursor {
            // Painting moved the terminal cursor away from the caret
            queue!(self.stdout, cursor::MoveTo(x, y))?;
        }

        self.stdout.flush()
    }
}

fn rgb(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Surface for Screen {
    fn paint(&mut self, left: u16, top: u16, text: &str, style: &Style) {
        self.current_buffer.paint(left, top, text, style);
    }

    fn clear(&mut self, rect: Rect, style: &Style) {
        self.current_buffer.fill(rect, style);
    }

    fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_diff()
    }
}

/// Blocking key reader over crossterm's event queue.
#[derive(Debug, Default)]
pub struct Keyboard;

impl InputSource for Keyboard {
    fn read_key(&mut self) -> io::Result<KeyPress> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key_event) => {
                    if let Some(press) = KeyPress::from_crossterm(key_event) {
                        return Ok(press);
                    }
                }
                CrosstermEvent::Resize(width, height) => {
                    log::debug!("terminal resized to {}x{}, layout stays fixed", width, height);
                }
                _ => {}
            }
        }
    }
}

/// Raw-mode, alternate-screen terminal. The previous terminal state is
/// restored on drop.
pub struct Terminal {
    screen: Screen,
    keyboard: Keyboard,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;

        let (width, height) = terminal::size()?;
        log::info!("terminal opened at {}x{}", width, height);

        Ok(Self {
            screen: Screen::new(width, height),
            keyboard: Keyboard,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        self.screen.size()
    }

    pub fn screen(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Borrow the screen and keyboard separately.
    pub fn parts(&mut self) -> (&mut Screen, &mut Keyboard) {
        (&mut self.screen, &mut self.keyboard)
    }

    /// Borrow the screen and keyboard together as a prompt context.
    pub fn ui<'a>(&'a mut self, keymaps: &'a Keymaps) -> Ui<'a> {
        Ui::new(&mut self.screen, &mut self.keyboard, keymaps)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
