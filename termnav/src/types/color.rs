/// A colour as stored in a style token.
///
/// Greys are easier to reason about in a perceptual space, so tokens may be
/// given as OKLCH and are converted to sRGB right before they reach a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Grey of the given perceptual lightness (0.0 black, 1.0 white).
    pub const fn grey(l: f32) -> Self {
        Self::Oklch { l, c: 0.0, h: 0.0 }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

/// The sixteen classic console colours.
pub mod console {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 128);
    pub const DARK_GREEN: Color = Color::rgb(0, 128, 0);
    pub const DARK_CYAN: Color = Color::rgb(0, 128, 128);
    pub const DARK_RED: Color = Color::rgb(128, 0, 0);
    pub const DARK_MAGENTA: Color = Color::rgb(128, 0, 128);
    pub const DARK_YELLOW: Color = Color::rgb(128, 128, 0);
    pub const GRAY: Color = Color::grey(0.8);
    pub const DARK_GRAY: Color = Color::grey(0.55);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}
