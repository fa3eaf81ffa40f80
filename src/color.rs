//! Color model
//!
//! A four component color plus the RGB <-> RGBW projections applied before
//! pixel data is written to a strip.

use smart_leds::{RGB8, RGBW, White};

pub use smart_leds::colors;

/// RGB color re-exported from `smart_leds`
pub type Rgb = RGB8;
/// RGBW color re-exported from `smart_leds`
pub type Rgbw = RGBW<u8>;

/// Color with an optional white component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, w: 0 }
    }

    pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Self::rgb(color.r, color.g, color.b)
    }
}

impl From<Rgbw> for Color {
    fn from(color: Rgbw) -> Self {
        Self::rgbw(color.r, color.g, color.b, color.a.0)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        Rgb::new(color.r, color.g, color.b)
    }
}

impl From<Color> for Rgbw {
    fn from(color: Color) -> Self {
        Rgbw {
            r: color.r,
            g: color.g,
            b: color.b,
            a: White(color.w),
        }
    }
}

/// Project a color onto a strip with a white channel
///
/// The white component is zero-filled, no white is derived from r/g/b.
pub const fn project_to_rgbw(color: Color) -> Color {
    Color::rgb(color.r, color.g, color.b)
}

/// Project a color onto an RGB-only strip by dropping the white component
pub const fn project_to_rgb(color: Color) -> Color {
    Color::rgb(color.r, color.g, color.b)
}
