//! Packed pixel buffer in hardware channel order
//!
//! Every pixel occupies 3 bytes (RGB strips) or 4 bytes (strips with an
//! active white channel). Within a pixel group the 2nd and 3rd byte are
//! always swapped relative to the logical color order, which is what the
//! pulse engine wiring expects.

use heapless::Vec;

use crate::color::Color;

/// Bytes per pixel on strips without a white channel
pub const RGB_BYTES_PER_PIXEL: usize = 3;
/// Bytes per pixel on strips with a white channel
pub const RGBW_BYTES_PER_PIXEL: usize = 4;

/// Error returned when a pixel index is outside of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange;

/// Error returned when the strip does not fit into the buffer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded;

/// Logical color order of a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    #[default]
    Rgbw,
    Grbw,
}

/// Byte offset of every component inside a pixel group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOffsets {
    pub r: usize,
    pub g: usize,
    pub b: usize,
    pub w: usize,
}

impl ColorOrder {
    /// Component offsets with the 2nd/3rd byte swap applied
    pub const fn offsets(self) -> ChannelOffsets {
        match self {
            Self::Rgbw => ChannelOffsets {
                r: 0,
                g: 2,
                b: 1,
                w: 3,
            },
            Self::Grbw => ChannelOffsets {
                r: 2,
                g: 0,
                b: 1,
                w: 3,
            },
        }
    }
}

/// Number of bytes a single pixel takes in the buffer
pub const fn bytes_per_pixel(enable_w: bool) -> usize {
    if enable_w {
        RGBW_BYTES_PER_PIXEL
    } else {
        RGB_BYTES_PER_PIXEL
    }
}

/// Pixel storage for one strip
///
/// `N` is the capacity in bytes; a strip needs
/// `led_count * bytes_per_pixel(enable_w)` of it.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    bytes: Vec<u8, N>,
    led_count: u16,
    order: ColorOrder,
    enable_w: bool,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a zero-filled buffer for `led_count` pixels
    pub fn new(
        led_count: u16,
        order: ColorOrder,
        enable_w: bool,
    ) -> Result<Self, CapacityExceeded> {
        let len = usize::from(led_count) * bytes_per_pixel(enable_w);
        let mut bytes = Vec::new();
        bytes.resize(len, 0).map_err(|()| CapacityExceeded)?;

        Ok(Self {
            bytes,
            led_count,
            order,
            enable_w,
        })
    }

    pub const fn led_count(&self) -> u16 {
        self.led_count
    }

    pub const fn order(&self) -> ColorOrder {
        self.order
    }

    pub const fn w_enabled(&self) -> bool {
        self.enable_w
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        bytes_per_pixel(self.enable_w)
    }

    /// Raw bytes in transmission order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write one pixel
    ///
    /// The white byte is only touched when the white channel is enabled.
    pub fn write_pixel(&mut self, index: u16, color: Color) -> Result<(), OutOfRange> {
        if index >= self.led_count {
            return Err(OutOfRange);
        }
        let start = usize::from(index) * self.bytes_per_pixel();
        let end = start + self.bytes_per_pixel();
        let pixel = self.bytes.get_mut(start..end).ok_or(OutOfRange)?;
        write_group(pixel, color, self.order, self.enable_w);
        Ok(())
    }

    /// Write the same color to every pixel, lowest index first
    pub fn fill(&mut self, color: Color) {
        let order = self.order;
        let enable_w = self.enable_w;
        let bytes_per_pixel = self.bytes_per_pixel();
        for pixel in self.bytes.chunks_exact_mut(bytes_per_pixel) {
            write_group(pixel, color, order, enable_w);
        }
    }

    /// Read back the pixel at `index` in logical order
    pub fn pixel(&self, index: u16) -> Option<Color> {
        if index >= self.led_count {
            return None;
        }
        let start = usize::from(index) * self.bytes_per_pixel();
        let pixel = self.bytes.get(start..start + self.bytes_per_pixel())?;
        let offsets = self.order.offsets();
        Some(Color {
            r: pixel[offsets.r],
            g: pixel[offsets.g],
            b: pixel[offsets.b],
            w: if self.enable_w { pixel[offsets.w] } else { 0 },
        })
    }
}

fn write_group(pixel: &mut [u8], color: Color, order: ColorOrder, enable_w: bool) {
    let offsets = order.offsets();
    if enable_w {
        pixel[offsets.w] = color.w;
    }
    pixel[offsets.r] = color.r;
    pixel[offsets.g] = color.g;
    pixel[offsets.b] = color.b;
}
