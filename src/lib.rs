#![no_std]

pub mod channel;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod pixel_buffer;
pub mod strip;
pub mod symbol;
pub mod timing;
pub mod translator;

pub use channel::{ChannelAllocator, ChannelId, ChannelTable};
pub use color::{Color, Rgb, Rgbw, project_to_rgb, project_to_rgbw};
pub use config::{StripConfig, default_config};
pub use engine::{ChannelConfig, PulseEngine, WaitError};
pub use error::{Error, Result};
pub use pixel_buffer::{ColorOrder, PixelBuffer, bytes_per_pixel};
pub use strip::{LedStrip, StripState};
pub use symbol::Symbol;
pub use timing::{StripType, TickClock, TimingConfig, TimingTicks, resolve, resolve_with};
pub use translator::{SymbolFeed, Translation, Translator, translate};

pub use embassy_time::Duration;

/// Pixel buffer capacity in bytes needed for `led_count` pixels
pub const fn buffer_size(led_count: usize, enable_w: bool) -> usize {
    led_count * bytes_per_pixel(enable_w)
}
