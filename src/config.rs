use crate::pixel_buffer::ColorOrder;
use crate::timing::{TickClock, TimingConfig};

/// Configuration of a single strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Protocol timing
    pub timing: TimingConfig,
    /// Logical color order of the LEDs
    pub color_order: ColorOrder,
    /// Output pin of the data line, must be assigned before install
    pub gpio: Option<u8>,
    /// Number of pixels on the strip
    pub led_count: u16,
    /// Send a fourth (white) byte per pixel
    pub enable_w_channel: bool,
    /// Clock of the pulse engine
    pub clock: TickClock,
}

impl StripConfig {
    /// SK6822 timing, RGBW order, no white channel, no pixels
    pub const fn new() -> Self {
        Self {
            timing: TimingConfig::Preset(crate::timing::StripType::Sk6822),
            color_order: ColorOrder::Rgbw,
            gpio: None,
            led_count: 0,
            enable_w_channel: false,
            clock: TickClock::APB,
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Default strip configuration
pub const fn default_config() -> StripConfig {
    StripConfig::new()
}
