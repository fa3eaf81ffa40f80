//! Strip controller
//!
//! Owns one strip's pixel buffer and timing, and drives transmissions
//! through a [`PulseEngine`]. A strip is either idle or has a frame in
//! flight; a new frame can only be started once the previous one finished.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{ChannelAllocator, ChannelId};
use crate::color::{Color, project_to_rgb, project_to_rgbw};
use crate::config::StripConfig;
use crate::engine::{ChannelConfig, FOREVER, POLL, PulseEngine, WaitError};
use crate::error::{Error, Result};
use crate::pixel_buffer::{ColorOrder, PixelBuffer};
use crate::timing::{TimingConfig, TimingTicks, resolve_with};
use crate::translator::Translator;

/// Strip count the driver refuses to install
const UNSUPPORTED_LED_COUNT: u16 = 2;

/// Transmission state of a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripState {
    /// No frame pending
    Idle,
    /// The pulse engine is sending the buffer
    Transmitting,
}

/// Installed LED strip
///
/// `N` is the pixel buffer capacity in bytes.
pub struct LedStrip<'a, E: PulseEngine, A: ChannelAllocator, const N: usize> {
    engine: E,
    allocator: &'a A,
    channel: ChannelId,
    buffer: PixelBuffer<N>,
    translator: Translator,
    state: StripState,
    installed: bool,
}

impl<'a, E: PulseEngine, A: ChannelAllocator, const N: usize> LedStrip<'a, E, A, N> {
    /// Validate `config`, claim a channel and install the engine
    ///
    /// On failure every resource claimed so far is given back.
    pub fn install(config: &StripConfig, mut engine: E, allocator: &'a A) -> Result<Self, E::Error> {
        if config.led_count == UNSUPPORTED_LED_COUNT {
            return Err(Error::NotSupported);
        }
        let Some(gpio) = config.gpio else {
            return Err(Error::InvalidArgument);
        };
        if let TimingConfig::Manual(ticks) = config.timing {
            if !ticks.fits_hardware() {
                return Err(Error::InvalidArgument);
            }
        }

        let buffer = PixelBuffer::new(
            config.led_count,
            config.color_order,
            config.enable_w_channel,
        )?;
        let translator = Translator::new(resolve_with(config.timing, config.clock));

        let Some(channel) = allocator.acquire() else {
            #[cfg(feature = "esp32-log")]
            println!("[LedStrip.install] no free channel");
            return Err(Error::NotFound);
        };

        let channel_config = ChannelConfig {
            channel,
            gpio,
            clock_divider: config.clock.divider,
            loop_mode: false,
        };
        if let Err(error) = engine.install(&channel_config) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[LedStrip.install] engine install failed on channel {:?}: {:?}",
                channel, error
            );
            allocator.release(channel);
            return Err(Error::Engine(error));
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[LedStrip.install] {} leds on channel {:?}, gpio {}",
            config.led_count, channel, gpio
        );

        Ok(Self {
            engine,
            allocator,
            channel,
            buffer,
            translator,
            state: StripState::Idle,
            installed: true,
        })
    }

    /// Uninstall the engine and give the channel back
    ///
    /// If the engine refuses to uninstall nothing is released and the strip
    /// is handed back together with the error, so the call can be retried.
    pub fn free(mut self) -> core::result::Result<(), (Self, Error<E::Error>)> {
        if let Err(error) = self.engine.uninstall(self.channel) {
            #[cfg(feature = "esp32-log")]
            println!("[LedStrip.free] uninstall failed: {:?}", error);
            return Err((self, Error::Engine(error)));
        }
        self.allocator.release(self.channel);
        self.installed = false;
        Ok(())
    }

    pub const fn led_count(&self) -> u16 {
        self.buffer.led_count()
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        self.buffer.bytes_per_pixel()
    }

    pub const fn channel(&self) -> ChannelId {
        self.channel
    }

    pub const fn timing(&self) -> &TimingTicks {
        self.translator.timing()
    }

    pub const fn color_order(&self) -> ColorOrder {
        self.buffer.order()
    }

    pub const fn w_channel_enabled(&self) -> bool {
        self.buffer.w_enabled()
    }

    /// Last known transmission state, see [`LedStrip::flush_done`] to refresh it
    pub const fn state(&self) -> StripState {
        self.state
    }

    /// Pixel data in transmission order
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Read back a pixel as stored on the strip
    pub fn pixel(&self, index: u16) -> Option<Color> {
        self.buffer.pixel(index)
    }

    pub fn set_pixel_rgb(&mut self, index: u16, r: u8, g: u8, b: u8) -> Result<(), E::Error> {
        self.check_index(index)?;
        let color = self.project_rgb(Color::rgb(r, g, b));
        self.buffer.write_pixel(index, color)?;
        Ok(())
    }

    pub fn set_pixel_rgbw(
        &mut self,
        index: u16,
        r: u8,
        g: u8,
        b: u8,
        w: u8,
    ) -> Result<(), E::Error> {
        self.check_index(index)?;
        let color = self.project_rgbw(Color::rgbw(r, g, b, w));
        self.buffer.write_pixel(index, color)?;
        Ok(())
    }

    /// Set a pixel from any `smart_leds` color
    pub fn set_pixel(&mut self, index: u16, color: impl Into<Color>) -> Result<(), E::Error> {
        let color = color.into();
        self.set_pixel_rgbw(index, color.r, color.g, color.b, color.w)
    }

    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        let color = self.project_rgb(Color::rgb(r, g, b));
        self.buffer.fill(color);
    }

    pub fn fill_rgbw(&mut self, r: u8, g: u8, b: u8, w: u8) {
        let color = self.project_rgbw(Color::rgbw(r, g, b, w));
        self.buffer.fill(color);
    }

    /// Send the buffer and block until the frame left the wire
    pub fn flush(&mut self) -> Result<(), E::Error> {
        self.start_flush()?;
        self.wait_for_flush_finish()
    }

    /// Start sending the buffer without waiting for completion
    pub fn start_flush(&mut self) -> Result<(), E::Error> {
        if !self.flush_done()? {
            return Err(Error::NotFinished);
        }

        let feed = self.translator.feed(self.buffer.as_bytes());
        if let Err(error) = self.engine.transmit(self.channel, feed, false) {
            #[cfg(feature = "esp32-log")]
            println!("[LedStrip.start_flush] transmit failed: {:?}", error);
            return Err(Error::Engine(error));
        }
        self.state = StripState::Transmitting;
        Ok(())
    }

    /// Check without blocking whether the last frame has been sent
    ///
    /// Reports `true` when no frame was ever started.
    pub fn flush_done(&mut self) -> Result<bool, E::Error> {
        if self.state == StripState::Idle {
            return Ok(true);
        }
        match self.engine.wait_done(self.channel, POLL) {
            Ok(()) => {
                self.state = StripState::Idle;
                Ok(true)
            }
            Err(WaitError::Timeout) => Ok(false),
            Err(WaitError::Engine(error)) => {
                #[cfg(feature = "esp32-log")]
                println!("[LedStrip.flush_done] poll failed: {:?}", error);
                Err(Error::Engine(error))
            }
        }
    }

    /// Block until the frame in flight, if any, has been sent
    pub fn wait_for_flush_finish(&mut self) -> Result<(), E::Error> {
        if self.state == StripState::Idle {
            return Ok(());
        }
        self.engine.wait_done(self.channel, FOREVER)?;
        self.state = StripState::Idle;
        Ok(())
    }

    fn check_index(&self, index: u16) -> Result<(), E::Error> {
        if index >= self.buffer.led_count() {
            return Err(Error::InvalidSize);
        }
        Ok(())
    }

    const fn project_rgb(&self, color: Color) -> Color {
        if self.buffer.w_enabled() {
            project_to_rgbw(color)
        } else {
            color
        }
    }

    const fn project_rgbw(&self, color: Color) -> Color {
        if self.buffer.w_enabled() {
            color
        } else {
            project_to_rgb(color)
        }
    }
}

impl<E: PulseEngine, A: ChannelAllocator, const N: usize> Drop for LedStrip<'_, E, A, N> {
    fn drop(&mut self) {
        if !self.installed {
            return;
        }
        // The channel stays claimed if the engine still holds it
        if self.engine.uninstall(self.channel).is_ok() {
            self.allocator.release(self.channel);
        }
    }
}
