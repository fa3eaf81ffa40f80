//! Pulse engine abstraction
//!
//! Implement [`PulseEngine`] to support a platform's pulse generation
//! peripheral. The strip controller is generic over this trait.

use embassy_time::Duration;

use crate::channel::ChannelId;
use crate::translator::SymbolFeed;

/// Timeout used to poll a transmission without waiting
pub const POLL: Duration = Duration::MIN;
/// Timeout used to wait for a transmission without a deadline
pub const FOREVER: Duration = Duration::MAX;

/// Channel setup handed to the engine on install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    pub channel: ChannelId,
    /// Output pin of the data line
    pub gpio: u8,
    /// Divider applied to the engine's source clock
    pub clock_divider: u8,
    /// Repeat the frame after it was sent
    pub loop_mode: bool,
}

/// Result of waiting on a transmission that did not finish cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitError<E> {
    /// The transmission is still running when the timeout elapsed
    Timeout,
    /// The engine reported a failure
    Engine(E),
}

impl<E> From<E> for WaitError<E> {
    fn from(error: E) -> Self {
        Self::Engine(error)
    }
}

/// Pulse generation peripheral driving one strip
pub trait PulseEngine {
    /// Platform specific failure
    type Error: core::fmt::Debug;

    /// Configure the channel and install its driver
    fn install(&mut self, config: &ChannelConfig) -> Result<(), Self::Error>;

    /// Tear down the channel driver
    fn uninstall(&mut self, channel: ChannelId) -> Result<(), Self::Error>;

    /// Start sending a frame
    ///
    /// The engine refills its pulse queue from `feed` until the feed is
    /// exhausted, then holds the line low for `feed.reset_ticks()`. The feed
    /// borrows the strip's pixel buffer only for the duration of this call,
    /// so an engine that keeps translating after returning must stage the
    /// remaining bytes in its own memory first. With `wait` set the call
    /// returns once the frame has left the wire.
    fn transmit(
        &mut self,
        channel: ChannelId,
        feed: SymbolFeed<'_>,
        wait: bool,
    ) -> Result<(), Self::Error>;

    /// Wait up to `timeout` for the current transmission to finish
    fn wait_done(
        &mut self,
        channel: ChannelId,
        timeout: Duration,
    ) -> Result<(), WaitError<Self::Error>>;
}

impl<T: PulseEngine + ?Sized> PulseEngine for &mut T {
    type Error = T::Error;

    fn install(&mut self, config: &ChannelConfig) -> Result<(), Self::Error> {
        (**self).install(config)
    }

    fn uninstall(&mut self, channel: ChannelId) -> Result<(), Self::Error> {
        (**self).uninstall(channel)
    }

    fn transmit(
        &mut self,
        channel: ChannelId,
        feed: SymbolFeed<'_>,
        wait: bool,
    ) -> Result<(), Self::Error> {
        (**self).transmit(channel, feed, wait)
    }

    fn wait_done(
        &mut self,
        channel: ChannelId,
        timeout: Duration,
    ) -> Result<(), WaitError<Self::Error>> {
        (**self).wait_done(channel, timeout)
    }
}
