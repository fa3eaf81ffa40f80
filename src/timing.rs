//! Protocol timing tables
//!
//! Resolves a strip type or a manual timing record into pulse-engine tick
//! counts for the four bit phases and the reset period.

/// Largest duration a single pulse phase can hold (15-bit hardware field)
pub const MAX_TICKS: u16 = 0x7FFF;

const NS_PER_SECOND: u64 = 1_000_000_000;

const STRIP_TYPE_SK6822: u8 = 0x01;
const STRIP_TYPE_WS281X: u8 = 0x03;

/// Clock feeding the pulse engine
///
/// One tick lasts `divider / source_hz` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    /// Peripheral source clock in Hz
    pub source_hz: u32,
    /// Fixed divider applied by the pulse engine
    pub divider: u8,
}

impl TickClock {
    /// 80 MHz APB clock divided by 8, 100 ns per tick
    pub const APB: Self = Self::new(80_000_000, 8);

    pub const fn new(source_hz: u32, divider: u8) -> Self {
        Self { source_hz, divider }
    }

    /// Convert nanoseconds to ticks, rounding up to the next whole tick
    ///
    /// Saturates at [`MAX_TICKS`].
    #[allow(clippy::cast_possible_truncation)]
    pub const fn ns_to_ticks(self, ns: u32) -> u16 {
        let divisor = self.divider as u64 * NS_PER_SECOND;
        if divisor == 0 {
            return MAX_TICKS;
        }
        let ticks = (ns as u64 * self.source_hz as u64).div_ceil(divisor);
        if ticks > MAX_TICKS as u64 {
            MAX_TICKS
        } else {
            ticks as u16
        }
    }

    /// Convert microseconds to ticks, rounding up to the next whole tick
    pub const fn us_to_ticks(self, us: u32) -> u16 {
        self.ns_to_ticks(us.saturating_mul(1000))
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::APB
    }
}

/// Phase durations in nanoseconds as published by the LED vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingNanos {
    pub low_on: u32,
    pub low_off: u32,
    pub high_on: u32,
    pub high_off: u32,
    pub reset: u32,
}

impl TimingNanos {
    /// Convert every phase to ticks of the given clock
    pub const fn to_ticks(self, clock: TickClock) -> TimingTicks {
        TimingTicks {
            low_on: clock.ns_to_ticks(self.low_on),
            low_off: clock.ns_to_ticks(self.low_off),
            high_on: clock.ns_to_ticks(self.high_on),
            high_off: clock.ns_to_ticks(self.high_off),
            reset: clock.ns_to_ticks(self.reset),
        }
    }
}

const SK6822_NANOS: TimingNanos = TimingNanos {
    low_on: 300,
    low_off: 900,
    high_on: 600,
    high_off: 600,
    reset: 80_000,
};

const WS281X_NANOS: TimingNanos = TimingNanos {
    low_on: 350,
    low_off: 900,
    high_on: 900,
    high_off: 350,
    reset: 50_000,
};

/// Phase durations in pulse-engine ticks
///
/// A `0` bit is sent as `low_on` high followed by `low_off` low,
/// a `1` bit as `high_on` high followed by `high_off` low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimingTicks {
    pub low_on: u16,
    pub low_off: u16,
    pub high_on: u16,
    pub high_off: u16,
    /// Line-low period that latches the frame
    pub reset: u16,
}

impl TimingTicks {
    /// Check that every phase fits into a hardware duration field
    pub const fn fits_hardware(&self) -> bool {
        self.low_on <= MAX_TICKS
            && self.low_off <= MAX_TICKS
            && self.high_on <= MAX_TICKS
            && self.high_off <= MAX_TICKS
            && self.reset <= MAX_TICKS
    }
}

/// Known LED protocol variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum StripType {
    #[default]
    Sk6822 = STRIP_TYPE_SK6822,
    Ws281x = STRIP_TYPE_WS281X,
}

impl StripType {
    /// Map a raw type value, unknown values select SK6822
    pub const fn from_raw(value: u8) -> Self {
        match value {
            STRIP_TYPE_WS281X => Self::Ws281x,
            _ => Self::Sk6822,
        }
    }

    pub const fn nanos(self) -> TimingNanos {
        match self {
            Self::Sk6822 => SK6822_NANOS,
            Self::Ws281x => WS281X_NANOS,
        }
    }
}

/// Timing selection for a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingConfig {
    /// Compiled-in table for a known strip type
    Preset(StripType),
    /// Caller supplied tick counts, used as-is
    Manual(TimingTicks),
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::Preset(StripType::Sk6822)
    }
}

impl From<StripType> for TimingConfig {
    fn from(strip_type: StripType) -> Self {
        Self::Preset(strip_type)
    }
}

impl From<TimingTicks> for TimingConfig {
    fn from(ticks: TimingTicks) -> Self {
        Self::Manual(ticks)
    }
}

/// Resolve a timing config against the platform tick clock
pub const fn resolve(config: TimingConfig) -> TimingTicks {
    resolve_with(config, TickClock::APB)
}

/// Resolve a timing config against a specific tick clock
pub const fn resolve_with(config: TimingConfig, clock: TickClock) -> TimingTicks {
    match config {
        TimingConfig::Preset(strip_type) => strip_type.nanos().to_ticks(clock),
        TimingConfig::Manual(ticks) => ticks,
    }
}
