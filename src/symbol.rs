//! Two-phase pulse symbols consumed by the pulse engine

use crate::timing::MAX_TICKS;

const LEVEL_BIT: u32 = 1 << 15;
const SECOND_HALF_SHIFT: u32 = 16;

/// One encoded bit: a first phase followed by a second phase
///
/// Durations are in pulse-engine ticks and hold at most 15 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Symbol {
    pub level0: bool,
    pub duration0: u16,
    pub level1: bool,
    pub duration1: u16,
}

impl Symbol {
    pub const fn new(level0: bool, duration0: u16, level1: bool, duration1: u16) -> Self {
        Self {
            level0,
            duration0,
            level1,
            duration1,
        }
    }

    /// Active phase of `on` ticks followed by an idle phase of `off` ticks
    pub const fn high_low(on: u16, off: u16) -> Self {
        Self::new(true, on, false, off)
    }

    /// Total length of the symbol in ticks
    pub const fn ticks(self) -> u32 {
        self.duration0 as u32 + self.duration1 as u32
    }

    /// Pack into the 32-bit pulse item layout
    ///
    /// Bits 0..15 hold `duration0`, bit 15 `level0`, bits 16..31
    /// `duration1` and bit 31 `level1`. Durations are truncated to 15 bits.
    pub const fn to_raw(self) -> u32 {
        let first = (self.duration0 & MAX_TICKS) as u32 | if self.level0 { LEVEL_BIT } else { 0 };
        let second =
            (self.duration1 & MAX_TICKS) as u32 | if self.level1 { LEVEL_BIT } else { 0 };
        first | (second << SECOND_HALF_SHIFT)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_raw(raw: u32) -> Self {
        let first = raw as u16;
        let second = (raw >> SECOND_HALF_SHIFT) as u16;
        Self {
            level0: first as u32 & LEVEL_BIT != 0,
            duration0: first & MAX_TICKS,
            level1: second as u32 & LEVEL_BIT != 0,
            duration1: second & MAX_TICKS,
        }
    }
}
