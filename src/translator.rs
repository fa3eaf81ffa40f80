//! Byte to pulse symbol translation
//!
//! This runs inside the pulse engine's refill callback, usually from an
//! interrupt. Nothing here allocates, blocks or touches global state; the
//! output is a pure function of the source bytes and the timing table.

use crate::symbol::Symbol;
use crate::timing::TimingTicks;

/// Every source byte expands to one symbol per bit
pub const SYMBOLS_PER_BYTE: usize = 8;

/// Progress report of a single translation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translation {
    /// Source bytes consumed
    pub consumed: usize,
    /// Symbols written to the destination
    pub produced: usize,
}

impl Translation {
    /// No progress was made, either the source is exhausted or the
    /// destination cannot hold a whole byte
    pub const fn is_stalled(self) -> bool {
        self.consumed == 0
    }
}

/// Encode one byte, most significant bit first
pub const fn encode_byte(byte: u8, timing: &TimingTicks) -> [Symbol; SYMBOLS_PER_BYTE] {
    let zero = Symbol::high_low(timing.low_on, timing.low_off);
    let one = Symbol::high_low(timing.high_on, timing.high_off);

    let mut symbols = [zero; SYMBOLS_PER_BYTE];
    let mut bit = 0;
    while bit < SYMBOLS_PER_BYTE {
        if byte & (0x80 >> bit) != 0 {
            symbols[bit] = one;
        }
        bit += 1;
    }
    symbols
}

/// Translate as many whole bytes of `source` as fit into `dest`
///
/// Translates `min(dest.len() / 8, source.len())` bytes. A destination
/// shorter than 8 symbols yields an empty translation.
pub fn translate(source: &[u8], dest: &mut [Symbol], timing: &TimingTicks) -> Translation {
    let mut translation = Translation::default();

    for (byte, slots) in source
        .iter()
        .zip(dest.chunks_exact_mut(SYMBOLS_PER_BYTE))
    {
        slots.copy_from_slice(&encode_byte(*byte, timing));
        translation.consumed += 1;
        translation.produced += SYMBOLS_PER_BYTE;
    }

    translation
}

/// Translator bound to one strip's timing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    timing: TimingTicks,
}

impl Translator {
    pub const fn new(timing: TimingTicks) -> Self {
        Self { timing }
    }

    pub const fn timing(&self) -> &TimingTicks {
        &self.timing
    }

    pub fn translate(&self, source: &[u8], dest: &mut [Symbol]) -> Translation {
        translate(source, dest, &self.timing)
    }

    /// Bind this translator to a frame
    pub const fn feed(self, source: &[u8]) -> SymbolFeed<'_> {
        SymbolFeed {
            source,
            translator: self,
        }
    }
}

/// Cursor over a frame that is being handed to the pulse engine
///
/// The engine pulls symbols through [`SymbolFeed::pull`] until the feed is
/// exhausted, then holds the line low for [`SymbolFeed::reset_ticks`].
#[derive(Debug, Clone)]
pub struct SymbolFeed<'a> {
    source: &'a [u8],
    translator: Translator,
}

impl<'a> SymbolFeed<'a> {
    /// Translate the next chunk into `dest` and advance past it
    pub fn pull(&mut self, dest: &mut [Symbol]) -> Translation {
        let translation = self.translator.translate(self.source, dest);
        self.source = &self.source[translation.consumed..];
        translation
    }

    /// Source bytes not yet translated
    pub const fn remaining(&self) -> &'a [u8] {
        self.source
    }

    pub const fn is_exhausted(&self) -> bool {
        self.source.is_empty()
    }

    /// Symbols still to be produced
    pub const fn remaining_symbols(&self) -> usize {
        self.source.len() * SYMBOLS_PER_BYTE
    }

    /// Length of the line-low period the engine appends after the frame
    pub const fn reset_ticks(&self) -> u16 {
        self.translator.timing.reset
    }
}
