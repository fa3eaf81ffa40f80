//! Hardware channel allocation
//!
//! A fixed table tracking which pulse-engine channels are in use, shared by
//! every strip. Thread/interrupt safe via critical sections.

use core::cell::RefCell;

use critical_section::Mutex;

/// Index of a pulse-engine channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(pub u8);

impl ChannelId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Source of free hardware channels
pub trait ChannelAllocator {
    /// Claim a free channel, `None` when all are in use
    fn acquire(&self) -> Option<ChannelId>;

    /// Return a channel to the pool
    fn release(&self, channel: ChannelId);
}

struct TableState<const N: usize> {
    initialized: bool,
    used: [bool; N],
}

/// Channel table for a peripheral with `N` channels.
pub struct ChannelTable<const N: usize> {
    inner: Mutex<RefCell<TableState<N>>>,
}

impl<const N: usize> ChannelTable<N> {
    /// Create a table with every channel free.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(TableState {
                initialized: false,
                used: [false; N],
            })),
        }
    }

    /// Mark every channel free
    ///
    /// Only the first call has an effect.
    pub fn init(&self) {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if state.initialized {
                return;
            }
            state.used = [false; N];
            state.initialized = true;
        });
    }

    pub fn is_used(&self, channel: ChannelId) -> bool {
        critical_section::with(|cs| {
            let state = self.inner.borrow(cs).borrow();
            state.used.get(channel.index()).copied().unwrap_or(false)
        })
    }

    /// Number of channels currently claimed
    pub fn used_count(&self) -> usize {
        critical_section::with(|cs| {
            let state = self.inner.borrow(cs).borrow();
            state.used.iter().filter(|used| **used).count()
        })
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for ChannelTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ChannelAllocator for ChannelTable<N> {
    #[allow(clippy::cast_possible_truncation)]
    fn acquire(&self) -> Option<ChannelId> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            let index = state.used.iter().position(|used| !used)?;
            state.used[index] = true;
            Some(ChannelId(index as u8))
        })
    }

    fn release(&self, channel: ChannelId) {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if let Some(used) = state.used.get_mut(channel.index()) {
                *used = false;
            }
        });
    }
}
