use log::debug;

use tufia_shared::{ActionRequest, FloorSeed, TransactionCounter};

/// Read-only view of outstanding writes
pub trait WriteSignal {
    /// A write that should block further input is in flight
    fn is_blocking_write_outstanding(&self) -> bool;

    /// Any write at all is in flight
    fn is_write_outstanding(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteKind {
    Blocking,
    NonBlocking,
}

/// Handle for one in-flight write, returned to [`TransactionTracker::finish`]
/// once the transaction settles
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct PendingWrite {
    kind: WriteKind,
    counter: TransactionCounter,
}

impl PendingWrite {
    pub fn kind(&self) -> WriteKind {
        self.kind
    }

    pub fn counter(&self) -> TransactionCounter {
        self.counter
    }
}

/// Instruction bytes ready for submission together with their write handle
#[derive(Debug)]
pub struct PreparedTransaction {
    pub request: ActionRequest,
    pub data: Vec<u8>,
    pub write: PendingWrite,
}

/// Counts in-flight transactions and hands out instruction counters.
///
/// Owned by the transport; the sync core only reads it through
/// [`WriteSignal`].
#[derive(Debug, Default)]
pub struct TransactionTracker {
    counter: TransactionCounter,
    blocking: u32,
    non_blocking: u32,
}

impl TransactionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter the last instruction was sent with
    pub fn counter(&self) -> TransactionCounter {
        self.counter
    }

    /// Increments the counter, wrapping at `u16::MAX`, and returns the new value
    pub fn next_counter(&mut self) -> TransactionCounter {
        self.counter = self.counter.wrapping_add(1);
        self.counter
    }

    pub fn blocking_in_flight(&self) -> u32 {
        self.blocking
    }

    pub fn non_blocking_in_flight(&self) -> u32 {
        self.non_blocking
    }

    pub fn begin(&mut self, kind: WriteKind) -> PendingWrite {
        match kind {
            WriteKind::Blocking => self.blocking += 1,
            WriteKind::NonBlocking => self.non_blocking += 1,
        }
        PendingWrite {
            kind,
            counter: self.counter,
        }
    }

    pub fn finish(&mut self, write: PendingWrite) {
        let count = match write.kind {
            WriteKind::Blocking => &mut self.blocking,
            WriteKind::NonBlocking => &mut self.non_blocking,
        };
        *count = count.saturating_sub(1);
    }

    /// Encodes `request` for the floor `seed`, pre-incrementing the counter
    /// for instructions that carry one, and opens a write for it
    pub fn prepare(
        &mut self,
        request: ActionRequest,
        seed: &FloorSeed,
        kind: WriteKind,
    ) -> PreparedTransaction {
        let counter = if request.is_counted() {
            self.next_counter()
        } else {
            self.counter
        };
        debug!("Preparing {} on {} with counter {}", request.name(), seed, counter);
        let data = request.encode(seed, counter);
        let write = self.begin(kind);
        PreparedTransaction {
            request,
            data,
            write,
        }
    }
}

impl WriteSignal for TransactionTracker {
    fn is_blocking_write_outstanding(&self) -> bool {
        self.blocking > 0
    }

    fn is_write_outstanding(&self) -> bool {
        self.blocking > 0 || self.non_blocking > 0
    }
}
