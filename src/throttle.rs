//! FrameThrottle: at most one processed event per animation frame
//!
//! Raw events are parked in a single pending slot. The first event of a
//! burst asks the caller to schedule a frame; later events in the same
//! frame overwrite the slot. On the frame tick the latest event is consumed.

#[derive(Debug)]
pub struct FrameThrottle<E> {
    pending: Option<E>,
    frame_requested: bool,
    /// Events overwritten before their frame ran
    coalesced: u64,
}

impl<E> Default for FrameThrottle<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FrameThrottle<E> {
    pub fn new() -> Self {
        Self {
            pending: None,
            frame_requested: false,
            coalesced: 0,
        }
    }

    /// Park an event. Returns true when the caller must request a frame.
    pub fn push(&mut self, event: E) -> bool {
        if self.pending.replace(event).is_some() {
            self.coalesced += 1;
        }
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Frame tick: hand out the most recent event, if any.
    pub fn tick(&mut self) -> Option<E> {
        self.frame_requested = false;
        self.pending.take()
    }

    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn coalesced_count(&self) -> u64 {
        self.coalesced
    }
}
