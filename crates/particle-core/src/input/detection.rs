//! Latest-value mailbox between the hand detector and the frame loop.
//!
//! The detector runs on its own cadence (camera frames) and may deliver results
//! from another thread or from a JS callback. It only ever overwrites the single
//! slot; the frame loop takes whatever is newest once per tick. Older results
//! are simply replaced, never queued.
//!
//! Each tracking run gets a generation number. A [`DetectionSender`] remembers
//! the generation it was opened with, so results that arrive after tracking was
//! stopped (or restarted) are dropped instead of mutating state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::hand::HandLandmarks;

#[derive(Debug, Default)]
struct Shared {
    generation: AtomicU64,
    slot: Mutex<Option<HandLandmarks>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Option<HandLandmarks>> {
        // the slot holds plain data, a panic mid-write cannot leave it inconsistent
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Receiving side, owned by the session.
#[derive(Clone, Debug, Default)]
pub struct DetectionMailbox {
    shared: Arc<Shared>,
}

impl DetectionMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new tracking run. Senders from earlier runs become stale.
    pub fn open(&self) -> DetectionSender {
        let mut slot = self.shared.lock();
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *slot = None;
        DetectionSender {
            shared: self.shared.clone(),
            generation,
        }
    }

    /// End the current run: drop any pending result and invalidate all senders.
    pub fn close(&self) {
        let mut slot = self.shared.lock();
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
        *slot = None;
    }

    /// Newest undelivered detection, if any.
    pub fn take_latest(&self) -> Option<HandLandmarks> {
        self.shared.lock().take()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::SeqCst)
    }
}

/// Posting side handed to the detector callback. Cheap to clone and `Send`.
#[derive(Clone, Debug)]
pub struct DetectionSender {
    shared: Arc<Shared>,
    generation: u64,
}

impl DetectionSender {
    /// Publish one detector result.
    ///
    /// `None` (no hand in this camera frame) leaves the slot untouched. Returns
    /// `false` when this sender belongs to a run that has since been stopped.
    pub fn post(&self, hand: Option<HandLandmarks>) -> bool {
        let mut slot = self.shared.lock();
        if self.shared.generation.load(Ordering::SeqCst) != self.generation {
            log::debug!(
                "[detect] dropping result from stopped tracking run {}",
                self.generation
            );
            return false;
        }
        if let Some(hand) = hand {
            *slot = Some(hand);
        }
        true
    }

    /// Whether results posted now would still be accepted.
    pub fn is_current(&self) -> bool {
        self.shared.generation.load(Ordering::SeqCst) == self.generation
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
