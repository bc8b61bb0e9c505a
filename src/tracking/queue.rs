// SPDX-License-Identifier: MPL-2.0
//! Bounded hand-off of marker samples from a capture thread to the UI thread.

use super::{MarkerObserver, MarkerSample};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Creates a connected sender/receiver pair holding at most `capacity`
/// pending samples.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn sample_queue(capacity: usize) -> (SampleSender, SampleReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    let dropped = Arc::new(AtomicU64::new(0));
    (
        SampleSender {
            tx,
            dropped: Arc::clone(&dropped),
        },
        SampleReceiver { rx, dropped },
    )
}

/// Producer half, handed to the tracking session as its observer.
#[derive(Debug, Clone)]
pub struct SampleSender {
    tx: mpsc::Sender<MarkerSample>,
    dropped: Arc<AtomicU64>,
}

impl MarkerObserver for SampleSender {
    fn on_marker_sample(&self, sample: MarkerSample) {
        match self.tx.try_send(sample) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                log::trace!("Sample queue full, dropping marker sample");
            }
            Err(TrySendError::Closed(_)) => {
                log::trace!("Sample queue closed, dropping marker sample");
            }
        }
    }
}

/// Consumer half, drained by the UI on every tick.
#[derive(Debug)]
pub struct SampleReceiver {
    rx: mpsc::Receiver<MarkerSample>,
    dropped: Arc<AtomicU64>,
}

impl SampleReceiver {
    /// Removes and returns every pending sample in arrival order.
    pub fn drain(&mut self) -> Vec<MarkerSample> {
        let mut samples = Vec::new();
        while let Ok(sample) = self.rx.try_recv() {
            samples.push(sample);
        }
        samples
    }

    /// Samples discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
