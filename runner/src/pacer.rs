//! Pacing and cooperative cancellation.
//!
//! The delay between steps exists for human-paced visualization only; the
//! engine never sleeps. Tests use [`NoDelay`] and run at full speed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Pause between engine steps.
pub trait Pacer {
    fn pause(&self);
}

/// Wall-clock pacer: sleeps for the configured delay.
#[derive(Debug, Clone, Copy)]
pub struct DelayPacer(pub Duration);

impl Pacer for DelayPacer {
    fn pause(&self) {
        std::thread::sleep(self.0);
    }
}

/// Test pacer: no pause at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self) {}
}

/// Cooperative cancellation flag, cloneable across the UI boundary.
///
/// Setting the flag does not interrupt anything by itself: the driver
/// observes it at the next suspension point, which is the only place a run
/// can stop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, unset token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
