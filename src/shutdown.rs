//! Process-wide interrupt flag, set from the Ctrl-C handler.
//!
//! A flatten walk is never cancelled midway; the flag is only consulted
//! while waiting for the destination prompt, turning it into an abort
//! before anything on disk has changed.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent, signal-safe).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}
