//! Live-instance counting.
//!
//! An [`InstanceCounter`] tracks how many guarded objects are currently alive.
//! Owners hold a [`CountGuard`]: creating one increments the counter and
//! dropping it decrements it again, so the count can never go below zero.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct InstanceCounter {
    live: AtomicUsize,
}

impl InstanceCounter {
    pub const fn new() -> Self {
        Self {
            live: AtomicUsize::new(0),
        }
    }

    /// Registers one more live instance until the returned guard is dropped.
    pub fn track(&'static self) -> CountGuard {
        self.live.fetch_add(1, Ordering::SeqCst);
        CountGuard { counter: self }
    }

    pub fn get(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl Default for InstanceCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps one instance counted while alive.
#[derive(Debug)]
pub struct CountGuard {
    counter: &'static InstanceCounter,
}

impl CountGuard {
    pub fn counter(&self) -> &'static InstanceCounter {
        self.counter
    }
}

impl Drop for CountGuard {
    fn drop(&mut self) {
        self.counter.live.fetch_sub(1, Ordering::SeqCst);
    }
}
