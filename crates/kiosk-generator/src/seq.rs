use crate::Generator;
use kiosk_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

const FIRST_SEQUENCE: u64 = 1;

/// A sequential counter producing `1, 2, 3, ...`.
///
/// The counter is process-local. Seed it from the store with
/// [`SeqGenerator::resume_after`] so that a persistent store keeps counting
/// where the previous process stopped.
#[derive(Debug)]
pub struct SeqGenerator {
    next: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            next: AtomicU64::new(self.next.load(Ordering::SeqCst)),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SeqGenerator {
    /// Creates a generator whose first code is `1`.
    pub fn new() -> Self {
        Self::starting_at(FIRST_SEQUENCE)
    }

    /// Creates a generator whose first code is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Creates a generator that continues after the highest code already handed out.
    pub fn resume_after(highest: Option<u64>) -> Self {
        match highest {
            Some(highest) => Self::starting_at(highest.saturating_add(1).max(FIRST_SEQUENCE)),
            None => Self::new(),
        }
    }

    /// The value the next call to [`Generator::generate`] will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        ShortCode::sequence(self.next.fetch_add(1, Ordering::SeqCst))
    }
}
