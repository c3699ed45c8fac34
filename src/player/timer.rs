//! Single-slot auto-advance timer
//!
//! At most one advance is pending at any time. Scheduling always cancels the
//! previous token first, so two advances can never stack up.

use std::time::{Duration, Instant};

/// Handle for a scheduled advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken {
    generation: u64,
    due: Instant,
}

impl AdvanceToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn due(&self) -> Instant {
        self.due
    }
}

#[derive(Debug, Default)]
pub struct AdvanceTimer {
    pending: Option<AdvanceToken>,
    generation: u64,
}

impl AdvanceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the pending advance, if any
    pub fn cancel(&mut self) -> Option<AdvanceToken> {
        self.pending.take()
    }

    /// Replace any pending advance with one due `after` from `now`
    pub fn schedule(&mut self, now: Instant, after: Duration) -> AdvanceToken {
        self.cancel();
        self.generation += 1;
        let token = AdvanceToken {
            generation: self.generation,
            due: now + after,
        };
        self.pending = Some(token);
        token
    }

    pub fn pending(&self) -> Option<AdvanceToken> {
        self.pending
    }

    /// Take the pending token if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<AdvanceToken> {
        match self.pending {
            Some(token) if token.due <= now => self.pending.take(),
            _ => None,
        }
    }

    /// Time left before the pending advance fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|token| token.due.saturating_duration_since(now))
    }
}
