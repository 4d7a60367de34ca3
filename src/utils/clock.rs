// ABOUTME: Injectable wall clock returning milliseconds since the Unix epoch
// ABOUTME: SystemClock reads chrono's UTC time, FixedClock is settable for tests and replays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use chrono::Utc;
use nutricart_core::constants::time::MS_PER_DAY;
use nutricart_core::Timestamp;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of "now" for every time-dependent operation
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> Timestamp;
}

/// Real time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Timestamp {
        Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a settable instant
#[derive(Debug, Default)]
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    /// Freeze the clock at `now`
    #[must_use]
    pub const fn new(now: Timestamp) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    /// Move the clock to `now`
    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: i64) {
        self.now.fetch_add(days * MS_PER_DAY, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}
