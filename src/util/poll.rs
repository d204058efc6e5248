//! Overlap-guarded polling discipline for the dashboard and campaign
//! details refresh loops.
//!
//! A tick only fires while the watched condition holds and no earlier
//! request is still in flight; a slow response coalesces the ticks that
//! arrive before it resolves. The timers themselves live in the pages
//! (`gloo-timers`, hydrate builds only); this state machine is what
//! makes the discipline testable on the host.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

/// Refresh interval for the dashboard campaign list.
pub const DASHBOARD_POLL_MS: u32 = 10_000;

/// Refresh interval for the campaign details page.
pub const DETAILS_POLL_MS: u32 = 30_000;

/// Gate deciding whether a poll tick should issue a fetch.
#[derive(Clone, Debug)]
pub struct Poller {
    interval_ms: u32,
    in_flight: bool,
}

impl Poller {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            in_flight: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Decide whether this tick fires. `active` is the watched
    /// condition (campaign still running). Returns `true` and marks a
    /// request in flight when the fetch should be issued.
    pub fn tick(&mut self, active: bool) -> bool {
        if !active || self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Re-arm after the in-flight request resolves.
    pub fn settle(&mut self) {
        self.in_flight = false;
    }
}
