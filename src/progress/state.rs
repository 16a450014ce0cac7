//! Value, total and timing bookkeeping.

use std::time::{Duration, Instant};

/// Pure progress state and the metrics derived from it.
///
/// `started` and `finished` only ever go from `false` to `true`, except that
/// [`set_total`](ProgressState::set_total) on an unfinished state clears
/// `started` along with the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    value: Option<u64>,
    total: u64,
    started: bool,
    finished: bool,
    start_time: Option<Instant>,
    end_elapsed: Duration,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ProgressState {
    /// A fresh state; a `total` of zero is coerced to one.
    pub fn new(total: u64) -> Self {
        Self {
            value: None,
            total: total.max(1),
            started: false,
            finished: false,
            start_time: None,
            end_elapsed: Duration::ZERO,
        }
    }

    /// The current value, `None` until one is set.
    pub fn value(&self) -> Option<u64> {
        self.value
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Replace the total and reset the value. No-op once finished.
    ///
    /// Returns whether anything changed.
    pub fn set_total(&mut self, total: u64) -> bool {
        if self.finished {
            return false;
        }
        self.total = total.max(1);
        self.value = None;
        self.started = false;
        true
    }

    /// Store `value`, clamped to the total. No-op once finished.
    ///
    /// Returns `true` when the value reached the total.
    pub fn assign(&mut self, value: u64) -> bool {
        if self.finished {
            return false;
        }
        let reached = value >= self.total;
        self.value = Some(value.min(self.total));
        reached
    }

    /// Integer percentage, `0` while the value is unset or zero.
    pub fn percent(&self) -> u8 {
        match self.value {
            None | Some(0) => 0,
            Some(value) => {
                let percent = u128::from(value) * 100 / u128::from(self.total);
                percent.min(100) as u8
            }
        }
    }

    /// Time since start; frozen once finished.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    /// [`elapsed`](Self::elapsed) as seen at `now`.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        if self.finished {
            return self.end_elapsed;
        }
        match (self.started, self.start_time) {
            (true, Some(start)) => now.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    pub(crate) fn start(&mut self, now: Instant) {
        self.started = true;
        self.start_time = Some(now);
    }

    pub(crate) fn finish(&mut self, now: Instant) {
        self.end_elapsed = self.elapsed_at(now);
        self.value = Some(self.total);
        self.finished = true;
    }
}
