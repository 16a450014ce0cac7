use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Identifies the progress bar an event came from.
///
/// Every [`ProgressBar`](crate::ProgressBar) gets a distinct id at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

impl InstanceId {
    pub(crate) fn next() -> Self {
        InstanceId(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle events of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The first frame was drawn.
    Start,
    /// The value advanced.
    Progress,
    /// The bar finished.
    Complete,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Start, EventKind::Progress, EventKind::Complete];

    /// Event name, e.g. `progress:start`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "progress:start",
            EventKind::Progress => "progress:progress",
            EventKind::Complete => "progress:complete",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable copy of a progress bar's state.
///
/// Taken at the moment of the update that triggered an event; later changes
/// to the bar do not show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Current value, `0` while unset.
    pub value: u64,
    pub total: u64,
    /// Integer percentage in `0..=100`.
    pub percent: u8,
    pub finished: bool,
    pub elapsed: Duration,
    /// The bar this snapshot was taken from.
    pub source: InstanceId,
}

/// A dispatched event: what happened and the state when it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub kind: EventKind,
    pub snapshot: ProgressSnapshot,
}
