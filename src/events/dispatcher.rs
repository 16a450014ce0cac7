//! Synchronous, process-local event dispatch.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::{EventKind, ProgressEvent, ProgressSnapshot};
use crate::error::{BoxError, Error, Result};

/// Result returned by listeners.
pub type ListenerResult = std::result::Result<(), BoxError>;

/// A registered listener.
pub type Listener = Rc<dyn Fn(&ProgressEvent) -> ListenerResult>;

/// Maps each event kind to its listeners, in registration order.
///
/// Listeners may register further listeners while an event is being
/// dispatched; those only see later dispatches.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: RefCell<HashMap<EventKind, Vec<Listener>>>,
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let mut debug = f.debug_struct("EventDispatcher");
        for kind in EventKind::ALL {
            debug.field(kind.as_str(), &listeners.get(&kind).map_or(0, Vec::len));
        }
        debug.finish()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind`.
    pub fn add_listener<F>(&self, kind: EventKind, listener: F)
    where
        F: Fn(&ProgressEvent) -> ListenerResult + 'static,
    {
        self.listeners
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Rc::new(listener));
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.borrow().get(&kind).map_or(0, Vec::len)
    }

    /// Deliver an event to every listener of `kind`.
    ///
    /// Stops at the first failing listener and returns its error.
    pub fn dispatch(&self, kind: EventKind, snapshot: &ProgressSnapshot) -> Result<()> {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .get(&kind)
            .cloned()
            .unwrap_or_default();

        trace!(event = %kind, listeners = listeners.len(), "dispatching");

        let event = ProgressEvent {
            kind,
            snapshot: *snapshot,
        };
        for listener in listeners {
            listener(&event).map_err(|source| Error::Listener { event: kind, source })?;
        }
        Ok(())
    }
}
