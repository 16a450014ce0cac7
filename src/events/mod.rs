//! Lifecycle events of a progress bar.
//!
//! A bar fires [`EventKind::Start`] on its first frame, [`EventKind::Progress`]
//! on every later value change and [`EventKind::Complete`] once, when it
//! finishes. Listeners receive a [`ProgressEvent`] carrying an immutable
//! [`ProgressSnapshot`].
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tagline::events::{EventDispatcher, EventKind};
//! use tagline::ProgressBarBuilder;
//!
//! # fn main() -> Result<(), tagline::Error> {
//! let completed = Rc::new(Cell::new(false));
//! let flag = completed.clone();
//!
//! let mut bar = ProgressBarBuilder::new().total(2).build_with(Vec::new());
//! bar.on_complete(move |event| {
//!     flag.set(event.snapshot.finished);
//!     Ok(())
//! });
//! bar.increment(1)?.increment(1)?;
//! assert!(completed.get());
//! # Ok(())
//! # }
//! ```

mod dispatcher;
mod snapshot;

pub use dispatcher::{EventDispatcher, Listener, ListenerResult};
pub use snapshot::{EventKind, InstanceId, ProgressEvent, ProgressSnapshot};
