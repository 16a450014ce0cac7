use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use tagline::events::{EventKind, ProgressEvent};
use tagline::style::PlainFormatter;
use tagline::theme::{BarGlyphs, Theme};
use tagline::{ProgressBar, ProgressBarBuilder};

/// Installs a tracing subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// === Output Sink Helpers ===

/// In-memory sink shared between a bar and the test inspecting it.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
    writes: Rc<RefCell<usize>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as text.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    /// Number of `write` calls made so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn len(&self) -> usize {
        self.bytes.borrow().len()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        *self.writes.borrow_mut() += 1;
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink whose writes always fail.
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// === Event Helpers ===

/// Records every event a bar dispatches, as `(kind, value)` pairs.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<ProgressEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes the recorder to every event of `bar`.
    pub fn attach(&self, bar: &ProgressBar) {
        for kind in EventKind::ALL {
            let events = self.events.clone();
            bar.dispatcher().add_listener(kind, move |event| {
                events.borrow_mut().push(*event);
                Ok(())
            });
        }
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<(EventKind, u64)> {
        self.events
            .borrow()
            .iter()
            .map(|event| (event.kind, event.snapshot.value))
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind == kind).count()
    }
}

// === Progress Bar Helpers ===

/// ASCII glyphs so bar assertions stay readable.
pub fn create_ascii_theme() -> Theme {
    Theme::default().with_glyphs(BarGlyphs::new("#", ">", "-", ".").expect("valid glyphs"))
}

/// Creates a builder with plain output, ASCII glyphs and no finish delay
pub fn create_test_builder(total: u64, length: usize) -> ProgressBarBuilder {
    ProgressBarBuilder::new()
        .total(total)
        .length(length)
        .theme(create_ascii_theme())
        .formatter(PlainFormatter)
        .finish_delay(Duration::ZERO)
}

/// Creates a bar rendering only its bar tag into a shared buffer
pub fn create_bar_only(total: u64, length: usize) -> (ProgressBar, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let bar = create_test_builder(total, length)
        .template("<progress:bar>")
        .build_with(buffer.clone());
    (bar, buffer)
}

/// Creates a bar with the given template into a shared buffer
pub fn create_templated_bar(total: u64, template: &str) -> (ProgressBar, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let bar = create_test_builder(total, 4)
        .template(template)
        .build_with(buffer.clone());
    (bar, buffer)
}

// === Assertion Helpers ===

/// Asserts the bar is finished at its total
pub fn assert_finished(bar: &ProgressBar) {
    assert!(bar.is_finished(), "Progress bar should be finished");
    assert_eq!(bar.value(), Some(bar.total()));
    assert_eq!(bar.percent(), 100);
}
