//! The progress bar: state transitions, rendering and redraws.
//!
//! Every operation runs synchronously on the caller's thread. A bar assumes
//! it owns the current terminal line; nothing else may write to its output
//! while it is live.

use std::borrow::Cow;
use std::cell::OnceCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::config::{normalize_length, ProgressConfig};
use super::iter::ProgressIter;
use super::state::ProgressState;
use crate::error::Result;
use crate::events::{
    EventDispatcher, EventKind, InstanceId, ListenerResult, ProgressEvent, ProgressSnapshot,
};
use crate::style::StyleFormatter;
use crate::tags::{default_indicator, DefaultTagHandler, TagHandler, TagRegistry};
use crate::terminal::{CLEAR_LINE, CURSOR_HIDE, CURSOR_SHOW, CURSOR_UP};
use crate::theme::Theme;

/// A single-line terminal progress bar.
///
/// Created through [`ProgressBarBuilder`](super::ProgressBarBuilder).
pub struct ProgressBar {
    id: InstanceId,
    state: ProgressState,
    config: ProgressConfig,
    theme: Theme,
    formatter: Box<dyn StyleFormatter>,
    registry: TagRegistry,
    events: Rc<EventDispatcher>,
    output: Box<dyn Write>,
    /// Resolved template of the last frame, cleared on every state change.
    content: OnceCell<String>,
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("theme", &self.theme)
            .field("registry", &self.registry)
            .field("events", &self.events)
            .finish()
    }
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&content)
    }
}

impl ProgressBar {
    pub(crate) fn new(
        mut config: ProgressConfig,
        theme: Theme,
        formatter: Box<dyn StyleFormatter>,
        output: Box<dyn Write>,
        handlers: Vec<Rc<dyn TagHandler>>,
    ) -> Self {
        config.length = normalize_length(config.length);

        let mut registry = TagRegistry::new();
        registry.register(DefaultTagHandler);
        for handler in handlers {
            registry.register_shared(handler);
        }

        Self {
            id: InstanceId::next(),
            state: ProgressState::new(config.total),
            config,
            theme,
            formatter,
            registry,
            events: Rc::new(EventDispatcher::new()),
            output,
            content: OnceCell::new(),
        }
    }

    // --- Events ---

    /// Listen to start events.
    pub fn on_start<F>(&self, listener: F) -> &Self
    where
        F: Fn(&ProgressEvent) -> ListenerResult + 'static,
    {
        self.events.add_listener(EventKind::Start, listener);
        self
    }

    /// Listen to progress events.
    pub fn on_progress<F>(&self, listener: F) -> &Self
    where
        F: Fn(&ProgressEvent) -> ListenerResult + 'static,
    {
        self.events.add_listener(EventKind::Progress, listener);
        self
    }

    /// Listen to the complete event.
    pub fn on_complete<F>(&self, listener: F) -> &Self
    where
        F: Fn(&ProgressEvent) -> ListenerResult + 'static,
    {
        self.events.add_listener(EventKind::Complete, listener);
        self
    }

    /// The dispatcher shared with listeners.
    pub fn dispatcher(&self) -> Rc<EventDispatcher> {
        self.events.clone()
    }

    // --- Tags & appearance ---

    /// Register a tag handler; it replaces earlier owners of its tags.
    pub fn add_handler<H>(&mut self, handler: H) -> &mut Self
    where
        H: TagHandler + 'static,
    {
        self.registry.register(handler);
        self.content.take();
        self
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme; takes effect on the next frame.
    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self.content.take();
        self
    }

    pub fn formatter(&self) -> &dyn StyleFormatter {
        self.formatter.as_ref()
    }

    pub fn start_label(&self) -> &str {
        &self.config.start_label
    }

    /// Change the label before the bar, optionally redrawing.
    pub fn set_start_label(&mut self, label: impl Into<String>, redraw: bool) -> Result<&mut Self> {
        self.config.start_label = label.into();
        self.redraw_if(redraw)
    }

    pub fn end_label(&self) -> &str {
        &self.config.end_label
    }

    /// Change the label after the indicator, optionally redrawing.
    pub fn set_end_label(&mut self, label: impl Into<String>, redraw: bool) -> Result<&mut Self> {
        self.config.end_label = label.into();
        self.redraw_if(redraw)
    }

    /// The indicator sub-template.
    pub fn indicator(&self) -> Cow<'_, str> {
        match &self.config.indicator {
            Some(indicator) => Cow::Borrowed(indicator.as_str()),
            None => Cow::Owned(default_indicator(&self.theme, self.formatter())),
        }
    }

    /// Change the indicator sub-template, optionally redrawing.
    pub fn set_indicator(&mut self, indicator: impl Into<String>, redraw: bool) -> Result<&mut Self> {
        self.config.indicator = Some(indicator.into());
        self.redraw_if(redraw)
    }

    pub fn template(&self) -> &str {
        &self.config.template
    }

    /// Change the line template, optionally redrawing.
    pub fn set_template(&mut self, template: impl Into<String>, redraw: bool) -> Result<&mut Self> {
        self.config.template = template.into();
        self.redraw_if(redraw)
    }

    /// Bar length in glyphs.
    pub fn length(&self) -> usize {
        self.config.length
    }

    /// Change the bar length; odd lengths are rounded up, the minimum is 4.
    pub fn set_length(&mut self, length: usize) -> &mut Self {
        self.config.length = normalize_length(length);
        self.content.take();
        self
    }

    pub fn is_hidden_on_finish(&self) -> bool {
        self.config.hide_on_finish
    }

    pub fn set_hide_on_finish(&mut self, hide: bool) -> &mut Self {
        self.config.hide_on_finish = hide;
        self
    }

    // --- State ---

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// The current value, `None` until one is set.
    pub fn value(&self) -> Option<u64> {
        self.state.value()
    }

    pub fn total(&self) -> u64 {
        self.state.total()
    }

    /// Integer percentage in `0..=100`.
    pub fn percent(&self) -> u8 {
        self.state.percent()
    }

    pub fn elapsed(&self) -> Duration {
        self.state.elapsed()
    }

    pub fn is_started(&self) -> bool {
        self.state.is_started()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Replace the total and reset progress. No-op once finished.
    pub fn set_total(&mut self, total: u64) -> Result<&mut Self> {
        if self.state.set_total(total) {
            debug!(bar = %self.id, total = self.state.total(), "total reset");
            self.content.take();
        }
        Ok(self)
    }

    /// Set the value and redraw. No-op once finished.
    ///
    /// Reaching the total draws one frame at the total, then finishes.
    pub fn set_value(&mut self, value: u64) -> Result<&mut Self> {
        if self.state.is_finished() {
            return Ok(self);
        }
        if self.state.assign(value) {
            self.update(false, false)?;
            return self.set_complete();
        }
        self.update(false, false)?;
        Ok(self)
    }

    /// Advance the value by `step`; an unset value counts as zero.
    pub fn increment(&mut self, step: u64) -> Result<&mut Self> {
        let value = self.state.value().unwrap_or(0).saturating_add(step);
        self.set_value(value)
    }

    /// Finish the bar at its total. No-op once finished.
    ///
    /// On a bar that never started, the first and final frame are the same
    /// and only the complete event fires; no start event precedes it.
    pub fn set_complete(&mut self) -> Result<&mut Self> {
        if self.state.is_finished() {
            return Ok(self);
        }
        self.state.assign(self.state.total());
        self.update(true, false)?;

        if self.config.hide_on_finish {
            std::thread::sleep(self.config.finish_delay);
            self.write_frame(&format!("{CLEAR_LINE}{CURSOR_UP}"))?;
        }
        Ok(self)
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            value: self.state.value().unwrap_or(0),
            total: self.state.total(),
            percent: self.state.percent(),
            finished: self.state.is_finished(),
            elapsed: self.state.elapsed(),
            source: self.id,
        }
    }

    /// Iterate the bar to completion, one increment per step.
    pub fn iter(&mut self) -> ProgressIter<'_> {
        ProgressIter::new(self)
    }

    // --- Rendering ---

    /// The current line, without control sequences.
    ///
    /// Empty until the bar has started. Cached until the next state change.
    pub fn render(&self) -> Result<String> {
        if !self.state.is_started() {
            return Ok(String::new());
        }
        if let Some(content) = self.content.get() {
            return Ok(content.clone());
        }
        let content = self.registry.resolve(&self.config.template, self)?;
        Ok(self.content.get_or_init(|| content).clone())
    }

    fn redraw_if(&mut self, redraw: bool) -> Result<&mut Self> {
        self.content.take();
        if redraw && self.state.is_started() {
            self.update(false, true)?;
        }
        Ok(self)
    }

    /// Draw a frame and fire the matching event.
    ///
    /// `redraw` frames repaint without firing progress events.
    fn update(&mut self, finishing: bool, redraw: bool) -> Result<()> {
        if self.state.is_finished() || self.state.value().is_none() {
            return Ok(());
        }

        self.content.take();
        let mut prepend = String::new();
        let mut append = String::new();
        let mut trigger = (!redraw).then_some(EventKind::Progress);

        let now = Instant::now();
        if !self.state.is_started() {
            self.state.start(now);
            prepend.push('\n');
            prepend.push_str(CURSOR_HIDE);
            trigger = Some(EventKind::Start);
            debug!(bar = %self.id, total = self.state.total(), "progress started");
        }

        prepend.push_str(CLEAR_LINE);

        if finishing {
            self.state.finish(now);
            trigger = Some(EventKind::Complete);
            if !self.config.hide_on_finish {
                append.push('\n');
            }
            append.push_str(CURSOR_SHOW);
            debug!(bar = %self.id, elapsed = ?self.state.elapsed(), "progress complete");
        }

        let content = self.render()?;
        self.write_frame(&format!("{prepend}{content}{append}"))?;

        if let Some(kind) = trigger {
            let snapshot = self.snapshot();
            self.events.dispatch(kind, &snapshot)?;
            if kind == EventKind::Start && snapshot.value > 0 {
                self.events.dispatch(EventKind::Progress, &snapshot)?;
            }
        }
        Ok(())
    }

    fn write_frame(&mut self, frame: &str) -> Result<()> {
        trace!(bar = %self.id, bytes = frame.len(), "writing frame");
        self.output.write_all(frame.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a mut ProgressBar {
    type Item = Result<ProgressSnapshot>;
    type IntoIter = ProgressIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
