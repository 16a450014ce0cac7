//! Tag name to handler mapping, and the template resolver built on it.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use regex::Regex;
use tracing::{debug, trace};

use super::TagHandler;
use crate::error::{Error, Result};
use crate::progress::ProgressBar;

/// Upper bound on resolution passes over a template.
pub const MAX_PASSES: usize = 16;

/// Maps tag names to the handler that owns them.
///
/// Registering a handler for a tag that already has one replaces it.
#[derive(Default)]
pub struct TagRegistry {
    handlers: HashMap<String, Rc<dyn TagHandler>>,
    /// `<(name|name|...)>` over every registered name, built on first use.
    pattern: OnceCell<Regex>,
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every tag it owns.
    pub fn register<H>(&mut self, handler: H)
    where
        H: TagHandler + 'static,
    {
        self.register_shared(Rc::new(handler));
    }

    /// Register an already shared handler.
    pub fn register_shared(&mut self, handler: Rc<dyn TagHandler>) {
        for tag in handler.handles() {
            let name = bare_name(&tag);
            if name.is_empty() {
                continue;
            }
            debug!(tag = name, "registering tag handler");
            self.handlers.insert(name.to_string(), handler.clone());
        }
        self.pattern.take();
    }

    /// Registered tag names, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Whether `tag` (with or without brackets) has a handler.
    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(bare_name(tag))
    }

    /// The handler owning `tag`.
    pub fn handler(&self, tag: &str) -> Option<Rc<dyn TagHandler>> {
        self.handlers.get(bare_name(tag)).cloned()
    }

    /// Substitute every registered tag in `template` until none is left.
    ///
    /// Handler output is scanned again, so handlers may emit other tags.
    /// Fails with [`Error::TemplateOverflow`] if tags remain after
    /// [`MAX_PASSES`] passes.
    pub fn resolve(&self, template: &str, bar: &ProgressBar) -> Result<String> {
        let Some(pattern) = self.pattern()? else {
            return Ok(template.to_string());
        };

        let mut current = template.to_string();
        for pass in 0..MAX_PASSES {
            if !pattern.is_match(&current) {
                trace!(passes = pass, len = current.len(), "template resolved");
                return Ok(current);
            }
            current = self.substitute(pattern, &current, bar)?;
        }

        match pattern.find(&current) {
            Some(unresolved) => Err(Error::TemplateOverflow {
                passes: MAX_PASSES,
                unresolved: unresolved.as_str().to_string(),
            }),
            None => Ok(current),
        }
    }

    fn substitute(&self, pattern: &Regex, input: &str, bar: &ProgressBar) -> Result<String> {
        let mut out = String::with_capacity(input.len());
        let mut last = 0;

        for caps in pattern.captures_iter(input) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let handler = self
                .handlers
                .get(name.as_str())
                .ok_or_else(|| Error::UnknownTag(whole.as_str().to_string()))?;

            out.push_str(&input[last..whole.start()]);
            out.push_str(&handler.resolve(whole.as_str(), bar)?);
            last = whole.end();
        }

        out.push_str(&input[last..]);
        Ok(out)
    }

    fn pattern(&self) -> Result<Option<&Regex>> {
        if self.handlers.is_empty() {
            return Ok(None);
        }
        if let Some(pattern) = self.pattern.get() {
            return Ok(Some(pattern));
        }
        let alternation = self
            .tags()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("<({alternation})>"))?;
        Ok(Some(self.pattern.get_or_init(|| pattern)))
    }
}

fn bare_name(tag: &str) -> &str {
    tag.trim_matches(|c| c == '<' || c == '>')
}
