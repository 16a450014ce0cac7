//! Iteration protocol driving a bar to completion.

use std::iter::FusedIterator;

use super::bar::ProgressBar;
use crate::error::Result;
use crate::events::ProgressSnapshot;

/// Drives a bar to completion, one increment per step.
///
/// Yields the snapshot after each increment and ends once the bar is
/// finished. After an error it yields nothing more. The sequence cannot be
/// restarted: a finished bar yields no items.
///
/// ```rust
/// use tagline::ProgressBarBuilder;
///
/// let mut bar = ProgressBarBuilder::new().total(3).build_with(Vec::new());
/// let values: Vec<u64> = bar.iter().map(|s| s.unwrap().value).collect();
/// assert_eq!(values, [1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct ProgressIter<'a> {
    bar: &'a mut ProgressBar,
    failed: bool,
}

impl<'a> ProgressIter<'a> {
    pub(crate) fn new(bar: &'a mut ProgressBar) -> Self {
        Self { bar, failed: false }
    }
}

impl Iterator for ProgressIter<'_> {
    type Item = Result<ProgressSnapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.bar.is_finished() {
            return None;
        }
        match self.bar.increment(1) {
            Ok(bar) => Some(Ok(bar.snapshot())),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for ProgressIter<'_> {}
