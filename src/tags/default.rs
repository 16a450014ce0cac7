//! The built-in `progress:*` tags.

use super::TagHandler;
use crate::error::Result;
use crate::progress::ProgressBar;
use crate::style::StyleFormatter;
use crate::theme::Theme;
use crate::utils::format_elapsed;

pub const TAG_LABEL_START: &str = "<progress:label:start>";
pub const TAG_LABEL_END: &str = "<progress:label:end>";
pub const TAG_BAR: &str = "<progress:bar>";
pub const TAG_INDICATOR: &str = "<progress:indicator>";
pub const TAG_TIME: &str = "<progress:time>";
pub const TAG_PERCENT: &str = "<progress:percent>";
pub const TAG_VALUE: &str = "<progress:value>";
pub const TAG_TOTAL: &str = "<progress:total>";

/// Handler for every `progress:*` tag.
///
/// Any tag it is handed that it does not recognize renders as the bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTagHandler;

impl TagHandler for DefaultTagHandler {
    fn handles(&self) -> Vec<String> {
        [
            TAG_LABEL_START,
            TAG_LABEL_END,
            TAG_BAR,
            TAG_INDICATOR,
            TAG_TIME,
            TAG_PERCENT,
            TAG_VALUE,
            TAG_TOTAL,
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn resolve(&self, tag: &str, bar: &ProgressBar) -> Result<String> {
        let text = match tag {
            TAG_VALUE => {
                let width = bar.total().to_string().len();
                format!("{:>width$}", bar.value().unwrap_or(0))
            }
            TAG_TOTAL => bar.total().to_string(),
            TAG_LABEL_START => bar.start_label().to_string(),
            TAG_LABEL_END => bar.end_label().to_string(),
            TAG_INDICATOR => bar.indicator().into_owned(),
            TAG_TIME => format_elapsed(bar.elapsed()),
            TAG_PERCENT => format!("{:>3}", bar.percent()),
            _ => draw_bar(
                bar.theme(),
                bar.formatter(),
                bar.length(),
                bar.value().unwrap_or(0),
                bar.total(),
                bar.is_finished(),
            ),
        };
        Ok(text)
    }
}

/// The indicator used when none is configured: styled percent and time tags.
pub fn default_indicator(theme: &Theme, formatter: &dyn StyleFormatter) -> String {
    format!(
        "{} • {}",
        formatter.apply(theme.percent_style(), &format!("{TAG_PERCENT}%")),
        formatter.apply(theme.time_style(), TAG_TIME)
    )
}

/// Draw a bar of `length` glyphs at half-glyph resolution.
///
/// While unfinished the filled part advances in half steps: a boundary glyph
/// (`complete_half` or `remaining_half`) always sits between the filled and
/// the remaining segment.
pub fn draw_bar(
    theme: &Theme,
    formatter: &dyn StyleFormatter,
    length: usize,
    value: u64,
    total: u64,
    finished: bool,
) -> String {
    let glyphs = theme.glyphs();

    if finished {
        return formatter.apply(theme.complete_style(), &glyphs.complete_full().repeat(length));
    }

    let total = u128::from(total.max(1));
    let steps = (length as u128 * 2 * u128::from(value)) / total;
    let complete = (steps / 2) as usize;
    let half = complete % 2 == 1;
    let remaining = length.saturating_sub(complete + 1);

    let mut out = String::new();
    if complete > 0 {
        out.push_str(&formatter.apply(theme.progress_style(), &glyphs.complete_full().repeat(complete)));
    }
    if half {
        out.push_str(&formatter.apply(theme.progress_style(), glyphs.complete_half()));
    } else {
        out.push_str(&formatter.apply(theme.remaining_style(), glyphs.remaining_half()));
    }
    if remaining > 0 {
        out.push_str(&formatter.apply(theme.remaining_style(), &glyphs.remaining_full().repeat(remaining)));
    }
    out
}
