use crate::error::{Error, Result};

/// The four glyphs a bar is drawn with.
///
/// A full glyph covers two units of progress; the half glyphs mark the
/// boundary between the filled and the remaining part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarGlyphs {
    complete_full: String,
    complete_half: String,
    remaining_half: String,
    remaining_full: String,
}

impl Default for BarGlyphs {
    fn default() -> Self {
        Self {
            complete_full: Self::HEAVY_LINE.into(),
            complete_half: "╸".into(),
            remaining_half: "╺".into(),
            remaining_full: Self::HEAVY_LINE.into(),
        }
    }
}

impl BarGlyphs {
    const HEAVY_LINE: &'static str = "━";

    /// Create a glyph set, rejecting empty glyphs.
    pub fn new(
        complete_full: impl Into<String>,
        complete_half: impl Into<String>,
        remaining_half: impl Into<String>,
        remaining_full: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            complete_full: non_empty("complete_full", complete_full.into())?,
            complete_half: non_empty("complete_half", complete_half.into())?,
            remaining_half: non_empty("remaining_half", remaining_half.into())?,
            remaining_full: non_empty("remaining_full", remaining_full.into())?,
        })
    }

    pub fn complete_full(&self) -> &str {
        &self.complete_full
    }

    pub fn complete_half(&self) -> &str {
        &self.complete_half
    }

    pub fn remaining_half(&self) -> &str {
        &self.remaining_half
    }

    pub fn remaining_full(&self) -> &str {
        &self.remaining_full
    }

    pub fn set_complete_full(&mut self, glyph: impl Into<String>) -> Result<()> {
        self.complete_full = non_empty("complete_full", glyph.into())?;
        Ok(())
    }

    pub fn set_complete_half(&mut self, glyph: impl Into<String>) -> Result<()> {
        self.complete_half = non_empty("complete_half", glyph.into())?;
        Ok(())
    }

    pub fn set_remaining_half(&mut self, glyph: impl Into<String>) -> Result<()> {
        self.remaining_half = non_empty("remaining_half", glyph.into())?;
        Ok(())
    }

    pub fn set_remaining_full(&mut self, glyph: impl Into<String>) -> Result<()> {
        self.remaining_full = non_empty("remaining_full", glyph.into())?;
        Ok(())
    }
}

fn non_empty(name: &'static str, glyph: String) -> Result<String> {
    if glyph.is_empty() {
        return Err(Error::EmptyGlyph(name));
    }
    Ok(glyph)
}
