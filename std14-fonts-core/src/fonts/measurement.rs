//! Text measurement results

/// Width of a run of codes or characters at a given font size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMeasurement {
    /// Total advance width in text space units
    pub width: f64,
    /// Number of glyphs that contributed a width
    pub glyph_count: usize,
    /// Codes or characters with no glyph or no metrics; these add 0 width
    pub missing: usize,
}

impl TextMeasurement {
    /// True when every input resolved to a measured glyph.
    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }

    pub(crate) fn add_glyph(&mut self, advance: f64) {
        self.width += advance;
        self.glyph_count += 1;
    }

    pub(crate) fn add_missing(&mut self) {
        self.missing += 1;
    }
}
