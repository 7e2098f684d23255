//! Per-glyph advance metrics for the standard fonts

use super::afm;
use super::StandardFontName;
use std::collections::HashMap;
use std::fmt;

/// Advance metrics for one glyph, in glyph space (1000 units = 1 text space unit).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GlyphMetrics {
    /// Adobe glyph name, identical to the key the metric is stored under
    pub glyph_name: &'static str,
    /// Horizontal advance (AFM `WX`)
    pub wx: f64,
    /// Vertical advance (AFM `WY`), zero for every standard font
    pub wy: f64,
}

impl GlyphMetrics {
    /// Horizontal advance scaled to user space at `font_size`.
    pub fn scaled_width(&self, font_size: f64) -> f64 {
        self.wx * font_size / 1000.0
    }
}

/// Immutable glyph name -> metrics map for a single font variant.
pub struct MetricsTable {
    font: StandardFontName,
    glyphs: HashMap<&'static str, GlyphMetrics>,
}

impl MetricsTable {
    fn from_widths(font: StandardFontName, widths: &'static [(&'static str, f64)]) -> Self {
        let glyphs = widths
            .iter()
            .map(|&(name, wx)| {
                (
                    name,
                    GlyphMetrics {
                        glyph_name: name,
                        wx,
                        wy: 0.0,
                    },
                )
            })
            .collect();
        Self { font, glyphs }
    }

    fn fixed_pitch(font: StandardFontName, names: &'static [&'static str], advance: f64) -> Self {
        let glyphs = names
            .iter()
            .map(|&name| {
                (
                    name,
                    GlyphMetrics {
                        glyph_name: name,
                        wx: advance,
                        wy: 0.0,
                    },
                )
            })
            .collect();
        Self { font, glyphs }
    }

    /// The font variant this table belongs to.
    pub fn font(&self) -> StandardFontName {
        self.font
    }

    /// Look up a glyph by its case-sensitive Adobe name.
    ///
    /// `None` means the font has no such glyph, which is distinct from a
    /// glyph that exists with zero advance.
    pub fn get(&self, glyph_name: &str) -> Option<&GlyphMetrics> {
        self.glyphs.get(glyph_name)
    }

    pub fn contains(&self, glyph_name: &str) -> bool {
        self.glyphs.contains_key(glyph_name)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph names in no particular order.
    pub fn glyph_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.glyphs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlyphMetrics> {
        self.glyphs.values()
    }
}

impl fmt::Debug for MetricsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsTable")
            .field("font", &self.font.postscript_name())
            .field("glyphs", &self.glyphs.len())
            .finish()
    }
}

lazy_static::lazy_static! {
    static ref HELVETICA: MetricsTable =
        MetricsTable::from_widths(StandardFontName::Helvetica, afm::helvetica::WIDTHS);
    static ref HELVETICA_BOLD: MetricsTable =
        MetricsTable::from_widths(StandardFontName::HelveticaBold, afm::helvetica_bold::WIDTHS);
    static ref HELVETICA_OBLIQUE: MetricsTable =
        MetricsTable::from_widths(StandardFontName::HelveticaOblique, afm::helvetica::WIDTHS);
    static ref HELVETICA_BOLD_OBLIQUE: MetricsTable = MetricsTable::from_widths(
        StandardFontName::HelveticaBoldOblique,
        afm::helvetica_bold::WIDTHS,
    );
    static ref TIMES_ROMAN: MetricsTable =
        MetricsTable::from_widths(StandardFontName::TimesRoman, afm::times_roman::WIDTHS);
    static ref TIMES_BOLD: MetricsTable =
        MetricsTable::from_widths(StandardFontName::TimesBold, afm::times_bold::WIDTHS);
    static ref TIMES_ITALIC: MetricsTable =
        MetricsTable::from_widths(StandardFontName::TimesItalic, afm::times_italic::WIDTHS);
    static ref TIMES_BOLD_ITALIC: MetricsTable = MetricsTable::from_widths(
        StandardFontName::TimesBoldItalic,
        afm::times_bold_italic::WIDTHS,
    );
    static ref COURIER: MetricsTable = MetricsTable::fixed_pitch(
        StandardFontName::Courier,
        afm::courier::GLYPHS,
        afm::courier::ADVANCE,
    );
    static ref COURIER_BOLD: MetricsTable = MetricsTable::fixed_pitch(
        StandardFontName::CourierBold,
        afm::courier::GLYPHS,
        afm::courier::ADVANCE,
    );
    static ref COURIER_OBLIQUE: MetricsTable = MetricsTable::fixed_pitch(
        StandardFontName::CourierOblique,
        afm::courier::GLYPHS,
        afm::courier::ADVANCE,
    );
    static ref COURIER_BOLD_OBLIQUE: MetricsTable = MetricsTable::fixed_pitch(
        StandardFontName::CourierBoldOblique,
        afm::courier::GLYPHS,
        afm::courier::ADVANCE,
    );
    static ref SYMBOL: MetricsTable =
        MetricsTable::from_widths(StandardFontName::Symbol, afm::symbol::WIDTHS);
    static ref ZAPF_DINGBATS: MetricsTable =
        MetricsTable::from_widths(StandardFontName::ZapfDingbats, afm::zapf_dingbats::WIDTHS);
}

/// The shared, read-only metrics table for `font`.
pub fn metrics_table(font: StandardFontName) -> &'static MetricsTable {
    match font {
        StandardFontName::Helvetica => &*HELVETICA,
        StandardFontName::HelveticaBold => &*HELVETICA_BOLD,
        StandardFontName::HelveticaOblique => &*HELVETICA_OBLIQUE,
        StandardFontName::HelveticaBoldOblique => &*HELVETICA_BOLD_OBLIQUE,
        StandardFontName::TimesRoman => &*TIMES_ROMAN,
        StandardFontName::TimesBold => &*TIMES_BOLD,
        StandardFontName::TimesItalic => &*TIMES_ITALIC,
        StandardFontName::TimesBoldItalic => &*TIMES_BOLD_ITALIC,
        StandardFontName::Courier => &*COURIER,
        StandardFontName::CourierBold => &*COURIER_BOLD,
        StandardFontName::CourierOblique => &*COURIER_OBLIQUE,
        StandardFontName::CourierBoldOblique => &*COURIER_BOLD_OBLIQUE,
        StandardFontName::Symbol => &*SYMBOL,
        StandardFontName::ZapfDingbats => &*ZAPF_DINGBATS,
    }
}
