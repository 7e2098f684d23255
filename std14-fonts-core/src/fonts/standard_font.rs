use super::metrics::{metrics_table, GlyphMetrics, MetricsTable};
use super::{StandardFontName, TextMeasurement};
use crate::encoding::{BaseEncoding, BuiltinEncoder, BuiltinEncoding, SimpleEncoder, TextEncoder};
use crate::error::Result;
use crate::objects::{Dictionary, IndirectObject, Object};
use std::fmt;
use tracing::{debug, trace};

/// One of the 14 standard fonts bound to an encoder.
///
/// The metrics table is shared by every instance of the same variant and
/// never changes. The encoder is owned by this value and may be replaced at
/// any time through [`StandardFont::set_encoder`].
///
/// Nothing here is synchronized. A font shared between threads must be
/// wrapped (for example in a `Mutex`) by the caller before swapping encoders.
#[derive(Clone)]
pub struct StandardFont {
    name: StandardFontName,
    metrics: &'static MetricsTable,
    encoder: Box<dyn TextEncoder>,
}

/// The encoder a freshly built font starts with: WinAnsiEncoding for the
/// Latin faces, the font program's own encoding for Symbol and ZapfDingbats.
pub fn default_encoder(name: StandardFontName) -> Box<dyn TextEncoder> {
    match name {
        StandardFontName::Symbol => Box::new(BuiltinEncoder::new(BuiltinEncoding::Symbol)),
        StandardFontName::ZapfDingbats => {
            Box::new(BuiltinEncoder::new(BuiltinEncoding::ZapfDingbats))
        }
        _ => Box::new(SimpleEncoder::new(BaseEncoding::WinAnsiEncoding)),
    }
}

impl StandardFont {
    pub fn new(name: StandardFontName) -> Self {
        debug!(font = name.postscript_name(), "creating standard font");
        Self {
            name,
            metrics: metrics_table(name),
            encoder: default_encoder(name),
        }
    }

    /// Look a font up by its exact PostScript name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn helvetica() -> Self {
        Self::new(StandardFontName::Helvetica)
    }

    pub fn helvetica_bold() -> Self {
        Self::new(StandardFontName::HelveticaBold)
    }

    pub fn helvetica_oblique() -> Self {
        Self::new(StandardFontName::HelveticaOblique)
    }

    pub fn helvetica_bold_oblique() -> Self {
        Self::new(StandardFontName::HelveticaBoldOblique)
    }

    pub fn times_roman() -> Self {
        Self::new(StandardFontName::TimesRoman)
    }

    pub fn times_bold() -> Self {
        Self::new(StandardFontName::TimesBold)
    }

    pub fn times_italic() -> Self {
        Self::new(StandardFontName::TimesItalic)
    }

    pub fn times_bold_italic() -> Self {
        Self::new(StandardFontName::TimesBoldItalic)
    }

    pub fn courier() -> Self {
        Self::new(StandardFontName::Courier)
    }

    pub fn courier_bold() -> Self {
        Self::new(StandardFontName::CourierBold)
    }

    pub fn courier_oblique() -> Self {
        Self::new(StandardFontName::CourierOblique)
    }

    pub fn courier_bold_oblique() -> Self {
        Self::new(StandardFontName::CourierBoldOblique)
    }

    pub fn symbol() -> Self {
        Self::new(StandardFontName::Symbol)
    }

    pub fn zapf_dingbats() -> Self {
        Self::new(StandardFontName::ZapfDingbats)
    }

    /// Builder form of [`StandardFont::set_encoder`].
    pub fn with_encoder<E: TextEncoder + 'static>(mut self, encoder: E) -> Self {
        self.set_encoder(encoder);
        self
    }

    pub fn name(&self) -> StandardFontName {
        self.name
    }

    /// The `/BaseFont` name.
    pub fn postscript_name(&self) -> &'static str {
        self.name.postscript_name()
    }

    pub fn metrics(&self) -> &'static MetricsTable {
        self.metrics
    }

    pub fn encoder(&self) -> &dyn TextEncoder {
        self.encoder.as_ref()
    }

    /// Replace the encoder. No check is made that its glyphs exist in this
    /// font; codes mapping to unknown glyphs simply measure as missing.
    pub fn set_encoder<E: TextEncoder + 'static>(&mut self, encoder: E) {
        self.set_boxed_encoder(Box::new(encoder));
    }

    pub fn set_boxed_encoder(&mut self, encoder: Box<dyn TextEncoder>) {
        debug!(
            font = self.name.postscript_name(),
            encoder = ?encoder,
            "swapping encoder"
        );
        self.encoder = encoder;
    }

    /// Metrics for `glyph_name`, or `None` if this font has no such glyph.
    pub fn glyph_metrics(&self, glyph_name: &str) -> Option<&'static GlyphMetrics> {
        let metrics = self.metrics.get(glyph_name);
        if metrics.is_none() {
            trace!(
                font = self.name.postscript_name(),
                glyph = glyph_name,
                "glyph not in metrics table"
            );
        }
        metrics
    }

    /// Advance width of a glyph in glyph space units.
    pub fn glyph_width(&self, glyph_name: &str) -> Option<f64> {
        self.glyph_metrics(glyph_name).map(|m| m.wx)
    }

    /// Metrics for the glyph the current encoder selects with `code`.
    pub fn code_metrics(&self, code: u8) -> Option<&'static GlyphMetrics> {
        self.encoder
            .code_to_glyph(code)
            .and_then(|glyph| self.glyph_metrics(glyph))
    }

    pub fn code_width(&self, code: u8) -> Option<f64> {
        self.code_metrics(code).map(|m| m.wx)
    }

    /// Measure already-encoded bytes at `font_size`.
    pub fn measure_bytes(&self, bytes: &[u8], font_size: f64) -> TextMeasurement {
        let mut measurement = TextMeasurement::default();
        for &code in bytes {
            match self.code_metrics(code) {
                Some(metrics) => measurement.add_glyph(metrics.scaled_width(font_size)),
                None => measurement.add_missing(),
            }
        }
        measurement
    }

    /// Measure text at `font_size`, mapping each character through the
    /// current encoder.
    pub fn measure_text(&self, text: &str, font_size: f64) -> TextMeasurement {
        let mut measurement = TextMeasurement::default();
        for ch in text.chars() {
            match self.encoder.char_to_code(ch).and_then(|code| self.code_metrics(code)) {
                Some(metrics) => measurement.add_glyph(metrics.scaled_width(font_size)),
                None => measurement.add_missing(),
            }
        }
        measurement
    }

    /// The font dictionary: `Type`, `Subtype`, `BaseFont`, `Encoding`.
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::with_capacity(4);
        dict.set("Type", Object::name("Font"));
        dict.set("Subtype", Object::name("Type1"));
        dict.set("BaseFont", Object::name(self.name.postscript_name()));
        dict.set("Encoding", self.encoder.serialize());
        dict
    }

    /// A fresh font dictionary ready for the document to assign an id.
    pub fn to_pdf_object(&self) -> IndirectObject {
        IndirectObject::new(Object::Dictionary(self.to_dictionary()))
    }
}

impl fmt::Debug for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardFont")
            .field("name", &self.name)
            .field("encoder", &self.encoder)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{DifferencesEncoder, EncodingRepresentation};
    use crate::error::FontError;

    #[test]
    fn test_default_encoders() {
        for name in StandardFontName::all() {
            let font = StandardFont::new(name);
            let expected = if name.is_symbolic() {
                EncodingRepresentation::Differences {
                    base: None,
                    runs: Vec::new(),
                }
            } else {
                EncodingRepresentation::Named(BaseEncoding::WinAnsiEncoding)
            };
            assert_eq!(font.encoder().serialize(), expected, "{name}");
        }
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(StandardFont::helvetica().name(), StandardFontName::Helvetica);
        assert_eq!(
            StandardFont::helvetica_bold_oblique().postscript_name(),
            "Helvetica-BoldOblique"
        );
        assert_eq!(StandardFont::times_bold_italic().name(), StandardFontName::TimesBoldItalic);
        assert_eq!(StandardFont::courier_oblique().name(), StandardFontName::CourierOblique);
        assert_eq!(StandardFont::zapf_dingbats().postscript_name(), "ZapfDingbats");
    }

    #[test]
    fn test_from_name() {
        let font = StandardFont::from_name("Times-Roman").unwrap();
        assert_eq!(font.name(), StandardFontName::TimesRoman);

        let err = StandardFont::from_name("helvetica").unwrap_err();
        assert!(matches!(err, FontError::UnknownFont(ref n) if n == "helvetica"));
    }

    #[test]
    fn test_glyph_metrics_hit_and_miss() {
        let font = StandardFont::helvetica_bold_oblique();
        let a = font.glyph_metrics("A").unwrap();
        assert_eq!(a.glyph_name, "A");
        assert_eq!(a.wx, 722.0);
        assert_eq!(a.wy, 0.0);
        assert!(font.glyph_metrics("nonexistent_glyph").is_none());
        assert_eq!(font.glyph_width("space"), Some(278.0));
    }

    #[test]
    fn test_metrics_shared_per_variant() {
        let a = StandardFont::times_roman();
        let b = StandardFont::times_roman();
        assert!(std::ptr::eq(a.metrics(), b.metrics()));
    }

    #[test]
    fn test_code_width_follows_encoder() {
        let mut font = StandardFont::helvetica();
        assert_eq!(font.code_width(b'W'), Some(944.0));
        assert_eq!(font.code_width(0x81), None);

        font.set_encoder(
            DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
                .with_difference(b'W', "i")
                .unwrap(),
        );
        assert_eq!(font.code_width(b'W'), Some(222.0));
    }

    #[test]
    fn test_encoder_with_unknown_glyphs_is_accepted() {
        let font = StandardFont::courier().with_encoder(
            DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
                .with_difference(b'x', "a42")
                .unwrap(),
        );
        assert_eq!(font.code_metrics(b'x'), None);
        assert_eq!(font.code_width(b'y'), Some(600.0));

        let dict = font.to_dictionary();
        assert!(dict.get_dict("Encoding").is_some());
    }

    #[test]
    fn test_measure_bytes() {
        let font = StandardFont::courier();
        let measurement = font.measure_bytes(b"abc\x81", 10.0);
        assert_eq!(measurement.glyph_count, 3);
        assert_eq!(measurement.missing, 1);
        assert!((measurement.width - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_measure_text() {
        let font = StandardFont::helvetica();
        let measurement = font.measure_text("Hi!", 12.0);
        // H 722, i 222, exclam 278
        assert!((measurement.width - 1222.0 * 12.0 / 1000.0).abs() < 1e-9);
        assert!(measurement.is_complete());

        let measurement = font.measure_text("a\u{4E2D}", 12.0);
        assert_eq!(measurement.missing, 1);
        assert_eq!(measurement.glyph_count, 1);
    }

    #[test]
    fn test_measure_symbol_text() {
        let font = StandardFont::symbol();
        let measurement = font.measure_text("\u{03B1}\u{03B2}", 1000.0);
        assert_eq!(measurement.glyph_count, 2);
        assert!((measurement.width - (631.0 + 549.0)).abs() < 1e-9);
    }

    #[test]
    fn test_to_dictionary_key_order() {
        let dict = StandardFont::times_italic().to_dictionary();
        let keys: Vec<&str> = dict.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["Type", "Subtype", "BaseFont", "Encoding"]);
        assert_eq!(dict.get_name("BaseFont"), Some("Times-Italic"));
        assert_eq!(dict.get_name("Encoding"), Some("WinAnsiEncoding"));
    }

    #[test]
    fn test_to_pdf_object_has_no_id() {
        let object = StandardFont::courier_bold().to_pdf_object();
        assert!(object.id().is_none());
        assert_eq!(
            object.object().as_dict().unwrap().get_name("Subtype"),
            Some("Type1")
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = StandardFont::helvetica();
        let mut copy = original.clone();
        copy.set_encoder(SimpleEncoder::mac_roman());

        assert_eq!(
            original.encoder().serialize(),
            EncodingRepresentation::Named(BaseEncoding::WinAnsiEncoding)
        );
        assert_eq!(
            copy.encoder().serialize(),
            EncodingRepresentation::Named(BaseEncoding::MacRomanEncoding)
        );
    }

    #[test]
    fn test_debug_output() {
        let debug = format!("{:?}", StandardFont::symbol());
        assert!(debug.contains("Symbol"));
        assert!(debug.contains("BuiltinEncoder"));
    }
}
