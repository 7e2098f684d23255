use super::representation::parse_differences;
use super::{BaseEncoding, EncodingRepresentation, SimpleEncoder, TextEncoder};
use crate::error::{FontError, Result};
use crate::objects::Object;
use std::collections::BTreeMap;

/// A base encoder with individual codes remapped to other glyph names.
///
/// Serializes as an encoding dictionary whose `Differences` array holds the
/// overrides merged on top of whatever the base itself already overrides.
#[derive(Debug, Clone)]
pub struct DifferencesEncoder {
    base: Box<dyn TextEncoder>,
    differences: BTreeMap<u8, String>,
}

impl DifferencesEncoder {
    pub fn new<E: TextEncoder + 'static>(base: E) -> Self {
        Self::from_boxed(Box::new(base))
    }

    pub fn from_boxed(base: Box<dyn TextEncoder>) -> Self {
        Self {
            base,
            differences: BTreeMap::new(),
        }
    }

    /// Overrides on top of a named base encoding.
    pub fn over(encoding: BaseEncoding) -> Self {
        Self::new(SimpleEncoder::new(encoding))
    }

    pub fn with_difference(mut self, code: u8, glyph: impl Into<String>) -> Result<Self> {
        self.set_difference(code, glyph)?;
        Ok(self)
    }

    pub fn set_difference(&mut self, code: u8, glyph: impl Into<String>) -> Result<()> {
        let glyph = glyph.into();
        validate_glyph_name(&glyph)?;
        self.differences.insert(code, glyph);
        Ok(())
    }

    /// Assign `glyphs` to consecutive codes starting at `start`.
    pub fn with_run<S: AsRef<str>>(mut self, start: u8, glyphs: &[S]) -> Result<Self> {
        if start as usize + glyphs.len() > u8::MAX as usize + 1 {
            return Err(FontError::InvalidEncoding(format!(
                "run of {} glyphs from code {start} overflows code 255",
                glyphs.len()
            )));
        }
        for (offset, glyph) in glyphs.iter().enumerate() {
            self.set_difference(start + offset as u8, glyph.as_ref())?;
        }
        Ok(self)
    }

    /// Build from a PDF `Differences` array layered over `base`.
    pub fn from_differences_array(encoding: BaseEncoding, items: &[Object]) -> Result<Self> {
        let mut encoder = Self::over(encoding);
        for run in parse_differences(items)? {
            encoder = encoder.with_run(run.start, run.glyphs.as_slice())?;
        }
        Ok(encoder)
    }

    pub fn remove_difference(&mut self, code: u8) -> Option<String> {
        self.differences.remove(&code)
    }

    /// This encoder's own overrides, ascending by code.
    pub fn differences(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.differences
            .iter()
            .map(|(code, glyph)| (*code, glyph.as_str()))
    }

    pub fn base(&self) -> &dyn TextEncoder {
        self.base.as_ref()
    }
}

fn validate_glyph_name(glyph: &str) -> Result<()> {
    if glyph.is_empty() {
        return Err(FontError::InvalidEncoding(
            "glyph name in Differences must not be empty".to_string(),
        ));
    }
    if glyph.bytes().any(|b| b.is_ascii_whitespace() || b == b'/') {
        return Err(FontError::InvalidEncoding(format!(
            "glyph name {glyph:?} contains whitespace or '/'"
        )));
    }
    Ok(())
}

impl TextEncoder for DifferencesEncoder {
    fn code_to_glyph(&self, code: u8) -> Option<&str> {
        match self.differences.get(&code) {
            Some(glyph) => Some(glyph.as_str()),
            None => self.base.code_to_glyph(code),
        }
    }

    fn glyph_to_code(&self, glyph: &str) -> Option<u8> {
        let overridden = self
            .differences
            .iter()
            .find(|(_, g)| g.as_str() == glyph)
            .map(|(code, _)| *code);
        let from_base = (0..=u8::MAX).find(|code| {
            !self.differences.contains_key(code) && self.base.code_to_glyph(*code) == Some(glyph)
        });

        match (overridden, from_base) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn serialize(&self) -> EncodingRepresentation {
        let inherited = self.base.serialize();
        let mut merged: BTreeMap<u8, &str> = inherited.overrides().into_iter().collect();
        merged.extend(self.differences());
        EncodingRepresentation::from_overrides(inherited.base(), merged)
    }

    fn box_clone(&self) -> Box<dyn TextEncoder> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{BuiltinEncoder, BuiltinEncoding, DifferenceRun};

    #[test]
    fn test_overrides_take_precedence() {
        let encoder = DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_difference(b'A', "Alpha")
            .unwrap();
        assert_eq!(encoder.code_to_glyph(b'A'), Some("Alpha"));
        assert_eq!(encoder.code_to_glyph(b'B'), Some("B"));
        assert_eq!(encoder.glyph_to_code("Alpha"), Some(b'A'));
        assert_eq!(encoder.glyph_to_code("A"), None);
    }

    #[test]
    fn test_glyph_to_code_prefers_lowest() {
        let encoder = DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_difference(0x01, "B")
            .unwrap();
        assert_eq!(encoder.glyph_to_code("B"), Some(0x01));

        let encoder = DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_difference(0xF0, "C")
            .unwrap();
        assert_eq!(encoder.glyph_to_code("C"), Some(b'C'));
    }

    #[test]
    fn test_serialize_collapses_runs() {
        let encoder = DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_run(0x80, &["alpha", "beta", "gamma"])
            .unwrap()
            .with_difference(0x20, "a1")
            .unwrap();

        assert_eq!(
            encoder.serialize(),
            EncodingRepresentation::Differences {
                base: Some(BaseEncoding::WinAnsiEncoding),
                runs: vec![
                    DifferenceRun {
                        start: 0x20,
                        glyphs: vec!["a1".to_string()],
                    },
                    DifferenceRun {
                        start: 0x80,
                        glyphs: vec!["alpha".into(), "beta".into(), "gamma".into()],
                    },
                ],
            }
        );
    }

    #[test]
    fn test_serialize_to_pdf_object() {
        let encoder = DifferencesEncoder::over(BaseEncoding::StandardEncoding)
            .with_run(39, &["quotesingle"])
            .unwrap();
        let object = encoder.to_pdf_object();
        let dict = object.as_dict().unwrap();
        assert_eq!(dict.get_name("BaseEncoding"), Some("StandardEncoding"));
        assert_eq!(
            dict.get("Differences"),
            Some(&Object::Array(vec![
                Object::Integer(39),
                Object::name("quotesingle")
            ]))
        );
    }

    #[test]
    fn test_nested_layers_merge() {
        let inner = DifferencesEncoder::over(BaseEncoding::MacRomanEncoding)
            .with_difference(1, "x")
            .unwrap()
            .with_difference(2, "y")
            .unwrap();
        let outer = DifferencesEncoder::new(inner)
            .with_difference(2, "z")
            .unwrap();

        assert_eq!(outer.code_to_glyph(1), Some("x"));
        assert_eq!(outer.code_to_glyph(2), Some("z"));
        assert_eq!(
            outer.serialize(),
            EncodingRepresentation::from_overrides(
                Some(BaseEncoding::MacRomanEncoding),
                [(1, "x"), (2, "z")]
            )
        );
    }

    #[test]
    fn test_over_builtin_has_no_base_name() {
        let encoder = DifferencesEncoder::new(BuiltinEncoder::new(BuiltinEncoding::Symbol))
            .with_difference(0x20, "uni00A0")
            .unwrap();
        let repr = encoder.serialize();
        assert_eq!(repr.base(), None);
        assert_eq!(repr.overrides(), vec![(0x20, "uni00A0")]);
        assert_eq!(encoder.code_to_glyph(b'a'), Some("alpha"));
    }

    #[test]
    fn test_invalid_glyph_names() {
        let base = DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding);
        assert!(matches!(
            base.clone().with_difference(1, ""),
            Err(FontError::InvalidEncoding(_))
        ));
        assert!(base.clone().with_difference(1, "two words").is_err());
        assert!(base.with_difference(1, "/slash").is_err());
    }

    #[test]
    fn test_run_overflow() {
        let result = DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_run(255, &["a", "b"]);
        assert!(matches!(result, Err(FontError::InvalidEncoding(_))));

        let ok = DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_run(254, &["a", "b"])
            .unwrap();
        assert_eq!(ok.code_to_glyph(255), Some("b"));
    }

    #[test]
    fn test_from_differences_array() {
        let items = vec![
            Object::Integer(24),
            Object::name("breve"),
            Object::name("caron"),
            Object::Integer(39),
            Object::name("quotesingle"),
        ];
        let encoder =
            DifferencesEncoder::from_differences_array(BaseEncoding::StandardEncoding, &items)
                .unwrap();
        assert_eq!(encoder.code_to_glyph(24), Some("breve"));
        assert_eq!(encoder.code_to_glyph(25), Some("caron"));
        assert_eq!(encoder.code_to_glyph(39), Some("quotesingle"));
        assert_eq!(
            encoder.to_pdf_object().as_dict().unwrap().get("Differences"),
            Some(&Object::Array(items))
        );
    }

    #[test]
    fn test_remove_difference_restores_base() {
        let mut encoder = DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_difference(b'a', "alpha")
            .unwrap();
        assert_eq!(encoder.remove_difference(b'a'), Some("alpha".to_string()));
        assert_eq!(encoder.code_to_glyph(b'a'), Some("a"));
        assert_eq!(encoder.differences().count(), 0);
        assert_eq!(encoder.base().code_to_glyph(b'a'), Some("a"));
    }
}
