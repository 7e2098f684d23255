use super::BaseEncoding;
use crate::error::{FontError, Result};
use crate::objects::{Dictionary, Object};
use std::collections::BTreeMap;

/// One `Differences` run: glyphs assigned to consecutive codes from `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceRun {
    pub start: u8,
    pub glyphs: Vec<String>,
}

/// What a font's `/Encoding` entry holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingRepresentation {
    /// `/WinAnsiEncoding` and friends, referenced by name.
    Named(BaseEncoding),
    /// An encoding dictionary. `base: None` with no runs means the font
    /// program's own built-in encoding.
    Differences {
        base: Option<BaseEncoding>,
        runs: Vec<DifferenceRun>,
    },
}

impl EncodingRepresentation {
    /// Collapse sorted overrides into runs of consecutive codes.
    pub fn from_overrides<'a, I>(base: Option<BaseEncoding>, overrides: I) -> Self
    where
        I: IntoIterator<Item = (u8, &'a str)>,
    {
        let mut runs: Vec<DifferenceRun> = Vec::new();
        let sorted: BTreeMap<u8, &str> = overrides.into_iter().collect();

        for (code, glyph) in sorted {
            match runs.last_mut() {
                Some(run) if run.start as usize + run.glyphs.len() == code as usize => {
                    run.glyphs.push(glyph.to_string());
                }
                _ => runs.push(DifferenceRun {
                    start: code,
                    glyphs: vec![glyph.to_string()],
                }),
            }
        }

        EncodingRepresentation::Differences { base, runs }
    }

    pub fn base(&self) -> Option<BaseEncoding> {
        match self {
            EncodingRepresentation::Named(base) => Some(*base),
            EncodingRepresentation::Differences { base, .. } => *base,
        }
    }

    /// Every overridden `(code, glyph)` pair, ascending.
    pub fn overrides(&self) -> Vec<(u8, &str)> {
        let mut pairs = Vec::new();
        if let EncodingRepresentation::Differences { runs, .. } = self {
            for run in runs {
                for (offset, glyph) in run.glyphs.iter().enumerate() {
                    let code = run.start as usize + offset;
                    if code <= u8::MAX as usize {
                        pairs.push((code as u8, glyph.as_str()));
                    }
                }
            }
        }
        pairs.sort_by_key(|(code, _)| *code);
        pairs
    }

    pub fn to_object(&self) -> Object {
        match self {
            EncodingRepresentation::Named(base) => Object::name(base.pdf_name()),
            EncodingRepresentation::Differences { base, runs } => {
                let mut dict = Dictionary::new();
                dict.set("Type", Object::name("Encoding"));
                if let Some(base) = base {
                    dict.set("BaseEncoding", Object::name(base.pdf_name()));
                }

                let mut differences = Vec::new();
                for run in runs {
                    differences.push(Object::Integer(run.start as i64));
                    differences.extend(run.glyphs.iter().map(|g| Object::name(g.as_str())));
                }
                dict.set("Differences", Object::Array(differences));

                Object::Dictionary(dict)
            }
        }
    }

    /// Read an `/Encoding` value back: a base encoding name or an encoding
    /// dictionary.
    pub fn from_object(object: &Object) -> Result<Self> {
        match object {
            Object::Name(name) => Ok(EncodingRepresentation::Named(name.parse()?)),
            Object::Dictionary(dict) => {
                if let Some(kind) = dict.get("Type") {
                    if kind.as_name() != Some("Encoding") {
                        return Err(FontError::InvalidEncoding(format!(
                            "encoding dictionary /Type is {kind:?}"
                        )));
                    }
                }

                let base = match dict.get("BaseEncoding") {
                    None => None,
                    Some(Object::Name(name)) => Some(name.parse()?),
                    Some(other) => {
                        return Err(FontError::InvalidEncoding(format!(
                            "/BaseEncoding must be a name, found {other:?}"
                        )))
                    }
                };

                let runs = match dict.get("Differences") {
                    None => Vec::new(),
                    Some(Object::Array(items)) => parse_differences(items)?,
                    Some(other) => {
                        return Err(FontError::InvalidEncoding(format!(
                            "/Differences must be an array, found {other:?}"
                        )))
                    }
                };

                Ok(EncodingRepresentation::Differences { base, runs })
            }
            other => Err(FontError::InvalidEncoding(format!(
                "expected a name or dictionary, found {other:?}"
            ))),
        }
    }
}

impl From<EncodingRepresentation> for Object {
    fn from(repr: EncodingRepresentation) -> Self {
        repr.to_object()
    }
}

/// Parse a `[code /name /name code /name ...]` array into runs.
pub(crate) fn parse_differences(items: &[Object]) -> Result<Vec<DifferenceRun>> {
    let mut runs: Vec<DifferenceRun> = Vec::new();

    for item in items {
        match item {
            Object::Integer(code) => {
                let start = u8::try_from(*code).map_err(|_| {
                    FontError::InvalidEncoding(format!("Differences code {code} out of range"))
                })?;
                runs.push(DifferenceRun {
                    start,
                    glyphs: Vec::new(),
                });
            }
            Object::Name(glyph) => {
                let run = runs.last_mut().ok_or_else(|| {
                    FontError::InvalidEncoding(format!(
                        "Differences glyph /{glyph} before any code"
                    ))
                })?;
                if run.start as usize + run.glyphs.len() > u8::MAX as usize {
                    return Err(FontError::InvalidEncoding(format!(
                        "Differences run from {} overflows code 255",
                        run.start
                    )));
                }
                run.glyphs.push(glyph.clone());
            }
            other => {
                return Err(FontError::InvalidEncoding(format!(
                    "unexpected {other:?} in Differences"
                )))
            }
        }
    }

    runs.retain(|run| !run.glyphs.is_empty());
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ObjectId;

    fn run(start: u8, glyphs: &[&str]) -> DifferenceRun {
        DifferenceRun {
            start,
            glyphs: glyphs.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_named_to_object() {
        let repr = EncodingRepresentation::Named(BaseEncoding::WinAnsiEncoding);
        assert_eq!(repr.to_object(), Object::name("WinAnsiEncoding"));
        assert_eq!(repr.base(), Some(BaseEncoding::WinAnsiEncoding));
        assert!(repr.overrides().is_empty());
    }

    #[test]
    fn test_from_overrides_collapses_runs() {
        let repr = EncodingRepresentation::from_overrides(
            Some(BaseEncoding::StandardEncoding),
            [(40, "a"), (128, "Euro"), (39, "quotesingle"), (41, "b")],
        );
        assert_eq!(
            repr,
            EncodingRepresentation::Differences {
                base: Some(BaseEncoding::StandardEncoding),
                runs: vec![run(39, &["quotesingle", "a", "b"]), run(128, &["Euro"])],
            }
        );
    }

    #[test]
    fn test_differences_to_object() {
        let repr = EncodingRepresentation::Differences {
            base: Some(BaseEncoding::WinAnsiEncoding),
            runs: vec![run(32, &["space", "a1"]), run(200, &["Omega"])],
        };
        let object = repr.to_object();
        let dict = object.as_dict().unwrap();

        let keys: Vec<&str> = dict.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["Type", "BaseEncoding", "Differences"]);
        assert_eq!(dict.get_name("Type"), Some("Encoding"));
        assert_eq!(dict.get_name("BaseEncoding"), Some("WinAnsiEncoding"));
        assert_eq!(
            dict.get("Differences"),
            Some(&Object::Array(vec![
                Object::Integer(32),
                Object::name("space"),
                Object::name("a1"),
                Object::Integer(200),
                Object::name("Omega"),
            ]))
        );
    }

    #[test]
    fn test_builtin_shape() {
        let repr = EncodingRepresentation::Differences {
            base: None,
            runs: Vec::new(),
        };
        let object = repr.to_object();
        let dict = object.as_dict().unwrap();
        assert!(!dict.contains_key("BaseEncoding"));
        assert_eq!(dict.get("Differences"), Some(&Object::Array(Vec::new())));
    }

    #[test]
    fn test_from_object_round_trip() {
        let repr = EncodingRepresentation::from_overrides(
            Some(BaseEncoding::MacRomanEncoding),
            [(1, "alpha"), (2, "beta"), (255, "omega")],
        );
        let parsed = EncodingRepresentation::from_object(&repr.to_object()).unwrap();
        assert_eq!(parsed, repr);

        let named = EncodingRepresentation::from_object(&Object::name("StandardEncoding")).unwrap();
        assert_eq!(named, EncodingRepresentation::Named(BaseEncoding::StandardEncoding));
    }

    #[test]
    fn test_parse_differences_errors() {
        assert!(parse_differences(&[Object::name("a")]).is_err());
        assert!(parse_differences(&[Object::Integer(256), Object::name("a")]).is_err());
        assert!(parse_differences(&[Object::Integer(-1)]).is_err());
        assert!(
            parse_differences(&[Object::Integer(1), Object::Reference(ObjectId::new(2, 0))])
                .is_err()
        );
        assert!(
            parse_differences(&[Object::Integer(255), Object::name("a"), Object::name("b")])
                .is_err()
        );
    }

    #[test]
    fn test_parse_differences_drops_empty_runs() {
        let runs =
            parse_differences(&[Object::Integer(10), Object::Integer(20), Object::name("x")])
                .unwrap();
        assert_eq!(runs, vec![run(20, &["x"])]);
    }

    #[test]
    fn test_from_object_rejects_bad_shapes() {
        assert!(EncodingRepresentation::from_object(&Object::Integer(3)).is_err());
        assert!(EncodingRepresentation::from_object(&Object::name("Latin1")).is_err());

        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Font"));
        assert!(EncodingRepresentation::from_object(&Object::Dictionary(dict)).is_err());

        let mut dict = Dictionary::new();
        dict.set("Differences", Object::name("oops"));
        assert!(EncodingRepresentation::from_object(&Object::Dictionary(dict)).is_err());
    }
}
