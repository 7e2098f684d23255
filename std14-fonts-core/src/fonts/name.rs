use crate::error::{FontError, Result};
use std::fmt;
use std::str::FromStr;

/// The 14 standard Type 1 fonts every conforming reader ships.
///
/// These are never embedded; a document refers to them by PostScript name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardFontName {
    /// Helvetica (sans-serif)
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Helvetica Oblique (italic)
    HelveticaOblique,
    /// Helvetica Bold Oblique
    HelveticaBoldOblique,
    /// Times Roman (serif)
    TimesRoman,
    /// Times Bold
    TimesBold,
    /// Times Italic
    TimesItalic,
    /// Times Bold Italic
    TimesBoldItalic,
    /// Courier (monospace)
    Courier,
    /// Courier Bold
    CourierBold,
    /// Courier Oblique
    CourierOblique,
    /// Courier Bold Oblique
    CourierBoldOblique,
    /// Symbol font (mathematical symbols)
    Symbol,
    /// ZapfDingbats (decorative symbols)
    ZapfDingbats,
}

const ALL: [StandardFontName; 14] = [
    StandardFontName::Helvetica,
    StandardFontName::HelveticaBold,
    StandardFontName::HelveticaOblique,
    StandardFontName::HelveticaBoldOblique,
    StandardFontName::TimesRoman,
    StandardFontName::TimesBold,
    StandardFontName::TimesItalic,
    StandardFontName::TimesBoldItalic,
    StandardFontName::Courier,
    StandardFontName::CourierBold,
    StandardFontName::CourierOblique,
    StandardFontName::CourierBoldOblique,
    StandardFontName::Symbol,
    StandardFontName::ZapfDingbats,
];

impl StandardFontName {
    /// All 14 variants in registry order.
    pub fn all() -> impl Iterator<Item = StandardFontName> {
        ALL.into_iter()
    }

    /// The exact `/BaseFont` name.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFontName::Helvetica => "Helvetica",
            StandardFontName::HelveticaBold => "Helvetica-Bold",
            StandardFontName::HelveticaOblique => "Helvetica-Oblique",
            StandardFontName::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFontName::TimesRoman => "Times-Roman",
            StandardFontName::TimesBold => "Times-Bold",
            StandardFontName::TimesItalic => "Times-Italic",
            StandardFontName::TimesBoldItalic => "Times-BoldItalic",
            StandardFontName::Courier => "Courier",
            StandardFontName::CourierBold => "Courier-Bold",
            StandardFontName::CourierOblique => "Courier-Oblique",
            StandardFontName::CourierBoldOblique => "Courier-BoldOblique",
            StandardFontName::Symbol => "Symbol",
            StandardFontName::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Exact, case-sensitive match against the PostScript names.
    pub fn from_postscript_name(name: &str) -> Option<Self> {
        ALL.into_iter().find(|font| font.postscript_name() == name)
    }

    /// Check if this font is symbolic (uses its own built-in encoding)
    pub fn is_symbolic(&self) -> bool {
        matches!(self, StandardFontName::Symbol | StandardFontName::ZapfDingbats)
    }

    pub fn is_fixed_pitch(&self) -> bool {
        matches!(
            self,
            StandardFontName::Courier
                | StandardFontName::CourierBold
                | StandardFontName::CourierOblique
                | StandardFontName::CourierBoldOblique
        )
    }

    /// The Latin family this face belongs to, if any.
    pub fn family(&self) -> Option<FontFamily> {
        match self {
            StandardFontName::Helvetica
            | StandardFontName::HelveticaBold
            | StandardFontName::HelveticaOblique
            | StandardFontName::HelveticaBoldOblique => Some(FontFamily::Helvetica),
            StandardFontName::TimesRoman
            | StandardFontName::TimesBold
            | StandardFontName::TimesItalic
            | StandardFontName::TimesBoldItalic => Some(FontFamily::Times),
            StandardFontName::Courier
            | StandardFontName::CourierBold
            | StandardFontName::CourierOblique
            | StandardFontName::CourierBoldOblique => Some(FontFamily::Courier),
            StandardFontName::Symbol | StandardFontName::ZapfDingbats => None,
        }
    }
}

impl fmt::Display for StandardFontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.postscript_name())
    }
}

impl FromStr for StandardFontName {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_postscript_name(s).ok_or_else(|| FontError::UnknownFont(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    pub fn regular(self) -> StandardFontName {
        match self {
            FontFamily::Helvetica => StandardFontName::Helvetica,
            FontFamily::Times => StandardFontName::TimesRoman,
            FontFamily::Courier => StandardFontName::Courier,
        }
    }

    pub fn bold(self) -> StandardFontName {
        match self {
            FontFamily::Helvetica => StandardFontName::HelveticaBold,
            FontFamily::Times => StandardFontName::TimesBold,
            FontFamily::Courier => StandardFontName::CourierBold,
        }
    }

    pub fn italic(self) -> StandardFontName {
        match self {
            FontFamily::Helvetica => StandardFontName::HelveticaOblique,
            FontFamily::Times => StandardFontName::TimesItalic,
            FontFamily::Courier => StandardFontName::CourierOblique,
        }
    }

    pub fn bold_italic(self) -> StandardFontName {
        match self {
            FontFamily::Helvetica => StandardFontName::HelveticaBoldOblique,
            FontFamily::Times => StandardFontName::TimesBoldItalic,
            FontFamily::Courier => StandardFontName::CourierBoldOblique,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postscript_names() {
        assert_eq!(StandardFontName::Helvetica.postscript_name(), "Helvetica");
        assert_eq!(
            StandardFontName::HelveticaBoldOblique.postscript_name(),
            "Helvetica-BoldOblique"
        );
        assert_eq!(StandardFontName::TimesRoman.postscript_name(), "Times-Roman");
        assert_eq!(
            StandardFontName::TimesBoldItalic.postscript_name(),
            "Times-BoldItalic"
        );
        assert_eq!(
            StandardFontName::CourierBoldOblique.postscript_name(),
            "Courier-BoldOblique"
        );
        assert_eq!(StandardFontName::Symbol.postscript_name(), "Symbol");
        assert_eq!(StandardFontName::ZapfDingbats.postscript_name(), "ZapfDingbats");
    }

    #[test]
    fn test_all_names_round_trip() {
        assert_eq!(StandardFontName::all().count(), 14);
        for font in StandardFontName::all() {
            assert_eq!(
                StandardFontName::from_postscript_name(font.postscript_name()),
                Some(font)
            );
            assert_eq!(font.to_string(), font.postscript_name());
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!(
            "Times-Italic".parse::<StandardFontName>().unwrap(),
            StandardFontName::TimesItalic
        );

        for bad in ["helvetica-boldoblique", "Helvetica BoldOblique", "Arial", "", "TimesRoman"] {
            match bad.parse::<StandardFontName>() {
                Err(FontError::UnknownFont(name)) => assert_eq!(name, bad),
                other => panic!("expected UnknownFont for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_symbolic_and_fixed_pitch() {
        assert!(StandardFontName::Symbol.is_symbolic());
        assert!(StandardFontName::ZapfDingbats.is_symbolic());
        assert!(!StandardFontName::Helvetica.is_symbolic());

        assert!(StandardFontName::CourierOblique.is_fixed_pitch());
        assert!(!StandardFontName::TimesRoman.is_fixed_pitch());
        assert_eq!(StandardFontName::all().filter(|f| f.is_fixed_pitch()).count(), 4);
    }

    #[test]
    fn test_family_round_trip() {
        for family in [FontFamily::Helvetica, FontFamily::Times, FontFamily::Courier] {
            for face in [
                family.regular(),
                family.bold(),
                family.italic(),
                family.bold_italic(),
            ] {
                assert_eq!(face.family(), Some(family));
            }
        }
        assert_eq!(StandardFontName::Symbol.family(), None);
        assert_eq!(StandardFontName::ZapfDingbats.family(), None);
    }

    #[test]
    fn test_family_faces() {
        assert_eq!(FontFamily::Helvetica.bold_italic(), StandardFontName::HelveticaBoldOblique);
        assert_eq!(FontFamily::Times.italic(), StandardFontName::TimesItalic);
        assert_eq!(FontFamily::Courier.bold(), StandardFontName::CourierBold);
        assert_eq!(FontFamily::Times.regular(), StandardFontName::TimesRoman);
    }
}
