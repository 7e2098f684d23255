//! Name-based factory over the 14 standard fonts

use super::{StandardFont, StandardFontName};
use crate::error::{FontError, Result};
use tracing::warn;

/// Build the standard font called `name` with its default encoder.
///
/// Names are matched exactly: `Helvetica-BoldOblique` resolves,
/// `helvetica-boldoblique` does not.
pub fn standard_font(name: &str) -> Result<StandardFont> {
    match StandardFontName::from_postscript_name(name) {
        Some(font) => Ok(StandardFont::new(font)),
        None => {
            warn!(name, "requested font is not one of the standard 14");
            Err(FontError::UnknownFont(name.to_string()))
        }
    }
}

pub fn is_standard_font(name: &str) -> bool {
    StandardFontName::from_postscript_name(name).is_some()
}

/// PostScript names of all 14 fonts.
pub fn standard_font_names() -> impl Iterator<Item = &'static str> {
    StandardFontName::all().map(|font| font.postscript_name())
}

/// One freshly built instance of every standard font.
pub fn all_standard_fonts() -> Vec<StandardFont> {
    StandardFontName::all().map(StandardFont::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_font_lookup() {
        for name in standard_font_names() {
            let font = standard_font(name).unwrap();
            assert_eq!(font.postscript_name(), name);
        }
    }

    #[test]
    fn test_unknown_names() {
        for name in ["Arial", "helvetica", "Times", "Courier-Italic", ""] {
            assert!(!is_standard_font(name));
            match standard_font(name) {
                Err(FontError::UnknownFont(n)) => assert_eq!(n, name),
                other => panic!("expected UnknownFont for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_all_standard_fonts() {
        let fonts = all_standard_fonts();
        assert_eq!(fonts.len(), 14);
        let names: Vec<_> = fonts.iter().map(|f| f.name()).collect();
        assert_eq!(names, StandardFontName::all().collect::<Vec<_>>());
    }
}
