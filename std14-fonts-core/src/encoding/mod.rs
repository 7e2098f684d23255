//! Character encodings for simple fonts.
//!
//! A [`TextEncoder`] maps single-byte codes to glyph names and knows how to
//! describe itself as a PDF `/Encoding` entry. Fonts hold one boxed encoder
//! and consult it for every code they measure.

mod base;
mod differences;
pub mod glyph_list;
mod representation;
mod simple;
mod tables;

pub use base::{BaseEncoding, BuiltinEncoding, EncodingTable};
pub use differences::DifferencesEncoder;
pub use representation::{DifferenceRun, EncodingRepresentation};
pub use simple::{BuiltinEncoder, SimpleEncoder};

use crate::objects::Object;
use std::fmt;

/// Code <-> glyph name mapping plus its PDF serialization.
///
/// Implementations must be cheap to clone; fonts clone their encoder when
/// they are cloned.
pub trait TextEncoder: fmt::Debug + Send + Sync {
    /// Glyph name selected by `code`, or `None` when the code is unmapped.
    fn code_to_glyph(&self, code: u8) -> Option<&str>;

    /// Lowest code that selects `glyph`.
    fn glyph_to_code(&self, glyph: &str) -> Option<u8>;

    /// The `/Encoding` entry describing this encoder.
    fn serialize(&self) -> EncodingRepresentation;

    fn box_clone(&self) -> Box<dyn TextEncoder>;

    fn char_to_code(&self, ch: char) -> Option<u8> {
        glyph_list::char_to_glyph(ch).and_then(|glyph| self.glyph_to_code(glyph))
    }

    fn code_to_char(&self, code: u8) -> Option<char> {
        self.code_to_glyph(code).and_then(glyph_list::glyph_to_char)
    }

    fn to_pdf_object(&self) -> Object {
        self.serialize().to_object()
    }

    /// Encode text, substituting `?` for characters this encoding lacks.
    ///
    /// Encodings without a `question` glyph (the ZapfDingbats built-in)
    /// substitute the code of `space` instead, or 0x20 if that is missing
    /// too. Every character produces exactly one byte.
    fn encode(&self, text: &str) -> Vec<u8> {
        let substitute = self
            .glyph_to_code("question")
            .or_else(|| self.glyph_to_code("space"))
            .unwrap_or(b' ');
        self.encode_with(text, substitute)
    }

    /// Encode text, writing `substitute` for characters this encoding lacks.
    fn encode_with(&self, text: &str, substitute: u8) -> Vec<u8> {
        text.chars()
            .map(|ch| self.char_to_code(ch).unwrap_or(substitute))
            .collect()
    }

    /// Decode bytes, substituting U+FFFD for codes with no Unicode value.
    fn decode(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&code| self.code_to_char(code).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl Clone for Box<dyn TextEncoder> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_win_ansi() {
        let encoder = SimpleEncoder::win_ansi();
        assert_eq!(encoder.encode("Caf\u{e9} \u{20ac}5"), b"Caf\xe9 \x805".to_vec());
        assert_eq!(encoder.decode(b"Caf\xe9 \x805"), "Caf\u{e9} \u{20ac}5");
    }

    #[test]
    fn test_encode_substitutes_question_mark() {
        let encoder = SimpleEncoder::win_ansi();
        assert_eq!(encoder.encode("a\u{4E2D}b"), b"a?b".to_vec());
        assert_eq!(encoder.decode(&[0x81]), "\u{FFFD}");
    }

    #[test]
    fn test_encode_without_question_glyph_keeps_one_byte_per_char() {
        let dingbats = BuiltinEncoder::new(BuiltinEncoding::ZapfDingbats);
        assert_eq!(dingbats.glyph_to_code("question"), None);
        assert_eq!(dingbats.encode("AB"), vec![0x20, 0x20]);
        assert_eq!(dingbats.encode_with("AB", 0x21), vec![0x21, 0x21]);

        let symbol = BuiltinEncoder::new(BuiltinEncoding::Symbol);
        assert_eq!(symbol.encode("A\u{03B1}"), vec![0x3F, b'a']);
    }

    #[test]
    fn test_char_to_code_through_glyph_names() {
        let symbol = BuiltinEncoder::new(BuiltinEncoding::Symbol);
        assert_eq!(symbol.char_to_code('\u{03B1}'), Some(b'a'));
        assert_eq!(symbol.char_to_code('\u{2211}'), Some(0xE5));
        assert_eq!(symbol.char_to_code('A'), None);
    }

    #[test]
    fn test_boxed_clone_keeps_behavior() {
        let boxed: Box<dyn TextEncoder> = Box::new(
            DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
                .with_difference(0x41, "Omega")
                .unwrap(),
        );
        let cloned = boxed.clone();
        assert_eq!(cloned.serialize(), boxed.serialize());
        assert_eq!(cloned.code_to_glyph(0x41), Some("Omega"));
    }
}
