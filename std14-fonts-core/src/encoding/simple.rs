use super::{BaseEncoding, BuiltinEncoding, EncodingRepresentation, EncodingTable, TextEncoder};

/// Encoder backed by one of the named base encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleEncoder {
    encoding: BaseEncoding,
}

impl SimpleEncoder {
    pub fn new(encoding: BaseEncoding) -> Self {
        Self { encoding }
    }

    pub fn win_ansi() -> Self {
        Self::new(BaseEncoding::WinAnsiEncoding)
    }

    pub fn mac_roman() -> Self {
        Self::new(BaseEncoding::MacRomanEncoding)
    }

    pub fn standard() -> Self {
        Self::new(BaseEncoding::StandardEncoding)
    }

    pub fn encoding(&self) -> BaseEncoding {
        self.encoding
    }

    fn table(&self) -> &'static EncodingTable {
        self.encoding.table()
    }
}

impl Default for SimpleEncoder {
    fn default() -> Self {
        Self::win_ansi()
    }
}

impl TextEncoder for SimpleEncoder {
    fn code_to_glyph(&self, code: u8) -> Option<&str> {
        self.table().glyph(code)
    }

    fn glyph_to_code(&self, glyph: &str) -> Option<u8> {
        self.table().code(glyph)
    }

    fn serialize(&self) -> EncodingRepresentation {
        EncodingRepresentation::Named(self.encoding)
    }

    fn box_clone(&self) -> Box<dyn TextEncoder> {
        Box::new(*self)
    }
}

/// The encoding stored inside the Symbol or ZapfDingbats font program.
///
/// There is no name for it in PDF, so it serializes as an encoding
/// dictionary with no base and an empty `Differences` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinEncoder {
    encoding: BuiltinEncoding,
}

impl BuiltinEncoder {
    pub fn new(encoding: BuiltinEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> BuiltinEncoding {
        self.encoding
    }
}

impl TextEncoder for BuiltinEncoder {
    fn code_to_glyph(&self, code: u8) -> Option<&str> {
        self.encoding.table().glyph(code)
    }

    fn glyph_to_code(&self, glyph: &str) -> Option<u8> {
        self.encoding.table().code(glyph)
    }

    fn serialize(&self) -> EncodingRepresentation {
        EncodingRepresentation::Differences {
            base: None,
            runs: Vec::new(),
        }
    }

    fn box_clone(&self) -> Box<dyn TextEncoder> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Object;

    #[test]
    fn test_simple_encoder_default_is_win_ansi() {
        let encoder = SimpleEncoder::default();
        assert_eq!(encoder.encoding(), BaseEncoding::WinAnsiEncoding);
        assert_eq!(encoder.to_pdf_object(), Object::name("WinAnsiEncoding"));
    }

    #[test]
    fn test_simple_encoder_lookups() {
        let encoder = SimpleEncoder::mac_roman();
        assert_eq!(encoder.code_to_glyph(0x8E), Some("eacute"));
        assert_eq!(encoder.glyph_to_code("eacute"), Some(0x8E));
        assert_eq!(encoder.char_to_code('\u{e9}'), Some(0x8E));
        assert_eq!(encoder.code_to_glyph(0x7F), None);

        let standard = SimpleEncoder::standard();
        assert_eq!(standard.char_to_code('\u{2019}'), Some(0x27));
        assert_eq!(standard.char_to_code('\''), Some(0xA9));
    }

    #[test]
    fn test_builtin_encoder_serializes_as_empty_differences() {
        let encoder = BuiltinEncoder::new(BuiltinEncoding::ZapfDingbats);
        let object = encoder.to_pdf_object();
        let dict = object.as_dict().unwrap();
        assert_eq!(dict.get_name("Type"), Some("Encoding"));
        assert_eq!(dict.get("BaseEncoding"), None);
        assert_eq!(dict.get("Differences"), Some(&Object::Array(Vec::new())));
    }

    #[test]
    fn test_builtin_encoder_lookups() {
        let encoder = BuiltinEncoder::new(BuiltinEncoding::ZapfDingbats);
        assert_eq!(encoder.code_to_glyph(0x20), Some("space"));
        assert_eq!(encoder.glyph_to_code("a100"), Some(0x7E));
        assert_eq!(encoder.code_to_char(0x21), None);
        assert_eq!(encoder.encoding(), BuiltinEncoding::ZapfDingbats);
    }
}
