use super::tables;
use crate::error::{FontError, Result};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Predefined encodings a simple font can name in its `/Encoding` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseEncoding {
    StandardEncoding,
    MacRomanEncoding,
    WinAnsiEncoding,
}

impl BaseEncoding {
    /// The PDF name for this encoding.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            BaseEncoding::StandardEncoding => "StandardEncoding",
            BaseEncoding::MacRomanEncoding => "MacRomanEncoding",
            BaseEncoding::WinAnsiEncoding => "WinAnsiEncoding",
        }
    }

    pub fn table(&self) -> &'static EncodingTable {
        match self {
            BaseEncoding::StandardEncoding => &*STANDARD,
            BaseEncoding::MacRomanEncoding => &*MAC_ROMAN,
            BaseEncoding::WinAnsiEncoding => &*WIN_ANSI,
        }
    }
}

impl fmt::Display for BaseEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pdf_name())
    }
}

impl FromStr for BaseEncoding {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "StandardEncoding" => Ok(BaseEncoding::StandardEncoding),
            "MacRomanEncoding" => Ok(BaseEncoding::MacRomanEncoding),
            "WinAnsiEncoding" => Ok(BaseEncoding::WinAnsiEncoding),
            other => Err(FontError::InvalidEncoding(format!(
                "unknown base encoding /{other}"
            ))),
        }
    }
}

/// The font programs that carry their own encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinEncoding {
    Symbol,
    ZapfDingbats,
}

impl BuiltinEncoding {
    pub fn table(&self) -> &'static EncodingTable {
        match self {
            BuiltinEncoding::Symbol => &*SYMBOL,
            BuiltinEncoding::ZapfDingbats => &*ZAPF_DINGBATS,
        }
    }
}

/// A fixed 256-slot code -> glyph name table with its reverse index.
pub struct EncodingTable {
    codes: [Option<&'static str>; 256],
    reverse: HashMap<&'static str, u8>,
}

impl EncodingTable {
    fn from_parts(parts: &[&'static [(u8, &'static str)]]) -> Self {
        let mut codes = [None; 256];
        for part in parts {
            for &(code, glyph) in part.iter() {
                codes[code as usize] = Some(glyph);
            }
        }

        // Lowest code wins when a glyph appears twice (WinAnsi space/nbsp).
        let mut reverse = HashMap::new();
        for (code, glyph) in codes.iter().enumerate() {
            if let Some(glyph) = glyph {
                reverse.entry(*glyph).or_insert(code as u8);
            }
        }

        EncodingTable { codes, reverse }
    }

    pub fn glyph(&self, code: u8) -> Option<&'static str> {
        self.codes[code as usize]
    }

    pub fn code(&self, glyph: &str) -> Option<u8> {
        self.reverse.get(glyph).copied()
    }

    /// Number of codes that map to a glyph.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mapped `(code, glyph)` pairs in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(code, glyph)| glyph.map(|g| (code as u8, g)))
    }
}

impl fmt::Debug for EncodingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingTable")
            .field("mapped", &self.len())
            .finish()
    }
}

lazy_static! {
    static ref STANDARD: EncodingTable = EncodingTable::from_parts(tables::STANDARD);
    static ref MAC_ROMAN: EncodingTable = EncodingTable::from_parts(tables::MAC_ROMAN);
    static ref WIN_ANSI: EncodingTable = EncodingTable::from_parts(tables::WIN_ANSI);
    static ref SYMBOL: EncodingTable = EncodingTable::from_parts(&[tables::SYMBOL]);
    static ref ZAPF_DINGBATS: EncodingTable = EncodingTable::from_parts(&[tables::ZAPF_DINGBATS]);
}
