//! Property-based tests for metrics lookups, encoders and font dictionaries

use proptest::prelude::*;
use std14_fonts::encoding::{
    BaseEncoding, DifferencesEncoder, EncodingRepresentation, SimpleEncoder, TextEncoder,
};
use std14_fonts::{StandardFont, StandardFontName};
use std::collections::BTreeMap;

fn font_name_strategy() -> impl Strategy<Value = StandardFontName> {
    prop::sample::select(StandardFontName::all().collect::<Vec<_>>())
}

fn base_encoding_strategy() -> impl Strategy<Value = BaseEncoding> {
    prop_oneof![
        Just(BaseEncoding::StandardEncoding),
        Just(BaseEncoding::MacRomanEncoding),
        Just(BaseEncoding::WinAnsiEncoding),
    ]
}

prop_compose! {
    fn overrides_strategy()(
        overrides in prop::collection::btree_map(any::<u8>(), "[A-Za-z][A-Za-z0-9.]{0,12}", 0..24)
    ) -> BTreeMap<u8, String> {
        overrides
    }
}

proptest! {
    #[test]
    fn test_unknown_glyph_names_are_not_found(
        font in font_name_strategy(),
        glyph in "zz_[a-z0-9_]{1,20}"
    ) {
        let font = StandardFont::new(font);
        prop_assert!(font.glyph_metrics(&glyph).is_none());
    }

    #[test]
    fn test_found_glyphs_echo_their_name(font in font_name_strategy(), pick in any::<prop::sample::Index>()) {
        let font = StandardFont::new(font);
        let names: Vec<&str> = font.metrics().glyph_names().collect();
        let name = names[pick.index(names.len())];
        let metrics = font.glyph_metrics(name);
        prop_assert!(metrics.is_some());
        prop_assert_eq!(metrics.map(|m| m.glyph_name), Some(name));
    }

    #[test]
    fn test_to_pdf_object_idempotent(
        font in font_name_strategy(),
        base in base_encoding_strategy(),
        overrides in overrides_strategy()
    ) {
        let mut encoder = DifferencesEncoder::over(base);
        for (code, glyph) in &overrides {
            encoder.set_difference(*code, glyph.as_str()).unwrap();
        }
        let font = StandardFont::new(font).with_encoder(encoder);

        prop_assert_eq!(font.to_pdf_object(), font.to_pdf_object());
        let dict = font.to_dictionary();
        prop_assert_eq!(dict.get_name("Subtype"), Some("Type1"));
    }

    #[test]
    fn test_differences_survive_serialization(
        base in base_encoding_strategy(),
        overrides in overrides_strategy()
    ) {
        let mut encoder = DifferencesEncoder::over(base);
        for (code, glyph) in &overrides {
            encoder.set_difference(*code, glyph.as_str()).unwrap();
        }

        let repr = encoder.serialize();
        prop_assert_eq!(repr.base(), Some(base));

        let listed: BTreeMap<u8, String> = repr
            .overrides()
            .into_iter()
            .map(|(code, glyph)| (code, glyph.to_string()))
            .collect();
        prop_assert_eq!(&listed, &overrides);

        let parsed = EncodingRepresentation::from_object(&repr.to_object()).unwrap();
        prop_assert_eq!(parsed, repr);
    }

    #[test]
    fn test_runs_never_touch(overrides in overrides_strategy()) {
        let pairs: Vec<(u8, &str)> = overrides.iter().map(|(c, g)| (*c, g.as_str())).collect();
        if let EncodingRepresentation::Differences { runs, .. } =
            EncodingRepresentation::from_overrides(None, pairs)
        {
            for pair in runs.windows(2) {
                let end = pair[0].start as usize + pair[0].glyphs.len();
                prop_assert!(end < pair[1].start as usize);
            }
        }
    }

    #[test]
    fn test_swap_and_reflect(font in font_name_strategy(), base in base_encoding_strategy()) {
        let mut font = StandardFont::new(font);
        let encoder = SimpleEncoder::new(base);
        font.set_encoder(encoder);
        prop_assert_eq!(font.encoder().serialize(), encoder.serialize());
        let dict = font.to_dictionary();
        prop_assert_eq!(dict.get_name("Encoding"), Some(base.pdf_name()));
    }

    #[test]
    fn test_measure_bytes_accounts_for_every_byte(
        font in font_name_strategy(),
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        size in 1.0f64..72.0
    ) {
        let font = StandardFont::new(font);
        let measurement = font.measure_bytes(&bytes, size);
        prop_assert_eq!(measurement.glyph_count + measurement.missing, bytes.len());
        prop_assert!(measurement.width >= 0.0);
    }
}
