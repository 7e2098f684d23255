//! Tests for replacing a font's encoder and the resulting font dictionaries

use pretty_assertions::assert_eq;
use std14_fonts::encoding::{
    BaseEncoding, BuiltinEncoder, BuiltinEncoding, DifferencesEncoder, EncodingRepresentation,
    SimpleEncoder, TextEncoder,
};
use std14_fonts::writer::{to_pdf_bytes, ObjectWriter};
use std14_fonts::{Object, ObjectId, StandardFont};

fn custom_encoder() -> DifferencesEncoder {
    DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
        .with_run(0x80, &["Lslash", "lslash", "Sacute"])
        .unwrap()
        .with_difference(0xA4, "Euro")
        .unwrap()
}

#[test]
fn test_swap_and_reflect() {
    let mut font = StandardFont::helvetica();
    let encoder = custom_encoder();
    let expected = encoder.serialize();

    font.set_encoder(encoder);

    assert_eq!(font.encoder().serialize(), expected);
    assert_eq!(
        font.to_dictionary().get("Encoding"),
        Some(&Object::from(expected))
    );
}

#[test]
fn test_swap_persists_on_the_held_instance() {
    let mut font = StandardFont::courier();
    font.set_encoder(SimpleEncoder::standard());
    font.set_encoder(SimpleEncoder::mac_roman());

    assert_eq!(
        font.to_dictionary().get_name("Encoding"),
        Some("MacRomanEncoding")
    );
}

#[test]
fn test_with_encoder_builder() {
    let font = StandardFont::times_bold().with_encoder(custom_encoder());
    assert_eq!(font.code_width(0x81), Some(278.0));
    assert_eq!(font.code_width(b'A'), Some(722.0));
}

#[test]
fn test_boxed_encoder_can_be_shared_by_clone() {
    let boxed: Box<dyn TextEncoder> = Box::new(custom_encoder());

    let mut helvetica = StandardFont::helvetica();
    let mut times = StandardFont::times_roman();
    helvetica.set_boxed_encoder(boxed.clone());
    times.set_boxed_encoder(boxed);

    assert_eq!(helvetica.encoder().serialize(), times.encoder().serialize());
    assert_eq!(helvetica.code_width(0x80), Some(556.0));
    assert_eq!(times.code_width(0x80), Some(611.0));
}

#[test]
fn test_mismatched_encoder_degrades_to_missing() {
    let mut font = StandardFont::helvetica();
    font.set_encoder(BuiltinEncoder::new(BuiltinEncoding::ZapfDingbats));

    assert_eq!(font.code_width(0x21), None);
    assert_eq!(font.code_width(0x20), Some(278.0));

    let measurement = font.measure_bytes(b" !\"", 10.0);
    assert_eq!(measurement.glyph_count, 1);
    assert_eq!(measurement.missing, 2);

    let dict = font.to_dictionary();
    assert_eq!(dict.get_name("BaseFont"), Some("Helvetica"));
    assert!(dict.get_dict("Encoding").is_some());
}

#[test]
fn test_serialized_font_object_bytes() {
    let mut font = StandardFont::helvetica_bold_oblique();
    font.set_encoder(
        DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
            .with_run(0x80, &["Lslash", "lslash"])
            .unwrap(),
    );

    let bytes = to_pdf_bytes(font.to_pdf_object().object()).unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "<<\n/Type /Font\n/Subtype /Type1\n/BaseFont /Helvetica-BoldOblique\n/Encoding <<\n/Type /Encoding\n/BaseEncoding /WinAnsiEncoding\n/Differences [128 /Lslash /lslash]\n>>\n>>"
    );
}

#[test]
fn test_write_indirect_font_object() {
    let font = StandardFont::times_roman();
    let mut writer = ObjectWriter::new_with_writer(Vec::new());
    writer
        .write_indirect(ObjectId::new(5, 0), &font.to_pdf_object())
        .unwrap();

    let output = String::from_utf8(writer.into_inner()).unwrap();
    assert!(output.starts_with("5 0 obj\n"));
    assert!(output.contains("/BaseFont /Times-Roman"));
    assert!(output.contains("/Encoding /WinAnsiEncoding"));
    assert!(output.ends_with("endobj\n"));
}

#[test]
fn test_encoding_entry_reads_back() {
    let font = StandardFont::symbol().with_encoder(
        DifferencesEncoder::new(BuiltinEncoder::new(BuiltinEncoding::Symbol))
            .with_difference(0xA0, "space")
            .unwrap(),
    );
    let dict = font.to_dictionary();
    let parsed = EncodingRepresentation::from_object(dict.get("Encoding").unwrap()).unwrap();

    assert_eq!(parsed, font.encoder().serialize());
    assert_eq!(parsed.base(), None);
    assert_eq!(parsed.overrides(), vec![(0xA0, "space")]);
}
