use crate::error::Result;
use crate::objects::{IndirectObject, Object, ObjectId};
use std::io::Write;

/// Serializes object values into PDF syntax.
pub struct ObjectWriter<W: Write> {
    writer: W,
    current_position: u64,
}

impl<W: Write> ObjectWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            current_position: 0,
        }
    }

    /// Bytes written so far; the document layer records this for the xref table.
    pub fn position(&self) -> u64 {
        self.current_position
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write `N G obj ... endobj` for an indirect object under `id`.
    ///
    /// An id already carried by `object` takes precedence over `id`.
    pub fn write_indirect(&mut self, id: ObjectId, object: &IndirectObject) -> Result<()> {
        self.write_object(object.id().unwrap_or(id), object.object())
    }

    pub fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<()> {
        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    pub fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Name(n) => self.write_name(n)?,
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n")?;
                    self.write_name(key)?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Reference(id) => {
                let ref_str = format!("{} {} R", id.number(), id.generation());
                self.write_bytes(ref_str.as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_name(&mut self, name: &str) -> Result<()> {
        self.write_bytes(b"/")?;
        self.write_bytes(&escape_name(name))
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

/// Serialize a single value into a fresh buffer.
pub fn to_pdf_bytes(object: &Object) -> Result<Vec<u8>> {
    let mut writer = ObjectWriter::new_with_writer(Vec::new());
    writer.write_object_value(object)?;
    Ok(writer.into_inner())
}

// Regular characters pass through; delimiters, whitespace and bytes outside
// the printable range become #xx.
fn escape_name(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len());
    for &b in name.as_bytes() {
        let delimiter = matches!(
            b,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
        );
        if (b'!'..=b'~').contains(&b) && !delimiter {
            out.push(b);
        } else {
            out.extend_from_slice(format!("#{b:02X}").as_bytes());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Dictionary;

    fn render(object: &Object) -> String {
        String::from_utf8(to_pdf_bytes(object).unwrap()).unwrap()
    }

    #[test]
    fn test_write_integers_and_references() {
        assert_eq!(render(&Object::Integer(-12)), "-12");
        assert_eq!(render(&Object::Integer(200)), "200");
        assert_eq!(render(&Object::Reference(ObjectId::new(3, 0))), "3 0 R");
    }

    #[test]
    fn test_write_name_escapes_delimiters() {
        assert_eq!(render(&Object::name("Helvetica-BoldOblique")), "/Helvetica-BoldOblique");
        assert_eq!(render(&Object::name("A B")), "/A#20B");
        assert_eq!(render(&Object::name("a#1")), "/a#231");
        assert_eq!(render(&Object::name("x/y")), "/x#2Fy");
    }

    #[test]
    fn test_write_array_and_dictionary() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Encoding"));
        dict.set(
            "Differences",
            vec![Object::Integer(32), Object::name("space"), Object::name("exclam")],
        );

        assert_eq!(
            render(&Object::Dictionary(dict)),
            "<<\n/Type /Encoding\n/Differences [32 /space /exclam]\n>>"
        );
    }

    #[test]
    fn test_write_object_tracks_position() {
        let mut writer = ObjectWriter::new_with_writer(Vec::new());
        writer
            .write_object(ObjectId::new(1, 0), &Object::name("Font"))
            .unwrap();
        let expected = "1 0 obj\n/Font\nendobj\n";
        assert_eq!(writer.position(), expected.len() as u64);
        assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), expected);
    }

    #[test]
    fn test_write_indirect_prefers_assigned_id() {
        let mut writer = ObjectWriter::new_with_writer(Vec::new());
        let obj = IndirectObject::new(Object::Integer(1)).with_id(ObjectId::new(9, 0));
        writer.write_indirect(ObjectId::new(2, 0), &obj).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert!(out.starts_with("9 0 obj\n"));

        let mut writer = ObjectWriter::new_with_writer(Vec::new());
        writer
            .write_indirect(ObjectId::new(2, 0), &IndirectObject::new(Object::Integer(1)))
            .unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert!(out.starts_with("2 0 obj\n"));
    }

    #[test]
    fn test_write_error_propagates() {
        struct Failing;
        impl Write for Failing {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut writer = ObjectWriter::new_with_writer(Failing);
        let result = writer.write_object_value(&Object::Integer(0));
        assert!(matches!(result, Err(crate::error::FontError::Io(_))));
    }
}
