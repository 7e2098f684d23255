use crate::objects::Dictionary;
use std::fmt;

/// Object number and generation of an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    number: u32,
    generation: u16,
}

impl ObjectId {
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn generation(&self) -> u16 {
        self.generation
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

/// The object kinds that appear in font and encoding dictionaries.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Reference(ObjectId),
}

impl Object {
    /// Build a name object (`/Font`) from anything string-like.
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<Vec<Object>> for Object {
    fn from(v: Vec<Object>) -> Self {
        Object::Array(v)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_display() {
        let id = ObjectId::new(12, 0);
        assert_eq!(id.to_string(), "12 0 R");
        assert_eq!(id.number(), 12);
        assert_eq!(id.generation(), 0);
    }

    #[test]
    fn test_name_constructor() {
        let obj = Object::name("Type1");
        assert_eq!(obj.as_name(), Some("Type1"));
        assert!(obj.as_array().is_none());
        assert!(obj.as_dict().is_none());
    }

    #[test]
    fn test_differences_array_accessor() {
        let arr = Object::from(vec![Object::from(32i64), Object::name("space")]);
        assert_eq!(arr.as_array().map(|a| a.len()), Some(2));
        assert_eq!(arr.as_name(), None);
    }

    #[test]
    fn test_reference_from_id() {
        let obj: Object = ObjectId::new(4, 1).into();
        assert_eq!(obj, Object::Reference(ObjectId::new(4, 1)));
    }
}
