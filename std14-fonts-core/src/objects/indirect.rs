use crate::objects::{Object, ObjectId};

/// An object destined for the document body as `N G obj ... endobj`.
///
/// Values built by this crate carry no id; the document layer assigns one
/// when it places the object in the cross-reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    id: Option<ObjectId>,
    object: Object,
}

impl IndirectObject {
    pub fn new(object: impl Into<Object>) -> Self {
        Self {
            id: None,
            object: object.into(),
        }
    }

    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn into_object(self) -> Object {
        self.object
    }

    /// A reference to this object, if an id has been assigned.
    pub fn reference(&self) -> Option<Object> {
        self.id.map(Object::Reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_by_default() {
        let obj = IndirectObject::new(Object::name("Font"));
        assert_eq!(obj.id(), None);
        assert_eq!(obj.reference(), None);
        assert_eq!(obj.object().as_name(), Some("Font"));
    }

    #[test]
    fn test_with_id() {
        let obj = IndirectObject::new(Object::Integer(7)).with_id(ObjectId::new(5, 0));
        assert_eq!(obj.id(), Some(ObjectId::new(5, 0)));
        assert_eq!(obj.reference(), Some(Object::Reference(ObjectId::new(5, 0))));
        assert_eq!(obj.into_object(), Object::Integer(7));
    }
}
