use crate::objects::Object;
use indexmap::IndexMap;

/// PDF dictionary. Entries keep insertion order so serialized output is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    entries: IndexMap<String, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or replace an entry. Replacing keeps the key's original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.entries.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter()
    }

    pub fn get_dict(&self, key: &str) -> Option<&Dictionary> {
        self.get(key).and_then(Object::as_dict)
    }

    /// Shorthand for reading a name-valued entry such as `/Subtype`.
    pub fn get_name(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Object::as_name)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);

        let dict = Dictionary::with_capacity(4);
        assert!(dict.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Font"));
        dict.set("FirstChar", Object::Integer(32));

        assert_eq!(dict.get_name("Type"), Some("Font"));
        assert_eq!(dict.get("FirstChar"), Some(&Object::Integer(32)));
        assert_eq!(dict.get("Missing"), None);
        assert_eq!(dict.get_name("FirstChar"), None);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Font"));
        dict.set("Subtype", Object::name("Type1"));
        dict.set("BaseFont", Object::name("Courier"));
        dict.set("Encoding", Object::name("WinAnsiEncoding"));

        let keys: Vec<_> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Type", "Subtype", "BaseFont", "Encoding"]);

        // Replacing a value keeps the slot
        dict.set("BaseFont", Object::name("Courier-Bold"));
        let keys: Vec<_> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Type", "Subtype", "BaseFont", "Encoding"]);
        assert_eq!(dict.get_name("BaseFont"), Some("Courier-Bold"));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut dict = Dictionary::new();
        dict.set("A", Object::Integer(1));
        dict.set("B", Object::Integer(2));
        dict.set("C", Object::Integer(3));

        assert_eq!(dict.remove("B"), Some(Object::Integer(2)));
        assert_eq!(dict.remove("B"), None);
        let keys: Vec<_> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["A", "C"]);
    }

    #[test]
    fn test_get_mut() {
        let mut dict = Dictionary::new();
        dict.set("Widths", vec![Object::Integer(278)]);

        if let Some(Object::Array(widths)) = dict.get_mut("Widths") {
            widths.push(Object::Integer(333));
        }

        assert_eq!(dict.get("Widths").and_then(|w| w.as_array()).map(Vec::len), Some(2));
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut a = Dictionary::new();
        a.set("Type", Object::name("Encoding"));
        a.set("BaseEncoding", Object::name("WinAnsiEncoding"));

        let mut b = Dictionary::new();
        b.set("BaseEncoding", Object::name("WinAnsiEncoding"));
        b.set("Type", Object::name("Encoding"));

        assert_eq!(a, b);
    }

    #[test]
    fn test_get_dict_and_from_iterator() {
        let encoding: Dictionary = vec![(
            "Type".to_string(),
            Object::name("Encoding"),
        )]
        .into_iter()
        .collect();

        let mut font = Dictionary::new();
        font.set("Encoding", encoding);
        font.set("BaseFont", Object::name("Symbol"));

        assert_eq!(
            font.get_dict("Encoding").and_then(|e| e.get_name("Type")),
            Some("Encoding")
        );
        assert!(font.get_dict("BaseFont").is_none());
        assert!(font.get_dict("Missing").is_none());
        assert!(font.contains_key("Encoding"));
        assert_eq!(font.entries().count(), 2);
    }
}
