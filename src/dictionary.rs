//! Flat per-locale dictionaries and the set that groups them by locale.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{
    Error,
    Result,
};

/// One dictionary value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A template string, possibly containing `{name}` placeholders.
    Text(String),
    /// A null, array or object value taken over from JSON input.
    ///
    /// Dictionaries are flat, so lookups treat these as invalid keys.
    Structured(Value),
}

impl Entry {
    /// Converts a JSON value; scalars other than strings keep their JSON rendering.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Number(_) | Value::Bool(_) => Self::Text(value.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Structured(value),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Flat mapping from key (e.g. `"common.greet"`) to [`Entry`].
///
/// Keys keep their insertion order; dots in keys carry no structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Entries in insertion order
    entries: IndexMap<String, Entry>,
}

/// Handle through which a registry and its resolvers share one dictionary.
///
/// Resolvers selected for the same locale all hold a clone of the same handle,
/// so a merge through any of them is seen by the others.
pub type SharedDictionary = Rc<RefCell<Dictionary>>;

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from a JSON object.
    ///
    /// # Errors
    /// - `value` is null or not an object
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::invalid_dictionary());
        };

        Ok(map.iter().map(|(key, value)| (key.clone(), Entry::from_value(value.clone()))).collect())
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<Entry>) {
        self.entries.insert(key.into(), entry.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Returns the template for `key` when it holds text.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Entry::as_text)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Overwrite-union: keys from `other` replace or extend ours, the rest stay.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wraps the dictionary in a [`SharedDictionary`] handle.
    #[must_use]
    pub fn into_shared(self) -> SharedDictionary {
        Rc::new(RefCell::new(self))
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<Entry>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// What a locale maps to inside a [`DictionarySet`].
#[derive(Debug, Clone)]
pub enum LocaleEntry {
    Dictionary(SharedDictionary),
    /// A JSON value that is not an object, kept as given.
    ///
    /// Selecting the locale fails; the rest of the set stays usable.
    Invalid(Value),
}

impl LocaleEntry {
    /// Returns the dictionary handle.
    ///
    /// # Errors
    /// - the locale was given a null or non-object value
    pub fn dictionary(&self) -> Result<&SharedDictionary> {
        match self {
            Self::Dictionary(dictionary) => Ok(dictionary),
            Self::Invalid(_) => Err(Error::invalid_dictionary()),
        }
    }
}

/// Mapping from locale identifier to its shared dictionary.
#[derive(Debug, Clone, Default)]
pub struct DictionarySet {
    /// Entries keyed by locale, in insertion order
    locales: IndexMap<String, LocaleEntry>,
}

impl DictionarySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `{ "<locale>": { "<key>": "<template>" } }`.
    ///
    /// A locale whose value is not an object is recorded as
    /// [`LocaleEntry::Invalid`] instead of failing the whole set.
    ///
    /// # Errors
    /// - `value` is null or not an object
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::invalid_dictionary_set());
        };

        let mut set = Self::new();
        for (locale, dictionary) in map {
            match Dictionary::from_value(dictionary) {
                Ok(dictionary) => set.insert(locale.clone(), dictionary),
                Err(_) => {
                    tracing::debug!(locale = %locale, "Locale entry is not a dictionary");
                    set.locales.insert(locale.clone(), LocaleEntry::Invalid(dictionary.clone()));
                }
            }
        }
        Ok(set)
    }

    pub fn insert(&mut self, locale: impl Into<String>, dictionary: Dictionary) {
        self.insert_shared(locale, dictionary.into_shared());
    }

    /// Registers an existing handle, keeping any outside aliases of it live.
    pub fn insert_shared(&mut self, locale: impl Into<String>, dictionary: SharedDictionary) {
        self.locales.insert(locale.into(), LocaleEntry::Dictionary(dictionary));
    }

    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&LocaleEntry> {
        self.locales.get(locale)
    }

    #[must_use]
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Dictionary)> for DictionarySet {
    fn from_iter<I: IntoIterator<Item = (K, Dictionary)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (locale, dictionary) in iter {
            set.insert(locale, dictionary);
        }
        set
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!("Hello"), Entry::Text("Hello".to_string()))]
    #[case(json!(42), Entry::Text("42".to_string()))]
    #[case(json!(true), Entry::Text("true".to_string()))]
    #[case(json!(null), Entry::Structured(json!(null)))]
    #[case(json!({"nested": "x"}), Entry::Structured(json!({"nested": "x"})))]
    #[case(json!(["a"]), Entry::Structured(json!(["a"])))]
    fn entry_from_value(#[case] value: Value, #[case] expected: Entry) {
        assert_eq!(Entry::from_value(value), expected);
    }

    #[rstest]
    fn dictionary_from_object() {
        let dictionary =
            Dictionary::from_value(&json!({"common.greet": "Hello", "nested": {}})).unwrap();

        assert_that!(dictionary.len(), eq(2));
        assert_eq!(dictionary.text("common.greet"), Some("Hello"));
        assert_eq!(dictionary.text("nested"), None);
        assert_that!(dictionary.contains_key("nested"), eq(true));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!("dictionary"))]
    #[case(json!(["a", "b"]))]
    fn dictionary_from_non_object_fails(#[case] value: Value) {
        let result = Dictionary::from_value(&value);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[rstest]
    fn merge_overwrites_and_extends() {
        let mut dictionary: Dictionary = [("a", "1"), ("b", "2")].into_iter().collect();

        dictionary.merge([("b", "two"), ("c", "3")].into_iter().collect());

        assert_eq!(dictionary.text("a"), Some("1"));
        assert_eq!(dictionary.text("b"), Some("two"));
        assert_eq!(dictionary.text("c"), Some("3"));
        assert_eq!(dictionary.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn dictionary_set_from_object() {
        let set = DictionarySet::from_value(&json!({
            "en": {"common.greet": "Hello"},
            "ja": {"common.greet": "こんにちは"}
        }))
        .unwrap();

        assert_that!(set.len(), eq(2));
        assert_eq!(set.locales().collect::<Vec<_>>(), vec!["en", "ja"]);
        let ja = set.get("ja").unwrap().dictionary().unwrap().borrow();
        assert_eq!(ja.text("common.greet"), Some("こんにちは"));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(1))]
    #[case(json!("en"))]
    fn dictionary_set_from_non_object_fails(#[case] value: Value) {
        let result = DictionarySet::from_value(&value);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!("dictionary"))]
    #[case(json!(["a"]))]
    fn dictionary_set_keeps_invalid_locale_entry(#[case] invalid: Value) {
        let value = json!({"en": {"common.greet": "Hello"}, "sn": invalid.clone()});

        let set = DictionarySet::from_value(&value).unwrap();

        assert_eq!(set.locales().collect::<Vec<_>>(), vec!["en", "sn"]);
        assert!(set.get("en").unwrap().dictionary().is_ok());
        let sn = set.get("sn").unwrap();
        assert!(matches!(sn, LocaleEntry::Invalid(value) if *value == invalid));
        assert!(matches!(sn.dictionary(), Err(Error::InvalidArgument(_))));
    }

    #[rstest]
    fn insert_shared_keeps_alias() {
        let shared = Dictionary::new().into_shared();
        let mut set = DictionarySet::new();
        set.insert_shared("en", Rc::clone(&shared));

        shared.borrow_mut().insert("k", "v");

        let en = set.get("en").unwrap().dictionary().unwrap().borrow();
        assert_eq!(en.text("k"), Some("v"));
    }
}
