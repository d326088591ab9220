//! `{name}` placeholder substitution.

use std::fmt::Display;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{
    Captures,
    Regex,
};
use serde_json::Value;

/// A brace-delimited identifier with optional inner whitespace: `{name}`, `{ name }`.
///
/// Identifiers are ASCII word characters only; `{名前}` is left as text.
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\s*((?-u:\w)+)\s*\}").expect("placeholder pattern is valid"));

/// Rendered in place of a placeholder whose name has no argument.
pub const MISSING_ARGUMENT: &str = "undefined";

/// Named substitution arguments, already converted to their string form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Argument values by placeholder name
    values: IndexMap<String, String>,
}

impl Args {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument, rendering `value` with its `Display` form.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds arguments from a JSON object.
    ///
    /// Returns `None` for anything but an object; callers treat that as "no arguments".
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };

        Some(Self {
            values: map
                .iter()
                .map(|(name, value)| (name.clone(), coerce_to_string(value)))
                .collect(),
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// String form a JSON value takes when concatenated into text.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Replaces every `{name}` in `template` with the matching argument.
///
/// Single pass: substituted text is never rescanned. Names without an
/// argument render as [`MISSING_ARGUMENT`]; braces that do not form a
/// placeholder are kept verbatim.
#[must_use]
pub fn substitute(template: &str, args: &Args) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures<'_>| {
            caps.get(1)
                .and_then(|name| args.get(name.as_str()))
                .unwrap_or(MISSING_ARGUMENT)
                .to_string()
        })
        .into_owned()
}
