//! Locale registry and resolver factory.

use std::rc::Rc;

use serde_json::Value;

use crate::config::{
    ResolverConfig,
    ResolverOptions,
};
use crate::dictionary::DictionarySet;
use crate::error::{
    Error,
    Result,
};
use crate::resolver::{
    DiagnosticSink,
    Resolver,
    TracingSink,
};

/// Holds every locale's dictionary and hands out [`Resolver`]s.
///
/// Resolvers share their locale's dictionary with the registry, so merges
/// made through one resolver are visible to all resolvers of that locale.
///
/// # Example
/// ```
/// use serde_json::json;
/// use simple_gettext::Registry;
///
/// let registry = Registry::from_value(&json!({"en": {"common.greet": "Hello"}}))?;
/// let resolver = registry.select_locale("en")?;
///
/// assert_eq!(resolver.get("common.greet"), "Hello");
/// # Ok::<(), simple_gettext::Error>(())
/// ```
#[derive(Debug)]
pub struct Registry {
    /// Dictionaries by locale, aliased by the resolvers
    dictionaries: DictionarySet,
    /// Sink given to every resolver this registry creates
    sink: Rc<dyn DiagnosticSink>,
}

impl Registry {
    #[must_use]
    pub fn new(dictionaries: DictionarySet) -> Self {
        tracing::debug!(locales = dictionaries.len(), "Creating registry");
        Self { dictionaries, sink: Rc::new(TracingSink) }
    }

    /// Builds a registry from `{ "<locale>": { "<key>": "<template>" } }`.
    ///
    /// Locales whose value is not an object are kept and only fail when selected.
    ///
    /// # Errors
    /// - `value` is null or not an object
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::new(DictionarySet::from_value(value)?))
    }

    /// Sets the diagnostic sink handed to resolvers created afterwards.
    #[must_use]
    pub fn with_sink(mut self, sink: Rc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Creates a resolver for `locale` with default options.
    ///
    /// # Errors
    /// - `locale` is not in the registry
    /// - `locale` maps to something other than a dictionary
    pub fn select_locale(&self, locale: &str) -> Result<Resolver> {
        self.select_locale_with(locale, &ResolverOptions::default())
    }

    /// Creates a resolver for `locale`, overlaying `options` on the defaults.
    ///
    /// `options.locale` is ignored.
    ///
    /// # Errors
    /// - `locale` is not in the registry
    /// - `locale` maps to something other than a dictionary
    pub fn select_locale_with(&self, locale: &str, options: &ResolverOptions) -> Result<Resolver> {
        let Some(entry) = self.dictionaries.get(locale) else {
            return Err(Error::UnknownLocale(locale.to_string()));
        };
        let dictionary = entry.dictionary()?;

        tracing::debug!(locale, ?options, "Selecting locale");
        let config = ResolverConfig::resolve(options, locale);
        Ok(Resolver::new(Rc::clone(dictionary), config).with_sink(Rc::clone(&self.sink)))
    }

    #[must_use]
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.dictionaries.contains_locale(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.locales()
    }

    #[must_use]
    pub const fn dictionaries(&self) -> &DictionarySet {
        &self.dictionaries
    }
}
