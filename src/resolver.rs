//! Per-locale string lookup.

/// Diagnostic side channel
mod diagnostics;
/// Placeholder substitution
mod template;

use std::cell::{
    Ref,
    RefCell,
};
use std::rc::Rc;

pub use diagnostics::{
    DiagnosticSink,
    TracingSink,
};
use indexmap::IndexMap;
use serde_json::Value;
pub use template::{
    Args,
    MISSING_ARGUMENT,
    substitute,
};

use crate::config::ResolverConfig;
use crate::dictionary::{
    Dictionary,
    SharedDictionary,
};
use crate::error::Result;

/// Last resolved string per key, in first-lookup order.
pub type Cache = IndexMap<String, String>;

/// Resolves keys of one locale's dictionary to display strings.
///
/// Lookups never fail: a key that does not hold text resolves to the
/// configured placeholder, and the failure is recorded in
/// [`last_error`](Self::last_error) until the next lookup.
///
/// Lookups take `&self`, so any number of [`BoundResolver`]s can be held
/// side by side with the resolver itself.
///
/// # Example
/// ```
/// use simple_gettext::{Args, Dictionary, Resolver, ResolverConfig};
///
/// let dictionary: Dictionary = [("common.greet", "Hello, {name}!")].into_iter().collect();
/// let resolver = Resolver::new(dictionary.into_shared(), ResolverConfig::default());
///
/// let greeting = resolver.get_with("common.greet", &Args::new().with("name", "world"));
/// assert_eq!(greeting, "Hello, world!");
/// assert_eq!(resolver.last_error(), None);
/// ```
#[derive(Debug)]
pub struct Resolver {
    /// Dictionary shared with the registry and sibling resolvers
    dictionary: SharedDictionary,
    /// Effective options, locale included
    config: ResolverConfig,
    /// Observation-only record of resolved strings
    cache: RefCell<Cache>,
    /// Failure of the most recent lookup, if any
    last_error: RefCell<Option<String>>,
    /// Receives non-silenced lookup failures
    sink: Rc<dyn DiagnosticSink>,
}

impl Resolver {
    #[must_use]
    pub fn new(dictionary: SharedDictionary, config: ResolverConfig) -> Self {
        Self {
            dictionary,
            config,
            cache: RefCell::new(Cache::new()),
            last_error: RefCell::new(None),
            sink: Rc::new(TracingSink),
        }
    }

    /// Builds a resolver over a dictionary given as a JSON object.
    ///
    /// # Errors
    /// - `value` is null or not an object
    pub fn from_value(value: &Value, config: ResolverConfig) -> Result<Self> {
        Ok(Self::new(Dictionary::from_value(value)?.into_shared(), config))
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Rc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Resolves `key` verbatim.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key, None, false)
    }

    /// Resolves `key` and substitutes its `{name}` placeholders from `args`.
    pub fn get_with(&self, key: &str, args: &Args) -> String {
        self.lookup(key, Some(args), false)
    }

    /// Resolves `key` verbatim; `silent` suppresses the diagnostic for this call.
    pub fn get_silent(&self, key: &str, silent: bool) -> String {
        self.lookup(key, None, silent)
    }

    /// Resolves `key`, substituting from `args` when given.
    ///
    /// A missing key, or one holding a structured value, resolves to the
    /// configured placeholder and sets [`last_error`](Self::last_error). The
    /// diagnostic sink is notified unless `silent` or the resolver's `silent`
    /// option is set. The result is recorded in the cache either way.
    pub fn lookup(&self, key: &str, args: Option<&Args>, silent: bool) -> String {
        self.last_error.replace(None);

        let resolved = {
            let dictionary = self.dictionary.borrow();
            dictionary.text(key).map(|template| {
                args.map_or_else(|| template.to_string(), |args| substitute(template, args))
            })
        };

        let resolved = resolved.unwrap_or_else(|| {
            self.report_invalid_key(key, silent);
            self.config.placeholder.clone()
        });

        self.cache.borrow_mut().insert(key.to_string(), resolved.clone());
        resolved
    }

    /// Records an invalid-key failure and forwards it unless silenced.
    fn report_invalid_key(&self, key: &str, silent: bool) {
        let message = format!("{}: {key} is invalid property key", self.config.locale);

        if !self.config.silent && !silent {
            self.sink.warn(&message);
        }
        self.last_error.replace(Some(message));
    }

    /// Returns a view that prefixes every key with `context` and the separator.
    ///
    /// An empty context adds nothing, not even the separator. The context is
    /// not checked; failures surface on lookup.
    pub fn bind(&self, context: impl Into<String>) -> BoundResolver<'_> {
        BoundResolver { resolver: self, context: context.into() }
    }

    /// Overwrite-unions `dictionary` into the shared dictionary.
    ///
    /// Every resolver sharing the dictionary sees the new entries.
    pub fn merge(&self, dictionary: Dictionary) -> &Self {
        tracing::debug!(
            locale = %self.config.locale,
            keys = dictionary.len(),
            "Merging dictionary"
        );
        self.dictionary.borrow_mut().merge(dictionary);
        self
    }

    /// Merges a dictionary given as a JSON object.
    ///
    /// # Errors
    /// - `value` is null or not an object; the dictionary is left unchanged
    pub fn merge_value(&self, value: &Value) -> Result<&Self> {
        let dictionary = Dictionary::from_value(value)?;
        Ok(self.merge(dictionary))
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Live view of the cache; release it before the next lookup.
    #[must_use]
    pub fn cache(&self) -> Ref<'_, Cache> {
        self.cache.borrow()
    }

    /// Message of the most recent lookup's failure, `None` after a success.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &SharedDictionary {
        &self.dictionary
    }
}

/// A [`Resolver`] whose keys are relative to a context prefix.
#[derive(Debug, Clone)]
pub struct BoundResolver<'a> {
    /// Resolver receiving the prefixed lookups
    resolver: &'a Resolver,
    /// Prefix joined to every suffix key
    context: String,
}

impl BoundResolver<'_> {
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The full key a suffix resolves to.
    #[must_use]
    pub fn key(&self, suffix: &str) -> String {
        if self.context.is_empty() {
            suffix.to_string()
        } else {
            format!("{}{}{suffix}", self.context, self.resolver.config.separator)
        }
    }

    pub fn get(&self, suffix: &str) -> String {
        self.resolver.get(&self.key(suffix))
    }

    pub fn get_with(&self, suffix: &str, args: &Args) -> String {
        self.resolver.get_with(&self.key(suffix), args)
    }

    pub fn get_silent(&self, suffix: &str, silent: bool) -> String {
        self.resolver.get_silent(&self.key(suffix), silent)
    }

    pub fn lookup(&self, suffix: &str, args: Option<&Args>, silent: bool) -> String {
        self.resolver.lookup(&self.key(suffix), args, silent)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.resolver.last_error()
    }
}
