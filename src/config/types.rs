use serde::{
    Deserialize,
    Serialize,
};

use crate::error::Result;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_SEPARATOR: &str = ".";
pub const DEFAULT_PLACEHOLDER: &str = "!UNDEFINED TEXT!";

/// Effective configuration of a [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    pub locale: String,

    /// Joins a [`bind`](crate::Resolver::bind) context to a suffix key.
    /// Lookups themselves never split keys on it.
    pub separator: String,

    /// Returned in place of any key that does not resolve to text.
    pub placeholder: String,

    /// Suppresses diagnostics for every lookup of the resolver.
    pub silent: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            silent: false,
        }
    }
}

impl ResolverConfig {
    /// Builds the configuration handed out by locale selection.
    ///
    /// Defaults are overlaid with `options`, then `locale` is forced, so the
    /// selected locale always wins over `options.locale`.
    #[must_use]
    pub fn resolve(options: &ResolverOptions, locale: impl Into<String>) -> Self {
        let defaults = Self::default();
        Self {
            locale: locale.into(),
            separator: options.separator.clone().unwrap_or(defaults.separator),
            placeholder: options.placeholder.clone().unwrap_or(defaults.placeholder),
            silent: options.silent.unwrap_or(defaults.silent),
        }
    }
}

/// Partial configuration supplied when selecting a locale.
///
/// `locale` is accepted for compatibility with option objects that carry one,
/// but locale selection always overrides it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverOptions {
    pub locale: Option<String>,
    pub separator: Option<String>,
    pub placeholder: Option<String>,
    pub silent: Option<bool>,
}

impl ResolverOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub const fn silent(mut self, silent: bool) -> Self {
        self.silent = Some(silent);
        self
    }

    /// Parses options from a JSON object such as `{"separator": ":"}`.
    ///
    /// # Errors
    /// - JSON parse error
    pub fn from_json(json: &str) -> Result<Self> {
        let options = serde_json::from_str(json)?;
        Ok(options)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::Error;

    #[rstest]
    fn default_config() {
        let config = ResolverConfig::default();

        assert_that!(config.locale, eq("en"));
        assert_that!(config.separator, eq("."));
        assert_that!(config.placeholder, eq("!UNDEFINED TEXT!"));
        assert_that!(config.silent, eq(false));
    }

    #[rstest]
    fn resolve_without_options_uses_defaults_and_locale() {
        let config = ResolverConfig::resolve(&ResolverOptions::default(), "ja");

        assert_that!(config.locale, eq("ja"));
        assert_that!(config.separator, eq("."));
        assert_that!(config.placeholder, eq("!UNDEFINED TEXT!"));
    }

    #[rstest]
    fn resolve_overlays_options() {
        let options = ResolverOptions::new().separator(":").placeholder("???").silent(true);

        let config = ResolverConfig::resolve(&options, "de");

        assert_that!(config.separator, eq(":"));
        assert_that!(config.placeholder, eq("???"));
        assert_that!(config.silent, eq(true));
    }

    #[rstest]
    fn resolve_ignores_locale_from_options() {
        let options = ResolverOptions { locale: Some("fr".to_string()), ..Default::default() };

        let config = ResolverConfig::resolve(&options, "en");

        assert_that!(config.locale, eq("en"));
    }

    #[rstest]
    fn options_from_partial_json() {
        let options =
            ResolverOptions::from_json(r#"{"placeholder": "-", "silent": true}"#).unwrap();

        assert_eq!(options.placeholder.as_deref(), Some("-"));
        assert_eq!(options.silent, Some(true));
        assert_eq!(options.separator, None);
    }

    #[rstest]
    fn options_from_invalid_json() {
        let result = ResolverOptions::from_json("not json");

        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }

    #[rstest]
    fn deserialize_partial_config() {
        let config: ResolverConfig = serde_json::from_str(r#"{"separator": "/"}"#).unwrap();

        assert_that!(config.separator, eq("/"));
        assert_that!(config.locale, eq("en"));
        assert_that!(config.placeholder, eq("!UNDEFINED TEXT!"));
    }
}
