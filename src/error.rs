//! Error types shared by the registry and resolvers.

use thiserror::Error;

/// Hard failures raised by construction, locale selection and merging.
///
/// Missing keys are not represented here: they are recovered inside
/// [`Resolver::lookup`](crate::Resolver::lookup) and only reported through
/// `last_error` and the diagnostic sink.
#[derive(Error, Debug)]
pub enum Error {
    /// A dictionary or dictionary set had the wrong shape.
    #[error("{0}")]
    InvalidArgument(String),
    /// The requested locale has no dictionary in the registry.
    #[error("{0} is unknown dictionary")]
    UnknownLocale(String),
    /// Resolver options could not be parsed.
    #[error("Failed to parse resolver options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] for a bad dictionary.
    pub(crate) fn invalid_dictionary() -> Self {
        Self::InvalidArgument("the used dictionary is invalid".to_string())
    }

    /// Builds an [`Error::InvalidArgument`] for a bad dictionary set.
    pub(crate) fn invalid_dictionary_set() -> Self {
        Self::InvalidArgument("the used dictionaries set is invalid".to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
