//! Resolver configuration.

/// Configuration types and defaults
mod types;

pub use types::{
    DEFAULT_LOCALE,
    DEFAULT_PLACEHOLDER,
    DEFAULT_SEPARATOR,
    ResolverConfig,
    ResolverOptions,
};
