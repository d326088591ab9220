//! simple-gettext
//!
//! Minimal gettext-style string lookup: per-locale flat dictionaries,
//! `{name}` placeholder substitution and a placeholder fallback for missing keys.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod registry;
pub mod resolver;

#[cfg(test)]
mod test_utils;

pub use config::{
    ResolverConfig,
    ResolverOptions,
};
pub use dictionary::{
    Dictionary,
    DictionarySet,
    Entry,
    LocaleEntry,
    SharedDictionary,
};
pub use error::{
    Error,
    Result,
};
pub use registry::Registry;
pub use resolver::{
    Args,
    BoundResolver,
    Cache,
    DiagnosticSink,
    Resolver,
    TracingSink,
};
