//! Language-keyed set of dictionaries.
use std::sync::Arc;

use hashbrown::HashMap;

use crate::dictionary::Dictionary;

/// Mapping from a language key to its dictionary.
///
/// A registry is filled during setup and then shared read-only by the segmenters.
#[derive(Default, Clone)]
pub struct Registry {
    dicts: HashMap<String, Arc<Dictionary>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `dict` for `lang`, returning the dictionary it replaces.
    pub fn insert<S>(&mut self, lang: S, dict: Arc<Dictionary>) -> Option<Arc<Dictionary>>
    where
        S: Into<String>,
    {
        self.dicts.insert(lang.into(), dict)
    }

    /// Gets the dictionary of `lang`.
    #[inline(always)]
    pub fn get(&self, lang: &str) -> Option<&Dictionary> {
        self.dicts.get(lang).map(Arc::as_ref)
    }

    /// Checks if `lang` has a dictionary.
    #[inline(always)]
    pub fn contains(&self, lang: &str) -> bool {
        self.dicts.contains_key(lang)
    }

    /// Gets the registered language keys in arbitrary order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.dicts.keys().map(String::as_str)
    }

    /// Gets the number of registered languages.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.dicts.len()
    }

    /// Checks if no language is registered.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.dicts.is_empty()
    }
}
