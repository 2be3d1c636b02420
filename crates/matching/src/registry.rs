//! Named-matcher registry.

use std::collections::BTreeMap;

use pbc_core::{ConstraintModel, Error, Result};

use crate::matcher::NodeMatcher;

/// Session-scoped registry of matchers keyed by PBC name.
///
/// At most one matcher exists per name; insertion refuses duplicates before
/// any state mutation. The registry is a plain owned object injected by the
/// host, which is responsible for serializing access to it (the engine is
/// single-threaded by contract).
#[derive(Debug, Default)]
pub struct MatcherRegistry {
    matchers: BTreeMap<String, NodeMatcher>,
}

impl MatcherRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a matcher under its name.
    ///
    /// Fails with [`Error::DuplicateName`] if a matcher already exists under
    /// that name, leaving the existing matcher untouched.
    pub fn insert(&mut self, matcher: NodeMatcher) -> Result<()> {
        if self.matchers.contains_key(matcher.name()) {
            return Err(Error::DuplicateName(matcher.name().to_string()));
        }
        self.matchers.insert(matcher.name().to_string(), matcher);
        Ok(())
    }

    /// Returns the matcher registered under this name.
    pub fn get(&self, name: &str) -> Option<&NodeMatcher> {
        self.matchers.get(name)
    }

    /// Returns the matcher registered under this name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut NodeMatcher> {
        self.matchers.get_mut(name)
    }

    /// True if a matcher exists under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.matchers.contains_key(name)
    }

    /// Registered names, in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matchers.keys().map(String::as_str)
    }

    /// Number of registered matchers.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// True if no matcher is registered.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Removes the matcher registered under this name, reversing its pairing
    /// first.
    ///
    /// Fails with [`Error::UnknownName`] if no matcher exists under the
    /// name. If the model-side teardown fails the matcher stays registered.
    pub fn remove(&mut self, name: &str, model: &mut dyn ConstraintModel) -> Result<NodeMatcher> {
        let Some(mut matcher) = self.matchers.remove(name) else {
            return Err(Error::UnknownName(name.to_string()));
        };
        if let Err(err) = matcher.delete_constraints(model) {
            self.matchers.insert(name.to_string(), matcher);
            return Err(err);
        }
        Ok(matcher)
    }
}

/// Resolves a positional index supplied by a host UI layer against a current
/// collection, without mutating anything on failure.
pub fn resolve<'a, T>(kind: &'static str, items: &'a [T], index: usize) -> Result<&'a T> {
    items.get(index).ok_or(Error::IndexOutOfRange {
        kind,
        index,
        len: items.len(),
    })
}
