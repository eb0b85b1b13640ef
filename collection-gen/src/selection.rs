//! Selection resolver: turns an exclusion list into the retained set.

use std::collections::HashSet;

use crate::catalogue::Catalogue;
use crate::error::{GenerateError, GenerateResult};

/// Operation names the operator asked to leave out.
///
/// Input order is kept so that the first unknown name is the one reported.
/// Duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of names.
    ///
    /// Only the empty string means "nothing excluded". Items are kept
    /// verbatim, so `"Map,"` holds an empty name and `" Map"` a padded one;
    /// both are rejected by [`resolve`].
    pub fn parse(list: &str) -> Self {
        if list.is_empty() {
            return Self::new();
        }
        list.split(',').collect()
    }

    /// Add a name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Whether `name` is excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

/// Catalogue operations that survive an exclusion.
///
/// Borrowed from the catalogue it was resolved against, so every member is
/// guaranteed to have a fragment there. Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct RetainedSet<'a> {
    catalogue: &'a Catalogue,
    names: HashSet<&'a str>,
}

impl<'a> RetainedSet<'a> {
    /// The catalogue this set was resolved against.
    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Whether `name` is retained.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of retained operations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether every operation was excluded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Retained names in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().copied()
    }
}

/// Validate `exclusion` against `catalogue` and compute the retained set.
///
/// Fails on the first excluded name the catalogue does not define.
pub fn resolve<'a>(
    catalogue: &'a Catalogue,
    exclusion: &ExclusionSet,
) -> GenerateResult<RetainedSet<'a>> {
    for name in exclusion.iter() {
        if !catalogue.contains(name) {
            tracing::debug!(operation = %name, "unknown operation in exclusion list");
            return Err(GenerateError::unknown_operation(name));
        }
    }

    let names: HashSet<&str> = catalogue
        .names()
        .filter(|name| !exclusion.contains(name))
        .collect();

    tracing::debug!(
        excluded = exclusion.len(),
        retained = names.len(),
        "operations resolved"
    );
    Ok(RetainedSet { catalogue, names })
}
