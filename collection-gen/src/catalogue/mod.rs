//! Function catalogue: the fixed registry of operation templates.
//!
//! The built-in catalogue is created once per process through
//! [`Catalogue::global`] and is never mutated afterwards. Its storage is a
//! `HashMap`, so callers that need an order must sort names themselves.

mod fragments;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{GenerateError, GenerateResult};
use crate::template;

pub use fragments::{FRAGMENTS, HEADER};

/// Section name used for the header in diagnostics.
pub const HEADER_SECTION: &str = "header";

static GLOBAL: OnceLock<Catalogue> = OnceLock::new();

/// A single operation template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    name: String,
    body: String,
}

impl Fragment {
    /// Create a fragment from an operation name and template text.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template text, still containing placeholders.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// First line of the fragment's leading doc comment.
    pub fn summary(&self) -> Option<&str> {
        self.body
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .and_then(|line| line.strip_prefix("//"))
            .map(str::trim)
    }
}

/// Registry of every operation the generator can emit.
#[derive(Debug, Clone)]
pub struct Catalogue {
    header: String,
    fragments: HashMap<String, Fragment>,
}

impl Catalogue {
    /// The built-in catalogue shared by the whole process.
    pub fn global() -> &'static Catalogue {
        GLOBAL.get_or_init(Self::builtin)
    }

    fn builtin() -> Self {
        let fragments = FRAGMENTS
            .iter()
            .map(|(name, body)| (name.to_string(), Fragment::new(*name, *body)))
            .collect();

        Self {
            header: HEADER.to_string(),
            fragments,
        }
    }

    /// Build a catalogue from explicit entries.
    ///
    /// Fails if the same operation name appears twice.
    pub fn from_entries<I, N, B>(header: impl Into<String>, entries: I) -> GenerateResult<Self>
    where
        I: IntoIterator<Item = (N, B)>,
        N: Into<String>,
        B: Into<String>,
    {
        let mut fragments = HashMap::new();
        for (name, body) in entries {
            let fragment = Fragment::new(name, body);
            if fragments.contains_key(fragment.name()) {
                return Err(GenerateError::DuplicateOperation {
                    name: fragment.name,
                });
            }
            fragments.insert(fragment.name.clone(), fragment);
        }

        Ok(Self {
            header: header.into(),
            fragments,
        })
    }

    /// The fixed header text.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Look up an operation by name.
    pub fn lookup(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    /// Whether the catalogue defines `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the catalogue has no operations.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Operation names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    /// Operation names in ascending lexicographic order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        names
    }

    /// Check the authoring rules every fragment must follow.
    ///
    /// - only `.PkgName`, `.TypeName` and `.Constraint` placeholders, all closed;
    /// - each fragment defines `func <Name>[`;
    /// - no fragment refers to another operation of this catalogue by bare name.
    pub fn validate(&self) -> GenerateResult<()> {
        template::check_placeholders(HEADER_SECTION, &self.header)?;

        let names = self.sorted_names();
        for name in &names {
            let fragment = &self.fragments[*name];
            template::check_placeholders(name, fragment.body())?;

            if !fragment.body().contains(&format!("func {}[", name)) {
                return Err(GenerateError::defect(
                    *name,
                    format!("fragment does not define func {}", name),
                ));
            }

            if let Some(other) = names
                .iter()
                .find(|other| *other != name && references_unqualified(fragment.body(), other))
            {
                tracing::warn!(operation = %name, callee = %other, "fragment references another operation");
                return Err(GenerateError::defect(
                    *name,
                    format!("fragment references catalogue operation {}", other),
                ));
            }
        }

        tracing::debug!(operations = names.len(), "catalogue validated");
        Ok(())
    }
}

/// Whether `body` refers to `name` as a bare identifier outside of comments.
///
/// Calls, type arguments and plain value uses (`apply(Fold)`, `f := Fold`)
/// all count. Package-qualified uses such as `iterator.Fold[` and longer
/// identifiers such as `FindIndex` do not.
fn references_unqualified(body: &str, name: &str) -> bool {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';
    body.lines()
        .map(|line| line.split_once("//").map_or(line, |(code, _)| code))
        .any(|code| {
            code.match_indices(name).any(|(at, _)| {
                let before = code[..at].chars().next_back();
                let after = code[at + name.len()..].chars().next();
                let qualified = matches!(before, Some(c) if is_ident(c) || c == '.');
                let longer = matches!(after, Some(c) if is_ident(c));
                !qualified && !longer
            })
        })
}
