//! Error types for the generator engine.
//!
//! Invalid operator input and catalogue authoring defects are both reported
//! through [`GenerateError`]. Every variant names the operation or template
//! section it came from.

use thiserror::Error;

/// Result type alias for generator operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Main error type for the generator engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// An excluded name does not exist in the catalogue.
    #[error("invalid exclusion: operation '{name}' not found in catalogue")]
    UnknownOperation { name: String },

    /// A catalogue was built with the same operation name twice.
    #[error("duplicate operation '{name}' in catalogue")]
    DuplicateOperation { name: String },

    /// A placeholder other than the recognized parameters was found.
    #[error("unresolved placeholder '{placeholder}' in section '{section}'")]
    UnresolvedPlaceholder {
        section: String,
        placeholder: String,
    },

    /// A placeholder was opened but never closed.
    #[error("unterminated placeholder in section '{section}'")]
    UnterminatedPlaceholder { section: String },

    /// A fragment violates a catalogue authoring rule.
    #[error("catalogue defect in '{section}': {message}")]
    CatalogueDefect { section: String, message: String },
}

impl GenerateError {
    /// Create an unknown operation error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Create an unresolved placeholder error.
    pub fn unresolved(section: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::UnresolvedPlaceholder {
            section: section.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Create a catalogue defect error.
    pub fn defect(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogueDefect {
            section: section.into(),
            message: message.into(),
        }
    }

    /// Whether this error was caused by operator input rather than by the
    /// catalogue itself.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::UnknownOperation { .. })
    }
}
