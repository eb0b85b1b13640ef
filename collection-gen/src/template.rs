//! Placeholder substitution.
//!
//! Template text refers to the generation parameters as `{{ .PkgName }}`,
//! `{{ .TypeName }}` and `{{ .Constraint }}`. This is a closed set: any other
//! placeholder is a catalogue defect, never passed through to the output.

use std::fmt;

use crate::assembler::Template;
use crate::error::{GenerateError, GenerateResult};

/// Default type-argument constraint (Go's unconstrained `any`).
pub const DEFAULT_CONSTRAINT: &str = "any";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// One of the three parameters a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Destination package name.
    PkgName,
    /// Target container type name.
    TypeName,
    /// Type-argument constraint expression.
    Constraint,
}

impl Param {
    /// All recognized parameters.
    pub const ALL: [Param; 3] = [Param::PkgName, Param::TypeName, Param::Constraint];

    /// Parse the trimmed contents of a `{{ ... }}` placeholder.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            ".PkgName" => Some(Param::PkgName),
            ".TypeName" => Some(Param::TypeName),
            ".Constraint" => Some(Param::Constraint),
            _ => None,
        }
    }

    /// Key as written inside a placeholder.
    pub fn key(&self) -> &'static str {
        match self {
            Param::PkgName => ".PkgName",
            Param::TypeName => ".TypeName",
            Param::Constraint => ".Constraint",
        }
    }

    /// Canonical placeholder text, e.g. `{{ .TypeName }}`.
    pub fn placeholder(&self) -> String {
        format!("{} {} {}", OPEN, self.key(), CLOSE)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values bound into a template.
///
/// All three values are opaque and substituted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Destination package name.
    pub package_name: String,
    /// Target container type name.
    pub type_name: String,
    /// Type-argument constraint expression.
    pub constraint: String,
}

impl GenerationParams {
    /// Create parameters with the default constraint.
    pub fn new(package_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            type_name: type_name.into(),
            constraint: DEFAULT_CONSTRAINT.to_string(),
        }
    }

    /// Set the type-argument constraint.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Value bound to `param`.
    pub fn value(&self, param: Param) -> &str {
        match param {
            Param::PkgName => &self.package_name,
            Param::TypeName => &self.type_name,
            Param::Constraint => &self.constraint,
        }
    }
}

/// A piece of template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder { key: &'a str, offset: usize },
}

/// Split `text` into literal runs and placeholders.
///
/// On an unclosed `{{` returns the byte offset where it was opened.
fn scan(text: &str) -> Result<Vec<Segment<'_>>, usize> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(OPEN) {
        let open = cursor + found;
        let inner = open + OPEN.len();
        let close = match text[inner..].find(CLOSE) {
            Some(len) => inner + len,
            None => return Err(open),
        };

        if open > cursor {
            segments.push(Segment::Literal(&text[cursor..open]));
        }
        segments.push(Segment::Placeholder {
            key: text[inner..close].trim(),
            offset: open,
        });
        cursor = close + CLOSE.len();
    }

    if cursor < text.len() {
        segments.push(Segment::Literal(&text[cursor..]));
    }
    Ok(segments)
}

/// Verify that every placeholder in `text` is closed and recognized.
///
/// `section` names the text in the returned error.
pub fn check_placeholders(section: &str, text: &str) -> GenerateResult<()> {
    let segments = scan(text).map_err(|_| GenerateError::UnterminatedPlaceholder {
        section: section.to_string(),
    })?;

    for segment in segments {
        if let Segment::Placeholder { key, .. } = segment {
            if Param::from_key(key).is_none() {
                return Err(GenerateError::unresolved(section, key));
            }
        }
    }
    Ok(())
}

/// Bind `params` into an assembled template.
///
/// Every recognized placeholder is replaced in a single pass; substituted
/// values are not scanned again. Either the complete text is returned or an
/// error naming the section holding the bad placeholder.
pub fn parametrize(template: &Template, params: &GenerationParams) -> GenerateResult<String> {
    let text = template.as_str();
    let segments = scan(text).map_err(|offset| GenerateError::UnterminatedPlaceholder {
        section: template.section_at(offset).to_string(),
    })?;

    let mut output = String::with_capacity(text.len());
    let mut substitutions = 0usize;
    for segment in segments {
        match segment {
            Segment::Literal(literal) => output.push_str(literal),
            Segment::Placeholder { key, offset } => {
                let param = Param::from_key(key).ok_or_else(|| {
                    GenerateError::unresolved(template.section_at(offset), key)
                })?;
                output.push_str(params.value(param));
                substitutions += 1;
            }
        }
    }

    tracing::debug!(
        substitutions,
        bytes = output.len(),
        package = %params.package_name,
        type_name = %params.type_name,
        "template parametrized"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_round_trip_keys() {
        for param in Param::ALL {
            assert_eq!(Param::from_key(param.key()), Some(param));
        }
        assert_eq!(Param::from_key("PkgName"), None);
        assert_eq!(Param::TypeName.placeholder(), "{{ .TypeName }}");
    }

    #[test]
    fn test_default_constraint() {
        let params = GenerationParams::new("list", "*List");
        assert_eq!(params.constraint, "any");
        assert_eq!(params.value(Param::TypeName), "*List");
    }

    #[test]
    fn test_scan_splits_placeholders() {
        let segments = scan("a{{.PkgName}}b{{  .TypeName  }}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a"),
                Segment::Placeholder {
                    key: ".PkgName",
                    offset: 1
                },
                Segment::Literal("b"),
                Segment::Placeholder {
                    key: ".TypeName",
                    offset: 14
                },
            ]
        );
    }

    #[test]
    fn test_scan_unterminated() {
        assert_eq!(scan("ok {{ .PkgName "), Err(3));
    }

    #[test]
    fn test_check_placeholders() {
        assert!(check_placeholders("Find", "func Find[T {{ .Constraint }}]").is_ok());
        assert_eq!(
            check_placeholders("Find", "{{ .Elem }}"),
            Err(GenerateError::unresolved("Find", ".Elem"))
        );
        assert_eq!(
            check_placeholders("Find", "{{ .Elem"),
            Err(GenerateError::UnterminatedPlaceholder {
                section: "Find".to_string()
            })
        );
    }
}
