//! The generation pipeline: resolve, assemble, parametrize.

use crate::assembler::assemble;
use crate::catalogue::Catalogue;
use crate::error::GenerateResult;
use crate::selection::{resolve, ExclusionSet};
use crate::template::{parametrize, GenerationParams};

/// Output of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Complete generated source text.
    pub content: String,

    /// Emitted operations, in output order.
    pub operations: Vec<String>,
}

/// Runs the pipeline against a catalogue.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    catalogue: &'a Catalogue,
}

impl Generator<'static> {
    /// Generator over the built-in catalogue.
    pub fn builtin() -> Self {
        Self::new(Catalogue::global())
    }
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Generator<'a> {
    /// Create a generator over `catalogue`.
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// The catalogue this generator draws from.
    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Generate the source text for `params`, leaving out `exclusion`.
    ///
    /// No text is returned unless every step succeeds.
    pub fn generate(
        &self,
        params: &GenerationParams,
        exclusion: &ExclusionSet,
    ) -> GenerateResult<GeneratedUnit> {
        let retained = resolve(self.catalogue, exclusion)?;
        let template = assemble(&retained);
        let content = parametrize(&template, params)?;

        Ok(GeneratedUnit {
            content,
            operations: template.operations().map(str::to_string).collect(),
        })
    }
}

/// Generate from the built-in catalogue with a comma-separated exclusion list.
pub fn generate(params: &GenerationParams, exclude: &str) -> GenerateResult<String> {
    Generator::builtin()
        .generate(params, &ExclusionSet::parse(exclude))
        .map(|unit| unit.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;

    #[test]
    fn test_generate_full_catalogue() {
        let params = GenerationParams::new("slice", "Slice");
        let unit = Generator::builtin()
            .generate(&params, &ExclusionSet::new())
            .unwrap();

        assert_eq!(unit.operations, Catalogue::global().sorted_names());
        assert!(unit
            .content
            .starts_with("// Code generated by gen-collection; DO NOT EDIT.\n\npackage slice\n"));
        assert!(unit
            .content
            .contains("func Map[T, U any](xs Slice[T], fn func(T) U) Slice[U] {"));
        assert!(!unit.content.contains("{{"));
    }

    #[test]
    fn test_generate_with_constraint() {
        let params = GenerationParams::new("set", "Set").with_constraint("comparable");
        let content = generate(&params, "").unwrap();
        assert!(content.contains("func Find[T comparable](xs Set[T], fn func(T) bool) (T, bool) {"));
    }

    #[test]
    fn test_generate_unknown_exclusion_produces_nothing() {
        let params = GenerationParams::new("list", "*List");
        let err = generate(&params, "Find,NotARealOp").unwrap_err();
        assert_eq!(err, GenerateError::unknown_operation("NotARealOp"));
    }

    #[test]
    fn test_generate_reports_defective_fragment() {
        let catalogue = Catalogue::from_entries(
            "package {{ .PkgName }}\n",
            [
                ("Find", "func Find[T {{ .Constraint }}]()\n"),
                ("Map", "func Map(xs {{ .ElemType }})\n"),
            ],
        )
        .unwrap();
        let params = GenerationParams::new("p", "T");

        let err = Generator::new(&catalogue)
            .generate(&params, &ExclusionSet::new())
            .unwrap_err();
        assert_eq!(err, GenerateError::unresolved("Map", ".ElemType"));

        let unit = Generator::new(&catalogue)
            .generate(&params, &ExclusionSet::parse("Map"))
            .unwrap();
        assert_eq!(unit.content, "package p\nfunc Find[T any]()\n");
    }
}
