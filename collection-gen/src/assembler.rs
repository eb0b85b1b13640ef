//! Assembler: concatenates the header and the retained fragments.
//!
//! Fragments are emitted in ascending lexicographic order of their names so
//! that the output never depends on the catalogue's storage order.

use std::fmt;
use std::ops::Range;

use crate::catalogue::HEADER_SECTION;
use crate::selection::RetainedSet;

/// A named span of assembled template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Operation name, or `"header"`.
    pub name: String,
    /// Byte range within the template text.
    pub range: Range<usize>,
}

/// Assembled template text, still containing placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    sections: Vec<Section>,
}

impl Template {
    /// The full template text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Sections in emission order, header first.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Names of the operations in emission order (header excluded).
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .skip(1)
            .map(|section| section.name.as_str())
    }

    /// Name of the section containing byte `offset`.
    pub fn section_at(&self, offset: usize) -> &str {
        self.sections
            .iter()
            .find(|section| section.range.contains(&offset))
            .map(|section| section.name.as_str())
            .unwrap_or(HEADER_SECTION)
    }

    fn push_section(&mut self, name: &str, body: &str) {
        let start = self.text.len();
        self.text.push_str(body);
        tracing::trace!(section = name, bytes = body.len(), "section assembled");
        self.sections.push(Section {
            name: name.to_string(),
            range: start..self.text.len(),
        });
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Concatenate the header and every retained fragment, sorted by name.
pub fn assemble(retained: &RetainedSet<'_>) -> Template {
    let catalogue = retained.catalogue();

    let mut names: Vec<&str> = retained.iter().collect();
    names.sort_unstable();

    let mut template = Template {
        text: String::new(),
        sections: Vec::with_capacity(names.len() + 1),
    };
    template.push_section(HEADER_SECTION, catalogue.header());

    for name in names {
        if let Some(fragment) = catalogue.lookup(name) {
            template.push_section(name, fragment.body());
        }
    }

    tracing::debug!(
        operations = template.sections.len() - 1,
        bytes = template.text.len(),
        "template assembled"
    );
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::selection::{resolve, ExclusionSet};

    fn catalogue() -> Catalogue {
        Catalogue::from_entries(
            "H;",
            [("Zeta", "z;"), ("Alpha", "a;"), ("Mid", "m;"), ("alpha", "l;")],
        )
        .unwrap()
    }

    #[test]
    fn test_assemble_sorts_by_name() {
        let catalogue = catalogue();
        let retained = resolve(&catalogue, &ExclusionSet::new()).unwrap();
        let template = assemble(&retained);

        assert_eq!(template.as_str(), "H;a;m;z;l;");
        assert_eq!(
            template.operations().collect::<Vec<_>>(),
            vec!["Alpha", "Mid", "Zeta", "alpha"]
        );
    }

    #[test]
    fn test_assemble_everything_excluded_is_header() {
        let catalogue = catalogue();
        let exclusion = ExclusionSet::parse("Zeta,Alpha,Mid,alpha");
        let retained = resolve(&catalogue, &exclusion).unwrap();
        let template = assemble(&retained);

        assert_eq!(template.as_str(), "H;");
        assert_eq!(template.sections().len(), 1);
    }

    #[test]
    fn test_section_ranges() {
        let catalogue = catalogue();
        let retained = resolve(&catalogue, &ExclusionSet::parse("alpha,Zeta")).unwrap();
        let template = assemble(&retained);

        assert_eq!(template.as_str(), "H;a;m;");
        assert_eq!(template.section_at(0), "header");
        assert_eq!(template.section_at(2), "Alpha");
        assert_eq!(template.section_at(5), "Mid");
        assert_eq!(template.to_string(), template.as_str());
    }
}
