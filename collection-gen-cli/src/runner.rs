//! Glue between a configured [`Target`] and the generator engine.

use collection_gen::{GeneratedUnit, Generator};

use crate::config::Target;
use crate::error::CliResult;
use crate::writer::{FileWriter, Freshness};

/// Generate the unit for `target` from the built-in catalogue.
pub fn render(target: &Target) -> CliResult<GeneratedUnit> {
    let unit = Generator::builtin().generate(&target.params, &target.exclusion)?;
    tracing::debug!(
        operations = unit.operations.len(),
        out = %target.out.display(),
        "unit generated"
    );
    Ok(unit)
}

/// Generate `target` and compare it with the file already at `target.out`.
pub fn check(target: &Target) -> CliResult<Freshness> {
    let unit = render(target)?;
    FileWriter::compare(&target.out, &unit.content)
}
