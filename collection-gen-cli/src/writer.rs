//! File writer for generated Go sources.
//!
//! Output is written in full or not at all. Dry-run mode hands the content
//! back instead, and [`FileWriter::compare`] checks an existing file against
//! freshly generated content.

use crate::error::{CliResult, WriteError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written successfully.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
}

/// Outcome of comparing an output file with generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// File content equals the generated content byte for byte.
    UpToDate,
    /// File exists with different content.
    Stale,
    /// File does not exist.
    Missing,
}

impl Freshness {
    /// What the operator should do about a file in this state, if anything.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Freshness::UpToDate => None,
            Freshness::Stale | Freshness::Missing => {
                Some("Run 'gen-collection generate' to update")
            }
        }
    }
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write content to a file.
    ///
    /// In dry-run mode, returns the content without writing. Otherwise the
    /// content goes to a temporary file next to `path` that is then renamed
    /// over it, so readers see either the old file or the new one.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| WriteError::CreateDir {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let write_err = |source| WriteError::WriteFile {
            path: path.to_path_buf(),
            source,
        };
        let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
        staged.write_all(content.as_bytes()).map_err(write_err)?;
        staged.flush().map_err(write_err)?;
        staged.persist(path).map_err(|e| write_err(e.error))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "output written");
        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    /// Compare the file at `path` with `content`.
    pub fn compare(path: &Path, content: &str) -> CliResult<Freshness> {
        if !path.exists() {
            return Ok(Freshness::Missing);
        }

        let existing = std::fs::read_to_string(path).map_err(|e| WriteError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        if existing == content {
            Ok(Freshness::UpToDate)
        } else {
            Ok(Freshness::Stale)
        }
    }

    /// Check if running in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl WriteResult {
    /// Get the path associated with this result.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } => path,
            WriteResult::DryRun { path, .. } => path,
        }
    }

    /// Check if the write was successful (not dry-run).
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}
