//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `gen-collection.toml`
//! files and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use collection_gen::{ExclusionSet, GenerationParams, DEFAULT_CONSTRAINT};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "gen-collection.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation target.
    pub target: TargetConfig,
}

/// Generation target configuration.
///
/// Every field may be left out and supplied on the command line instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Go package name of the generated file.
    pub pkg: Option<String>,

    /// Container type name, e.g. `*List`.
    pub name: Option<String>,

    /// Type-argument constraint.
    pub constraint: String,

    /// Operations to leave out.
    pub exclude: Vec<String>,

    /// Output file path.
    pub out: Option<PathBuf>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            pkg: None,
            name: None,
            constraint: DEFAULT_CONSTRAINT.to_string(),
            exclude: Vec::new(),
            out: None,
        }
    }
}

/// A fully specified generation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Parameters bound into the template.
    pub params: GenerationParams,

    /// Operations to leave out.
    pub exclusion: ExclusionSet,

    /// Output file path.
    pub out: PathBuf,
}

impl TargetConfig {
    /// Check that every required value is present.
    pub fn into_target(self) -> CliResult<Target> {
        let pkg = self.pkg.ok_or_else(|| ConfigError::missing("pkg"))?;
        let name = self.name.ok_or_else(|| ConfigError::missing("name"))?;
        let out = self.out.ok_or_else(|| ConfigError::missing("out"))?;

        Ok(Target {
            params: GenerationParams::new(pkg, name).with_constraint(self.constraint),
            exclusion: self.exclude.into_iter().collect(),
            out,
        })
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// With no explicit path, `gen-collection.toml` in the working directory
    /// is used if present and defaults otherwise. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::not_found(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILENAME),
        };

        if !config_path.exists() {
            tracing::debug!("no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values. An `--exclude`
    /// list replaces the configured one.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref pkg) = args.pkg {
            config.target.pkg = Some(pkg.clone());
        }

        if let Some(ref name) = args.name {
            config.target.name = Some(name.clone());
        }

        if let Some(ref constraint) = args.constraint {
            config.target.constraint = constraint.clone();
        }

        if let Some(ref exclude) = args.exclude {
            config.target.exclude = ExclusionSet::parse(exclude)
                .iter()
                .map(str::to_string)
                .collect();
        }

        if let Some(ref out) = args.out {
            config.target.out = Some(out.clone());
        }

        config
    }

    /// Get default configuration.
    pub fn default_config() -> Config {
        Config::default()
    }

    /// Write the default configuration file.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn init(path: &Path, force: bool) -> CliResult<()> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        std::fs::write(path, Self::default_config_content())?;
        Ok(())
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# gen-collection configuration file
# Values given on the command line take precedence.

[target]
# Go package name of the generated file
pkg = "mycollection"

# Container type the functions are generated for (may include a pointer, e.g. "*List")
name = "MyCollection"

# Constraint applied to the element type argument
constraint = "any"

# Operations to leave out (see `gen-collection list`)
exclude = []

# Output file
out = "zz_generated.collection.go"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Package name override.
    pub pkg: Option<String>,

    /// Type name override.
    pub name: Option<String>,

    /// Constraint override.
    pub constraint: Option<String>,

    /// Comma-separated exclusion list override.
    pub exclude: Option<String>,

    /// Output path override.
    pub out: Option<PathBuf>,
}
