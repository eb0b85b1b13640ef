//! # gen-collection
//!
//! CLI tool for generating Go collection helper functions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate helpers for a container type
//! gen-collection generate --pkg list --name '*List' --out zz_generated.collection.go
//!
//! # Leave out some operations and constrain the element type
//! gen-collection generate --pkg set --name Set --constraint comparable --exclude Zip,Map --out zz.go
//!
//! # Preview without writing
//! gen-collection generate --pkg list --name '*List' --out zz.go --dry-run
//!
//! # Verify a committed file is up-to-date
//! gen-collection check --pkg list --name '*List' --out zz_generated.collection.go
//!
//! # Show available operations
//! gen-collection list --verify
//! ```
//!
//! From Go, wire it into `go:generate`:
//!
//! ```text
//! //go:generate gen-collection generate --pkg list --name *List --out zz_generated.collection.go
//! ```

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use collection_gen::Catalogue;
use collection_gen_cli::{
    config::{CliArgs, ConfigManager, Target, CONFIG_FILENAME},
    error::{CliError, ConfigError},
    logging, runner,
    writer::{FileWriter, Freshness, WriteResult},
};

#[derive(Parser)]
#[command(name = "gen-collection")]
#[command(author, version, about = "Generate Go collection helper functions", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the helper file for a container type
    Generate {
        #[command(flatten)]
        target: TargetArgs,

        /// Preview output without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that a generated file is up-to-date
    Check {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// List the operations that can be generated
    List {
        /// Also run the catalogue self-check
        #[arg(long)]
        verify: bool,
    },

    /// Initialize a new gen-collection configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Flags describing what to generate. Unset flags fall back to the config file.
#[derive(Args)]
struct TargetArgs {
    /// Go package name of the generated file
    #[arg(long)]
    pkg: Option<String>,

    /// Container type name, e.g. '*List'
    #[arg(long)]
    name: Option<String>,

    /// Type constraint for the element type argument [default: any]
    #[arg(long)]
    constraint: Option<String>,

    /// Comma-separated names of operations to exclude
    #[arg(long)]
    exclude: Option<String>,

    /// Path to output file
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate { target, dry_run } => cmd_generate(target, dry_run),
        Commands::Check { target } => cmd_check(target),
        Commands::List { verify } => cmd_list(verify),
        Commands::Init { output, force } => cmd_init(output, force),
    }
}

/// Build a complete target from the config file and flags.
fn load_target(args: TargetArgs) -> Result<Target, CliError> {
    let config = ConfigManager::load(args.config.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            pkg: args.pkg,
            name: args.name,
            constraint: args.constraint,
            exclude: args.exclude,
            out: args.out,
        },
    );
    config.target.into_target()
}

/// Generate command implementation.
fn cmd_generate(args: TargetArgs, dry_run: bool) -> Result<(), CliError> {
    let target = load_target(args)?;
    let unit = runner::render(&target)?;

    let writer = FileWriter::new(dry_run);
    match writer.write(&target.out, &unit.content)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Generated {} function(s) for {} ({} bytes) in {}",
                "✓".green(),
                unit.operations.len().to_string().green(),
                target.params.type_name,
                bytes,
                path.display()
            );
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            print!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Check command implementation.
fn cmd_check(args: TargetArgs) -> Result<(), CliError> {
    let target = load_target(args)?;

    match runner::check(&target)? {
        Freshness::UpToDate => {
            println!("{} {} is up-to-date", "✓".green(), target.out.display());
            Ok(())
        }
        freshness => {
            let problem = if freshness == Freshness::Missing {
                "not found"
            } else {
                "is out of date"
            };
            println!("{} {} {}", "✗".red(), target.out.display(), problem);
            if let Some(hint) = freshness.hint() {
                println!("  {}", hint);
            }
            Err(CliError::Stale(format!(
                "{} {}",
                target.out.display(),
                problem
            )))
        }
    }
}

/// List command implementation.
fn cmd_list(verify: bool) -> Result<(), CliError> {
    let catalogue = Catalogue::global();

    if verify {
        catalogue.validate()?;
        println!("{} Catalogue is consistent", "✓".green());
    }

    let names = catalogue.sorted_names();
    let width = names.iter().map(|name| name.len()).max().unwrap_or(0);
    for name in names {
        let summary = catalogue
            .lookup(name)
            .and_then(|fragment| fragment.summary())
            .unwrap_or("");
        let padded = format!("{:width$}", name, width = width);
        println!("  {}  {}", padded.cyan(), summary.dimmed());
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    ConfigManager::init(&output, force)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
    if let CliError::Config(ConfigError::AlreadyExists { .. }) = error {
        eprintln!("  Use --force to overwrite");
    }
}
