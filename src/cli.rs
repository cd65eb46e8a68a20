// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line surface.
//!
//! ```text
//! mutation-scaffold generate <NAME> [ATTRIBUTE ...] [--root DIR] [--pretend] [--skip-spec]
//! ```

use std::{
    io,
    path::{Path, PathBuf}
};

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{
    error::Result,
    generate::{GenerationRequest, Generator, Layout, Report}
};

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "mutation-scaffold")]
#[command(version, about = "Generate command-object mutations and their test stubs")]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print per-file status lines
    #[arg(short, long, global = true)]
    pub quiet: bool
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a mutation and, if the project has a spec directory, its test stub
    Generate(GenerateArgs)
}

/// Arguments of `generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Snake-case mutation name (e.g. create_user)
    pub name: String,

    /// Attribute definitions: name:filter[:required|optional]
    #[arg(value_name = "ATTRIBUTE")]
    pub attributes: Vec<String>,

    /// Project root the conventional directories live under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub pretend: bool,

    /// Never generate the test stub
    #[arg(long)]
    pub skip_spec: bool
}

impl GenerateArgs {
    /// Request described by these arguments.
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.name.clone(), self.attributes.iter().cloned())
    }
}

/// Execute the parsed command line.
///
/// # Errors
///
/// Any parser or filesystem error from the run.
pub fn run(cli: &Cli) -> Result<Report> {
    match &cli.command {
        Command::Generate(args) => {
            let generator = Generator::new(Layout::new(&args.root)).skip_spec(args.skip_spec);
            let request = args.request();
            if args.pretend {
                let plan = generator.plan(&request)?;
                Ok(Report::pretend(&plan))
            } else {
                generator.generate(&request)
            }
        }
    }
}

/// Root the report's paths are shown relative to.
#[must_use]
pub fn display_root(cli: &Cli) -> &Path {
    match &cli.command {
        Command::Generate(args) => &args.root
    }
}

/// Print one `status  path` line per file.
///
/// # Errors
///
/// Propagates failures of `out`.
pub fn print_report(report: &Report, root: &Path, out: &mut impl io::Write) -> io::Result<()> {
    for file in &report.files {
        let path = file.path.strip_prefix(root).unwrap_or(file.path.as_path());
        writeln!(out, "{:>12}  {}", file.status.label(), path.display())?;
    }
    Ok(())
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` picks the level.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{FileReport, FileStatus};

    #[test]
    fn parses_generate() {
        let cli = Cli::try_parse_from([
            "mutation-scaffold",
            "generate",
            "create_user",
            "title:string",
            "count:integer:optional"
        ])
        .unwrap();

        let Command::Generate(args) = &cli.command;
        assert_eq!(args.name, "create_user");
        assert_eq!(args.attributes, ["title:string", "count:integer:optional"]);
        assert_eq!(args.root, PathBuf::from("."));
        assert!(!args.pretend);
        assert!(!args.skip_spec);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "mutation-scaffold",
            "-vv",
            "generate",
            "publish",
            "--root",
            "/tmp/app",
            "--pretend",
            "--skip-spec",
            "-q"
        ])
        .unwrap();

        let Command::Generate(args) = &cli.command;
        assert_eq!(args.root, PathBuf::from("/tmp/app"));
        assert!(args.pretend);
        assert!(args.skip_spec);
        assert!(args.attributes.is_empty());
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(display_root(&cli), Path::new("/tmp/app"));
    }

    #[test]
    fn name_is_required() {
        assert!(Cli::try_parse_from(["mutation-scaffold", "generate"]).is_err());
    }

    #[test]
    fn request_keeps_order() {
        let cli =
            Cli::try_parse_from(["mutation-scaffold", "generate", "x", "b:string", "a:string"])
                .unwrap();
        let Command::Generate(args) = &cli.command;
        assert_eq!(
            args.request(),
            GenerationRequest::new("x", ["b:string", "a:string"])
        );
    }

    #[test]
    fn report_lines_are_relative() {
        let report = Report {
            files: vec![
                FileReport {
                    path:   PathBuf::from("/p/app/mutations/x.rs"),
                    status: FileStatus::Created
                },
                FileReport {
                    path:   PathBuf::from("/p/spec/mutations/x_spec.rs"),
                    status: FileStatus::Skipped
                }
            ]
        };
        let mut out = Vec::new();
        print_report(&report, Path::new("/p"), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "      create  app/mutations/x.rs\n        skip  spec/mutations/x_spec.rs\n"
        );
    }

    #[test]
    fn pretend_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "mutation-scaffold",
            "generate",
            "create_user",
            "title:string",
            "--root",
            root,
            "--pretend"
        ])
        .unwrap();

        let report = run(&cli).unwrap();
        assert_eq!(report.files.len(), 2);
        assert!(!dir.path().join("app").exists());
    }
}
