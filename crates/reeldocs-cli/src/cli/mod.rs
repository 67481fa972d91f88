//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "reeldocs",
    bin_name = "reeldocs",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Maintain a versioned API documentation site",
    long_about = "reeldocs keeps docs/versions.json in order and renders the \
                  per-version and landing HTML pages of a static API \
                  documentation site.",
    after_help = "EXAMPLES:\n\
        \x20 reeldocs add      --version 1.4.0 --output-latest latest.txt\n\
        \x20 reeldocs generate --version 1.4.0 --title \"ReelAPI v1\"\n\
        \x20 reeldocs delete   --version 1.3.0 --keep-if-missing\n\
        \x20 reeldocs migrate",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Unpublish a version.
    #[command(
        visible_alias = "rm",
        about = "Delete a published version and unregister it",
        after_help = "EXAMPLES:\n\
            \x20 reeldocs delete --version 1.0.0\n\
            \x20 reeldocs delete --version 1.0.0 --keep-if-missing"
    )]
    Delete(DeleteArgs),

    /// Render pages for a version.
    #[command(
        visible_alias = "gen",
        about = "Generate the version page and refresh the landing page",
        after_help = "EXAMPLES:\n\
            \x20 reeldocs generate --version 1.2.0\n\
            \x20 reeldocs generate --version 1.2.0 --title \"ReelAPI v2\" --register"
    )]
    Generate(GenerateArgs),

    /// Regenerate every page from the current templates.
    #[command(about = "Migrate all published pages to the current templates")]
    Migrate,

    /// Register a version in `versions.json`.
    #[command(
        about = "Add a version to versions.json",
        after_help = "EXAMPLES:\n\
            \x20 reeldocs add --version 1.2.0\n\
            \x20 reeldocs add --version 1.2.0 --output-latest latest.txt"
    )]
    Add(AddArgs),

    /// Print the newest registered version.
    #[command(about = "Print the latest registered version")]
    Latest(DocsDirArgs),

    /// Print every registered version, newest first.
    #[command(visible_alias = "ls", about = "List registered versions")]
    List(ListArgs),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// `--docs-dir`, shared by every subcommand that takes one.
#[derive(Debug, Clone, Default, Args)]
pub struct DocsDirArgs {
    /// Published documentation directory.
    #[arg(
        long = "docs-dir",
        value_name = "DIR",
        help = "Documentation directory [default: docs]"
    )]
    pub docs_dir: Option<PathBuf>,
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `reeldocs delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub docs: DocsDirArgs,

    /// Version to remove.
    #[arg(long = "version", value_name = "VERSION", help = "Version to delete")]
    pub version: String,

    /// Succeed even when the version directory is absent.
    #[arg(
        long = "keep-if-missing",
        help = "Do not error if the version directory doesn't exist"
    )]
    pub keep_if_missing: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `reeldocs generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub docs: DocsDirArgs,

    /// Version to render.
    #[arg(long = "version", value_name = "VERSION", help = "Version to generate")]
    pub version: String,

    /// Site title shown in both pages.
    #[arg(
        long = "title",
        value_name = "TITLE",
        help = "Site title [default: ReelAPI v1]"
    )]
    pub title: Option<String>,

    /// Also add the version to `versions.json` first.
    #[arg(long = "register", help = "Register the version in versions.json first")]
    pub register: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `reeldocs add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub docs: DocsDirArgs,

    /// Version to register.
    #[arg(long = "version", value_name = "VERSION", help = "New version to add")]
    pub version: String,

    /// Write the newest version (no trailing newline) to this file.
    #[arg(
        long = "output-latest",
        value_name = "FILE",
        help = "File to write the latest version to"
    )]
    pub output_latest: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `reeldocs list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub docs: DocsDirArgs,

    /// Print the registry as a JSON array instead of one version per line.
    #[arg(long = "json", help = "Output as JSON")]
    pub json: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_delete_command() {
        let cli = Cli::parse_from([
            "reeldocs",
            "delete",
            "--version",
            "1.0.0",
            "--keep-if-missing",
        ]);
        match cli.command {
            Commands::Delete(args) => {
                assert_eq!(args.version, "1.0.0");
                assert!(args.keep_if_missing);
                assert_eq!(args.docs.docs_dir, None);
            }
            other => panic!("expected Delete command, got {other:?}"),
        }
    }

    #[test]
    fn parse_generate_with_register() {
        let cli = Cli::parse_from([
            "reeldocs",
            "gen",
            "--docs-dir",
            "site",
            "--version",
            "2.0.0",
            "--title",
            "ReelAPI v2",
            "--register",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.docs.docs_dir, Some(PathBuf::from("site")));
                assert_eq!(args.title.as_deref(), Some("ReelAPI v2"));
                assert!(args.register);
            }
            other => panic!("expected Generate command, got {other:?}"),
        }
    }

    #[test]
    fn version_is_required() {
        assert!(Cli::try_parse_from(["reeldocs", "delete"]).is_err());
        assert!(Cli::try_parse_from(["reeldocs", "generate"]).is_err());
        assert!(Cli::try_parse_from(["reeldocs", "add"]).is_err());
    }

    #[test]
    fn migrate_takes_no_arguments() {
        assert!(Cli::try_parse_from(["reeldocs", "migrate", "--docs-dir", "x"]).is_err());
        let cli = Cli::parse_from(["reeldocs", "migrate"]);
        assert!(matches!(cli.command, Commands::Migrate));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["reeldocs", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["reeldocs", "latest", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }
}
