//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases, help text and value enums live here and nowhere
//! else. Commands receive the parsed structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use stencil_core::domain::CicdType;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Python projects from directory templates",
    long_about = "Stencil copies a named template, the shared assets every project \
                  gets, and optionally a CI/CD pipeline into a new directory, then \
                  substitutes the project name into the copied files.",
    after_help = "EXAMPLES:\n\
        \x20 stencil new my-api --template rest-api\n\
        \x20 stencil new my-lib --template package --cicd github\n\
        \x20 stencil list\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
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
    /// Create a new project from a template.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 stencil new my-project --template classic\n\
            \x20 stencil new my-api     --template rest-api --cicd azure\n\
            \x20 stencil new my-svc     -t gRPC-api -o ~/code --dry-run"
    )]
    New(NewArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stencil configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config get defaults.template\n\
            \x20 stencil config list\n\
            \x20 stencil config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stencil new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name. Also the name of the directory created under `--output`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template to generate from.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Template name (see `stencil list`)"
    )]
    pub template: Option<String>,

    /// Parent directory of the new project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// CI/CD pipeline to include.
    #[arg(
        long = "cicd",
        value_name = "PROVIDER",
        value_enum,
        help = "CI/CD pipeline to include"
    )]
    pub cicd: Option<CicdArg>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip interactive prompts.
    #[arg(short = 'y', long = "yes", help = "Never prompt; fail instead")]
    pub yes: bool,
}

/// CI/CD providers accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CicdArg {
    None,
    #[value(alias = "azure-pipelines")]
    Azure,
    #[value(alias = "gh", alias = "github-actions")]
    Github,
}

impl From<CicdArg> for CicdType {
    fn from(arg: CicdArg) -> Self {
        match arg {
            CicdArg::None => CicdType::None,
            CicdArg::Azure => CicdType::Azure,
            CicdArg::Github => CicdType::GitHub,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
