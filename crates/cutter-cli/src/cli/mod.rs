//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cutter",
    bin_name = "cutter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2702} Pre-flight checks for code templates",
    long_about = "Cutter statically inspects template source text before it is \
                  used to scaffold a deployable artifact: required methods, their \
                  private counterparts, and the __main__ entrypoint guard.",
    after_help = "EXAMPLES:\n\
        \x20 cutter check template.py --method deploy\n\
        \x20 cutter check a.py b.py --method deploy --method rollback\n\
        \x20 cutter check template.py --output-format json\n\
        \x20 cutter completions bash > /usr/share/bash-completion/completions/cutter",
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
    /// Validate one or more template files.
    #[command(
        visible_alias = "c",
        about = "Validate template files",
        after_help = "EXAMPLES:\n\
            \x20 cutter check template.py --method deploy\n\
            \x20 cutter check templates/*.py --method deploy --method status\n\
            \x20 cutter check template.py          # methods from config file"
    )]
    Check(CheckArgs),

    /// Initialise a Cutter configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 cutter init           # default location\n\
            \x20 cutter init --force   # overwrite an existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cutter completions bash > ~/.local/share/bash-completion/completions/cutter\n\
            \x20 cutter completions zsh  > ~/.zfunc/_cutter\n\
            \x20 cutter completions fish > ~/.config/fish/completions/cutter.fish"
    )]
    Completions(CompletionsArgs),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `cutter check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Template files to inspect.
    #[arg(value_name = "FILE", required = true, help = "Template file(s) to validate")]
    pub files: Vec<PathBuf>,

    /// Required method names.  Each one must be defined in the template,
    /// together with its private `_name` counterpart.
    #[arg(
        short = 'm',
        long = "method",
        value_name = "NAME",
        help = "Required method name (repeatable)",
        long_help = "Required method name.  Repeat the flag for multiple methods.\n\
                     When omitted, the `check.methods` list from the config file is used."
    )]
    pub methods: Vec<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cutter init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cutter completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL", help = "Target shell")]
    pub shell: Shell,
}
