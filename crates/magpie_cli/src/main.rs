//! Magpie CLI — the command-line interface for the Magpie analyzer.
//!
//! Provides `magpie check` for running analysis rules against a project's
//! host-exported model and `magpie rules` for listing the registered rules.

#![warn(missing_docs)]

mod check;
mod rules;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Magpie — static analysis over host-exported semantic models.
#[derive(Parser, Debug)]
#[command(name = "magpie", version, about = "Magpie model analyzer")]
pub struct Cli {
    /// Suppress all output except diagnostics.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to color output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `magpie.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Which command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands the `magpie` binary exposes.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run analysis rules against the project's exported model.
    Check(CheckArgs),
    /// List the registered analysis rules.
    Rules,
}

/// Arguments for the `magpie check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the exported model, overriding the config file setting.
    #[arg(long)]
    pub model: Option<String>,

    /// Rules to suppress (e.g., `--allow overspecific-parameter`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rules to promote to errors (e.g., `--deny A101`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Rules to cap at warning severity.
    #[arg(long, num_args = 1..)]
    pub warn: Vec<String>,

    /// Output format for diagnostics (defaults to the config file setting).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// When diagnostics are rendered with ANSI colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout looks like a terminal.
    Auto,
    /// Color unconditionally.
    Always,
    /// Plain output.
    Never,
}

/// Report format for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// rustc-style text for terminals.
    Text,
    /// JSON for tooling.
    Json,
}

/// Flags shared by every subcommand, resolved once in `main`.
pub struct GlobalArgs {
    /// Whether to suppress non-diagnostic output.
    pub quiet: bool,
    /// Whether renderers should emit ANSI colors.
    pub color: bool,
    /// Explicit config path from `--config`, if given.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => stdout_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Rules => rules::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Rough terminal detection for `--color auto`.
fn stdout_is_terminal() -> bool {
    // TERM is a stand-in for real tty detection; good enough for auto.
    std::env::var("TERM").is_ok()
}
