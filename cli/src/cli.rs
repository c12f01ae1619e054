//! Command-line options and subcommands.

use git_version::git_version;

use crate::{
    completions::GenCompletionsCommand,
    get::GetCommand,
    update::{self, UpdateCommand},
};

#[derive(clap::Parser, Debug)]
/// Apply path updates to JSON, YAML and TOML documents.
#[command(
    author,
    about,
    long_about = None,
    version = format!(
        "{} {} (rev {})",
        env!("CARGO_BIN_NAME"),
        env!("CARGO_PKG_VERSION"),
        git_version!(fallback = "unknown")
    )
)]
pub struct Options {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Parser, Debug)]
pub struct GlobalOptions {
    /// Configure when to output messages in color
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: clap::ColorChoice,

    /// Increase the verbosity of the logs. Can be repeated. `RUST_LOG` takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the collected metrics on stderr before exiting
    #[cfg(feature = "metrics")]
    #[arg(long, global = true)]
    pub metrics: bool,
}

/// Available subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the value at a path
    Get(GetCommand),
    /// Replace the value at a path
    Set(UpdateCommand<update::Set>),
    /// Set the value at a path to undefined, which removes it from the output
    Delete(UpdateCommand<update::Delete>),
    /// Merge fields into the object at a path
    Extend(UpdateCommand<update::Extend>),
    /// Append values to the array at a path
    Push(UpdateCommand<update::Push>),
    /// Remove values from the end of the array at a path
    Pop(UpdateCommand<update::Pop>),
    /// Insert values into the array at a path
    Insert(UpdateCommand<update::Insert>),
    /// Replace a range of the array at a path
    Splice(UpdateCommand<update::Splice>),
    /// Remove values from the start of the array at a path
    Shift(UpdateCommand<update::Shift>),
    /// Prepend values to the array at a path
    Unshift(UpdateCommand<update::Unshift>),

    /// Generate shell completion files
    GenCompletions(GenCompletionsCommand),
}
