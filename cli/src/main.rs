//! Entry point of the program.

mod cli;
mod completions;
mod error;
mod format;
mod get;
mod input;
#[cfg(feature = "metrics")]
mod metrics;
mod output;
mod update;

use std::process::ExitCode;

use crate::cli::{Command, Options};

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let opts = <Options as clap::Parser>::parse();
    init_logger(opts.global.verbose);

    #[cfg(feature = "metrics")]
    let registry = opts.global.metrics.then(metrics::Recorder::install).flatten();

    let color = opts.global.color;
    let result = match opts.command {
        Command::Get(get) => get.run(),

        Command::Set(set) => set.run(),
        Command::Delete(delete) => delete.run(),
        Command::Extend(extend) => extend.run(),

        Command::Push(push) => push.run(),
        Command::Pop(pop) => pop.run(),
        Command::Insert(insert) => insert.run(),
        Command::Splice(splice) => splice.run(),
        Command::Shift(shift) => shift.run(),
        Command::Unshift(unshift) => unshift.run(),

        Command::GenCompletions(completions) => {
            completions.run();
            Ok(())
        }
    };

    #[cfg(feature = "metrics")]
    if let Some(registry) = registry {
        registry.report();
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error.report(color);
            ExitCode::FAILURE
        }
    }
}
