use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    files::SimpleFile,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use immupath_core::error::Error as CoreError;

use crate::format::{Format, FormatError};

pub enum Error {
    /// An update failed, or a path given on the command line is malformed.
    Update { error: CoreError },
    Io {
        error: io::Error,
        path: Option<PathBuf>,
    },
    /// The input document couldn't be parsed.
    Parse {
        source_name: String,
        format: Format,
        error: FormatError,
    },
    /// The result couldn't be written in the output format.
    Serialize { format: Format, error: FormatError },
    /// `--in-place` was used while reading from stdin.
    InPlaceWithoutFile,
}

pub type CliResult<T> = Result<T, Error>;

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io { error, path: None }
    }
}

impl From<CoreError> for Error {
    fn from(error: CoreError) -> Self {
        Error::Update { error }
    }
}

fn update_diagnostic(error: CoreError) -> Diagnostic<()> {
    let message = error.to_string();

    match error {
        CoreError::MissingIntermediate { path, .. } => Diagnostic::error()
            .with_message(message)
            .with_notes(vec![
                "Containers are never created on the fly.".to_owned(),
                format!("Set `{path}` to an object or an array first."),
            ]),
        CoreError::InvalidIndex { .. } => Diagnostic::error()
            .with_message(message)
            .with_notes(vec![
                "Arrays can only be indexed by non-negative integers, such as `list[0]`."
                    .to_owned(),
            ]),
        _ => Diagnostic::error().with_message(message),
    }
}

fn path_parse_diagnostic(input: &str, offset: usize, reason: &str) -> Diagnostic<()> {
    let end = input[offset..]
        .chars()
        .next()
        .map_or(offset, |c| offset + c.len_utf8());

    Diagnostic::error()
        .with_message("invalid path")
        .with_labels(vec![Label::primary((), offset..end).with_message(reason)])
        .with_notes(vec![
            "A path is a dot-separated list of fields and `[i]` indices. Fields with spaces or \
            special characters must be double-quoted."
                .to_owned(),
            "For example: `servers[0].\"host name\"`".to_owned(),
        ])
}

impl Error {
    pub fn report(self, color: clap::ColorChoice) {
        let (diagnostic, file) = match self {
            Error::Update {
                error:
                    CoreError::PathParse {
                        input,
                        offset,
                        reason,
                    },
            } => (
                path_parse_diagnostic(&input, offset, reason),
                SimpleFile::new("<path>".to_owned(), input),
            ),
            Error::Update { error } => (update_diagnostic(error), empty_file()),
            Error::Io { error, path } => {
                let message = match path {
                    Some(path) => format!("{}: {error}", path.display()),
                    None => error.to_string(),
                };
                (Diagnostic::error().with_message(message), empty_file())
            }
            Error::Parse {
                source_name,
                format,
                error,
            } => (
                Diagnostic::error()
                    .with_message(format!("failed to parse {source_name} as {format}"))
                    .with_notes(vec![error.to_string()]),
                empty_file(),
            ),
            Error::Serialize { format, error } => (
                Diagnostic::error()
                    .with_message(format!("failed to write the result as {format}"))
                    .with_notes(vec![error.to_string()]),
                empty_file(),
            ),
            Error::InPlaceWithoutFile => (
                Diagnostic::error()
                    .with_message("`--in-place` requires an input file")
                    .with_notes(vec!["Use `--file` to specify the input file.".to_owned()]),
                empty_file(),
            ),
        };

        let writer = StandardStream::stderr(color_choice(color));
        let mut lock = writer.lock();
        let config = term::Config::default();

        if let Err(err) = term::emit(&mut lock, &config, &file, &diagnostic) {
            eprintln!("error: {} ({err})", diagnostic.message);
        }
    }
}

fn empty_file() -> SimpleFile<String, String> {
    SimpleFile::new(String::new(), String::new())
}

/// Colors are only used when stderr is a terminal, unless they are explicitly requested.
fn color_choice(color: clap::ColorChoice) -> ColorChoice {
    match color {
        clap::ColorChoice::Auto if io::stderr().is_terminal() => ColorChoice::Auto,
        clap::ColorChoice::Auto | clap::ColorChoice::Never => ColorChoice::Never,
        clap::ColorChoice::Always => ColorChoice::Always,
    }
}
