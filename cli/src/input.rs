use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use immupath_core::Value;
use log::debug;

use crate::{
    error::{CliResult, Error},
    format::Format,
};

#[derive(clap::Parser, Debug)]
pub struct InputOptions {
    /// Input file, omit to read from stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Format of the input. Guessed from the file extension by default, JSON for stdin
    #[arg(long, value_enum)]
    pub format: Option<Format>,
}

/// A parsed input document.
pub struct Document {
    pub value: Value,
    pub format: Format,
    /// The file the document was read from, if any.
    pub source: Option<PathBuf>,
}

impl InputOptions {
    pub fn load(&self) -> CliResult<Document> {
        let format = self
            .format
            .or_else(|| self.file.as_deref().and_then(Format::from_path))
            .unwrap_or_default();

        let text = match &self.file {
            Some(path) => fs::read_to_string(path).map_err(|error| Error::Io {
                error,
                path: Some(path.clone()),
            })?,
            None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                text
            }
        };

        let source_name = self.source_name();
        let value = format.parse(&text).map_err(|error| Error::Parse {
            source_name: source_name.clone(),
            format,
            error,
        })?;
        debug!("loaded a {format} document from {source_name}");

        Ok(Document {
            value,
            format,
            source: self.file.clone(),
        })
    }

    fn source_name(&self) -> String {
        self.file
            .as_ref()
            .map_or_else(|| "<stdin>".to_owned(), |path| path.display().to_string())
    }
}
