use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use immupath_core::Value;
use log::info;

use crate::{
    error::{CliResult, Error},
    format::Format,
    input::Document,
};

#[derive(clap::Parser, Debug)]
pub struct OutputOptions {
    /// Output file. Standard output by default
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Format of the output. Same as the input by default
    #[arg(long, value_enum)]
    pub output_format: Option<Format>,

    /// Write the result back to the input file. The file isn't touched if nothing changed
    #[arg(short, long)]
    pub in_place: bool,
}

impl OutputOptions {
    /// Write `result`, the outcome of an update of `doc`.
    pub fn write(&self, doc: &Document, result: &Value) -> CliResult<()> {
        let format = self.output_format.unwrap_or(doc.format);

        if self.in_place {
            let Some(path) = &doc.source else {
                return Err(Error::InPlaceWithoutFile);
            };

            if result.same(&doc.value) && format == doc.format {
                info!("{} is unchanged", path.display());
                return Ok(());
            }

            return write_file(path, &render(format, result)?);
        }

        let text = render(format, result)?;
        match &self.output {
            Some(path) => write_file(path, &text),
            None => Ok(io::stdout().write_all(text.as_bytes())?),
        }
    }
}

pub fn render(format: Format, value: &Value) -> CliResult<String> {
    format
        .render(value)
        .map_err(|error| Error::Serialize { format, error })
}

fn write_file(path: &Path, text: &str) -> CliResult<()> {
    fs::write(path, text).map_err(|error| Error::Io {
        error,
        path: Some(path.to_owned()),
    })
}
