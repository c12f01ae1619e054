use std::io::{self, Write};

use immupath_core::{get_at, Path};

use crate::{
    error::CliResult,
    format::Format,
    input::InputOptions,
    output::render,
};

#[derive(clap::Parser, Debug)]
pub struct GetCommand {
    /// Path to the value to print
    pub path: String,

    #[command(flatten)]
    pub input: InputOptions,

    /// Format of the output. Same as the input by default
    #[arg(long, value_enum)]
    pub output_format: Option<Format>,
}

impl GetCommand {
    pub fn run(self) -> CliResult<()> {
        let path = Path::parse(&self.path)?;
        let doc = self.input.load()?;
        let value = get_at(&doc.value, &path);

        // Nothing to print.
        if value.is_undefined() {
            return Ok(());
        }

        let text = render(self.output_format.unwrap_or(doc.format), &value)?;
        Ok(io::stdout().write_all(text.as_bytes())?)
    }
}
