//! Subcommands updating a document.
//!
//! They all share the same shape: an [Operation] (a path and its arguments), an input document
//! and output options. Only the operation differs from one subcommand to the other.
use immupath_core::{
    delete_at, extend_at, insert_at, pop_at, push_at, set_at, shift_at, splice_at, unshift_at,
    Map, Path, Value,
};
use log::{debug, info};

use crate::{error::CliResult, input::InputOptions, output::OutputOptions};

/// An update applied along a path.
pub trait Operation {
    /// The path, as given on the command line.
    fn path(&self) -> &str;

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value>;
}

#[derive(clap::Parser, Debug)]
pub struct UpdateCommand<Op: clap::Args> {
    #[command(flatten)]
    pub operation: Op,

    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl<Op: clap::Args + Operation> UpdateCommand<Op> {
    pub fn run(self) -> CliResult<()> {
        let path = Path::parse(self.operation.path())?;
        let doc = self.input.load()?;
        let result = self.operation.apply(&doc.value, &path)?;

        if result.same(&doc.value) {
            info!("the update at `{path}` didn't change anything");
        } else {
            debug!("updated the document at `{path}`");
        }

        self.output.write(&doc, &result)
    }
}

fn parse_json(arg: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(arg)
}

fn parse_json_object(arg: &str) -> Result<Map, serde_json::Error> {
    serde_json::from_str(arg)
}

#[derive(clap::Args, Debug)]
pub struct Set {
    /// Path to the value to replace
    pub path: String,

    /// The new value, as a JSON literal
    #[arg(value_parser = parse_json, allow_negative_numbers = true)]
    pub value: Value,
}

impl Operation for Set {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        set_at(src, path, self.value.clone())
    }
}

#[derive(clap::Args, Debug)]
pub struct Delete {
    /// Path to the value to delete
    pub path: String,
}

impl Operation for Delete {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        delete_at(src, path)
    }
}

#[derive(clap::Args, Debug)]
pub struct Extend {
    /// Path to the object to extend
    pub path: String,

    /// The fields to add or override, as a JSON object
    #[arg(value_parser = parse_json_object)]
    pub fields: Map,
}

impl Operation for Extend {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        extend_at(src, path, &self.fields)
    }
}

#[derive(clap::Args, Debug)]
pub struct Push {
    /// Path to the array
    pub path: String,

    /// The values to append, as JSON literals
    #[arg(value_parser = parse_json, allow_negative_numbers = true)]
    pub values: Vec<Value>,
}

impl Operation for Push {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        push_at(src, path, self.values.iter().cloned())
    }
}

#[derive(clap::Args, Debug)]
pub struct Unshift {
    /// Path to the array
    pub path: String,

    /// The values to prepend, as JSON literals
    #[arg(value_parser = parse_json, allow_negative_numbers = true)]
    pub values: Vec<Value>,
}

impl Operation for Unshift {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        unshift_at(src, path, self.values.iter().cloned())
    }
}

#[derive(clap::Args, Debug)]
pub struct Pop {
    /// Path to the array
    pub path: String,

    /// Number of elements to remove
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

impl Operation for Pop {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        pop_at(src, path, self.count)
    }
}

#[derive(clap::Args, Debug)]
pub struct Shift {
    /// Path to the array
    pub path: String,

    /// Number of elements to remove
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

impl Operation for Shift {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        shift_at(src, path, self.count)
    }
}

#[derive(clap::Args, Debug)]
pub struct Insert {
    /// Path to the array
    pub path: String,

    /// Index before which the values are inserted
    pub at: usize,

    /// The values to insert, as JSON literals
    #[arg(value_parser = parse_json, allow_negative_numbers = true)]
    pub values: Vec<Value>,
}

impl Operation for Insert {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        insert_at(src, path, self.at, self.values.iter().cloned())
    }
}

#[derive(clap::Args, Debug)]
pub struct Splice {
    /// Path to the array
    pub path: String,

    /// Index of the first element to remove
    pub start: usize,

    /// Number of elements to remove
    pub delete_count: usize,

    /// The values to insert in place of the removed ones, as JSON literals
    #[arg(value_parser = parse_json, allow_negative_numbers = true)]
    pub values: Vec<Value>,
}

impl Operation for Splice {
    fn path(&self) -> &str {
        &self.path
    }

    fn apply(&self, src: &Value, path: &Path) -> immupath_core::Result<Value> {
        splice_at(src, path, self.start, self.delete_count, self.values.iter().cloned())
    }
}
