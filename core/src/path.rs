//! Paths into nested values.
//!
//! A [`Path`] is a sequence of [`Key`]s, each one selecting either an element of an array or a
//! field of an object. The empty path designates the root value itself.
//!
//! Paths can be written down as text, which is what the command line uses:
//!
//! ```text
//! config.servers[0].port
//! labels."app.kubernetes.io/name"
//! ```
//!
//! Fields are separated by dots, indices are written between brackets, and fields containing
//! special characters are quoted. The empty string and `.` both denote the root path.
use std::{borrow::Cow, fmt, str::FromStr};

use crate::error::Error;

/// One step of a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// An array index.
    Index(usize),
    /// An object field.
    Field(String),
}

impl Key {
    /// The array index designated by this key, if any.
    ///
    /// A field whose name is the canonical decimal representation of an index (`"3"`, but neither
    /// `"03"` nor `"+3"`) designates that index as well.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(idx) => Some(*idx),
            Key::Field(name) => name
                .parse::<usize>()
                .ok()
                .filter(|idx| idx.to_string() == *name),
        }
    }

    /// The object field designated by this key. Indices designate the field of the same name.
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            Key::Index(idx) => Cow::Owned(idx.to_string()),
            Key::Field(name) => Cow::Borrowed(name),
        }
    }
}

impl From<usize> for Key {
    fn from(idx: usize) -> Self {
        Key::Index(idx)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Index(idx) => write!(f, "{idx}"),
            Key::Field(name) => write!(f, "{name}"),
        }
    }
}

/// A sequence of keys leading from a root value to one of its descendants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<Key>);

impl Path {
    /// The empty path.
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }

    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    /// Returns this path extended by one key.
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut path = self.clone();
        path.push(key);
        path
    }

    /// The path without its last key, or `None` for the root path.
    pub fn parent(&self) -> Option<Path> {
        self.0
            .split_last()
            .map(|(_, parent)| Path(parent.to_vec()))
    }

    pub fn last(&self) -> Option<&Key> {
        self.0.last()
    }

    /// The first `len` keys of this path, or the whole path if it's shorter.
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len.min(self.0.len())].to_vec())
    }

    /// Parse the textual syntax described in the module documentation.
    pub fn parse(input: &str) -> Result<Path, Error> {
        Parser::new(input).parse()
    }
}

impl AsRef<[Key]> for Path {
    fn as_ref(&self) -> &[Key] {
        &self.0
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path(keys)
    }
}

impl From<&[Key]> for Path {
    fn from(keys: &[Key]) -> Self {
        Path(keys.to_vec())
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

fn is_bare_field(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '$')
}

/// Display a slice of keys with the textual path syntax, without allocating a [`Path`].
pub struct DisplayKeys<'a>(pub &'a [Key]);

impl fmt::Display for DisplayKeys<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, ".");
        }

        for (i, key) in self.0.iter().enumerate() {
            match key {
                Key::Index(idx) => write!(f, "[{idx}]")?,
                Key::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }

                    if is_bare_field(name) {
                        write!(f, "{name}")?;
                    } else {
                        write!(f, "\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        DisplayKeys(&self.0).fmt(f)
    }
}

/// Build a [`Path`] from a list of keys. String literals become fields and integers become
/// indices.
///
/// ```
/// # use immupath_core::path;
/// # use immupath_core::path::{Key, Path};
/// let path = path!["servers", 0, "port"];
/// assert_eq!(path.to_string(), "servers[0].port");
/// assert_eq!(path![], Path::root());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::Path::root()
    };
    ( $( $key:expr ),+ $(,)? ) => {
        $crate::path::Path::from(vec![ $( $crate::path::Key::from($key) ),+ ])
    };
}

struct Parser<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser { input, offset: 0 }
    }

    fn error(&self, reason: &'static str) -> Error {
        Error::PathParse {
            input: self.input.to_owned(),
            offset: self.offset,
            reason,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn parse(mut self) -> Result<Path, Error> {
        if self.input.is_empty() || self.input == "." {
            return Ok(Path::root());
        }

        let mut keys = Vec::new();

        // The first segment isn't preceded by a dot.
        match self.peek() {
            Some('[') => keys.push(self.index()?),
            _ => keys.push(self.field()?),
        }

        while let Some(c) = self.peek() {
            match c {
                '[' => keys.push(self.index()?),
                '.' => {
                    self.bump();
                    keys.push(self.field()?);
                }
                _ => return Err(self.error("expected `.` or `[`")),
            }
        }

        Ok(Path(keys))
    }

    fn field(&mut self) -> Result<Key, Error> {
        match self.peek() {
            Some('"') => self.quoted_field(),
            Some('.' | '[' | ']') | None => Err(self.error("expected a field name")),
            Some(_) => {
                let start = self.offset;
                while let Some(c) = self.peek() {
                    if matches!(c, '.' | '[' | ']' | '"') {
                        break;
                    }
                    self.bump();
                }
                Ok(Key::Field(self.input[start..self.offset].to_owned()))
            }
        }
    }

    fn quoted_field(&mut self) -> Result<Key, Error> {
        let start = self.offset;
        self.bump();
        let mut name = String::new();

        loop {
            match self.bump() {
                Some('"') => return Ok(Key::Field(name)),
                Some('\\') => match self.bump() {
                    Some(c @ ('"' | '\\')) => name.push(c),
                    _ => return Err(self.error("invalid escape sequence")),
                },
                Some(c) => name.push(c),
                None => {
                    self.offset = start;
                    return Err(self.error("unterminated quoted field"));
                }
            }
        }
    }

    fn index(&mut self) -> Result<Key, Error> {
        self.bump();
        let start = self.offset;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }

        if start == self.offset {
            return Err(self.error("expected an array index"));
        }

        let idx = self.input[start..self.offset].parse::<usize>().map_err(|_| {
            Parser {
                input: self.input,
                offset: start,
            }
            .error("array index out of range")
        })?;

        if self.peek() != Some(']') {
            return Err(self.error("expected `]`"));
        }
        self.bump();

        Ok(Key::Index(idx))
    }
}
