//! Tokenized header input
//!
//! A [`RawHeader`] is what a header tokenizer hands to the parser: a map
//! from field name to its whitespace-separated tokens, the data file lines
//! that followed a `data file: LIST` line, and where the header came from.
//! Headers can be assembled in code or loaded from a TOML description.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::nrrd::errors::{NrrdError, NrrdResult};

/// Immutable snapshot of a tokenized NRRD header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawHeader {
    /// Field name to ordered tokens
    fields: HashMap<String, Vec<String>>,
    /// Path lines listed after `data file: LIST`
    data_files: Vec<String>,
    /// Directory holding the header file
    directory: PathBuf,
    /// Header file name
    filename: String,
    /// Whether the samples live outside the header file
    detached: bool,
}

impl RawHeader {
    /// Creates an empty header located at `directory/filename`
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        RawHeader {
            directory: directory.into(),
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Adds a field with the given tokens, replacing any earlier value
    pub fn with_field<I, S>(mut self, name: &str, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_field(name, tokens);
        self
    }

    /// Appends a path line to the `LIST` data file section
    pub fn with_data_file(mut self, path: impl Into<String>) -> Self {
        self.data_files.push(path.into());
        self
    }

    /// Marks the header as detached (or not)
    pub fn detached(mut self, detached: bool) -> Self {
        self.detached = detached;
        self
    }

    /// Inserts a field in place
    pub fn insert_field<I, S>(&mut self, name: &str, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .insert(name.to_string(), tokens.into_iter().map(Into::into).collect());
    }

    /// Tokens of a field, if present
    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// Whether a field is present
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Names of all fields present, in no particular order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn data_files(&self) -> &[String] {
        &self.data_files
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Loads a header description from a TOML file
    ///
    /// When the description has no `directory` key, the directory of the
    /// TOML file itself is used, made absolute against the working directory.
    /// A relative `directory` is resolved against that same directory.
    pub fn load(path: &str) -> NrrdResult<Self> {
        debug!("Loading header description: {}", path);
        let content = fs::read_to_string(path)?;

        let default_dir = match Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => std::path::absolute(parent)?,
            None => std::env::current_dir()?,
        };

        Self::parse_toml(&content, &default_dir)
    }

    /// Builds a header from a TOML description
    ///
    /// # Format
    /// ```toml
    /// directory = "/data/scan"
    /// filename = "scan.nhdr"
    /// detached = true
    /// data_files = ["slice0.raw", "slice1.raw"]
    ///
    /// [fields]
    /// type = "short"
    /// sizes = [4, 4]
    /// "space directions" = ["(1,0,0)", "(0,1,0)"]
    /// ```
    ///
    /// Without a `directory` key, the current working directory is used; a
    /// relative `directory` is resolved against it.
    pub fn from_toml_str(content: &str) -> NrrdResult<Self> {
        Self::parse_toml(content, &std::env::current_dir()?)
    }

    fn parse_toml(content: &str, default_dir: &Path) -> NrrdResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(NrrdError::InvalidConfig(format!("Failed to parse TOML: {}", e))),
        };

        let directory = match toml_value.get("directory") {
            Some(v) => default_dir.join(expect_str(v, "directory")?),
            None => default_dir.to_path_buf(),
        };

        let filename = match toml_value.get("filename") {
            Some(v) => expect_str(v, "filename")?.to_string(),
            None => String::new(),
        };

        let detached = match toml_value.get("detached") {
            Some(v) => v
                .as_bool()
                .ok_or_else(|| NrrdError::InvalidConfig("'detached' must be a boolean".to_string()))?,
            None => false,
        };

        let mut header = RawHeader::new(directory, filename).detached(detached);

        if let Some(v) = toml_value.get("data_files") {
            let list = v
                .as_array()
                .ok_or_else(|| NrrdError::InvalidConfig("'data_files' must be an array".to_string()))?;
            for entry in list {
                header.data_files.push(expect_str(entry, "data_files")?.to_string());
            }
        }

        if let Some(v) = toml_value.get("fields") {
            let table = v
                .as_table()
                .ok_or_else(|| NrrdError::InvalidConfig("'fields' must be a table".to_string()))?;
            for (name, value) in table {
                let tokens = match value.as_array() {
                    Some(items) => items
                        .iter()
                        .map(|item| scalar_token(item, name))
                        .collect::<NrrdResult<Vec<_>>>()?,
                    None => vec![scalar_token(value, name)?],
                };
                header.insert_field(name, tokens);
            }
        }

        debug!(
            "Header description has {} fields, {} listed data files",
            header.fields.len(),
            header.data_files.len()
        );

        Ok(header)
    }
}

fn expect_str<'v>(value: &'v toml::Value, key: &str) -> NrrdResult<&'v str> {
    value
        .as_str()
        .ok_or_else(|| NrrdError::InvalidConfig(format!("'{}' must be a string", key)))
}

/// Converts a scalar TOML value to a header token
fn scalar_token(value: &toml::Value, field: &str) -> NrrdResult<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) if f.is_nan() => Ok("nan".to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        _ => Err(NrrdError::InvalidConfig(format!(
            "field '{}' must hold strings or numbers",
            field
        ))),
    }
}
