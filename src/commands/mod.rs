//! CLI command implementations
//!
//! This module contains the commands supported by the CLI application,
//! built on the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod files_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use files_command::FilesCommand;

use clap::ArgMatches;

use crate::nrrd::errors::{NrrdError, NrrdResult};
use crate::nrrd::parser::NrrdParser;
use crate::nrrd::raw_header::RawHeader;
use crate::nrrd::types::ParsedHeader;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct NrrdkitCommandFactory;

impl NrrdkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        NrrdkitCommandFactory
    }
}

impl Default for NrrdkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for NrrdkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> NrrdResult<Box<dyn Command + 'a>> {
        if args.get_flag("files") {
            Ok(Box::new(FilesCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Reads the `input` argument
fn input_file(args: &ArgMatches) -> NrrdResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| NrrdError::InvalidConfig("Missing input file".to_string()))
}

/// Loads a header description and parses it against the local filesystem
fn load_header(path: &str) -> NrrdResult<(RawHeader, ParsedHeader)> {
    let raw = RawHeader::load(path)?;
    let parsed = NrrdParser::new().parse(&raw)?;
    Ok((raw, parsed))
}
