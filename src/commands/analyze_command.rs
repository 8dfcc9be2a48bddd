//! NRRD header analysis command
//!
//! Parses a header description and reports the validated result.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::{input_file, load_header};
use crate::nrrd::errors::NrrdResult;
use crate::nrrd::raw_header::RawHeader;
use crate::nrrd::types::ParsedHeader;
use crate::utils::logger::Logger;

/// Command for analyzing a header
pub struct AnalyzeCommand<'a> {
    /// Path to the header description
    input_file: String,
    /// Whether to dump the raw fields as well
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NrrdResult<Self> {
        Ok(AnalyzeCommand {
            input_file: input_file(args)?,
            verbose: args.get_flag("verbose"),
            logger,
        })
    }

    /// Lists the raw header fields, sorted by name
    fn display_raw_fields(&self, raw: &RawHeader) {
        let mut names: Vec<&str> = raw.field_names().collect();
        names.sort_unstable();

        debug!("Raw fields:");
        for name in names {
            if let Some(tokens) = raw.field(name) {
                debug!("  {}: {}", name, tokens.join(" "));
            }
        }
    }

    fn display_summary(&self, parsed: &ParsedHeader) {
        for line in parsed.to_string().lines() {
            info!("{}", line);
        }
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> NrrdResult<()> {
        info!("Analyzing header: {}", self.input_file);

        let (raw, parsed) = load_header(&self.input_file)?;

        if self.verbose {
            self.display_raw_fields(&raw);
        }
        self.display_summary(&parsed);

        self.logger.log(&format!(
            "Analyzed {}: {} samples in {} data file(s)",
            self.input_file,
            parsed.sample_count,
            parsed.data_files.len()
        ))?;

        Ok(())
    }
}
