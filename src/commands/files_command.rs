//! Data file listing command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{input_file, load_header};
use crate::nrrd::errors::NrrdResult;
use crate::utils::logger::Logger;

/// Command for listing the data files a header resolves to
pub struct FilesCommand<'a> {
    input_file: String,
    logger: &'a Logger,
}

impl<'a> FilesCommand<'a> {
    /// Create a new files command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NrrdResult<Self> {
        Ok(FilesCommand {
            input_file: input_file(args)?,
            logger,
        })
    }
}

impl<'a> Command for FilesCommand<'a> {
    fn execute(&self) -> NrrdResult<()> {
        let (_, parsed) = load_header(&self.input_file)?;

        info!(
            "{} data file(s){}",
            parsed.data_files.len(),
            parsed
                .data_file_subdim
                .map(|subdim| format!(", each spanning {} axes", subdim))
                .unwrap_or_default()
        );

        for (i, path) in parsed.data_files.iter().enumerate() {
            match parsed.slab_byte_count {
                Some(bytes) => info!("  {:>4}: {} ({} bytes)", i, path.display(), bytes),
                None => info!("  {:>4}: {}", i, path.display()),
            }
        }

        self.logger.log(&format!(
            "Listed {} data file(s) for {}",
            parsed.data_files.len(),
            self.input_file
        ))?;

        Ok(())
    }
}
