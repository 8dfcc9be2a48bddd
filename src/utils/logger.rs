//! Logger utility for application-wide logging
//!
//! Installs `env_logger` as the backend of the `log` facade and keeps an
//! optional log file that commands can append their own records to.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Application logger
pub struct Logger {
    /// File handle for log output, if one was requested
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Initializes the global logger
    ///
    /// # Arguments
    ///
    /// * `verbose` - Log at debug level instead of info
    /// * `log_file` - Optional path that log output is redirected to
    ///
    /// # Returns
    ///
    /// A Logger for command records, or an error if the file cannot be created
    pub fn init(verbose: bool, log_file: Option<&str>) -> io::Result<Self> {
        let file = log_file.map(|path| File::create(Path::new(path))).transpose()?;

        let mut builder = Builder::new();
        builder
            .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info })
            .parse_default_env();

        if let Some(file) = &file {
            builder.target(Target::Pipe(Box::new(file.try_clone()?)));
        }

        if builder.try_init().is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        Ok(Logger {
            file: Mutex::new(file),
        })
    }

    /// Logs a message to the log file, if there is one
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }
}
