use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

use nrrdkit::commands::{CommandFactory, NrrdkitCommandFactory};
use nrrdkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("nrrdkit")
        .version("0.1.0")
        .about("Parse and validate NRRD headers")
        .arg(
            Arg::new("input")
                .help("Header description (TOML)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("files")
                .long("files")
                .help("List the resolved data files")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let log_file = matches.get_one::<String>("log-file").map(String::as_str);

    let logger = match Logger::init(verbose, log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = NrrdkitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
