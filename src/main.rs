/// Pattern Extract - regex extraction and comparison for text files
///
/// The main entry point for the pattern_extract application. It parses
/// command-line arguments, sets up logging, and dispatches to the
/// extraction or comparison pipeline.

use std::io;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

use pattern_extract::core::{comparator, extractor};
use pattern_extract::utils::report;
use pattern_extract::{CompareOptions, ExtractOptions};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "pattern_extract",
    version,
    about = "Extracts regex named-group values from files through brace templates",
    long_about = "This tool applies a regular expression with named capture groups to a \
group of files and renders each match through a template, where {name} sections are \
replaced with the matching group's text. It can also compare the values extracted \
from two file groups and report what is missing or counted differently on each side."
)]
struct Cli {
    /// Set logging level
    #[arg(long = "log-level", default_value = "warn", global = true)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Processes a file or files using regex; named groups become replacement tokens
    File {
        /// The directory in which to search for files
        #[arg(short = 'd', long = "directory", default_value = ".")]
        directory: String,

        /// Wildcard enabled file name identifying the file or files to be processed
        #[arg(short = 'f', long = "files")]
        files: String,

        /// The regular expression pattern used to extract values from the file
        #[arg(short = 'r', long = "regex")]
        regex: String,

        /// The template text using { } braces to identify replacement sections
        /// matching regex named groups
        #[arg(short = 't', long = "template")]
        template: String,

        /// Only return unique results
        #[arg(short = 'u', long = "unique")]
        unique: bool,
    },

    /// Finds the differences in matches between the source and the comparison file groups
    Compare {
        /// The directory in which to search for files
        #[arg(short = 'd', long = "directory", default_value = ".")]
        directory: String,

        /// Wildcard enabled file name identifying the file or files to be checked
        #[arg(short = 'f', long = "files")]
        files: String,

        /// Wildcard enabled file name identifying the file or files to be compared to
        #[arg(short = 'c', long = "compareto")]
        compareto: String,

        /// The regular expression pattern used to extract values from the file
        #[arg(short = 'r', long = "regex")]
        regex: String,

        /// The template text using { } braces to identify comparison sections
        /// matching regex named groups
        #[arg(short = 't', long = "template")]
        template: String,
    },
}

/// Main entry point function
fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.log_level);

    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

/// Dispatch the selected subcommand
fn run(command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::File {
            directory,
            files,
            regex,
            template,
            unique,
        } => {
            let options = ExtractOptions {
                directory,
                files,
                pattern: regex,
                template,
                unique,
            };
            extractor::run(&options, &mut out)
        }
        Command::Compare {
            directory,
            files,
            compareto,
            regex,
            template,
        } => {
            let options = CompareOptions {
                directory,
                files,
                compareto,
                pattern: regex,
                template,
            };
            let comparison = comparator::run(&options)?;
            report::write_report(&comparison, &options.files, &options.compareto, &mut out)?;
            Ok(())
        }
    }
}

/// Set up logging to stderr
fn setup_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Initialize logger
    builder.init();
}
