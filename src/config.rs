//! Command line configuration.
use clap::{App, Arg, ArgMatches};
use std::io;
use std::path::PathBuf;

use crate::output::DEFAULT_OUTPUT_ROOT;
use crate::report::Summary;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// The source file to scan. When absent only the usage is printed.
    pub input:       Option<PathBuf>,
    /// Directory under which the auxiliary output directory is created.
    pub output_root: PathBuf,
    pub verbosity:   u64,
    pub print_table: bool,
    /// Exit with a failure status when any line had an error.
    pub strict:      bool,
}

impl Config {
    pub fn from_args() -> Self {
        Config::from_matches(&app().get_matches())
    }

    pub fn from_matches(args: &ArgMatches) -> Self {
        Config {
            input:       args.value_of("INPUT").map(PathBuf::from),
            output_root: PathBuf::from(args.value_of("output").unwrap_or(DEFAULT_OUTPUT_ROOT)),
            verbosity:   args.occurrences_of("verbose"),
            print_table: args.is_present("print-table"),
            strict:      args.is_present("strict"),
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    /// The process exit status for the outcome of a scan.
    /// Only strict runs report failures through the status.
    pub fn exit_status(&self, outcome: &io::Result<Summary>) -> i32 {
        match outcome {
            Ok(summary) if summary.is_clean() => 0,
            _ if !self.strict => 0,
            _ => 1,
        }
    }
}

/// Printed when no input file is given.
pub fn usage() -> String {
    format!("Usage:\n\t{} <file>", env!("CARGO_PKG_NAME"))
}

pub fn app() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("INPUT")
            .help("Sets the assembly source file to scan")
            .required(false)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .value_name("DIR")
            .help("write auxiliary files under DIR (default: output)"))
        .arg(Arg::with_name("print-table")
            .short("d")
            .long("table")
            .alias("show")
            .takes_value(false)
            .help("prints a table of the scanned tokens to STDOUT"))
        .arg(Arg::with_name("strict")
            .short("s")
            .long("strict")
            .takes_value(false)
            .help("exits with a failure status if any line has an error"))
}
