use std::{path::Path, str::FromStr};

use clap::{App, Arg, ArgMatches};
use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use crate::{
    config::{DuplicatePolicy, LintConfig, Propagation},
    error::FatalError,
    result::Result,
};

// Exit Codes for the different outcomes of a run
pub const ERR_LINT: i32 = 1;
pub const ERR_FATAL: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

pub fn print_err(err: &FatalError) {
    eprintln!("{}", err);
}

pub fn configure_cli() -> clap::App<'static, 'static> {
    let app = App::new("6502 Temp Suffix Linter")
        .version("0.1.0")
        .author("Erich Ess")
        .about("Checks that every .proc and .macro is suffixed _T<N> with the highest temp register it uses, directly or through the functions it calls")
        .arg(
            Arg::with_name("input")
                .index(1)
                .required(true)
                .help("Main source file of the project. Its .include directives are resolved relative to its folder"),
        )
        .arg(
            Arg::with_name("temp-format")
                .index(2)
                .help("Temp register format ending in the placeholder (default x), ex.: zp_temp_x"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("JSON file with lint settings. Values given on the command line take precedence."),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .possible_values(&["console", "json"])
                .default_value("console")
                .takes_value(true)
                .help("How the findings are written to stdout"),
        )
        .arg(
            Arg::with_name("transitive")
                .long("transitive")
                .help("Compare each function against every function reachable through its calls, rather than only the ones it calls directly"),
        )
        .arg(
            Arg::with_name("warn-duplicates")
                .long("warn-duplicates")
                .help("Report functions which are declared more than once. The last declaration is always the one linted."),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .takes_value(true)
                .help("Writes log messages at or above this level to stderr"),
        );
    app
}

/// Builds the lint settings from the config file, if one was given, and
/// then applies the command line on top of it.
pub fn build_config(args: &ArgMatches) -> Result<LintConfig> {
    let mut config = match args.value_of("config") {
        Some(path) => LintConfig::from_file(Path::new(path))?,
        None => LintConfig::default(),
    };

    if let Some(format) = args.value_of("temp-format") {
        config.temp_format = Some(format.into());
    }

    if args.is_present("transitive") {
        config.propagation = Propagation::Transitive;
    }

    if args.is_present("warn-duplicates") {
        config.duplicates = DuplicatePolicy::Warn;
    }

    Ok(config)
}

pub fn get_format(args: &ArgMatches) -> OutputFormat {
    match args.value_of("format") {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Console,
    }
}

pub fn get_log_level(args: &ArgMatches) -> Option<LevelFilter> {
    args.value_of("log-level")
        .and_then(|level| LevelFilter::from_str(level).ok())
}

pub fn configure_logging(level: LevelFilter) -> std::result::Result<(), SetLoggerError> {
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
